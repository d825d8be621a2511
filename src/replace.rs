// json-trans is a toolkit for translating JSON documents via patch files
// Copyright (C) 2025  Peoples Grocers LLC
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//
// To purchase a license under different terms contact admin@peoplesgrocers.com
// To request changes, report bugs, or give user feedback contact
// marxism@peoplesgrocers.com
//

use serde_json::Value;

use crate::diagnostics::Diagnostic;
use crate::search::{search, PointerFilter};
use crate::table::TranslationTable;

/// Rewrites `doc` in place: every occurrence of each table key that passes
/// the filter is overwritten with the key's first candidate.
///
/// Keys are processed in table insertion order, and each key's occurrences
/// are located against the already-mutated document. A key with no matches or
/// no candidates does nothing. Callers that want the id-protecting default
/// pass [`PointerFilter::SkipIdLeaves`].
pub fn apply(
    doc: &mut Value,
    table: &TranslationTable,
    filter: &PointerFilter,
) -> Result<(), Diagnostic> {
    for (source, candidates) in table.iter() {
        let replacement = match candidates.first() {
            Some(candidate) => candidate,
            None => continue,
        };

        let target = Value::String(source.clone());
        let matches = search(doc, &target, filter);
        for pointer in matches {
            pointer.set(doc, Value::String(replacement.clone()))?;
        }
    }

    Ok(())
}
