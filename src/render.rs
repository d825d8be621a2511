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

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticLevel};

/// Renders a value the way every command dumps JSON: 4-space indentation,
/// non-ASCII characters left as-is.
pub fn to_pretty<T>(value: &T) -> Result<String, Diagnostic>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

    value.serialize(&mut serializer).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::InvalidJson,
            format!("I couldn't serialize the result to JSON: {}", e),
        )
    })?;

    String::from_utf8(buffer).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::InvalidUtf8,
            format!("I produced JSON output that isn't valid UTF-8: {}", e),
        )
    })
}
