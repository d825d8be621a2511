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

use crate::flags;
use json_trans::{leaf_pointers, reader, Diagnostic, DiagnosticCode, DiagnosticLevel};

pub fn run(flags: &flags::Pointers) -> Vec<Diagnostic> {
    if flags.files.is_empty() {
        return vec![Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::MissingInput,
            "I need at least one JSON file to enumerate, but you didn't provide any."
                .to_string(),
        )
        .with_advice("Usage: json-trans pointers <file1.json> [file2.json ...]".to_string())];
    }

    for file in &flags.files {
        let doc = match reader::read_json_file(file) {
            Ok(doc) => doc,
            Err(diagnostic) => return vec![diagnostic],
        };

        for pointer in leaf_pointers(&doc) {
            println!("{}", pointer);
        }
    }

    Vec::new()
}
