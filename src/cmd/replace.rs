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
use json_trans::{
    apply, reader, render, Diagnostic, DiagnosticCode, DiagnosticLevel, PointerFilter,
};

pub fn run(flags: &flags::Replace) -> Vec<Diagnostic> {
    if flags.files.is_empty() {
        return vec![Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::MissingInput,
            "I need at least one JSON file to rewrite, but you didn't provide any.".to_string(),
        )
        .with_advice(
            "Usage: json-trans replace [-f REGEX] <table.json> <file1.json> [file2.json ...]"
                .to_string(),
        )];
    }

    let filter = match &flags.filter {
        Some(pattern) => match PointerFilter::pattern(pattern) {
            Ok(filter) => filter,
            Err(diagnostic) => return vec![diagnostic],
        },
        None => PointerFilter::SkipIdLeaves,
    };

    let table = match reader::read_table_file(&flags.table) {
        Ok(table) => table,
        Err(diagnostic) => return vec![diagnostic],
    };

    for file in &flags.files {
        let mut doc = match reader::read_json_file(file) {
            Ok(doc) => doc,
            Err(diagnostic) => return vec![diagnostic],
        };

        if let Err(diagnostic) = apply(&mut doc, &table, &filter) {
            return vec![diagnostic.with_file(file.display().to_string())];
        }

        match render::to_pretty(&doc) {
            Ok(json) => println!("{}", json),
            Err(diagnostic) => return vec![diagnostic],
        }
    }

    Vec::new()
}
