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
    filter_patches, reader, render, Diagnostic, DiagnosticCode, DiagnosticLevel,
};

pub fn run(flags: &flags::Filter) -> Vec<Diagnostic> {
    if flags.files.is_empty() {
        return vec![Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::MissingInput,
            "I need at least one patch file to filter, but you didn't provide any.".to_string(),
        )
        .with_advice(
            "Usage: json-trans filter [-p pointers.txt] <patch1.json> [patch2.json ...]\n\n\
             Without -p the pointer list is read from stdin, one pointer per line."
                .to_string(),
        )];
    }

    let pointers = match reader::read_pointer_lines(flags.pointers.as_deref()) {
        Ok(pointers) => pointers,
        Err(diagnostic) => return vec![diagnostic],
    };

    let mut patch_lists = Vec::new();
    for file in &flags.files {
        match reader::read_patch_file(file) {
            Ok(list) => patch_lists.push(list),
            Err(diagnostic) => return vec![diagnostic],
        }
    }

    let result = filter_patches(&pointers, &patch_lists);

    match render::to_pretty(&result) {
        Ok(json) => {
            println!("{}", json);
            Vec::new()
        }
        Err(diagnostic) => vec![diagnostic],
    }
}
