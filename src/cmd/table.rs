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
use json_trans::{build_table, reader, render, Diagnostic, DiagnosticCollector};

pub fn run(flags: &flags::Table) -> Vec<Diagnostic> {
    let first = match reader::read_patch_file(&flags.file1) {
        Ok(list) => list,
        Err(diagnostic) => return vec![diagnostic],
    };
    let second = match reader::read_patch_file(&flags.file2) {
        Ok(list) => list,
        Err(diagnostic) => return vec![diagnostic],
    };

    // Duplicate-path and conflicting-translation warnings accumulate here;
    // they never stop the build
    let mut collector = DiagnosticCollector::new();
    let table = build_table(&first, &second, &mut collector);

    match render::to_pretty(&table) {
        Ok(json) => println!("{}", json),
        Err(diagnostic) => {
            let mut diagnostics = collector.into_diagnostics();
            diagnostics.push(diagnostic);
            return diagnostics;
        }
    }

    collector.into_diagnostics()
}
