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

use json_trans::Diagnostic;
use std::process;

mod cmd;
mod flags;

fn main() {
    let flags = flags::JsonTrans::from_env_or_exit();

    if flags.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return;
    }

    let diagnostics = run(flags);

    for diagnostic in &diagnostics {
        if diagnostic.is_warning() {
            // Warnings go to stderr in yellow so they stand out next to the
            // JSON result on stdout
            eprintln!("\x1b[93m{}\x1b[0m", diagnostic);
        } else {
            eprintln!("{}", diagnostic);
        }
    }

    let has_fatal = diagnostics.iter().any(|d| d.is_fatal());
    if has_fatal {
        process::exit(1);
    }
}

fn run(flags: flags::JsonTrans) -> Vec<Diagnostic> {
    match flags.subcommand {
        flags::JsonTransCmd::Help(_) => {
            println!("{}", flags::JsonTrans::HELP);
            Vec::new()
        }
        flags::JsonTransCmd::Pointers(pointers_flags) => cmd::pointers::run(&pointers_flags),
        flags::JsonTransCmd::Search(search_flags) => cmd::search::run(&search_flags),
        flags::JsonTransCmd::Filter(filter_flags) => cmd::filter::run(&filter_flags),
        flags::JsonTransCmd::Table(table_flags) => cmd::table::run(&table_flags),
        flags::JsonTransCmd::Replace(replace_flags) => cmd::replace::run(&replace_flags),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_help_covers_every_subcommand() {
        for name in ["pointers", "search", "filter", "table", "replace"] {
            assert!(crate::flags::JsonTrans::HELP.contains(name));
        }
    }
}
