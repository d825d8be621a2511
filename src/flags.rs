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

use std::path::PathBuf;

xflags::xflags! {
    cmd json-trans {
        /// Print version information and exit
        optional -V, --version

        default cmd help {}

        /// List the JSON Pointer of every leaf value in the given files
        cmd pointers {
            /// JSON files to enumerate
            repeated files: PathBuf
        }

        /// Print the pointers where a value occurs in the given files
        cmd search {
            /// Only report pointers whose rendered string matches this regex
            optional -f, --filter filter: String

            /// String value to search for (exact match)
            required value: String

            /// JSON files to search
            repeated files: PathBuf
        }

        /// Keep only the patch operations whose path is in a pointer list
        cmd filter {
            /// File with one JSON Pointer per line (read from stdin when omitted)
            optional -p, --pointers pointers: PathBuf

            /// JSON patch files to filter
            repeated files: PathBuf
        }

        /// Build a translation table by diffing two patch files
        cmd table {
            /// Patch file describing the source-language state
            required file1: PathBuf

            /// Patch file describing the target-language state
            required file2: PathBuf
        }

        /// Rewrite values in the given files using a translation table
        cmd replace {
            /// Only replace at pointers whose rendered string matches this regex
            /// (the default skips any pointer ending in an 'id' segment)
            optional -f, --filter filter: String

            /// Translation table file
            required table: PathBuf

            /// JSON files to rewrite
            repeated files: PathBuf
        }
    }
}

impl JsonTrans {
    pub const HELP: &'static str = Self::HELP_;
}
