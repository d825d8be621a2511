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

pub mod diagnostics;
pub mod filter;
pub mod patch;
pub mod pointer;
pub mod reader;
pub mod render;
pub mod replace;
pub mod search;
pub mod table;
pub mod walk;

pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticCollector, DiagnosticLevel};
pub use filter::filter_patches;
pub use patch::PatchOperation;
pub use pointer::JsonPointer;
pub use replace::apply;
pub use search::{search, PointerFilter};
pub use table::{build_table, AddOutcome, TranslationTable};
pub use walk::{leaf_pointers, walk};
