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

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Fatal,
    Warning,
    Info,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Fatal => write!(f, "error"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticCode {
    InvalidUtf8,
    InvalidJson,
    NotAPatchList,
    NotATranslationTable,

    InvalidPointerSyntax,
    PathNotFound,
    InvalidArrayIndex,
    TypeMismatch,

    InvalidFilterRegex,

    DuplicatePatchPath,
    ConflictingTranslation,

    MissingInput,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::InvalidUtf8 => "E001",
            DiagnosticCode::InvalidJson => "E002",
            DiagnosticCode::NotAPatchList => "E003",
            DiagnosticCode::NotATranslationTable => "E004",

            DiagnosticCode::InvalidPointerSyntax => "E010",
            DiagnosticCode::PathNotFound => "E011",
            DiagnosticCode::InvalidArrayIndex => "E012",
            DiagnosticCode::TypeMismatch => "E013",

            DiagnosticCode::InvalidFilterRegex => "E020",

            DiagnosticCode::DuplicatePatchPath => "W030",
            DiagnosticCode::ConflictingTranslation => "W031",

            DiagnosticCode::MissingInput => "E040",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DiagnosticCode::InvalidUtf8 => "Invalid UTF-8 encoding",
            DiagnosticCode::InvalidJson => "Invalid JSON",
            DiagnosticCode::NotAPatchList => "Not a patch list",
            DiagnosticCode::NotATranslationTable => "Not a translation table",

            DiagnosticCode::InvalidPointerSyntax => "Invalid JSON Pointer syntax",
            DiagnosticCode::PathNotFound => "Path not found",
            DiagnosticCode::InvalidArrayIndex => "Invalid array index",
            DiagnosticCode::TypeMismatch => "Type mismatch",

            DiagnosticCode::InvalidFilterRegex => "Invalid pointer filter",

            DiagnosticCode::DuplicatePatchPath => "Duplicate patch path",
            DiagnosticCode::ConflictingTranslation => "Conflicting translation",

            DiagnosticCode::MissingInput => "Missing input",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub filename: Option<String>,
    pub level: DiagnosticLevel,
    pub code: DiagnosticCode,
    pub description: String,
    pub advice: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, code: DiagnosticCode, description: String) -> Self {
        Self {
            filename: None,
            level,
            code,
            description,
            advice: None,
        }
    }

    pub fn with_file(mut self, filename: String) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_advice(mut self, advice: String) -> Self {
        self.advice = Some(advice);
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.level == DiagnosticLevel::Fatal
    }

    pub fn is_warning(&self) -> bool {
        self.level == DiagnosticLevel::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(filename) = &self.filename {
            write!(f, "{} - ", filename)?;
        }

        writeln!(
            f,
            "{} {}: {}",
            self.level,
            self.code.as_str(),
            self.code.title()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if let Some(advice) = &self.advice {
            writeln!(f)?;
            writeln!(f, "{}", advice)?;
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_fatal(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_fatal())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}
