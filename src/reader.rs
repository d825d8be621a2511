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

//! Input loading. All files are UTF-8; a leading byte-order mark is stripped
//! before parsing, since editors and exporters on Windows routinely emit one.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticLevel};
use crate::patch::PatchOperation;
use crate::table::TranslationTable;

/// Reads a whole file as UTF-8 with any leading BOM removed.
pub fn read_text(path: &Path) -> Result<String, Diagnostic> {
    let bytes = fs::read(path).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::PathNotFound,
            format!("I couldn't read the file: {}", e),
        )
        .with_file(path.display().to_string())
        .with_advice(
            "Make sure the file path is correct and the file exists. \
             Check for typos in the filename."
                .to_string(),
        )
    })?;

    let text = String::from_utf8(bytes).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::InvalidUtf8,
            format!("I couldn't decode the file as UTF-8: {}", e),
        )
        .with_file(path.display().to_string())
    })?;

    Ok(strip_bom(&text).to_string())
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Parses a file as a single JSON document.
pub fn read_json_file(path: &Path) -> Result<Value, Diagnostic> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::InvalidJson,
            format!("I couldn't parse the file as JSON: {}", e),
        )
        .with_file(path.display().to_string())
    })
}

/// Parses a file as a JSON array of patch operations.
pub fn read_patch_file(path: &Path) -> Result<Vec<PatchOperation>, Diagnostic> {
    let document = read_json_file(path)?;
    serde_json::from_value(document).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::NotAPatchList,
            format!(
                "I expected a JSON array of patch operations with 'op' and 'path' fields, \
                 but couldn't read one: {}",
                e
            ),
        )
        .with_file(path.display().to_string())
    })
}

/// Parses a file as a translation table object.
pub fn read_table_file(path: &Path) -> Result<TranslationTable, Diagnostic> {
    let document = read_json_file(path)?;
    serde_json::from_value(document).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::NotATranslationTable,
            format!(
                "I expected a JSON object mapping source strings to arrays of \
                 replacement strings, but couldn't read one: {}",
                e
            ),
        )
        .with_file(path.display().to_string())
    })
}

/// Reads a pointer list from a file, or from stdin when no path is given.
///
/// Each non-empty line, right-trimmed, is one literal pointer string; line
/// order is preserved because the patch filter checks pointers in this order.
pub fn read_pointer_lines(path: Option<&Path>) -> Result<Vec<String>, Diagnostic> {
    let text = match path {
        Some(path) => read_text(path)?,
        None => {
            let mut lines = Vec::new();
            for line in io::stdin().lock().lines() {
                let line = line.map_err(|e| {
                    Diagnostic::new(
                        DiagnosticLevel::Fatal,
                        DiagnosticCode::InvalidUtf8,
                        format!("I couldn't read the pointer list from stdin: {}", e),
                    )
                })?;
                lines.push(line);
            }
            lines.join("\n")
        }
    };

    Ok(pointer_lines(&text))
}

fn pointer_lines(text: &str) -> Vec<String> {
    strip_bom(text)
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_json_file_strips_bom() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::with_suffix(".json")?;
        temp_file.write_all(b"\xef\xbb\xbf{\"a\": 1}")?;
        temp_file.flush()?;

        let doc = read_json_file(temp_file.path()).unwrap();
        assert_eq!(doc, json!({"a": 1}));
        Ok(())
    }

    #[test]
    fn test_read_json_file_missing() {
        let err = read_json_file(Path::new("/nonexistent/input.json")).unwrap_err();
        assert_eq!(err.code, DiagnosticCode::PathNotFound);
        assert!(err.is_fatal());
    }

    #[test]
    fn test_read_json_file_invalid() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::with_suffix(".json")?;
        writeln!(temp_file, "not json")?;
        temp_file.flush()?;

        let err = read_json_file(temp_file.path()).unwrap_err();
        assert_eq!(err.code, DiagnosticCode::InvalidJson);
        Ok(())
    }

    #[test]
    fn test_read_patch_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::with_suffix(".json")?;
        writeln!(
            temp_file,
            r#"[{{"op": "replace", "path": "/a", "value": "dog"}}]"#
        )?;
        temp_file.flush()?;

        let operations = read_patch_file(temp_file.path()).unwrap();
        assert_eq!(operations.len(), 1);
        assert_eq!(operations[0].path, "/a");
        Ok(())
    }

    #[test]
    fn test_read_patch_file_rejects_non_array() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::with_suffix(".json")?;
        writeln!(temp_file, r#"{{"op": "replace"}}"#)?;
        temp_file.flush()?;

        let err = read_patch_file(temp_file.path()).unwrap_err();
        assert_eq!(err.code, DiagnosticCode::NotAPatchList);
        Ok(())
    }

    #[test]
    fn test_read_table_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::with_suffix(".json")?;
        writeln!(temp_file, r#"{{"cat": ["chat", "minou"]}}"#)?;
        temp_file.flush()?;

        let table = read_table_file(temp_file.path()).unwrap();
        assert_eq!(table.first_candidate("cat"), Some("chat"));
        Ok(())
    }

    #[test]
    fn test_pointer_lines_trim_and_skip_blanks() {
        let text = "\u{feff}/a/name  \n\n/a/id\t\n   \n";
        assert_eq!(pointer_lines(text), vec!["/a/name", "/a/id"]);
    }

    #[test]
    fn test_read_pointer_lines_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::with_suffix(".txt")?;
        writeln!(temp_file, "/first")?;
        writeln!(temp_file, "/second")?;
        temp_file.flush()?;

        let pointers = read_pointer_lines(Some(temp_file.path())).unwrap();
        assert_eq!(pointers, vec!["/first", "/second"]);
        Ok(())
    }
}
