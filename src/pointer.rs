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

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticLevel};
use serde_json::Value;

/// A JSON Pointer (RFC 6901) held as raw, unescaped path segments.
///
/// The root pointer has no segments and renders as the empty string. Two
/// pointers compare equal exactly when their rendered forms are equal, which
/// the derived segment equality gives us since escaping is injective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPointer {
    segments: Vec<String>,
}

/// Escapes one raw segment for the string rendering (`~` -> `~0`, `/` -> `~1`).
pub fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Renders a segment sequence to the standard escaped pointer string.
pub fn render(segments: &[String]) -> String {
    if segments.is_empty() {
        return String::new();
    }

    let escaped: Vec<String> = segments.iter().map(|s| escape(s)).collect();
    format!("/{}", escaped.join("/"))
}

impl JsonPointer {
    pub fn new(path: &str) -> Result<Self, Diagnostic> {
        if path.is_empty() {
            return Ok(JsonPointer { segments: vec![] });
        }

        if !path.starts_with('/') {
            return Err(Diagnostic::new(
                DiagnosticLevel::Fatal,
                DiagnosticCode::InvalidPointerSyntax,
                format!(
                    "I couldn't parse the path '{}': Path must start with '/'",
                    path
                ),
            ));
        }

        let segments = path[1..]
            .split('/')
            .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
            .collect();

        Ok(JsonPointer { segments })
    }

    pub fn from_segments(segments: Vec<String>) -> Self {
        JsonPointer { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final raw segment, or `None` for the root pointer.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn get<'a>(&self, value: &'a Value) -> Result<&'a Value, Diagnostic> {
        let mut current = value;

        for segment in &self.segments {
            match current {
                Value::Object(obj) => {
                    current = obj.get(segment).ok_or_else(|| {
                        Diagnostic::new(
                            DiagnosticLevel::Fatal,
                            DiagnosticCode::PathNotFound,
                            format!("I couldn't find the key '{}'", segment),
                        )
                    })?;
                }
                Value::Array(arr) => {
                    let index = segment.parse::<usize>().map_err(|_| {
                        Diagnostic::new(
                            DiagnosticLevel::Fatal,
                            DiagnosticCode::InvalidArrayIndex,
                            format!("I couldn't parse '{}' as an array index", segment),
                        )
                    })?;
                    current = arr.get(index).ok_or_else(|| {
                        Diagnostic::new(
                            DiagnosticLevel::Fatal,
                            DiagnosticCode::PathNotFound,
                            format!(
                                "I couldn't find index {} (array length is {})",
                                index,
                                arr.len()
                            ),
                        )
                    })?;
                }
                _ => {
                    return Err(Diagnostic::new(
                        DiagnosticLevel::Fatal,
                        DiagnosticCode::TypeMismatch,
                        format!(
                            "I can't index into {} with '{}'",
                            current.type_name(),
                            segment
                        ),
                    ));
                }
            }
        }

        Ok(current)
    }

    pub fn set(&self, value: &mut Value, new_value: Value) -> Result<(), Diagnostic> {
        if self.segments.is_empty() {
            *value = new_value;
            return Ok(());
        }

        let mut current = value;
        let last_segment = &self.segments[self.segments.len() - 1];

        for segment in &self.segments[..self.segments.len() - 1] {
            match current {
                Value::Object(obj) => {
                    current = obj.get_mut(segment).ok_or_else(|| {
                        Diagnostic::new(
                            DiagnosticLevel::Fatal,
                            DiagnosticCode::PathNotFound,
                            format!("I couldn't find the key '{}'", segment),
                        )
                    })?;
                }
                Value::Array(arr) => {
                    let index = segment.parse::<usize>().map_err(|_| {
                        Diagnostic::new(
                            DiagnosticLevel::Fatal,
                            DiagnosticCode::InvalidArrayIndex,
                            format!("I couldn't parse '{}' as an array index", segment),
                        )
                    })?;
                    let array_len = arr.len();
                    current = arr.get_mut(index).ok_or_else(|| {
                        Diagnostic::new(
                            DiagnosticLevel::Fatal,
                            DiagnosticCode::PathNotFound,
                            format!(
                                "I couldn't find index {} (array length is {})",
                                index, array_len
                            ),
                        )
                    })?;
                }
                _ => {
                    return Err(Diagnostic::new(
                        DiagnosticLevel::Fatal,
                        DiagnosticCode::TypeMismatch,
                        format!(
                            "I can't index into {} with '{}'",
                            current.type_name(),
                            segment
                        ),
                    ));
                }
            }
        }

        match current {
            Value::Object(obj) => {
                obj.insert(last_segment.clone(), new_value);
            }
            Value::Array(arr) => {
                let index = last_segment.parse::<usize>().map_err(|_| {
                    Diagnostic::new(
                        DiagnosticLevel::Fatal,
                        DiagnosticCode::InvalidArrayIndex,
                        format!("I couldn't parse '{}' as an array index", last_segment),
                    )
                })?;

                if index == arr.len() {
                    arr.push(new_value);
                } else if index < arr.len() {
                    arr[index] = new_value;
                } else {
                    return Err(Diagnostic::new(
                        DiagnosticLevel::Fatal,
                        DiagnosticCode::PathNotFound,
                        format!(
                            "I couldn't set index {} (array length is {})",
                            index,
                            arr.len()
                        ),
                    ));
                }
            }
            _ => {
                return Err(Diagnostic::new(
                    DiagnosticLevel::Fatal,
                    DiagnosticCode::TypeMismatch,
                    format!(
                        "I can't set property '{}' on {}",
                        last_segment,
                        current.type_name()
                    ),
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.segments))
    }
}

trait ValueTypeExt {
    fn type_name(&self) -> &'static str;
}

impl ValueTypeExt for Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
