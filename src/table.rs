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

//! The translation table and the builder that derives one from two patch
//! files describing the same document in two languages.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticCollector, DiagnosticLevel};
use crate::patch::PatchOperation;

/// Maps a source string to its candidate replacements, insertion-ordered.
///
/// The first candidate of a key is the authoritative one; later candidates
/// are retained so conflicting translations stay visible in the output.
/// Serializes as a plain JSON object of string -> array-of-strings, which is
/// the on-disk table format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: IndexMap<String, Vec<String>>,
}

/// What `add_candidate` did with the pair it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The source was new; a fresh entry was created.
    NewEntry,
    /// The source existed and the candidate was appended to its set.
    NewCandidate,
    /// The source existed and already listed this candidate.
    Known,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `candidate` as a translation of `source`, keeping candidates
    /// distinct and in first-seen order.
    pub fn add_candidate(&mut self, source: &str, candidate: &str) -> AddOutcome {
        match self.entries.get_mut(source) {
            None => {
                self.entries
                    .insert(source.to_string(), vec![candidate.to_string()]);
                AddOutcome::NewEntry
            }
            Some(candidates) => {
                if candidates.iter().any(|c| c == candidate) {
                    AddOutcome::Known
                } else {
                    candidates.push(candidate.to_string());
                    AddOutcome::NewCandidate
                }
            }
        }
    }

    /// The authoritative replacement for `source`, if the table knows one.
    pub fn first_candidate(&self, source: &str) -> Option<&str> {
        self.entries
            .get(source)
            .and_then(|candidates| candidates.first())
            .map(String::as_str)
    }

    pub fn candidates(&self, source: &str) -> Option<&[String]> {
        self.entries.get(source).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a translation table by diffing the `replace` operations of two
/// patch lists over the same document.
///
/// Keys come from the first list's values, candidates from the second's, so
/// the result is directional. Duplicate paths within one list and conflicting
/// translations across paths are reported as warnings on the collector and
/// never abort the build.
pub fn build_table(
    first: &[PatchOperation],
    second: &[PatchOperation],
    diagnostics: &mut DiagnosticCollector,
) -> TranslationTable {
    let before = replace_values(first, diagnostics);
    let after = replace_values(second, diagnostics);

    let mut table = TranslationTable::new();
    for (path, value_before) in &before {
        let Some(value_after) = after.get(path) else {
            continue;
        };
        if value_before == value_after {
            continue;
        }

        // The table is string -> strings; a replace that changes a value's
        // type or touches non-string content is not a translation.
        let (Some(source), Some(candidate)) = (value_before.as_str(), value_after.as_str())
        else {
            continue;
        };

        if table.add_candidate(source, candidate) == AddOutcome::NewCandidate {
            diagnostics.add(Diagnostic::new(
                DiagnosticLevel::Warning,
                DiagnosticCode::ConflictingTranslation,
                format!(
                    "I found a different translation for '{}' at path '{}'; \
                     the earlier one stays authoritative and '{}' was recorded as an extra candidate",
                    source, path, candidate
                ),
            ));
        }
    }

    table
}

/// Maps `path` to `value` over the `replace` operations of one list. On a
/// repeated path the last value wins and each repeat raises a warning.
fn replace_values(
    operations: &[PatchOperation],
    diagnostics: &mut DiagnosticCollector,
) -> IndexMap<String, Value> {
    let mut result = IndexMap::new();

    for operation in operations {
        if !operation.is_replace() {
            continue;
        }
        let Some(value) = &operation.value else {
            continue;
        };

        if result.contains_key(&operation.path) {
            diagnostics.add(Diagnostic::new(
                DiagnosticLevel::Warning,
                DiagnosticCode::DuplicatePatchPath,
                format!(
                    "I found the path '{}' more than once; keeping the value from the last occurrence",
                    operation.path
                ),
            ));
        }
        result.insert(operation.path.clone(), value.clone());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ops(raw: serde_json::Value) -> Vec<PatchOperation> {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_build_simple_pair() {
        let first = ops(json!([{"op": "replace", "path": "/n", "value": "cat"}]));
        let second = ops(json!([{"op": "replace", "path": "/n", "value": "chat"}]));
        let mut diagnostics = DiagnosticCollector::new();

        let table = build_table(&first, &second, &mut diagnostics);
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({"cat": ["chat"]})
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_equal_values_produce_no_entry() {
        let first = ops(json!([{"op": "replace", "path": "/n", "value": "cat"}]));
        let second = ops(json!([{"op": "replace", "path": "/n", "value": "cat"}]));
        let mut diagnostics = DiagnosticCollector::new();

        let table = build_table(&first, &second, &mut diagnostics);
        assert!(table.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_one_sided_paths_are_ignored() {
        let first = ops(json!([{"op": "replace", "path": "/only-here", "value": "cat"}]));
        let second = ops(json!([{"op": "replace", "path": "/elsewhere", "value": "chat"}]));
        let mut diagnostics = DiagnosticCollector::new();

        let table = build_table(&first, &second, &mut diagnostics);
        assert!(table.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_non_replace_operations_are_ignored() {
        let first = ops(json!([
            {"op": "add", "path": "/n", "value": "cat"},
            {"op": "remove", "path": "/n"}
        ]));
        let second = ops(json!([{"op": "replace", "path": "/n", "value": "chat"}]));
        let mut diagnostics = DiagnosticCollector::new();

        let table = build_table(&first, &second, &mut diagnostics);
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_path_keeps_last_and_warns() {
        let first = ops(json!([
            {"op": "replace", "path": "/n", "value": "old"},
            {"op": "replace", "path": "/n", "value": "cat"}
        ]));
        let second = ops(json!([{"op": "replace", "path": "/n", "value": "chat"}]));
        let mut diagnostics = DiagnosticCollector::new();

        let table = build_table(&first, &second, &mut diagnostics);
        assert_eq!(table.first_candidate("cat"), Some("chat"));
        assert_eq!(table.first_candidate("old"), None);

        assert_eq!(diagnostics.len(), 1);
        let warning = &diagnostics.diagnostics()[0];
        assert!(warning.is_warning());
        assert_eq!(warning.code, DiagnosticCode::DuplicatePatchPath);
    }

    #[test]
    fn test_conflicting_translation_appends_and_warns() {
        let first = ops(json!([
            {"op": "replace", "path": "/a", "value": "cat"},
            {"op": "replace", "path": "/b", "value": "cat"}
        ]));
        let second = ops(json!([
            {"op": "replace", "path": "/a", "value": "chat"},
            {"op": "replace", "path": "/b", "value": "minou"}
        ]));
        let mut diagnostics = DiagnosticCollector::new();

        let table = build_table(&first, &second, &mut diagnostics);
        assert_eq!(
            table.candidates("cat"),
            Some(&["chat".to_string(), "minou".to_string()][..])
        );
        assert_eq!(table.first_candidate("cat"), Some("chat"));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.diagnostics()[0].code,
            DiagnosticCode::ConflictingTranslation
        );
    }

    #[test]
    fn test_repeated_identical_translation_is_silent() {
        let first = ops(json!([
            {"op": "replace", "path": "/a", "value": "cat"},
            {"op": "replace", "path": "/b", "value": "cat"}
        ]));
        let second = ops(json!([
            {"op": "replace", "path": "/a", "value": "chat"},
            {"op": "replace", "path": "/b", "value": "chat"}
        ]));
        let mut diagnostics = DiagnosticCollector::new();

        let table = build_table(&first, &second, &mut diagnostics);
        assert_eq!(table.candidates("cat"), Some(&["chat".to_string()][..]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_non_string_values_are_skipped() {
        let first = ops(json!([{"op": "replace", "path": "/n", "value": 1}]));
        let second = ops(json!([{"op": "replace", "path": "/n", "value": 2}]));
        let mut diagnostics = DiagnosticCollector::new();

        let table = build_table(&first, &second, &mut diagnostics);
        assert!(table.is_empty());
    }

    #[test]
    fn test_table_round_trips_through_json() {
        let mut table = TranslationTable::new();
        table.add_candidate("cat", "chat");
        table.add_candidate("cat", "minou");
        table.add_candidate("dog", "chien");

        let raw = serde_json::to_value(&table).unwrap();
        assert_eq!(raw, json!({"cat": ["chat", "minou"], "dog": ["chien"]}));

        let reloaded: TranslationTable = serde_json::from_value(raw).unwrap();
        assert_eq!(reloaded, table);
    }
}
