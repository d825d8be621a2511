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

use regex::Regex;
use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticLevel};
use crate::pointer::{self, JsonPointer};
use crate::walk::walk;

/// Decides which pointers a search may report matches at.
///
/// A filter only suppresses result emission at excluded nodes; the walk still
/// descends into their children.
#[derive(Debug)]
pub enum PointerFilter {
    /// No restriction.
    Any,
    /// The rendered pointer string must contain a match for the pattern
    /// (unanchored, like `re.search`).
    Matches(Regex),
    /// Excludes any pointer whose final raw segment is exactly `id`. This is
    /// the replacement engine's default, so identifier fields are never
    /// rewritten unless the caller supplies a pattern. The root pointer
    /// passes.
    SkipIdLeaves,
}

impl PointerFilter {
    /// Compiles a user-supplied pattern into a filter.
    pub fn pattern(pattern: &str) -> Result<Self, Diagnostic> {
        let regex = Regex::new(pattern).map_err(|e| {
            Diagnostic::new(
                DiagnosticLevel::Fatal,
                DiagnosticCode::InvalidFilterRegex,
                format!("I couldn't compile the pointer filter '{}': {}", pattern, e),
            )
        })?;
        Ok(PointerFilter::Matches(regex))
    }

    pub fn allows(&self, segments: &[String]) -> bool {
        match self {
            PointerFilter::Any => true,
            PointerFilter::Matches(regex) => regex.is_match(&pointer::render(segments)),
            PointerFilter::SkipIdLeaves => segments.last().map(|s| s != "id").unwrap_or(true),
        }
    }
}

/// Finds every node of `doc` structurally equal to `target`, in traversal
/// order.
///
/// Containers are compared too, so a target that is itself an object or array
/// can match. Duplicate values produce one pointer per occurrence.
pub fn search(doc: &Value, target: &Value, filter: &PointerFilter) -> Vec<JsonPointer> {
    let mut result = Vec::new();
    walk(doc, &mut |segments, value| {
        if filter.allows(segments) && value == target {
            result.push(JsonPointer::from_segments(segments.to_vec()));
        }
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rendered(doc: &Value, target: &Value, filter: &PointerFilter) -> Vec<String> {
        search(doc, target, filter)
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn test_search_finds_all_occurrences_in_order() {
        let doc = json!({"x": "cat", "y": "cat"});
        assert_eq!(
            rendered(&doc, &json!("cat"), &PointerFilter::Any),
            vec!["/x", "/y"]
        );
    }

    #[test]
    fn test_search_results_resolve_to_target() {
        let doc = json!({"a": {"b": ["cat", {"c": "cat"}]}, "d": "cat"});
        for p in search(&doc, &json!("cat"), &PointerFilter::Any) {
            assert_eq!(p.get(&doc).unwrap(), &json!("cat"));
        }
    }

    #[test]
    fn test_search_matches_container_values() {
        let doc = json!({"a": {"x": 1}, "b": {"x": 1}});
        assert_eq!(
            rendered(&doc, &json!({"x": 1}), &PointerFilter::Any),
            vec!["/a", "/b"]
        );
    }

    #[test]
    fn test_search_root_match() {
        let doc = json!("cat");
        assert_eq!(rendered(&doc, &json!("cat"), &PointerFilter::Any), vec![""]);
    }

    #[test]
    fn test_filter_suppresses_but_does_not_prune() {
        // The filter excludes /a itself but the walk must still descend to /a/b.
        let doc = json!({"a": {"b": "cat"}});
        let filter = PointerFilter::pattern("/b$").unwrap();
        assert_eq!(rendered(&doc, &json!("cat"), &filter), vec!["/a/b"]);
    }

    #[test]
    fn test_filtered_results_are_subset_of_unfiltered() {
        let doc = json!({"a": {"name": "cat"}, "b": ["cat"], "name": "cat"});
        let unfiltered = rendered(&doc, &json!("cat"), &PointerFilter::Any);
        let filter = PointerFilter::pattern("name").unwrap();
        for p in rendered(&doc, &json!("cat"), &filter) {
            assert!(unfiltered.contains(&p));
        }
    }

    #[test]
    fn test_regex_is_unanchored() {
        let doc = json!({"outer": {"name": "cat"}});
        let filter = PointerFilter::pattern("name").unwrap();
        assert_eq!(rendered(&doc, &json!("cat"), &filter), vec!["/outer/name"]);
    }

    #[test]
    fn test_skip_id_leaves_excludes_final_id_segment() {
        let doc = json!({"a": {"id": "cat", "name": "cat"}, "id": "cat"});
        assert_eq!(
            rendered(&doc, &json!("cat"), &PointerFilter::SkipIdLeaves),
            vec!["/a/name"]
        );
    }

    #[test]
    fn test_skip_id_leaves_allows_id_in_the_middle() {
        let doc = json!({"id": {"label": "cat"}});
        assert_eq!(
            rendered(&doc, &json!("cat"), &PointerFilter::SkipIdLeaves),
            vec!["/id/label"]
        );
    }

    #[test]
    fn test_skip_id_leaves_allows_scalar_root() {
        let doc = json!("cat");
        assert_eq!(
            rendered(&doc, &json!("cat"), &PointerFilter::SkipIdLeaves),
            vec![""]
        );
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(PointerFilter::pattern("(unclosed").is_err());
    }
}
