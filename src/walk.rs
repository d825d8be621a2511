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

//! Depth-first traversal over a JSON document, shared by the pointer
//! enumerator and the value search engine.
//!
//! The visitor sees every node, containers included, before the walk descends
//! into that node's children. Arrays recurse in index order, objects in
//! insertion order (serde_json is built with `preserve_order`, so document key
//! order is what the traversal follows). Strings are scalars here; they are
//! never walked character by character.

use serde_json::Value;

use crate::pointer;

/// Visits every node of `doc` in depth-first, pre-order document order.
///
/// The visitor receives the raw (unescaped) segment path of the node and the
/// node itself. The root is visited with an empty segment slice.
pub fn walk<F>(doc: &Value, visit: &mut F)
where
    F: FnMut(&[String], &Value),
{
    let mut segments: Vec<String> = Vec::new();
    walk_inner(doc, &mut segments, visit);
}

fn walk_inner<F>(doc: &Value, segments: &mut Vec<String>, visit: &mut F)
where
    F: FnMut(&[String], &Value),
{
    visit(segments.as_slice(), doc);

    match doc {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                segments.push(index.to_string());
                walk_inner(item, segments, visit);
                segments.pop();
            }
        }
        Value::Object(map) => {
            for (key, value) in map {
                segments.push(key.clone());
                walk_inner(value, segments, visit);
                segments.pop();
            }
        }
        _ => {}
    }
}

/// Renders the pointer of every leaf (non-container) value, one entry per
/// leaf, in traversal order. A scalar root document yields the root pointer
/// `""`.
pub fn leaf_pointers(doc: &Value) -> Vec<String> {
    let mut result = Vec::new();
    walk(doc, &mut |segments, value| {
        if !value.is_array() && !value.is_object() {
            result.push(pointer::render(segments));
        }
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_pointers_simple_object() {
        let doc = json!({"a": {"id": "1", "name": "cat"}});
        assert_eq!(leaf_pointers(&doc), vec!["/a/id", "/a/name"]);
    }

    #[test]
    fn test_leaf_pointers_arrays_in_index_order() {
        let doc = json!({"items": [{"id": "1"}, "two", [true, null]]});
        assert_eq!(
            leaf_pointers(&doc),
            vec!["/items/0/id", "/items/1", "/items/2/0", "/items/2/1"]
        );
    }

    #[test]
    fn test_leaf_pointers_scalar_root() {
        let doc = json!("hello");
        assert_eq!(leaf_pointers(&doc), vec![""]);
    }

    #[test]
    fn test_strings_are_not_walked_into() {
        let doc = json!({"s": "abc"});
        assert_eq!(leaf_pointers(&doc), vec!["/s"]);
    }

    #[test]
    fn test_leaf_pointers_skip_containers() {
        let doc = json!({"a": {"b": {}}, "c": []});
        // Empty containers are still containers, not leaves
        assert_eq!(leaf_pointers(&doc), Vec::<String>::new());
    }

    #[test]
    fn test_leaf_pointers_escape_key_segments() {
        let doc = json!({"a/b": 1, "c~d": 2});
        assert_eq!(leaf_pointers(&doc), vec!["/a~1b", "/c~0d"]);
    }

    #[test]
    fn test_walk_visits_containers_preorder() {
        let doc = json!({"a": [1]});
        let mut visited = Vec::new();
        walk(&doc, &mut |segments, _| {
            visited.push(pointer::render(segments));
        });
        assert_eq!(visited, vec!["", "/a", "/a/0"]);
    }
}
