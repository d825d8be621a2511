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

use crate::patch::PatchOperation;

/// Selects every patch operation whose `path` exactly equals one of the given
/// pointer strings.
///
/// Order is preserved: all matches from the first list come before matches
/// from the second, and operations keep their in-list order. Each operation is
/// emitted at most once; the first matching pointer wins, so duplicate
/// pointers in the list cannot duplicate an operation. Operations with no
/// matching pointer are dropped silently.
pub fn filter_patches(
    pointers: &[String],
    patch_lists: &[Vec<PatchOperation>],
) -> Vec<PatchOperation> {
    let mut result = Vec::new();

    for patch_list in patch_lists {
        for operation in patch_list {
            for pointer in pointers {
                if *pointer == operation.path {
                    result.push(operation.clone());
                    break;
                }
            }
        }
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
    fn test_keeps_only_matching_paths() {
        let list = ops(json!([
            {"op": "replace", "path": "/a/name", "value": "dog"},
            {"op": "replace", "path": "/a/id", "value": "2"}
        ]));
        let pointers = vec!["/a/name".to_string()];

        let result = filter_patches(&pointers, &[list]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].path, "/a/name");
    }

    #[test]
    fn test_duplicate_pointers_emit_each_operation_once() {
        let list = ops(json!([{"op": "replace", "path": "/a", "value": 1}]));
        let once = filter_patches(&["/a".to_string()], &[list.clone()]);
        let twice = filter_patches(&["/a".to_string(), "/a".to_string()], &[list]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_same_path_matches_once_per_operation() {
        let list = ops(json!([
            {"op": "replace", "path": "/a", "value": 1},
            {"op": "replace", "path": "/a", "value": 2}
        ]));
        let result = filter_patches(&["/a".to_string()], &[list]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_cross_file_order_is_preserved() {
        let first = ops(json!([{"op": "replace", "path": "/b", "value": 1}]));
        let second = ops(json!([{"op": "replace", "path": "/a", "value": 2}]));
        let pointers = vec!["/a".to_string(), "/b".to_string()];

        let result = filter_patches(&pointers, &[first, second]);
        let paths: Vec<&str> = result.iter().map(|op| op.path.as_str()).collect();
        assert_eq!(paths, vec!["/b", "/a"]);
    }

    #[test]
    fn test_non_replace_operations_match_uniformly() {
        let list = ops(json!([{"op": "remove", "path": "/a"}]));
        let result = filter_patches(&["/a".to_string()], &[list]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].op, "remove");
    }

    #[test]
    fn test_empty_pointer_list_drops_everything() {
        let list = ops(json!([{"op": "replace", "path": "/a", "value": 1}]));
        assert!(filter_patches(&[], &[list]).is_empty());
    }
}
