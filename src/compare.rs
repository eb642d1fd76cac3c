use crate::types::{KeyDiff, KeySet};

/// Compute the keys each set has that the other lacks
pub fn compare_keys(first: &KeySet, second: &KeySet) -> KeyDiff {
    KeyDiff {
        only_in_first: first.difference(second),
        only_in_second: second.difference(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract_keys;
    use serde_json::json;

    #[test]
    fn test_same_keys_different_values() {
        let diff = compare_keys(
            &extract_keys(&json!({"a": {"b": 1}})),
            &extract_keys(&json!({"a": {"b": 2}})),
        );
        assert!(diff.is_match());
    }

    #[test]
    fn test_disjoint_keys() {
        let diff = compare_keys(&extract_keys(&json!({"a": 1})), &extract_keys(&json!({"b": 1})));

        assert!(!diff.is_match());
        assert_eq!(diff.only_in_first.iter().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(diff.only_in_second.iter().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_empty_documents() {
        let diff = compare_keys(&extract_keys(&json!({})), &extract_keys(&json!({})));
        assert!(diff.is_match());
    }

    #[test]
    fn test_nested_mismatch() {
        let diff = compare_keys(
            &extract_keys(&json!({"a": {"b": {"c": 1}}})),
            &extract_keys(&json!({"a": {"b": 1}})),
        );

        assert_eq!(diff.only_in_first.iter().collect::<Vec<_>>(), vec!["a.b.c"]);
        assert!(diff.only_in_second.is_empty());
    }

    #[test]
    fn test_symmetry() {
        let first = extract_keys(&json!({"common": 1, "left": {"x": 1}}));
        let second = extract_keys(&json!({"common": 2, "right": [{"y": 1}]}));

        let forward = compare_keys(&first, &second);
        let backward = compare_keys(&second, &first);

        assert_eq!(forward.only_in_first, backward.only_in_second);
        assert_eq!(forward.only_in_second, backward.only_in_first);
    }
}
