use std::collections::HashSet;

/// Append every word of `b` missing from `a`, keeping both orders.
pub fn merge(mut a: Vec<String>, b: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = a.iter().cloned().collect();
    for word in b {
        if seen.insert(word.clone()) {
            a.push(word);
        }
    }
    a
}

/// Keep the words that start with `prefix`.
pub fn filter_prefix(candidates: Vec<String>, prefix: &str) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|word| word.starts_with(prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn merge_keeps_first_occurrence() {
        let merged = merge(words(&["x", "a"]), words(&["a", "y", "x", "z"]));
        assert_eq!(merged, words(&["x", "a", "y", "z"]));
    }

    #[test]
    fn merge_into_empty() {
        assert_eq!(merge(Vec::new(), words(&["p", "q"])), words(&["p", "q"]));
        assert_eq!(merge(words(&["p"]), Vec::new()), words(&["p"]));
    }

    #[test]
    fn merge_drops_duplicates_within_second_list() {
        assert_eq!(merge(Vec::new(), words(&["a", "a", "b"])), words(&["a", "b"]));
    }

    #[test]
    fn filter_preserves_order() {
        let filtered = filter_prefix(words(&["cat", "dog", "catalog", "ca"]), "ca");
        assert_eq!(filtered, words(&["cat", "catalog", "ca"]));
        assert_eq!(filter_prefix(words(&["a"]), ""), words(&["a"]));
    }

    proptest! {
        #[test]
        fn merge_law(
            a in prop::collection::hash_set("[a-d]{1,2}", 0..8),
            b in prop::collection::vec("[a-d]{1,2}", 0..12),
        ) {
            let a: Vec<String> = a.into_iter().collect();
            let merged = merge(a.clone(), b.clone());
            prop_assert_eq!(&merged[..a.len()], &a[..]);

            let mut expected_tail = Vec::new();
            for word in &b {
                if !a.contains(word) && !expected_tail.contains(word) {
                    expected_tail.push(word.clone());
                }
            }
            prop_assert_eq!(&merged[a.len()..], &expected_tail[..]);
        }

        #[test]
        fn prefix_law(list in prop::collection::vec("[a-c]{0,4}", 0..16), prefix in "[a-c]{0,2}") {
            let filtered = filter_prefix(list.clone(), &prefix);
            prop_assert!(filtered.iter().all(|w| w.starts_with(prefix.as_str())));
            let expected: Vec<String> = list.into_iter().filter(|w| w.starts_with(prefix.as_str())).collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
