/* src/dedup.rs */

use std::collections::HashSet;
use std::hash::Hash;

/// Remove duplicates, keeping the first occurrence of each value in order.
///
/// ```rust
/// use publicip::dedup;
///
/// assert_eq!(dedup(["a", "b", "a", "c", "b"]), ["a", "b", "c"]);
/// ```
pub fn dedup<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_occurrence() {
        let items = vec!["a", "b", "a", "c", "b"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        assert_eq!(dedup(items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty() {
        assert!(dedup(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_exact_equality() {
        assert_eq!(dedup(["A", "a", " a", "a"]), ["A", "a", " a"]);
    }
}
