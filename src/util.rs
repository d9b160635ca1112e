// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Small sequence helpers.

/// Remove the element at `index`, shifting the tail left so the remaining
/// elements keep their order.
///
/// An index past the end leaves the sequence untouched and returns `None`.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    (index < items.len()).then(|| items.remove(index))
}

/// Remove every element matching `pred`, keeping the order of the rest.
///
/// Returns the number of removed elements.
pub fn remove_where<T>(items: &mut Vec<T>, mut pred: impl FnMut(&T) -> bool) -> usize {
    let before = items.len();
    items.retain(|item| !pred(item));
    before - items.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_first() {
        let mut letters = vec!['م', 'ح'];
        assert_eq!(remove_at(&mut letters, 0), Some('م'));
        assert_eq!(letters, vec!['ح']);
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut letters = vec!['م', 'ا', 'د', 'ة', 'ن'];
        assert_eq!(remove_at(&mut letters, 3), Some('ة'));
        assert_eq!(letters, vec!['م', 'ا', 'د', 'ن']);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut letters: Vec<char> = Vec::new();
        assert_eq!(remove_at(&mut letters, 0), None);
        assert!(letters.is_empty());
    }

    #[test]
    fn test_remove_past_end() {
        let mut letters = vec!['أ', 'ب'];
        assert_eq!(remove_at(&mut letters, 10), None);
        assert_eq!(letters, vec!['أ', 'ب']);
    }

    #[test]
    fn test_remove_where() {
        let mut letters: Vec<char> = "بَريـد".chars().collect();
        let removed = remove_where(&mut letters, |c| matches!(c, '\u{064E}' | '\u{0640}'));

        assert_eq!(removed, 2);
        assert_eq!(letters.into_iter().collect::<String>(), "بريد");
    }
}
