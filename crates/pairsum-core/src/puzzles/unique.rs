use std::collections::HashMap;

fn occurrences(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::with_capacity(text.len());
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// First character of `text` that occurs exactly once.
pub fn first_unique_char(text: &str) -> Option<char> {
    let counts = occurrences(text);
    text.chars().find(|ch| counts.get(ch) == Some(&1))
}

/// Every character of `text` that occurs exactly once, in order of appearance.
pub fn unique_chars(text: &str) -> Vec<char> {
    let counts = occurrences(text);
    text.chars().filter(|ch| counts.get(ch) == Some(&1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_character_seen_once() {
        assert_eq!(first_unique_char("some something text"), Some('h'));
        assert_eq!(first_unique_char("abcbd"), Some('a'));
        assert_eq!(first_unique_char("aabcc"), Some('b'));
    }

    #[test]
    fn returns_none_when_every_character_repeats() {
        assert_eq!(first_unique_char("aabbcc"), None);
        assert_eq!(first_unique_char(""), None);
    }

    #[test]
    fn collects_all_unique_characters_in_order() {
        assert_eq!(unique_chars("aadeefgg"), vec!['d', 'f']);
        assert_eq!(unique_chars("abcbd"), vec!['a', 'c', 'd']);
        assert!(unique_chars("xxyy").is_empty());
    }

    #[test]
    fn works_on_multibyte_characters() {
        assert_eq!(first_unique_char("ééàü"), Some('à'));
        assert_eq!(unique_chars("ééàü"), vec!['à', 'ü']);
    }

    #[test]
    fn first_unique_is_head_of_all_unique() {
        for text in ["", "a", "abcbd", "aadeefgg", "some something text", "zzz"] {
            assert_eq!(first_unique_char(text), unique_chars(text).first().copied());
        }
    }
}
