use std::collections::HashSet;

use regex::Regex;

/// Best-effort match of a category name against extracted hint keys.
///
/// Ordered chain of independent matchers, each returning `None` rather than
/// failing: case-insensitive exact, case-insensitive substring in either
/// direction, then maximum word overlap. Only overlap scores above zero
/// qualify.
pub fn best_match_key<'a>(category_name: &str, keys: &[&'a str]) -> Option<&'a str> {
    let needle = category_name.to_lowercase();
    exact_match(&needle, keys)
        .or_else(|| substring_match(&needle, keys))
        .or_else(|| word_overlap_match(&needle, keys))
}

fn exact_match<'a>(needle: &str, keys: &[&'a str]) -> Option<&'a str> {
    keys.iter().find(|key| key.to_lowercase() == needle).copied()
}

fn substring_match<'a>(needle: &str, keys: &[&'a str]) -> Option<&'a str> {
    keys.iter()
        .find(|key| {
            let lowered = key.to_lowercase();
            lowered.contains(needle) || needle.contains(&lowered)
        })
        .copied()
}

fn word_overlap_match<'a>(needle: &str, keys: &[&'a str]) -> Option<&'a str> {
    let needle_words = words(needle)?;

    let mut best: Option<&str> = None;
    let mut best_score = 0usize;
    for key in keys {
        let Some(key_words) = words(&key.to_lowercase()) else {
            continue;
        };
        let score = needle_words.intersection(&key_words).count();
        if score > best_score {
            best_score = score;
            best = Some(key);
        }
    }
    best
}

fn words(value: &str) -> Option<HashSet<String>> {
    let pattern = Regex::new(r"\w+").ok()?;
    Some(
        pattern
            .find_iter(value)
            .map(|word| word.as_str().to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::best_match_key;

    #[test]
    fn exact_match_wins_regardless_of_case() {
        let keys = ["Transport", "groceries"];
        assert_eq!(best_match_key("Groceries", &keys), Some("groceries"));
    }

    #[test]
    fn substring_match_works_in_both_directions() {
        let keys = ["Food & Drink"];
        assert_eq!(best_match_key("Food", &keys), Some("Food & Drink"));

        let keys = ["Insurance"];
        assert_eq!(best_match_key("Car Insurance", &keys), Some("Insurance"));
    }

    #[test]
    fn word_overlap_picks_highest_scoring_key() {
        let keys = ["Home & Garden", "Car & Travel"];
        assert_eq!(best_match_key("Car Repairs", &keys), Some("Car & Travel"));
    }

    #[test]
    fn zero_overlap_is_no_match() {
        let keys = ["Pets", "Utilities"];
        assert_eq!(best_match_key("Movies", &keys), None);
    }

    #[test]
    fn exact_beats_substring_and_overlap() {
        let keys = ["Food & Drink", "Food"];
        assert_eq!(best_match_key("food", &keys), Some("Food"));
    }
}
