use strsim::jaro_winkler;

use crate::catalog::recipes::COMMON_DISHES;
use crate::planner::constants::{FUZZY_MATCH_LIMIT, FUZZY_MATCH_THRESHOLD};

/// Known dish name matching `input` ignoring case, if any.
pub fn exact_dish(input: &str) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    COMMON_DISHES
        .iter()
        .copied()
        .find(|d| d.to_lowercase() == needle)
}

/// Known dish names close to `input`, best match first.
pub fn suggest_dishes(input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(&'static str, f64)> = COMMON_DISHES
        .iter()
        .map(|d| (*d, jaro_winkler(&d.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .take(FUZZY_MATCH_LIMIT)
        .map(|(d, _)| d)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_dish_ignores_case() {
        assert_eq!(exact_dish("vada pav"), Some("Vada Pav"));
        assert_eq!(exact_dish("  SAMOSA "), Some("Samosa"));
        assert_eq!(exact_dish("Unicorn Stew"), None);
    }

    #[test]
    fn test_suggest_dishes_typo() {
        let suggestions = suggest_dishes("samosaa");
        assert_eq!(suggestions.first(), Some(&"Samosa"));

        let suggestions = suggest_dishes("pani puree");
        assert_eq!(suggestions.first(), Some(&"Pani Puri"));
    }

    #[test]
    fn test_suggest_dishes_nothing_close() {
        assert!(suggest_dishes("").is_empty());
        assert!(suggest_dishes("xyzzy qwerty").is_empty());
    }
}
