use regex::Regex;
use std::sync::LazyLock;

use crate::config::DEFAULT_MAX_TRIP_DAYS;
use crate::models::query::TripQuery;
use crate::models::trip::{BudgetTier, City, TripAttributes};

pub const DEFAULT_TRIP_DAYS: u32 = 3;

pub const INTEREST_KEYWORDS: [&str; 19] = [
    "food",
    "cuisine",
    "dining",
    "restaurant",
    "eat",
    "museum",
    "art",
    "history",
    "culture",
    "beach",
    "nature",
    "outdoor",
    "hiking",
    "shopping",
    "luxury",
    "budget",
    "family",
    "architecture",
    "photography",
];

const LUXURY_KEYWORDS: [&str; 3] = ["luxury", "high-end", "expensive"];
const BUDGET_KEYWORDS: [&str; 3] = ["budget", "cheap", "affordable"];

static DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[ -]day").expect("duration pattern is valid"));

/// Pulls destination, length, interests and budget out of a free-text query.
#[derive(Debug, Clone)]
pub struct AttributeExtractor {
    max_trip_days: u32,
}

impl Default for AttributeExtractor {
    fn default() -> Self {
        Self {
            max_trip_days: DEFAULT_MAX_TRIP_DAYS,
        }
    }
}

impl AttributeExtractor {
    pub fn new(max_trip_days: u32) -> Self {
        Self {
            max_trip_days: max_trip_days.max(1),
        }
    }

    pub fn extract(&self, query: &TripQuery) -> TripAttributes {
        let text = query.normalized();
        TripAttributes {
            destination: extract_destination(text),
            days: self.extract_days(text),
            interests: extract_interests(text),
            budget: extract_budget(text),
        }
    }

    /// Parsed day count clamped to `[1, max_trip_days]`.
    pub fn extract_days(&self, text: &str) -> u32 {
        let days = extract_raw_days(text).unwrap_or(DEFAULT_TRIP_DAYS);
        days.clamp(1, self.max_trip_days)
    }
}

/// First city in list order wins, regardless of where it appears in the text.
pub fn extract_destination(text: &str) -> City {
    City::ALL
        .iter()
        .copied()
        .find(|city| text.contains(city.keyword()))
        .unwrap_or(City::DEFAULT)
}

/// The number in the first "<n> day" / "<n>-day" match, unclamped.
/// Only ASCII digits count; numbers too large for `u32` saturate.
pub fn extract_raw_days(text: &str) -> Option<u32> {
    let digits = DURATION_PATTERN.captures(text)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u32::MAX))
}

pub fn extract_interests(text: &str) -> Vec<&'static str> {
    INTEREST_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| text.contains(keyword))
        .collect()
}

pub fn extract_budget(text: &str) -> BudgetTier {
    if LUXURY_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        BudgetTier::Luxury
    } else if BUDGET_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        BudgetTier::Budget
    } else {
        BudgetTier::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn extract(raw: &str) -> TripAttributes {
        AttributeExtractor::default().extract(&TripQuery::parse(raw).unwrap())
    }

    #[test]
    fn test_destination_defaults_to_barcelona() {
        assert_eq!(extract("somewhere warm").destination, City::Barcelona);
    }

    #[test]
    fn test_destination_uses_list_order_not_position() {
        // "london" appears first in the text but "paris" is earlier in the list
        assert_eq!(extract("London then Paris").destination, City::Paris);
    }

    #[test]
    fn test_multi_word_city() {
        assert_eq!(extract("A week in NEW YORK").destination, City::NewYork);
    }

    #[test]
    fn test_duration_patterns() {
        assert_eq!(extract("5-day trip to Rome").days, 5);
        assert_eq!(extract("5 day trip to Rome").days, 5);
        assert_eq!(extract("trip to Rome").days, DEFAULT_TRIP_DAYS);
        // "days" still contains "day"
        assert_eq!(extract("10 days in Tokyo").days, 10);
        // first match wins
        assert_eq!(extract("2-day stop then a 4-day leg").days, 2);
    }

    #[test]
    fn test_duration_is_clamped() {
        assert_eq!(extract("500-day trip").days, DEFAULT_MAX_TRIP_DAYS);
        assert_eq!(extract("0-day trip").days, 1);
        assert_eq!(AttributeExtractor::new(7).extract_days("a 12 day trip"), 7);
        assert_eq!(extract_raw_days("99999999999-day"), Some(u32::MAX));
    }

    #[test]
    fn test_non_ascii_digits_are_not_durations() {
        assert_eq!(extract_raw_days("a \u{665}-day trip"), None);
        assert_eq!(extract("a \u{665}-day trip to Rome").days, DEFAULT_TRIP_DAYS);
        assert_eq!(extract("a \u{ff15} day trip").days, DEFAULT_TRIP_DAYS);
    }

    #[test]
    fn test_interests_follow_vocabulary_order() {
        let attributes = extract("Photography, architecture and great food");
        assert_eq!(attributes.interests, vec!["food", "architecture", "photography"]);
    }

    #[test]
    fn test_budget_tiers() {
        assert_eq!(extract("cheap eats").budget, BudgetTier::Budget);
        assert_eq!(extract("a high-end escape").budget, BudgetTier::Luxury);
        assert_eq!(extract("just a trip").budget, BudgetTier::Moderate);
        assert_eq!(
            extract("luxury hotel on an affordable budget").budget,
            BudgetTier::Luxury
        );
    }

    #[test]
    fn test_weekend_paris_scenario() {
        let attributes = extract("Weekend getaway to Paris, budget-friendly, love museums");
        assert_eq!(attributes.destination, City::Paris);
        assert_eq!(attributes.days, 3);
        assert_eq!(attributes.budget, BudgetTier::Budget);
        assert!(attributes.interests.contains(&"museum"));
        assert!(attributes.interests.contains(&"budget"));
        assert_eq!(attributes.tags(), vec!["Museum", "Budget"]);
        assert_eq!(attributes.pace().label(), "Balanced");
    }

    #[test]
    fn test_tag_cap_with_many_keywords() {
        let attributes =
            extract("food cuisine dining museum art history beach nature hiking in Kyoto");
        let tags = attributes.tags();
        assert_eq!(tags.len(), 5);
        let mut unique = tags.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), tags.len());
    }

    proptest! {
        #[test]
        fn prop_single_city_is_found(
            idx in 0usize..City::ALL.len(),
            prefix in "[0-9 ,.!]{0,12}",
            suffix in "[0-9 ,.!]{0,12}",
            upper in any::<bool>(),
        ) {
            let city = City::ALL[idx];
            let name = if upper { city.keyword().to_uppercase() } else { city.keyword().to_string() };
            let raw = format!("trip{}{}{}", prefix, name, suffix);
            prop_assert_eq!(extract(&raw).destination, city);
        }

        #[test]
        fn prop_explicit_duration_is_parsed(days in 1u32..=30, hyphen in any::<bool>()) {
            let sep = if hyphen { "-" } else { " " };
            prop_assert_eq!(extract(&format!("a {}{}day trip", days, sep)).days, days);
        }

        #[test]
        fn prop_tags_capped_and_unique(mask in proptest::collection::vec(any::<bool>(), INTEREST_KEYWORDS.len())) {
            let words: Vec<&str> = INTEREST_KEYWORDS
                .iter()
                .zip(mask.iter())
                .filter(|(_, on)| **on)
                .map(|(word, _)| *word)
                .collect();
            let raw = format!("trip {}", words.join(" "));
            let tags = extract(&raw).tags();
            prop_assert!(tags.len() <= 5);
            let mut sorted = tags.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), tags.len());
        }
    }
}
