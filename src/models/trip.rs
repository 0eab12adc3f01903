use std::fmt;

/// Known destinations, in the priority order used when a query names several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Barcelona,
    Paris,
    Rome,
    Tokyo,
    NewYork,
    London,
    Amsterdam,
    Berlin,
    Kyoto,
    Bangkok,
}

impl City {
    pub const ALL: [City; 10] = [
        City::Barcelona,
        City::Paris,
        City::Rome,
        City::Tokyo,
        City::NewYork,
        City::London,
        City::Amsterdam,
        City::Berlin,
        City::Kyoto,
        City::Bangkok,
    ];

    pub const DEFAULT: City = City::Barcelona;

    /// Lower-case name matched against the normalized query.
    pub fn keyword(&self) -> &'static str {
        match self {
            City::Barcelona => "barcelona",
            City::Paris => "paris",
            City::Rome => "rome",
            City::Tokyo => "tokyo",
            City::NewYork => "new york",
            City::London => "london",
            City::Amsterdam => "amsterdam",
            City::Berlin => "berlin",
            City::Kyoto => "kyoto",
            City::Bangkok => "bangkok",
        }
    }

    /// The keyword title-cased per word, e.g. "New York".
    pub fn display_name(&self) -> String {
        self.keyword()
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BudgetTier {
    Luxury,
    #[default]
    Moderate,
    Budget,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Luxury => "luxury",
            BudgetTier::Moderate => "moderate",
            BudgetTier::Budget => "budget",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripPace {
    FastPaced,
    Balanced,
    Relaxed,
}

impl TripPace {
    /// Short trips are packed, week-long ones are not.
    pub fn for_days(days: u32) -> Self {
        if days <= 2 {
            TripPace::FastPaced
        } else if days >= 7 {
            TripPace::Relaxed
        } else {
            TripPace::Balanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripPace::FastPaced => "Fast-paced",
            TripPace::Balanced => "Balanced",
            TripPace::Relaxed => "Relaxed",
        }
    }
}

/// Everything the keyword extractor pulls out of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripAttributes {
    pub destination: City,
    pub days: u32,
    /// Matched vocabulary keywords, in vocabulary order.
    pub interests: Vec<&'static str>,
    pub budget: BudgetTier,
}

impl TripAttributes {
    pub fn pace(&self) -> TripPace {
        TripPace::for_days(self.days)
    }

    /// Interests followed by the budget tier, deduplicated, capitalized, at most five.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for word in self
            .interests
            .iter()
            .copied()
            .chain(std::iter::once(self.budget.as_str()))
        {
            let tag = capitalize(word);
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags.truncate(crate::models::itinerary::MAX_TAGS);
        tags
    }

    pub fn has_interest(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.interests.contains(keyword))
    }
}

/// Upper-cases the first character only.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
