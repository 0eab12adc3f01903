use serde::Deserialize;

/// A trip request that is known to contain something to plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    raw: String,
    normalized: String,
    regenerate: bool,
}

impl TripQuery {
    /// Trims the input; blank input is "no query" and yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            raw: trimmed.to_string(),
            normalized: trimmed.to_lowercase(),
            regenerate: false,
        })
    }

    pub fn regenerated(mut self) -> Self {
        self.regenerate = true;
        self
    }

    /// The trimmed text as the traveller typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lower-case form used for keyword matching.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_regenerate(&self) -> bool {
        self.regenerate
    }
}

/*
    ?q=...&session=...
*/
#[derive(Debug, Deserialize)]
pub struct ItineraryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_no_query() {
        assert_eq!(TripQuery::parse(""), None);
        assert_eq!(TripQuery::parse("   \t\n"), None);
    }

    #[test]
    fn test_trims_and_lowercases() {
        let query = TripQuery::parse("  3-Day trip to PARIS ").unwrap();
        assert_eq!(query.raw(), "3-Day trip to PARIS");
        assert_eq!(query.normalized(), "3-day trip to paris");
        assert!(!query.is_regenerate());
        assert!(query.regenerated().is_regenerate());
    }
}
