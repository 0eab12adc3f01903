use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::itinerary::Itinerary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSource {
    Mock,
    Model,
}

/// A generated itinerary together with the request it answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryEnvelope {
    pub session_id: String,
    pub request_id: u64,
    pub source: ProviderSource,
    pub generated_at: DateTime<Utc>,
    pub itinerary: Itinerary,
}

/// Body returned when the query was blank: nothing to plan, nothing went wrong.
#[derive(Debug, Serialize)]
pub struct EmptyResult {
    pub status: &'static str,
    pub itinerary: Option<Itinerary>,
}

impl EmptyResult {
    pub fn new() -> Self {
        Self {
            status: "empty",
            itinerary: None,
        }
    }
}

impl Default for EmptyResult {
    fn default() -> Self {
        Self::new()
    }
}

/// User-facing notice, the JSON shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub retryable: bool,
}

#[derive(Debug, Deserialize)]
pub struct RegenerateRequest {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
}
