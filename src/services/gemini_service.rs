//! Itinerary generation through Google's Gemini `generateContent` REST API.
//!
//! The model is asked for a JSON object matching the itinerary shape. The
//! reply is free text, so the span from the first `{` to the last `}` is cut
//! out and decoded; anything that does not decode is a parse error.

use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::ItineraryError;
use crate::models::envelope::ProviderSource;
use crate::models::itinerary::Itinerary;
use crate::models::query::TripQuery;
use crate::services::itinerary_provider::ItineraryProvider;

pub const REGENERATE_MARKER: &str = " (regenerated)";

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "safetySettings")]
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

impl GenerateContentRequest {
    pub fn new(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            safety_settings: HARM_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category: category.to_string(),
                    threshold: "BLOCK_NONE".to_string(),
                })
                .collect(),
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, or why there is none.
    pub fn into_text(self) -> Result<String, ItineraryError> {
        let candidate = match self.candidates.into_iter().next() {
            Some(candidate) => candidate,
            None => {
                let message = match self.prompt_feedback.and_then(|f| f.block_reason) {
                    Some(reason) => format!("Prompt was blocked: {}", reason),
                    None => "Response contained no candidates".to_string(),
                };
                return Err(ItineraryError::Service {
                    status: 200,
                    message,
                });
            }
        };

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            return Err(ItineraryError::Service {
                status: 200,
                message: format!(
                    "Candidate contained no text (finish reason: {})",
                    candidate.finish_reason.as_deref().unwrap_or("unknown")
                ),
            });
        }

        Ok(text)
    }
}

/// The greedy span from the first `{` to the last `}`, if there is one.
pub fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Decode the itinerary embedded in a model reply. No repair is attempted.
pub fn parse_itinerary(text: &str) -> Result<Itinerary, ItineraryError> {
    let block = extract_json_block(text).ok_or_else(|| {
        ItineraryError::Parse("response did not contain a JSON object".to_string())
    })?;

    serde_json::from_str(block)
        .map_err(|e| ItineraryError::Parse(format!("Failed to decode itinerary: {}", e)))
}

pub fn build_prompt(query: &str) -> String {
    format!(
        r#"
Generate a detailed travel itinerary based on the following query: "{query}"

The response MUST be a valid JSON object adhering to the following TypeScript type structure:

```typescript
export type Activity = {{
  time: string; // e.g., "9:00 AM", "Afternoon"
  title: string;
  type: string; // e.g., "Dining", "Activity", "Sightseeing", "Free Time"
  description: string;
  location?: string;
  duration?: string; // e.g., "2 hours", "All day"
  coordinates?: [number, number]; // [latitude, longitude]
}};

export type Day = {{
  title: string; // e.g., "Day 1: Arrival and City Exploration"
  activities: Activity[];
}};

export type Flight = {{
  airline: string;
  departureTime: string;
  arrivalTime: string;
  duration: string;
  stops: number;
  price: string; // e.g., "$500 - $700 USD"
}};

export type Hotel = {{
  name: string;
  location: string;
  price: string; // e.g., "$150 - $250 USD per night"
  rating: number; // e.g., 4.5
  image: string; // URL to an image (can be a placeholder if real image not available)
}};

export type Restaurant = {{
  name: string;
  cuisine: string;
  location: string;
  priceRange: string; // e.g., "$ - $$", "$$$ - $$$$"
  rating: number;
  image: string; // URL to an image
  coordinates?: [number, number];
}};

export type Attraction = {{
  name: string;
  category: string; // e.g., "Museum", "Landmark", "Park"
  location: string;
  duration: string; // e.g., "1-2 hours"
  price: string; // e.g., "Free", "$20 USD"
  image: string; // URL to an image
  coordinates?: [number, number];
}};

export type ItineraryType = {{
  title: string; // e.g., "Barcelona Adventure: Architecture & Cuisine"
  destination: string; // The main city/country
  summary: string; // A short summary of the trip
  pace: string; // e.g., "Relaxed", "Moderate", "Fast-paced"
  tags: string[]; // e.g., ["Culture", "Foodie", "Adventure"]
  days: Day[];
  flights: Flight[]; // Provide 1-2 flight suggestions
  hotels: Hotel[]; // Provide 1-2 hotel suggestions
  restaurants: Restaurant[]; // Provide 3-5 restaurant suggestions
  attractions: Attraction[]; // Provide 3-5 key attraction suggestions
}};
```

Important Notes:
- Ensure all string fields are populated. Use placeholder text like "Details to be confirmed" if specific information is not generated.
- For `image` fields, provide valid image URLs if possible. If not, use a placeholder like "https://via.placeholder.com/300x200.png?text=Image+Not+Available".
- For `coordinates`, provide actual latitude and longitude if easily available for locations; otherwise, omit the field or use [0,0] as a placeholder.
- Ensure the JSON is well-formed and complete according to the types.
- Provide a diverse set of activities, and try to make the itinerary engaging.
- Price fields should be strings and include currency if applicable (e.g., "$100 USD", "€50").
- Number of stops for flights should be a number.
- Ratings should be numbers (e.g., 4, 4.5).
- If the query is too vague or nonsensical, return a valid JSON with a title like "Query Unclear" and an appropriate summary, with empty arrays for other fields.
"#,
        query = query
    )
}

/// `Url::join` replaces the last segment unless the path ends in `/`, which
/// would drop the prefix of a proxied base like `https://proxy/gemini`.
fn with_trailing_slash(mut url: url::Url) -> url::Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[derive(Clone)]
pub struct GeminiItineraryService {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: url::Url,
}

impl GeminiItineraryService {
    pub fn new(config: &GeminiConfig) -> Result<Self, ItineraryError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        if config.api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; itinerary requests will fail until it is configured");
        }

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: with_trailing_slash(config.base_url.clone()),
        })
    }

    pub fn endpoint(&self) -> Result<url::Url, ItineraryError> {
        self.base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))
            .map_err(|e| ItineraryError::Configuration(format!("Invalid Gemini endpoint: {}", e)))
    }

    async fn execute(&self, api_key: &str, prompt: String) -> Result<String, ItineraryError> {
        let request = GenerateContentRequest::new(prompt);

        let response = self
            .client
            .post(self.endpoint()?)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ItineraryError::Service {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(|e| ItineraryError::Service {
                status: status.as_u16(),
                message: format!("Unexpected response shape: {}", e),
            })?;

        body.into_text()
    }
}

#[async_trait]
impl ItineraryProvider for GeminiItineraryService {
    fn source(&self) -> ProviderSource {
        ProviderSource::Model
    }

    async fn generate(&self, query: &TripQuery) -> Result<Itinerary, ItineraryError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ItineraryError::Configuration("Gemini API key is not configured (GEMINI_API_KEY)".to_string())
        })?;

        let current_query = if query.is_regenerate() {
            format!("{}{}", query.raw(), REGENERATE_MARKER)
        } else {
            query.raw().to_string()
        };
        let kind = if query.is_regenerate() { "regenerate" } else { "initial" };

        info!("Sending prompt to Gemini ({}): {}", kind, current_query);
        let text = self.execute(api_key, build_prompt(&current_query)).await?;
        debug!("Gemini response text: {}", text);

        let itinerary = match parse_itinerary(&text) {
            Ok(itinerary) => itinerary.normalized(),
            Err(e) => {
                error!("Gemini reply for '{}' could not be decoded: {}", current_query, e);
                return Err(e);
            }
        };

        for warning in itinerary.validate() {
            warn!("Generated itinerary for '{}': {}", current_query, warning);
        }

        Ok(itinerary)
    }
}
