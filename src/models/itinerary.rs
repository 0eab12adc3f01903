use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_TAGS: usize = 5;

/// `[latitude, longitude]`, serialized as a two element array.
pub type Coordinates = (f64, f64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub title: String,
    pub destination: String,
    pub summary: String,
    pub pace: String,
    pub tags: Vec<String>,
    pub days: Vec<Day>,
    pub flights: Vec<Flight>,
    pub hotels: Vec<Hotel>,
    pub restaurants: Vec<Restaurant>,
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub title: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub title: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub airline: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub stops: u32,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub price: String,
    pub rating: f32,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub price_range: String,
    pub rating: f32,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub category: String,
    pub location: String,
    pub duration: String,
    pub price: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Broad grouping of the free-form activity `type`, used by clients to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Dining,
    Museum,
    Sightseeing,
    Beach,
    Transport,
    Flight,
    Lodging,
    Show,
    Other,
}

impl ActivityKind {
    pub fn from_type(activity_type: &str) -> Self {
        match activity_type.trim().to_lowercase().as_str() {
            "breakfast" | "coffee" | "lunch" | "dinner" => ActivityKind::Dining,
            "museum" | "gallery" => ActivityKind::Museum,
            "sightseeing" => ActivityKind::Sightseeing,
            "beach" | "relax" => ActivityKind::Beach,
            "transport" | "transfer" => ActivityKind::Transport,
            "flight" => ActivityKind::Flight,
            "hotel" | "check-in" | "check-out" => ActivityKind::Lodging,
            "show" | "performance" => ActivityKind::Show,
            _ => ActivityKind::Other,
        }
    }
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        ActivityKind::from_type(&self.activity_type)
    }
}

/// Non-fatal problems found in an itinerary's shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeWarning {
    RatingOutOfRange { item: String, rating: f32 },
    EmptyDay { index: usize },
    CoordinatesOutOfRange { item: String, coordinates: Coordinates },
}

impl std::fmt::Display for ShapeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeWarning::RatingOutOfRange { item, rating } => {
                write!(f, "rating {} for '{}' is outside 0-5", rating, item)
            }
            ShapeWarning::EmptyDay { index } => write!(f, "day {} has no activities", index + 1),
            ShapeWarning::CoordinatesOutOfRange { item, coordinates } => write!(
                f,
                "coordinates ({}, {}) for '{}' are not a valid lat/lng",
                coordinates.0, coordinates.1, item
            ),
        }
    }
}

fn rating_in_range(rating: f32) -> bool {
    (0.0..=5.0).contains(&rating)
}

fn coordinates_in_range((lat, lng): Coordinates) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

impl Itinerary {
    /// Returns a copy with tags deduplicated (case-insensitive, first spelling kept)
    /// and capped at [`MAX_TAGS`].
    pub fn normalized(mut self) -> Self {
        let mut seen = HashSet::new();
        self.tags = self
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty() && seen.insert(tag.to_lowercase()))
            .take(MAX_TAGS)
            .collect();
        self
    }

    pub fn validate(&self) -> Vec<ShapeWarning> {
        let mut warnings = Vec::new();

        for (index, day) in self.days.iter().enumerate() {
            if day.activities.is_empty() {
                warnings.push(ShapeWarning::EmptyDay { index });
            }
            for activity in &day.activities {
                if let Some(coordinates) = activity.coordinates {
                    if !coordinates_in_range(coordinates) {
                        warnings.push(ShapeWarning::CoordinatesOutOfRange {
                            item: activity.title.clone(),
                            coordinates,
                        });
                    }
                }
            }
        }

        for hotel in &self.hotels {
            if !rating_in_range(hotel.rating) {
                warnings.push(ShapeWarning::RatingOutOfRange {
                    item: hotel.name.clone(),
                    rating: hotel.rating,
                });
            }
        }

        for restaurant in &self.restaurants {
            if !rating_in_range(restaurant.rating) {
                warnings.push(ShapeWarning::RatingOutOfRange {
                    item: restaurant.name.clone(),
                    rating: restaurant.rating,
                });
            }
            if let Some(coordinates) = restaurant.coordinates {
                if !coordinates_in_range(coordinates) {
                    warnings.push(ShapeWarning::CoordinatesOutOfRange {
                        item: restaurant.name.clone(),
                        coordinates,
                    });
                }
            }
        }

        for attraction in &self.attractions {
            if let Some(coordinates) = attraction.coordinates {
                if !coordinates_in_range(coordinates) {
                    warnings.push(ShapeWarning::CoordinatesOutOfRange {
                        item: attraction.name.clone(),
                        coordinates,
                    });
                }
            }
        }

        warnings
    }
}
