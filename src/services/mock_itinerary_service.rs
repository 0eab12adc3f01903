use async_trait::async_trait;
use log::debug;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::ItineraryError;
use crate::models::envelope::ProviderSource;
use crate::models::itinerary::{Activity, Attraction, Day, Flight, Hotel, Itinerary, Restaurant};
use crate::models::query::TripQuery;
use crate::models::trip::{BudgetTier, City, TripAttributes};
use crate::services::attribute_extractor::AttributeExtractor;
use crate::services::itinerary_provider::ItineraryProvider;
use crate::services::knowledge_base::{CannedActivity, CityData, KnowledgeBase};

const FOOD_KEYWORDS: [&str; 5] = ["food", "cuisine", "dining", "restaurant", "eat"];
const CULTURE_KEYWORDS: [&str; 4] = ["museum", "art", "history", "culture"];
const ARCHITECTURE_KEYWORDS: [&str; 1] = ["architecture"];

const BREAKFAST_TIME: &str = "9:00 AM";
const MORNING_TIME: &str = "10:00 AM";
const LUNCH_TIME: &str = "1:00 PM";
const AFTERNOON_TIME: &str = "3:00 PM";
const DINNER_TIME: &str = "8:00 PM";

/// Which title and summary an itinerary gets, by interest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Food,
    Culture,
    Architecture,
    General,
}

impl Focus {
    pub fn from_interests(interests: &[&str]) -> Self {
        let has = |keywords: &[&str]| keywords.iter().any(|k| interests.contains(k));

        if has(&FOOD_KEYWORDS[..]) {
            Focus::Food
        } else if has(&CULTURE_KEYWORDS[..]) {
            Focus::Culture
        } else if has(&ARCHITECTURE_KEYWORDS[..]) {
            Focus::Architecture
        } else {
            Focus::General
        }
    }
}

/// Offline generator backed by the canned knowledge base.
pub struct MockItineraryService {
    extractor: AttributeExtractor,
    delay: Duration,
}

impl MockItineraryService {
    pub fn new(extractor: AttributeExtractor, delay: Duration) -> Self {
        Self { extractor, delay }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(AttributeExtractor::new(config.max_trip_days), config.mock_delay)
    }
}

impl Default for MockItineraryService {
    fn default() -> Self {
        Self::new(AttributeExtractor::default(), Duration::ZERO)
    }
}

#[async_trait]
impl ItineraryProvider for MockItineraryService {
    fn source(&self) -> ProviderSource {
        ProviderSource::Mock
    }

    async fn generate(&self, query: &TripQuery) -> Result<Itinerary, ItineraryError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let attributes = self.extractor.extract(query);
        debug!("Extracted trip attributes: {:?}", attributes);

        Ok(generate_mock_itinerary(&attributes))
    }
}

/// Assemble the canned itinerary, then stamp the extracted destination, pace and tags on it.
pub fn generate_mock_itinerary(attributes: &TripAttributes) -> Itinerary {
    let mut itinerary = assemble_itinerary(
        attributes.destination,
        attributes.days,
        attributes.budget,
        &attributes.interests,
    );

    itinerary.destination = attributes.destination.display_name();
    itinerary.pace = attributes.pace().label().to_string();
    itinerary.tags = attributes.tags();
    itinerary
}

/// Build an itinerary from the knowledge base of `destination`.
///
/// Destination, pace and tags carry the knowledge base's placeholders; see
/// [`generate_mock_itinerary`]. Restaurants and attractions are the full canned
/// lists regardless of interests. The result depends only on the arguments.
pub fn assemble_itinerary(
    destination: City,
    days: u32,
    budget: BudgetTier,
    interests: &[&str],
) -> Itinerary {
    let data = KnowledgeBase::for_city(destination).data();
    let (title, summary) = title_and_summary(data, days, Focus::from_interests(interests));

    Itinerary {
        title,
        destination: data.name.to_string(),
        summary,
        pace: "Balanced".to_string(),
        tags: Vec::new(),
        days: (0..days as usize).map(|i| build_day(data, i, days as usize)).collect(),
        flights: data
            .flights
            .iter()
            .map(|flight| Flight {
                airline: flight.airline.to_string(),
                departure_time: flight.departure_time.to_string(),
                arrival_time: flight.arrival_time.to_string(),
                duration: flight.duration.to_string(),
                stops: flight.stops,
                price: flight.price.pick(budget).to_string(),
            })
            .collect(),
        hotels: data
            .hotels
            .iter()
            .map(|hotel| Hotel {
                name: hotel.name.pick(budget).to_string(),
                location: hotel.location.pick(budget).to_string(),
                price: hotel.price.pick(budget).to_string(),
                rating: hotel.rating.pick(budget),
                image: hotel.image.to_string(),
            })
            .collect(),
        restaurants: data
            .restaurants
            .iter()
            .map(|restaurant| Restaurant {
                name: restaurant.name.to_string(),
                cuisine: restaurant.cuisine.to_string(),
                location: restaurant.location.to_string(),
                price_range: restaurant.price_range.pick(budget).to_string(),
                rating: restaurant.rating,
                image: restaurant.image.to_string(),
                coordinates: None,
            })
            .collect(),
        attractions: data
            .attractions
            .iter()
            .map(|attraction| Attraction {
                name: attraction.name.to_string(),
                category: attraction.category.to_string(),
                location: attraction.location.to_string(),
                duration: attraction.duration.to_string(),
                price: attraction.price.to_string(),
                image: attraction.image.to_string(),
                coordinates: None,
            })
            .collect(),
    }
}

fn title_and_summary(data: &CityData, days: u32, focus: Focus) -> (String, String) {
    let city = data.name;
    let (title, ending) = match focus {
        Focus::Food => (
            format!("{} Food Tour: {} Days of Culinary Delights", city, days),
            data.summaries.food,
        ),
        Focus::Culture => (
            format!("Cultural Immersion: {} Days in {}", days, city),
            data.summaries.culture,
        ),
        Focus::Architecture => (
            format!("{}'s Architectural Wonders: {}-Day Tour", city, days),
            data.summaries.architecture,
        ),
        Focus::General => (
            format!("Exploring {} Days in {}", days, city),
            data.summaries.general,
        ),
    };
    (title, format!("A {}-day {}", days, ending))
}

/// Pool indices of the morning and afternoon activities for `day_index`.
///
/// Consecutive entries of one shared pool, wrapping around. With a single-entry
/// pool both slots are the same activity.
pub fn activity_slots(day_index: usize, pool_len: usize) -> (usize, usize) {
    ((day_index * 2) % pool_len, (day_index * 2 + 1) % pool_len)
}

pub fn day_title(data: &CityData, day_index: usize, total_days: usize) -> String {
    if day_index == 0 {
        "Arrival & City Introduction".to_string()
    } else if day_index == total_days - 1 {
        "Final Explorations".to_string()
    } else {
        format!("{} {} Day {}", data.day_title_verb, data.name, day_index + 1)
    }
}

fn build_day(data: &CityData, i: usize, total_days: usize) -> Day {
    let (morning, afternoon) = activity_slots(i, data.activities.len());

    Day {
        title: day_title(data, i, total_days),
        activities: vec![
            scheduled(BREAKFAST_TIME, &data.breakfasts[i % data.breakfasts.len()]),
            scheduled(MORNING_TIME, &data.activities[morning]),
            scheduled(LUNCH_TIME, &data.lunches[i % data.lunches.len()]),
            scheduled(AFTERNOON_TIME, &data.activities[afternoon]),
            scheduled(DINNER_TIME, &data.dinners[i % data.dinners.len()]),
        ],
    }
}

fn scheduled(time: &str, canned: &CannedActivity) -> Activity {
    Activity {
        time: time.to_string(),
        title: canned.title.to_string(),
        activity_type: canned.activity_type.to_string(),
        description: canned.description.to_string(),
        location: Some(canned.location.to_string()),
        duration: Some(canned.duration.to_string()),
        coordinates: None,
    }
}
