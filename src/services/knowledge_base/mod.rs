//! Canned destination data for the offline itinerary generator.
//!
//! Only Barcelona and Paris have their own tables; every other city resolves to
//! Barcelona through [`KnowledgeBase::for_city`].

use crate::models::trip::{BudgetTier, City};

mod barcelona;
mod paris;

/// One value per budget tier.
#[derive(Debug, Clone, Copy)]
pub struct Tiered<T> {
    pub luxury: T,
    pub moderate: T,
    pub budget: T,
}

impl<T: Copy> Tiered<T> {
    pub const fn flat(value: T) -> Self {
        Self {
            luxury: value,
            moderate: value,
            budget: value,
        }
    }

    pub fn pick(&self, tier: BudgetTier) -> T {
        match tier {
            BudgetTier::Luxury => self.luxury,
            BudgetTier::Moderate => self.moderate,
            BudgetTier::Budget => self.budget,
        }
    }
}

#[derive(Debug)]
pub struct CannedActivity {
    pub title: &'static str,
    pub activity_type: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
}

#[derive(Debug)]
pub struct CannedFlight {
    pub airline: &'static str,
    pub departure_time: &'static str,
    pub arrival_time: &'static str,
    pub duration: &'static str,
    pub stops: u32,
    pub price: Tiered<&'static str>,
}

#[derive(Debug)]
pub struct CannedHotel {
    pub name: Tiered<&'static str>,
    pub location: Tiered<&'static str>,
    pub price: Tiered<&'static str>,
    pub rating: Tiered<f32>,
    pub image: &'static str,
}

#[derive(Debug)]
pub struct CannedRestaurant {
    pub name: &'static str,
    pub cuisine: &'static str,
    pub location: &'static str,
    pub price_range: Tiered<&'static str>,
    pub rating: f32,
    pub image: &'static str,
}

#[derive(Debug)]
pub struct CannedAttraction {
    pub name: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
    pub image: &'static str,
}

/// Summary endings per focus; each follows "A {n}-day ".
#[derive(Debug)]
pub struct FocusSummaries {
    pub general: &'static str,
    pub food: &'static str,
    pub culture: &'static str,
    pub architecture: &'static str,
}

#[derive(Debug)]
pub struct CityData {
    pub name: &'static str,
    /// Verb used in middle-day titles, e.g. "Exploring Barcelona Day 2".
    pub day_title_verb: &'static str,
    pub summaries: FocusSummaries,
    pub activities: &'static [CannedActivity],
    pub breakfasts: &'static [CannedActivity],
    pub lunches: &'static [CannedActivity],
    pub dinners: &'static [CannedActivity],
    pub flights: &'static [CannedFlight],
    pub hotels: &'static [CannedHotel],
    pub restaurants: &'static [CannedRestaurant],
    pub attractions: &'static [CannedAttraction],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeBase {
    Barcelona,
    Paris,
}

impl KnowledgeBase {
    pub fn for_city(city: City) -> Self {
        match city {
            City::Paris => KnowledgeBase::Paris,
            _ => KnowledgeBase::Barcelona,
        }
    }

    pub fn data(&self) -> &'static CityData {
        match self {
            KnowledgeBase::Barcelona => &barcelona::BARCELONA,
            KnowledgeBase::Paris => &paris::PARIS,
        }
    }
}
