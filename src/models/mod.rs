pub mod envelope;
pub mod itinerary;
pub mod query;
pub mod trip;
