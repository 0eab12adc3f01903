use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::config::{AppConfig, ProviderKind};
use crate::error::ItineraryError;
use crate::models::envelope::ProviderSource;
use crate::models::itinerary::Itinerary;
use crate::models::query::TripQuery;
use crate::services::gemini_service::GeminiItineraryService;
use crate::services::mock_itinerary_service::MockItineraryService;

/// Turns a trip query into a structured itinerary.
#[async_trait]
pub trait ItineraryProvider: Send + Sync {
    fn source(&self) -> ProviderSource;

    async fn generate(&self, query: &TripQuery) -> Result<Itinerary, ItineraryError>;
}

/// Build the provider selected by `ITINERARY_PROVIDER`.
pub fn create_provider(config: &AppConfig) -> Result<Arc<dyn ItineraryProvider>, ItineraryError> {
    match config.provider {
        ProviderKind::Mock => {
            info!(
                "Using mock itinerary provider (delay {:?}, max {} days)",
                config.mock_delay, config.max_trip_days
            );
            Ok(Arc::new(MockItineraryService::from_config(config)))
        }
        ProviderKind::Gemini => {
            info!("Using Gemini itinerary provider with model {}", config.gemini.model);
            Ok(Arc::new(GeminiItineraryService::new(&config.gemini)?))
        }
    }
}
