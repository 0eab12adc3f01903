use actix_web::web;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::itinerary_provider::ItineraryProvider;
use crate::services::session_store::SessionStore;

pub mod health;
pub mod itinerary;

/// Shared by every worker through `web::Data`.
pub struct AppState {
    pub config: AppConfig,
    pub provider: Arc<dyn ItineraryProvider>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: AppConfig, provider: Arc<dyn ItineraryProvider>) -> Self {
        let sessions = SessionStore::with_limits(config.session_capacity, config.session_ttl);
        Self {
            config,
            provider,
            sessions,
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(|| async { "OK" }))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/itineraries")
                        .route("", web::get().to(itinerary::generate))
                        .route("/regenerate", web::post().to(itinerary::regenerate))
                        .route("/session/{id}", web::get().to(itinerary::session_state)),
                ),
        );
}
