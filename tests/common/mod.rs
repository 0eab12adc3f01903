#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use voyageur_api::config::AppConfig;
use voyageur_api::error::ItineraryError;
use voyageur_api::models::envelope::ProviderSource;
use voyageur_api::models::itinerary::Itinerary;
use voyageur_api::models::query::TripQuery;
use voyageur_api::routes::{self, AppState};
use voyageur_api::services::itinerary_provider::{create_provider, ItineraryProvider};
use voyageur_api::services::mock_itinerary_service::MockItineraryService;

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    /// Mock provider without the simulated delay.
    pub fn new() -> Self {
        Self::with_provider(AppConfig::default(), Arc::new(MockItineraryService::default()))
    }

    pub fn from_config(config: AppConfig) -> Self {
        let provider = create_provider(&config).expect("provider builds");
        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: AppConfig, provider: Arc<dyn ItineraryProvider>) -> Self {
        Self {
            state: web::Data::new(AppState::new(config, provider)),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

/// Wraps the mock provider, holding back queries that mention "slowly".
pub struct SlowProvider {
    inner: MockItineraryService,
    delay: Duration,
}

impl SlowProvider {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MockItineraryService::default(),
            delay,
        }
    }
}

#[async_trait]
impl ItineraryProvider for SlowProvider {
    fn source(&self) -> ProviderSource {
        ProviderSource::Mock
    }

    async fn generate(&self, query: &TripQuery) -> Result<Itinerary, ItineraryError> {
        if query.normalized().contains("slowly") {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.generate(query).await
    }
}

/// Always fails with a parse error, like a model reply with no JSON in it.
pub struct BrokenProvider;

#[async_trait]
impl ItineraryProvider for BrokenProvider {
    fn source(&self) -> ProviderSource {
        ProviderSource::Model
    }

    async fn generate(&self, _query: &TripQuery) -> Result<Itinerary, ItineraryError> {
        Err(ItineraryError::Parse(
            "response did not contain a JSON object".to_string(),
        ))
    }
}
