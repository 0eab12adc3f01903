use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::envelope::Notice;

/// Everything that can go wrong while producing an itinerary.
#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service error {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request {request_id} was superseded by a newer request")]
    Superseded { request_id: u64 },
}

impl ItineraryError {
    pub fn is_retryable(&self) -> bool {
        match self {
            ItineraryError::Configuration(_) => false,
            ItineraryError::Transport(_) => true,
            ItineraryError::Service { .. } => true,
            ItineraryError::Parse(_) => true,
            ItineraryError::Superseded { .. } => false,
        }
    }

    /// Transport, service and parse failures read the same to the traveller.
    pub fn notice(&self) -> Notice {
        match self {
            ItineraryError::Configuration(msg) => Notice {
                title: "API Key Missing".to_string(),
                description: format!(
                    "{}. Please check your environment variables.",
                    msg
                ),
                retryable: false,
            },
            ItineraryError::Superseded { .. } => Notice {
                title: "Request superseded".to_string(),
                description: "A newer itinerary request for this session replaced this one."
                    .to_string(),
                retryable: false,
            },
            other => Notice {
                title: "Error generating itinerary".to_string(),
                description: format!(
                    "Failed to get data from AI: {}. Please try again or refine your query.",
                    other
                ),
                retryable: true,
            },
        }
    }
}

impl ResponseError for ItineraryError {
    fn status_code(&self) -> StatusCode {
        match self {
            ItineraryError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            ItineraryError::Transport(_)
            | ItineraryError::Service { .. }
            | ItineraryError::Parse(_) => StatusCode::BAD_GATEWAY,
            ItineraryError::Superseded { .. } => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.notice())
    }
}

/// Startup configuration problems; these stop the server from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown itinerary provider '{0}'. Supported: mock, gemini")]
    UnknownProvider(String),

    #[error("Invalid Gemini base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
