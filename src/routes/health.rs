use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::config::{AppConfig, ProviderKind};
use crate::routes::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    provider: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let config = &state.config;
    let mut health = HealthStatus {
        status: "ok".to_string(),
        provider: config.provider.as_str().to_string(),
        services: HashMap::new(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let provider_result = match config.provider {
        ProviderKind::Mock => check_mock(config),
        ProviderKind::Gemini => check_gemini(config),
    };
    if provider_result.status != "ok" {
        health.status = "degraded".to_string();
    }
    health
        .services
        .insert(config.provider.as_str().to_string(), provider_result);

    HttpResponse::Ok().json(health)
}

fn check_mock(config: &AppConfig) -> ServiceStatus {
    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!(
            "Keyword knowledge base, {} ms simulated latency",
            config.mock_delay.as_millis()
        )),
    }
}

fn check_gemini(config: &AppConfig) -> ServiceStatus {
    // Only key presence is checked; no request is spent on a health probe
    match &config.gemini.api_key {
        Some(key) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Gemini API key configured ({}), model {}",
                mask_key(key),
                config.gemini.model
            )),
        },
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some("GEMINI_API_KEY not configured".to_string()),
        },
    }
}

pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("AIzaSyExampleKey1234"), "AIza***1234");
        assert_eq!(mask_key("short"), "***");
    }

    #[test]
    fn test_missing_gemini_key_is_error() {
        let status = check_gemini(&AppConfig::default());
        assert_eq!(status.status, "error");
    }
}
