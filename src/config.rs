use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 8080;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MOCK_DELAY_MS: u64 = 0;
pub const DEFAULT_MAX_TRIP_DAYS: u32 = 30;
const DEFAULT_SESSION_CAPACITY: usize = 1024;
const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Mock,
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Mock => "mock",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(ProviderKind::Mock),
            "gemini" | "model" => Ok(ProviderKind::Gemini),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Absent keys are reported per request, not at startup.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: url::Url,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub provider: ProviderKind,
    pub gemini: GeminiConfig,
    pub mock_delay: Duration,
    /// Upper bound applied to day counts parsed out of queries.
    pub max_trip_days: u32,
    /// Most session slots kept at once.
    pub session_capacity: usize,
    /// Slots untouched for this long are forgotten.
    pub session_ttl: Duration,
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Read configuration from environment variables or use defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider = match env::var("ITINERARY_PROVIDER") {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ => ProviderKind::Mock,
        };

        let base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let base_url = url::Url::parse(&base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;

        let gemini = GeminiConfig {
            api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            base_url,
            timeout: Duration::from_secs(parsed_or(
                "GEMINI_TIMEOUT_SECS",
                DEFAULT_GEMINI_TIMEOUT_SECS,
            )),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port: parsed_or("PORT", PORT),
            environment: env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
            provider,
            gemini,
            mock_delay: Duration::from_millis(parsed_or("MOCK_DELAY_MS", DEFAULT_MOCK_DELAY_MS)),
            max_trip_days: parsed_or("MAX_TRIP_DAYS", DEFAULT_MAX_TRIP_DAYS).max(1),
            session_capacity: parsed_or("SESSION_CAPACITY", DEFAULT_SESSION_CAPACITY).max(1),
            session_ttl: Duration::from_secs(parsed_or(
                "SESSION_TTL_SECS",
                DEFAULT_SESSION_TTL_SECS,
            )),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: "development".to_string(),
            provider: ProviderKind::Mock,
            gemini: GeminiConfig::default(),
            mock_delay: Duration::from_millis(DEFAULT_MOCK_DELAY_MS),
            max_trip_days: DEFAULT_MAX_TRIP_DAYS,
            session_capacity: DEFAULT_SESSION_CAPACITY,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: url::Url::parse(DEFAULT_GEMINI_BASE_URL)
                .expect("default Gemini base URL is valid"),
            timeout: Duration::from_secs(DEFAULT_GEMINI_TIMEOUT_SECS),
        }
    }
}
