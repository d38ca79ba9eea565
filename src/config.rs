use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub funding: FundingConfig,
    pub translation: TranslationConfig,
    pub ingest: IngestConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: u64,
}

/// Remote funding-opportunity search API.
#[derive(Debug, Deserialize, Clone)]
pub struct FundingConfig {
    pub api_url: String,
    pub api_key: String,
    pub page_size: u32,
    pub request_timeout: u64,
}

/// Keyword translation service. `api_url = "mock"` selects the no-op
/// translator for local runs without the external service.
#[derive(Debug, Deserialize, Clone)]
pub struct TranslationConfig {
    pub api_url: String,
    pub source_lang: String,
    pub target_lang: String,
    pub request_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IngestConfig {
    pub listing_url: String,
    pub listing_filter: String,
    pub pages: u32,
    pub interval_secs: u64,
    pub request_timeout: u64,
}

impl AppConfig {
    pub fn build() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.rust_log", "info,grantscope=debug")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.connect_timeout", 30)?
            .set_default(
                "funding.api_url",
                "https://api.tech.ec.europa.eu/search-api/prod/rest/search",
            )?
            .set_default("funding.api_key", "SEDIA")?
            .set_default("funding.page_size", 50)?
            .set_default("funding.request_timeout", 10)?
            .set_default("translation.api_url", "mock")?
            .set_default("translation.source_lang", "en")?
            .set_default("translation.target_lang", "pl")?
            .set_default("translation.request_timeout", 10)?
            .set_default(
                "ingest.listing_url",
                "https://www.funduszeeuropejskie.gov.pl/wyszukiwarka-dotacji",
            )?
            .set_default("ingest.listing_filter", "aktualne")?
            .set_default("ingest.pages", 13)?
            .set_default("ingest.interval_secs", 86_400)?
            .set_default("ingest.request_timeout", 15)?
            // Environment overrides, e.g. `APP_SERVER__PORT=8080`
            .add_source(Environment::default().separator("__").prefix("APP"));

        builder.build()?.try_deserialize()
    }
}
