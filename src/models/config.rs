use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Settings for the COP exchange-rate lookup.
#[derive(Clone, Debug, Deserialize)]
pub struct ExchangeRateConfig {
    /// Endpoint returning `{"rates": {"COP": <number>}}`.
    pub url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// When set, this rate is served instead of calling `url`.
    #[serde(default)]
    pub fixed_rate: Option<Decimal>,
}

fn default_timeout_secs() -> u64 {
    5
}

/// Configuration options of the catalog service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Value expected in the `X-Api-Key` header of category requests.
    pub api_key: String,
    /// Directory holding the built single-page frontend, if any.
    #[serde(default)]
    pub static_dir: Option<String>,
    pub exchange_rate: ExchangeRateConfig,
}

impl ServerConfig {
    /// Load `config/default.yaml`, then `config/{APP_ENV}.yaml`, then
    /// `APP__*` environment variables, later sources overriding earlier ones.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
