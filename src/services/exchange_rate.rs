//! COP exchange-rate lookup used to price movies in Colombian pesos.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::models::config::ExchangeRateConfig;

const COP: &str = "COP";

#[derive(Debug, Error)]
pub enum ExchangeRateError {
    #[error("exchange rate request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("exchange rate response has no {0} rate")]
    MissingRate(&'static str),
    #[error("exchange rate must be positive, got {0}")]
    NonPositiveRate(Decimal),
}

/// Source of the current COP rate (Colombian pesos per base currency unit).
#[async_trait]
pub trait ExchangeRateService: Send + Sync {
    async fn get_cop_rate(&self) -> Result<Decimal, ExchangeRateError>;
}

/// Shape of `open.er-api.com`-style responses.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, Decimal>,
}

impl RatesResponse {
    fn cop_rate(&self) -> Result<Decimal, ExchangeRateError> {
        let rate = *self
            .rates
            .get(COP)
            .ok_or(ExchangeRateError::MissingRate(COP))?;
        if rate > Decimal::ZERO {
            Ok(rate)
        } else {
            Err(ExchangeRateError::NonPositiveRate(rate))
        }
    }
}

/// Fetches the rate over HTTP on every call; caching is left to the provider.
#[derive(Debug, Clone)]
pub struct HttpExchangeRateService {
    client: reqwest::Client,
    url: String,
}

impl HttpExchangeRateService {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ExchangeRateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ExchangeRateService for HttpExchangeRateService {
    async fn get_cop_rate(&self) -> Result<Decimal, ExchangeRateError> {
        let response: RatesResponse = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.cop_rate()
    }
}

/// Always answers with the same rate.
#[derive(Debug, Clone, Copy)]
pub struct FixedExchangeRateService {
    rate: Decimal,
}

impl FixedExchangeRateService {
    pub fn new(rate: Decimal) -> Result<Self, ExchangeRateError> {
        if rate > Decimal::ZERO {
            Ok(Self { rate })
        } else {
            Err(ExchangeRateError::NonPositiveRate(rate))
        }
    }
}

#[async_trait]
impl ExchangeRateService for FixedExchangeRateService {
    async fn get_cop_rate(&self) -> Result<Decimal, ExchangeRateError> {
        Ok(self.rate)
    }
}

/// Build the service selected by configuration: a fixed rate when one is
/// configured, the HTTP lookup otherwise.
pub fn from_config(
    config: &ExchangeRateConfig,
) -> Result<Arc<dyn ExchangeRateService>, ExchangeRateError> {
    match config.fixed_rate {
        Some(rate) => Ok(Arc::new(FixedExchangeRateService::new(rate)?)),
        None => Ok(Arc::new(HttpExchangeRateService::new(
            config.url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?)),
    }
}
