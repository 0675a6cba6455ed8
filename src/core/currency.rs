//! Currency rate abstractions

use super::error::Result;
use super::validate::CurrencyCode;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A single exchange rate, `amount_in_target = amount_in_source * rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub rate: f64,
    /// When the provider last refreshed its rates, if it says so.
    pub as_of: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<RateQuote>;
}
