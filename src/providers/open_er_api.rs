use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::currency::{CurrencyRateProvider, RateQuote};
use crate::core::error::{ConvertError, Result};
use crate::core::validate::CurrencyCode;

const USER_AGENT: &str = concat!("curconv/", env!("CARGO_PKG_VERSION"));

/// Body of `GET /v6/latest/{base}`.
///
/// Every field is optional so that a failure payload such as
/// `{"result":"error","error-type":"unsupported-code"}` still deserializes and
/// can be reported as an upstream error rather than a parse error. A `null`
/// reads the same as a missing field.
#[derive(Debug, Deserialize, Default)]
pub struct ExchangeRateResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: String,
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_code: String,
    pub time_last_update_unix: Option<i64>,
    pub time_next_update_unix: Option<i64>,
    #[serde(rename = "error-type")]
    pub error_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rates: HashMap<String, f64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ExchangeRateResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.time_last_update_unix
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
    }

    pub fn next_update(&self) -> Option<DateTime<Utc>> {
        self.time_next_update_unix
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
    }

    fn failure_reason(&self) -> String {
        match &self.error_type {
            Some(error_type) => error_type.clone(),
            None if self.result.is_empty() => "missing result status".to_string(),
            None => format!("result was '{}'", self.result),
        }
    }
}

/// Rates from the free open.er-api.com endpoint. No API key is required.
pub struct OpenErApiProvider {
    base_url: String,
}

impl OpenErApiProvider {
    pub fn new(base_url: &str) -> Self {
        OpenErApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches every rate quoted against `base` in a single request.
    #[instrument(name = "OpenErApiFetch", skip(self), fields(base = %base))]
    pub async fn fetch_rates(&self, base: &CurrencyCode) -> Result<ExchangeRateResponse> {
        let url = format!("{}/v6/latest/{}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ConvertError::NetworkError {
                base: base.to_string(),
                source,
            })?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|source| ConvertError::NetworkError {
                base: base.to_string(),
                source,
            })?;

        debug!(status = %response.status(), "Received exchange rate response");

        // The API reports failures in the body, so the status is not checked here.
        let body = response
            .bytes()
            .await
            .map_err(|source| ConvertError::ReadError {
                base: base.to_string(),
                source,
            })?;

        let data: ExchangeRateResponse =
            serde_json::from_slice(&body).map_err(|source| ConvertError::ParseError {
                base: base.to_string(),
                source,
            })?;

        if !data.is_success() {
            return Err(ConvertError::UpstreamError {
                base: base.to_string(),
                reason: data.failure_reason(),
            });
        }

        debug!(
            provider = ?data.provider,
            base_code = %data.base_code,
            rates = data.rates.len(),
            last_updated = ?data.last_updated(),
            next_update = ?data.next_update(),
            "Parsed exchange rates"
        );

        Ok(data)
    }
}

#[async_trait]
impl CurrencyRateProvider for OpenErApiProvider {
    async fn get_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<RateQuote> {
        let data = self.fetch_rates(from).await?;

        let rate = data
            .rate(to.as_str())
            .ok_or_else(|| ConvertError::UnknownCurrencyCode {
                base: from.to_string(),
                target: to.to_string(),
            })?;

        Ok(RateQuote {
            rate,
            as_of: data.last_updated(),
        })
    }
}
