//! Amount conversion on top of a [`CurrencyRateProvider`]

use super::currency::CurrencyRateProvider;
use super::error::Result;
use super::validate::CurrencyCode;
use chrono::{DateTime, Utc};
use std::fmt::Display;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
    pub converted: f64,
    pub rates_as_of: Option<DateTime<Utc>>,
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.6} {} is {:.6} {}",
            self.amount, self.from, self.converted, self.to
        )
    }
}

/// Fetches the `from` to `to` rate once and applies it to `amount`.
///
/// The product is not rounded.
pub async fn convert(
    provider: &dyn CurrencyRateProvider,
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Result<Conversion> {
    let quote = provider.get_rate(from, to).await?;
    debug!(rate = quote.rate, as_of = ?quote.as_of, "Using rate {from}->{to}");

    Ok(Conversion {
        amount,
        from: from.clone(),
        to: to.clone(),
        rate: quote.rate,
        converted: amount * quote.rate,
        rates_as_of: quote.as_of,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::RateQuote;
    use crate::core::error::ConvertError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockRateProvider {
        rate: Option<f64>,
        call_count: AtomicUsize,
    }

    impl MockRateProvider {
        fn new(rate: Option<f64>) -> Self {
            Self {
                rate,
                call_count: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CurrencyRateProvider for MockRateProvider {
        async fn get_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<RateQuote> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            match self.rate {
                Some(rate) => Ok(RateQuote { rate, as_of: None }),
                None => Err(ConvertError::UnknownCurrencyCode {
                    base: from.to_string(),
                    target: to.to_string(),
                }),
            }
        }
    }

    fn codes(from: &str, to: &str) -> (CurrencyCode, CurrencyCode) {
        (
            CurrencyCode::parse(from).unwrap(),
            CurrencyCode::parse(to).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_convert_multiplies_by_rate() {
        let provider = MockRateProvider::new(Some(0.9));
        let (from, to) = codes("USD", "EUR");

        let conversion = convert(&provider, 100.0, &from, &to).await.unwrap();
        assert!((conversion.converted - 90.0).abs() < 1e-9);
        assert_eq!(conversion.rate, 0.9);
        assert_eq!(conversion.from.as_str(), "USD");
        assert_eq!(conversion.to.as_str(), "EUR");
        assert_eq!(provider.call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_convert_accepts_negative_and_zero_amounts() {
        let provider = MockRateProvider::new(Some(2.0));
        let (from, to) = codes("GBP", "USD");

        let negative = convert(&provider, -5.0, &from, &to).await.unwrap();
        assert_eq!(negative.converted, -10.0);
        let zero = convert(&provider, 0.0, &from, &to).await.unwrap();
        assert_eq!(zero.converted, 0.0);
    }

    #[tokio::test]
    async fn test_convert_propagates_provider_error() {
        let provider = MockRateProvider::new(None);
        let (from, to) = codes("USD", "ZZZ");

        let err = convert(&provider, 1.0, &from, &to).await.unwrap_err();
        assert!(matches!(err, ConvertError::UnknownCurrencyCode { .. }));
    }

    #[test]
    fn test_conversion_display() {
        let (from, to) = codes("usd", "eur");
        let conversion = Conversion {
            amount: 100.0,
            from,
            to,
            rate: 0.9,
            converted: 90.0,
            rates_as_of: None,
        };
        assert_eq!(conversion.to_string(), "100.000000 USD is 90.000000 EUR");
    }
}
