//! Error taxonomy for validation and conversion

use thiserror::Error;

/// Everything that can stop a conversion. All variants are fatal for the CLI.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid amount '{0}'. Please provide a valid number.")]
    InvalidAmount(String),

    /// Both inputs are reported together, even when only one is wrong.
    #[error(
        "Invalid currency code(s) '{from}' and '{to}'. Currency codes must be 3 letters long (e.g., USD)."
    )]
    InvalidCurrencyCode { from: String, to: String },

    #[error("Failed to retrieve exchange rates for {base}. Please try again later.")]
    NetworkError {
        base: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read exchange rate response body for {base}")]
    ReadError {
        base: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse exchange rate response for {base}")]
    ParseError {
        base: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Exchange rate API failed to get the rates for {base}: {reason}")]
    UpstreamError { base: String, reason: String },

    #[error("No exchange rate from {base} to {target}")]
    UnknownCurrencyCode { base: String, target: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_currency_code_lists_both_inputs() {
        let err = ConvertError::InvalidCurrencyCode {
            from: "US".to_string(),
            to: "eur".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'US'"));
        assert!(msg.contains("'eur'"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConvertError::ParseError {
            base: "USD".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse exchange rate response for USD"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
