//! Command-line input validation

use super::error::{ConvertError, Result};
use std::fmt::Display;

/// An upper-cased, three letter currency code such as `USD`.
///
/// Only the shape is checked. Whether the rate provider knows the code is
/// discovered when the rates are fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Returns `None` unless `code` is exactly three ASCII letters.
    pub fn parse(code: &str) -> Option<Self> {
        let valid = code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic());
        valid.then(|| CurrencyCode(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parses the amount token as an `f64`. Zero and negative values are accepted.
///
/// Finite literals too large for an `f64` are rejected rather than rounded to
/// infinity; only an explicit `inf`/`infinity` yields an infinite amount.
pub fn validate_amount(input: &str) -> Result<f64> {
    let invalid = || ConvertError::InvalidAmount(input.to_string());
    let amount = input.parse::<f64>().map_err(|_| invalid())?;

    if amount.is_infinite() && !is_infinity_literal(input) {
        return Err(invalid());
    }
    Ok(amount)
}

fn is_infinity_literal(input: &str) -> bool {
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

pub fn validate_currency_codes(from: &str, to: &str) -> Result<(CurrencyCode, CurrencyCode)> {
    match (CurrencyCode::parse(from), CurrencyCode::parse(to)) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(ConvertError::InvalidCurrencyCode {
            from: from.to_string(),
            to: to.to_string(),
        }),
    }
}
