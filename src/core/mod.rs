//! Core business logic abstractions

pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod log;
pub mod validate;

// Re-export main types for cleaner imports
pub use conversion::{Conversion, convert};
pub use currency::{CurrencyRateProvider, RateQuote};
pub use error::ConvertError;
pub use validate::{CurrencyCode, validate_amount, validate_currency_codes};
