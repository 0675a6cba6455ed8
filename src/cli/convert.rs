use super::ui::{self, StyleType};
use crate::core::config::AppConfig;
use crate::core::{Conversion, convert, validate_amount, validate_currency_codes};
use crate::providers::OpenErApiProvider;
use anyhow::Result;
use tracing::debug;

/// Raw positional arguments, exactly as typed by the user.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub amount: String,
    pub from: String,
    pub to: String,
}

/// Validates the request, then converts it with the configured rate provider.
///
/// Validation runs before the config is read, so bad input never touches the
/// filesystem or the network.
pub async fn run(request: &ConvertRequest, config_path: Option<&str>) -> Result<Conversion> {
    let amount = validate_amount(&request.amount)?;
    let (from, to) = validate_currency_codes(&request.from, &request.to)?;

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = OpenErApiProvider::new(config.rates_base_url());

    let spinner = ui::new_spinner(&format!("Fetching {from} exchange rates..."));
    let result = convert(&provider, amount, &from, &to).await;
    spinner.finish_and_clear();

    Ok(result?)
}

/// Renders the result line with the converted figure highlighted.
pub fn render(conversion: &Conversion) -> String {
    format!(
        "{:.6} {} is {} {}",
        conversion.amount,
        ui::style_text(conversion.from.as_str(), StyleType::Code),
        ui::style_text(&format!("{:.6}", conversion.converted), StyleType::Value),
        ui::style_text(conversion.to.as_str(), StyleType::Code),
    )
}
