pub mod cli;
pub mod core;
pub mod providers;

pub use cli::convert::ConvertRequest;
pub use crate::core::{Conversion, ConvertError};

use anyhow::Result;
use tracing::info;

/// Runs one conversion end to end and returns the result for printing.
pub async fn run_command(request: ConvertRequest, config_path: Option<&str>) -> Result<Conversion> {
    info!(
        amount = %request.amount,
        from = %request.from,
        to = %request.to,
        "Converting"
    );
    cli::convert::run(&request, config_path).await
}
