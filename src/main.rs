use anyhow::Result;
use clap::Parser;
use curconv::core::log::init_logging;

/// Convert an amount from one currency to another using live exchange rates
#[derive(Parser)]
#[command(version, about, allow_negative_numbers = true)]
struct Cli {
    /// Amount to convert, e.g. 100 or 12.5
    #[arg(value_name = "AMOUNT")]
    amount: String,

    /// Source currency code, e.g. USD
    #[arg(value_name = "SOURCE_CURRENCY_CODE")]
    from: String,

    /// Target currency code, e.g. EUR
    #[arg(value_name = "TARGET_CURRENCY_CODE")]
    to: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long)]
    config_path: Option<String>,
}

impl From<&Cli> for curconv::ConvertRequest {
    fn from(cli: &Cli) -> curconv::ConvertRequest {
        curconv::ConvertRequest {
            amount: cli.amount.clone(),
            from: cli.from.clone(),
            to: cli.to.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = curconv::run_command((&cli).into(), cli.config_path.as_deref()).await;

    match result {
        Ok(conversion) => {
            println!("{}", curconv::cli::convert::render(&conversion));
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Conversion failed");
            Err(e)
        }
    }
}
