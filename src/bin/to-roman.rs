//! Convert a decimal integer (1 to 3000) to a Roman numeral.
//!
//! Handy for producing operands and expected sums when checking `romanadd`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "to-roman",
    version,
    about = "Convert an integer to a Roman numeral"
)]
struct Cli {
    /// Integer between 1 and 3000.
    #[arg(allow_hyphen_values = true)]
    number: String,

    /// Log to stderr.
    #[arg(long)]
    log: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match romanadd::parse_to_roman(&cli.number) {
        Ok(numeral) => {
            tracing::debug!(input = %cli.number, %numeral, "converted");
            println!("{numeral}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
