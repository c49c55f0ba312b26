use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use romanadd::{AddOptions, Adder, AdditionWarning, BucketAdder, SubstitutionAdder};

/// Add two Roman numerals using string rewriting only.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// First numeral (e.g., XLIX).
    first: String,

    /// Second numeral (e.g., I).
    second: String,

    /// Write the sum to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Addition strategy.
    #[arg(short, long, value_enum, default_value_t = Strategy::Substitution)]
    strategy: Strategy,

    /// Treat warnings (relaxed operands, sums above MMMCMXCIX) as errors.
    #[arg(long)]
    strict: bool,

    /// Log every normalization stage to stderr.
    #[arg(long)]
    log: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Expand, merge, fold and contract numeral strings.
    Substitution,
    /// Count symbols into per-magnitude buckets.
    Buckets,
}

impl Strategy {
    fn adder(self) -> &'static dyn Adder {
        match self {
            Strategy::Substitution => &SubstitutionAdder,
            Strategy::Buckets => &BucketAdder,
        }
    }
}

fn init_logging(enabled: bool) {
    if !enabled {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_warnings(warnings: &[AdditionWarning]) {
    for w in warnings {
        let loc = w
            .location
            .as_deref()
            .map(|l| format!(" ({l})"))
            .unwrap_or_default();
        eprintln!("warning: [{:?}] {}{}", w.code, w.message, loc);
    }
}

fn build_options(cli: &Cli) -> AddOptions {
    AddOptions {
        strict: cli.strict,
    }
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let options = build_options(&cli);
    let adder = cli.strategy.adder();

    let result = adder.add(&cli.first, &cli.second, &options).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(1)
    })?;
    print_warnings(&result.warnings);

    let line = format!("{}\n", result.numeral);
    if let Some(ref out_path) = cli.output {
        std::fs::write(out_path, &line).map_err(|e| {
            eprintln!("error: {}: {e}", out_path.display());
            ExitCode::from(1)
        })?;
    } else {
        io::stdout().write_all(line.as_bytes()).map_err(|e| {
            eprintln!("error: stdout: {e}");
            ExitCode::from(1)
        })?;
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log);
    match run(cli) {
        Ok(code) => code,
        Err(code) => code,
    }
}
