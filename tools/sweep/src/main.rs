use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use nhs_number::{sweep, SeparatorStyle, SweepConfig, WeightOrder};
use tracing_subscriber::EnvFilter;

/// Validates every number in a range and reports how long it took.
#[derive(Parser, Debug)]
#[command(name = "sweep", version)]
struct Args {
    /// JSON sweep config. Flags below override its values.
    #[arg(long, env = "NHS_SWEEP_CONFIG")]
    config: Option<PathBuf>,

    /// First number to check
    #[arg(long)]
    start: Option<u64>,

    /// How many consecutive numbers to check
    #[arg(long)]
    count: Option<u64>,

    /// Spread the candidates over all cores
    #[arg(long)]
    parallel: bool,

    #[arg(long, value_enum)]
    separators: Option<Separators>,

    #[arg(long, value_enum)]
    weight_order: Option<Weights>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Separators {
    None,
    Spaced,
    Hyphenated,
}

impl From<Separators> for SeparatorStyle {
    fn from(value: Separators) -> Self {
        match value {
            Separators::None => SeparatorStyle::None,
            Separators::Spaced => SeparatorStyle::Spaced,
            Separators::Hyphenated => SeparatorStyle::Hyphenated,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Weights {
    LeastSignificantFirst,
    MostSignificantFirst,
}

impl From<Weights> for WeightOrder {
    fn from(value: Weights) -> Self {
        match value {
            Weights::LeastSignificantFirst => WeightOrder::LeastSignificantFirst,
            Weights::MostSignificantFirst => WeightOrder::MostSignificantFirst,
        }
    }
}

fn load_config(args: &Args) -> Result<SweepConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading sweep config from {}", path.display());
            SweepConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => SweepConfig::default(),
    };

    if let Some(start) = args.start {
        config = config.start(start);
    }
    if let Some(count) = args.count {
        config = config.count(count);
    }
    if args.parallel {
        config = config.parallel(true);
    }
    if let Some(separators) = args.separators {
        config = config.separator_style(separators.into());
    }
    if let Some(weight_order) = args.weight_order {
        config = config.validator(config.validator.weight_order(weight_order.into()));
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let report = sweep(&config)?;

    println!("Time taken is: {:.9}", report.elapsed.as_secs_f64());
    println!("Valid: {} of {}", report.valid, report.checked);
    Ok(())
}
