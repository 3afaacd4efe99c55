//! CLI for timing the idiom catalogue.
//!
//! # Usage
//!
//! ```bash
//! # List every idiom
//! cargo run --bin bitgems -- list
//!
//! # Compare one idiom with the default 10 trials
//! cargo run --release --bin bitgems -- compare round-positive
//!
//! # Compare everything, resting 1 ms between trials, as JSON
//! cargo run --release --bin bitgems -- compare --all --preset browser --format json
//!
//! # Custom configuration
//! cargo run --release --bin bitgems -- compare mod-pow2 even \
//!   --trials 25 --size 250000 --budget-ms 5000
//! ```

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use bitgems::gems::{self, Gem};
use bitgems::output::{format_error, format_report, to_json};
use bitgems::{CompareError, ComparisonReport, Config, SpeedTest};

/// Bitwise micro-optimization idioms and a comparative timer
#[derive(Parser, Debug)]
#[command(name = "bitgems")]
#[command(about = "Time plain expressions against their bit-twiddling rewrites")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalogued idioms
    List,

    /// Compare baseline and candidate forms of one or more idioms
    Compare(CompareArgs),
}

#[derive(clap::Args, Debug)]
struct CompareArgs {
    /// Idioms to compare (see `bitgems list`)
    #[arg(required_unless_present = "all")]
    names: Vec<String>,

    /// Compare every catalogued idiom
    #[arg(long, conflicts_with = "names")]
    all: bool,

    /// Preset configuration: standard, quick, browser
    #[arg(short, long, default_value = "standard")]
    preset: String,

    /// Trials per phase (overrides preset)
    #[arg(short, long)]
    trials: Option<usize>,

    /// Inputs swept per trial
    #[arg(long, default_value_t = gems::IMAGE_PIXELS)]
    size: usize,

    /// Seed for input generation
    #[arg(long, default_value_t = gems::DEFAULT_SEED)]
    seed: u64,

    /// Pause between trials in milliseconds (overrides preset)
    #[arg(long)]
    pause_ms: Option<u64>,

    /// Wall-clock budget per phase in milliseconds (overrides preset)
    #[arg(long)]
    budget_ms: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// One `<name>: <gain>%` line per idiom
    Text,
    /// Colored summary box per idiom
    Box,
    /// One JSON object per line
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            list();
            ExitCode::SUCCESS
        }
        Command::Compare(args) => match run_compare(&args) {
            Ok(0) => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(message) => {
                eprintln!("{message}");
                ExitCode::from(2)
            }
        },
    }
}

fn list() {
    let width = gems::names().map(str::len).max().unwrap_or(0);
    for gem in gems::catalog() {
        println!("{:<width$}  {}", gem.name, gem.summary);
        println!("{:<width$}    {}  ->  {}", "", gem.baseline, gem.candidate);
    }
}

/// Runs every selected comparison; returns how many failed.
fn run_compare(args: &CompareArgs) -> Result<usize, String> {
    let config = build_config(args)?;
    let selected = select_gems(args)?;
    let test = SpeedTest::with_config(config);

    tracing::info!(
        gems = selected.len(),
        trials = test.config().trials,
        size = args.size,
        "starting comparisons"
    );

    let mut failures = 0;
    for gem in selected {
        match compare_gem(&test, gem, args) {
            Ok(report) => print_report(gem.name, &report, args.format)?,
            Err(err) => {
                failures += 1;
                eprintln!("{}", format_error(gem.name, &err));
            }
        }
    }
    Ok(failures)
}

fn build_config(args: &CompareArgs) -> Result<Config, String> {
    let mut config = match args.preset.to_lowercase().as_str() {
        "standard" => Config::standard(),
        "quick" => Config::quick(),
        "browser" | "browser-like" | "browser_like" => Config::browser_like(),
        other => {
            return Err(format!(
                "Unknown preset '{other}'. Available: standard, quick, browser"
            ))
        }
    };

    if let Some(trials) = args.trials {
        config = config.trials(trials);
    }
    if let Some(ms) = args.pause_ms {
        config = config.trial_pause(Duration::from_millis(ms));
    }
    if let Some(ms) = args.budget_ms {
        if ms == 0 {
            return Err("--budget-ms must be positive".to_string());
        }
        config = config.phase_budget(Duration::from_millis(ms));
    }
    Ok(config)
}

fn select_gems(args: &CompareArgs) -> Result<Vec<&'static Gem>, String> {
    if args.all {
        return Ok(gems::catalog().iter().collect());
    }
    args.names
        .iter()
        .map(|name| {
            gems::find(name).ok_or_else(|| {
                format!(
                    "Unknown idiom '{name}'. Available: {}",
                    gems::names().collect::<Vec<_>>().join(", ")
                )
            })
        })
        .collect()
}

fn compare_gem(
    test: &SpeedTest,
    gem: &Gem,
    args: &CompareArgs,
) -> Result<ComparisonReport, CompareError> {
    let mut pair = gem.workloads(args.size, args.seed);
    test.compare_workloads(&mut pair.baseline, &mut pair.candidate)
}

fn print_report(name: &str, report: &ComparisonReport, format: Format) -> Result<(), String> {
    match format {
        Format::Text => println!("{name}: {report}"),
        Format::Box => print!("{}", format_report(name, report)),
        Format::Json => println!("{}", to_json(name, report).map_err(|e| e.to_string())?),
    }
    Ok(())
}
