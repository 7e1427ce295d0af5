//! RISC-V Processor Timing Analysis CLI.
//!
//! Loads a timing model (the built-in RISC-V reference model or a TOML file),
//! applies optional what-if delay overrides, and prints either one variant's
//! critical-path analysis or the comparison across all variants.

use clap::Parser;
use std::process;

use riscv_timing::analysis::{self, AnalysisResult, Comparison};
use riscv_timing::common::{Result, TimingError};
use riscv_timing::config::Config;
use riscv_timing::model::TimingModel;
use riscv_timing::report::{Breakdown, ComparisonTable, Insights, JsonReport, Summary};

/// Command-line arguments for the timing analyzer.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V Processor Timing Analysis")]
struct Args {
    /// TOML timing model; the built-in RISC-V model when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Instruction count of the workload.
    #[arg(short, long)]
    instructions: Option<u64>,

    /// Baseline variant for speedups.
    #[arg(short, long)]
    baseline: Option<String>,

    /// Override a component delay, e.g. `--set memory_read=3.0`.
    #[arg(long = "set", value_name = "ID=NS", value_parser = parse_override)]
    overrides: Vec<(String, f64)>,

    /// Only analyze this variant.
    #[arg(long)]
    variant: Option<String>,

    /// Print every path's element delays.
    #[arg(long)]
    breakdown: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_override(s: &str) -> std::result::Result<(String, f64), String> {
    let (id, ns) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=NS, got '{}'", s))?;
    let ns = ns
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid delay '{}': {}", ns, e))?;
    Ok((id.trim().to_string(), ns))
}

fn load_model(args: &Args, config: &Config) -> Result<TimingModel> {
    let mut model = config.build_model()?;
    for (id, ns) in &args.overrides {
        model = model.with_delay(id, *ns)?;
    }
    Ok(model)
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::builtin()?,
    };
    let model = load_model(&args, &config)?;

    if let Some(name) = &args.variant {
        let results = [analysis::analyze(&model, name)?];
        print_report(&args, &model, Some(&results[..]), None);
        return Ok(());
    }

    let results = if args.breakdown {
        Some(analysis::analyze_all(&model)?)
    } else {
        None
    };

    let instructions = args.instructions.unwrap_or(config.workload.instructions);
    let baseline = match &args.baseline {
        Some(name) => name.clone(),
        None => config.baseline()?,
    };
    let specs = config.variant_specs(instructions);
    let comparison = analysis::compare(&model, &specs, &baseline)?;
    print_report(&args, &model, results.as_deref(), Some(&comparison));
    Ok(())
}

fn print_report(
    args: &Args,
    model: &TimingModel,
    analyses: Option<&[AnalysisResult]>,
    comparison: Option<&Comparison>,
) {
    if args.json {
        println!("{}", to_json(&JsonReport { analyses, comparison }));
        return;
    }
    for result in analyses.unwrap_or_default() {
        if args.breakdown {
            println!("{}", Breakdown { model, result });
        } else {
            print!("{}", Summary(result));
        }
    }
    if let Some(comparison) = comparison {
        print!("{}", ComparisonTable(comparison));
        print!("{}", Insights(comparison));
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: could not serialize results: {}", e);
        process::exit(1);
    })
}

/// Main entry point for the timing analyzer.
///
/// # Behavior
///
/// 1. **Logging**: Initializes `env_logger`, defaulting to `warn` and raised
///    by `-v`; `RUST_LOG` takes precedence.
/// 2. **Configuration**: Loads the TOML model or the built-in one and builds
///    the validated timing model, applying `--set` overrides.
/// 3. **Analysis**: Prints one variant (`--variant`) or the full comparison.
/// 4. **Errors**: Any error is reported verbatim and exits with status 1.
fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        eprintln!("\n[!] FATAL: {}", e);
        if let TimingError::Io { .. } | TimingError::Parse(_) = e {
            eprintln!("Usage: riscv-timing [--config <model.toml>] [--set ID=NS]...");
        }
        process::exit(1);
    }
}
