mod cli;
mod config;
mod error;
mod ingest;
mod parse;
mod rank;
mod report;
mod types;

use crate::error::RankError;
use crate::types::config::{MalformedPolicy, RankSettings};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const REJECTED_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Config files first, then command-line overrides, validated.
fn resolve_settings(
    decay: &cli::DecayArgs,
    on_malformed: Option<cli::OnMalformed>,
    tail: Option<usize>,
) -> Result<RankSettings, RankError> {
    let loaded = config::load_config(decay.config.as_deref())?;
    let mut settings = loaded.settings();
    if let Some(target_weight) = decay.target_weight {
        settings.target_weight = target_weight;
    }
    if let Some(half_life_days) = decay.half_life_days {
        settings.half_life_days = half_life_days;
    }
    if let Some(policy) = on_malformed {
        settings.on_malformed = match policy {
            cli::OnMalformed::Abort => MalformedPolicy::Abort,
            cli::OnMalformed::Skip => MalformedPolicy::Skip,
        };
    }
    if let Some(tail) = tail {
        settings.tail = tail;
    }
    settings.validate()?;
    Ok(settings)
}

fn validate_input_path(path: &Path) -> Result<(), RankError> {
    if !path.exists() {
        return Err(RankError::PathNotFound(path.display().to_string()));
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
        return Err(RankError::InvalidInputPath(path.display().to_string()));
    }
    Ok(())
}

fn run_rank(cmd: cli::RankCommand) -> Result<i32, RankError> {
    validate_input_path(&cmd.input)?;
    let path_format = cmd
        .output
        .as_deref()
        .map(report::OutputFormat::from_path)
        .transpose()?;
    let format = match cmd.format {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Csv) => report::OutputFormat::Csv,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => path_format.unwrap_or(report::OutputFormat::Json),
    };

    let settings = resolve_settings(&cmd.decay, cmd.on_malformed, cmd.tail)?;
    let decay = settings.decay_rate()?;

    let records = ingest::read_records(&cmd.input)?;
    let parsed = parse::parse_records(&records, settings.on_malformed)?;
    info!(
        "parsed {} commits ({} rows skipped)",
        parsed.commits.len(),
        parsed.skipped.len()
    );

    let ranking = report::top(rank::rank(&parsed.commits, decay)?, settings.tail);
    let rendered = report::render(&ranking, format)?;
    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!("wrote {} repositories to {}", ranking.repositories.len(), path.display());
        }
        None => println!("{rendered}"),
    }

    if parsed.skipped.is_empty() {
        Ok(exit_code::SUCCESS)
    } else {
        eprintln!(
            "warning: skipped {} malformed row(s) in {}",
            parsed.skipped.len(),
            cmd.input.display()
        );
        Ok(exit_code::WARNINGS)
    }
}

fn run_decay(cmd: cli::DecayCommand) -> Result<i32, RankError> {
    let settings = resolve_settings(&cmd.decay, None, None)?;
    let decay = settings.decay_rate()?;

    println!(
        "decay rate: {:.6e} per second (target_weight={}, half_life_days={})",
        decay.value(),
        settings.target_weight,
        settings.half_life_days
    );
    for age in &cmd.age_days {
        println!("- age {age} days: weight {:.6}", decay.weight_at_days(*age));
    }
    Ok(exit_code::SUCCESS)
}

fn run() -> Result<i32, RankError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    info!("reporank v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        cli::Commands::Rank(cmd) => run_rank(cmd),
        cli::Commands::Decay(cmd) => run_decay(cmd),
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_rejected_input() {
                exit_code::REJECTED_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
