use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reporank",
    version,
    about = "Rank repositories by time-decayed commit activity"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank repositories from a commit ledger CSV
    Rank(RankCommand),
    /// Show the decay rate and commit weights for a configuration
    Decay(DecayCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OnMalformed {
    Abort,
    Skip,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Csv,
    Md,
}

#[derive(Args)]
pub struct DecayArgs {
    /// Weight of a commit one half-life period old, in (0, 1)
    #[arg(long)]
    pub target_weight: Option<f64>,
    /// Length of the half-life period in days
    #[arg(long)]
    pub half_life_days: Option<u32>,
    /// Config file (defaults to ./reporank.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct RankCommand {
    /// Commit ledger: timestamp,user,repository,files,additions,deletions
    pub input: PathBuf,
    /// Write the report here (.json, .csv or .md) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Number of repositories to keep
    #[arg(short, long)]
    pub tail: Option<usize>,
    #[arg(long, value_enum)]
    pub on_malformed: Option<OnMalformed>,
    #[command(flatten)]
    pub decay: DecayArgs,
}

#[derive(Args)]
pub struct DecayCommand {
    /// Commit ages to print weights for
    #[arg(long = "age-days", value_delimiter = ',', default_values_t = [0.0, 7.0, 30.0, 90.0])]
    pub age_days: Vec<f64>,
    #[command(flatten)]
    pub decay: DecayArgs,
}
