use clap::{Args, Parser, Subcommand, ValueEnum};
use habitscore::types::config::MAX_WINDOW_DAYS;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "habitscore",
    version,
    about = "Habit day scores, trends and streaks from an exported data file"
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
    Summary(SummaryCommand),
    Trend(TrendCommand),
    Streaks(StreaksCommand),
    DayKey(DayKeyCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DoneTestArg {
    Completed,
    FullScore,
}

#[derive(Args)]
pub struct SummaryCommand {
    pub data: PathBuf,
    /// Day key (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub day_start: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TrendCommand {
    pub data: PathBuf,
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct StreaksCommand {
    pub data: PathBuf,
    /// Day key (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub anchor: Option<String>,
    /// Days to look back from the anchor (1..=3660)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS)))]
    pub window_days: Option<u32>,
    #[arg(long, value_enum)]
    pub done_test: Option<DoneTestArg>,
    #[arg(long)]
    pub day_start: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct DayKeyCommand {
    pub timestamp: String,
    #[arg(long, default_value = "00:00")]
    pub day_start: String,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
