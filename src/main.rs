mod cli;
mod logging;
mod report;

use clap::Parser;
use habitscore::config;
use habitscore::daykey::{parse_day_key, shift_day_key, to_day_key, today_key};
use habitscore::error::HabitError;
use habitscore::score::{compute_day_summary, compute_range_summaries};
use habitscore::store::HabitStore;
use habitscore::streak::compute_streaks;
use habitscore::types::config::HabitConfig;
use habitscore::types::streak::DoneTest;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn run() -> Result<i32, HabitError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Summary(cmd) => {
            let (config, store) = load(&cmd.data)?;
            let day_start = resolve_day_start(cmd.day_start.as_deref(), &config, &store);
            let date = match cmd.date {
                Some(date) => {
                    parse_day_key(&date)?;
                    date
                }
                None => today_key(&day_start),
            };

            let summary = compute_day_summary(&date, &store.habits, &store.entries_for_day(&date));
            let rendered = report::render(report::Report::Day(&summary), output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(finish(&store))
        }
        cli::Commands::Trend(cmd) => {
            let (_, store) = load(&cmd.data)?;
            let entries = store.entries_in_range(&cmd.from, &cmd.to);
            let summaries = compute_range_summaries(&cmd.from, &cmd.to, &store.habits, &entries)?;
            let rendered =
                report::render(report::Report::Trend(&summaries), output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(finish(&store))
        }
        cli::Commands::Streaks(cmd) => {
            let (config, store) = load(&cmd.data)?;
            let day_start = resolve_day_start(cmd.day_start.as_deref(), &config, &store);
            let anchor = match cmd.anchor {
                Some(anchor) => {
                    parse_day_key(&anchor)?;
                    anchor
                }
                None => today_key(&day_start),
            };

            let mut settings = config.streak_settings();
            if let Some(window_days) = cmd.window_days {
                settings.window_days = window_days;
            }
            if let Some(done_test) = cmd.done_test {
                settings.done_test = match done_test {
                    cli::DoneTestArg::Completed => DoneTest::Completed,
                    cli::DoneTestArg::FullScore => DoneTest::FullScore,
                };
            }

            let window_start = shift_day_key(&anchor, 1 - i64::from(settings.window_days))?;
            let entries = store.entries_in_range(&window_start, &anchor);
            let streaks = compute_streaks(&store.habits, &entries, &anchor, settings)?;
            let rendered = report::render(
                report::Report::Streaks {
                    anchor: &anchor,
                    streaks: &streaks,
                },
                output_format(&cmd.format),
            )?;
            println!("{rendered}");
            Ok(finish(&store))
        }
        cli::Commands::DayKey(cmd) => {
            println!("{}", to_day_key(&cmd.timestamp, &cmd.day_start)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn load(data: &Path) -> Result<(HabitConfig, HabitStore), HabitError> {
    let store = HabitStore::load(data)?;
    let config = config::load_config(&data_root(data))?;
    Ok((config, store))
}

fn data_root(data: &Path) -> PathBuf {
    match data.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn resolve_day_start(flag: Option<&str>, config: &HabitConfig, store: &HabitStore) -> String {
    flag.or_else(|| config.day_start())
        .unwrap_or(store.day_start.as_str())
        .to_string()
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn finish(store: &HabitStore) -> i32 {
    if store.warnings.is_empty() {
        return exit_code::SUCCESS;
    }
    for warning in &store.warnings {
        eprintln!("warning: {warning}");
    }
    exit_code::WARNINGS
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
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
