//! sift - print the minimal edit script between two files

mod output;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use sift_core::{text, Comparator, Counting, Diff, HistoryComparator, IndexWidth};
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Minimal edit scripts with a bit-traced Myers diff")]
#[command(version)]
struct Cli {
    /// Old file
    old: PathBuf,

    /// New file
    new: PathBuf,

    /// Granularity of the comparison
    #[arg(short, long, value_enum, default_value_t = Mode::Lines)]
    mode: Mode,

    /// How the search history is kept for backtracking
    #[arg(short, long, value_enum, default_value_t = Strategy::Trace)]
    strategy: Strategy,

    /// Integer width for stored positions; bounds the combined input length
    #[arg(short, long, value_enum, default_value_t = Width::U32)]
    width: Width,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = output::Format::Text)]
    format: output::Format,

    /// Print operation counts and allocated bytes
    #[arg(long)]
    stats: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Lines,
    Chars,
    Graphemes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// One bit per branch decision
    Trace,
    /// Every wavefront kept
    History,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Width {
    U16,
    U32,
    U64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let old = std::fs::read_to_string(&cli.old)
        .with_context(|| format!("Failed to read {}", cli.old.display()))?;
    let new = std::fs::read_to_string(&cli.new)
        .with_context(|| format!("Failed to read {}", cli.new.display()))?;

    log::debug!(
        "comparing {} and {} by {:?} with {:?}/{:?}",
        cli.old.display(),
        cli.new.display(),
        cli.mode,
        cli.strategy,
        cli.width
    );

    match cli.width {
        Width::U16 => with_strategy::<u16>(&cli, &old, &new),
        Width::U32 => with_strategy::<u32>(&cli, &old, &new),
        Width::U64 => with_strategy::<u64>(&cli, &old, &new),
    }
}

fn with_strategy<I: IndexWidth>(cli: &Cli, old: &str, new: &str) -> Result<()> {
    match cli.strategy {
        Strategy::Trace => {
            let differ = Comparator::with_tracker(Counting::new()).with_width::<I>();
            with_mode(differ, cli, old, new)
        }
        Strategy::History => {
            let differ = HistoryComparator::with_tracker(Counting::new()).with_width::<I>();
            with_mode(differ, cli, old, new)
        }
    }
}

fn with_mode<D>(differ: D, cli: &Cli, old: &str, new: &str) -> Result<()>
where
    D: Diff,
{
    match cli.mode {
        Mode::Lines => run(differ, cli, &text::lines(old), &text::lines(new)),
        Mode::Chars => run(differ, cli, &text::chars(old), &text::chars(new)),
        Mode::Graphemes => run(differ, cli, &text::graphemes(old), &text::graphemes(new)),
    }
}

fn run<D, T>(mut differ: D, cli: &Cli, old: &[T], new: &[T]) -> Result<()>
where
    D: Diff,
    T: Clone + PartialEq + Display + Serialize,
{
    let script = differ
        .compare(old, new)
        .context("Diff computation failed")?;
    let memory = cli.stats.then(|| differ.memory());

    let rendered = match (cli.format, cli.mode) {
        (output::Format::Json, _) => output::json(&script, cli.stats, memory)?,
        (output::Format::Text, Mode::Lines) => output::text(&script, "\n", cli.stats, memory),
        (output::Format::Text, _) => output::text(&script, ", ", cli.stats, memory),
    };
    println!("{rendered}");
    Ok(())
}
