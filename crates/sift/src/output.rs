//! Text and JSON rendering of edit scripts

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use sift_core::script::{self, ScriptStats};
use sift_core::Edit;
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One marker-prefixed entry per operation
    Text,
    /// The script and optional stats as a JSON document
    Json,
}

#[derive(Serialize)]
struct Report<'a, T> {
    script: &'a [Edit<T>],
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ScriptStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<usize>,
}

fn summary(stats: &ScriptStats, memory: Option<usize>) -> String {
    let mut line = format!(
        "{} kept, {} inserted, {} deleted, distance {}",
        stats.keeps,
        stats.inserts,
        stats.deletes,
        stats.distance()
    );
    if let Some(bytes) = memory {
        line.push_str(&format!(", {bytes} bytes allocated"));
    }
    line
}

pub fn text<T: Display>(
    script: &[Edit<T>],
    separator: &str,
    with_stats: bool,
    memory: Option<usize>,
) -> String {
    let mut rendered = script::render(script, separator);
    if with_stats {
        if !rendered.is_empty() {
            rendered.push('\n');
        }
        rendered.push_str(&summary(&ScriptStats::of(script), memory));
    }
    rendered
}

pub fn json<T: Serialize>(
    script: &[Edit<T>],
    with_stats: bool,
    memory: Option<usize>,
) -> Result<String> {
    let report = Report {
        script,
        stats: with_stats.then(|| ScriptStats::of(script)),
        memory,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
