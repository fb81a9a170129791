//! One-shot export formats for a task snapshot.
//!
//! Every exporter is a stateless transform of the tasks it is handed; none
//! of them touch the store or impose invariants on it.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::storage::SCHEMA_VERSION;
use crate::task::Task;

const CSV_HEADER: &str = "Task,Status,Priority,Created";

/// Structured export document: the tasks plus export metadata.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub schema_version: &'static str,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub tasks: &'a [Task],
}

/// Serialize the tasks into a JSON document with export metadata.
pub fn export_document(tasks: &[Task], now: DateTime<Utc>) -> Result<String> {
    let document = ExportDocument {
        schema_version: SCHEMA_VERSION,
        generated_at: now,
        total: tasks.len(),
        tasks,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Flat tabular export, one row per task.
pub fn export_csv(tasks: &[Task]) -> String {
    let mut lines = Vec::with_capacity(tasks.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for task in tasks {
        let status = if task.completed { "completed" } else { "active" };
        lines.push(format!(
            "{},{},{},{}",
            csv_field(&task.title),
            status,
            task.priority,
            task.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Plain-text representation suitable for a clipboard: one marker + title
/// per line.
pub fn clipboard_text(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|task| {
            let marker = if task.completed { '✓' } else { '○' };
            format!("{marker} {}", task.title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
