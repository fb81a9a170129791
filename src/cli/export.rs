//! tick export command.
//!
//! Without `--out` the exported payload goes straight to stdout, so the
//! JSON envelope is suppressed there; with `--out` the payload lands in the
//! file and the normal success output reports where it went.

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;

use crate::cli::load_store;
use crate::error::{Error, Result};
use crate::export::{clipboard_text, export_csv, export_document};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct ExportOptions {
    pub format: String,
    pub out: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Json,
    Csv,
    Clip,
}

impl ExportFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "clip" => Ok(ExportFormat::Clip),
            other => Err(Error::InvalidArgument(format!(
                "unknown export format '{other}' (expected json, csv, clip)"
            ))),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Clip => "clip",
        }
    }
}

#[derive(Serialize)]
struct ExportOutput {
    format: &'static str,
    tasks: usize,
    path: String,
    bytes: usize,
}

pub fn run_export(options: ExportOptions) -> Result<()> {
    let store = load_store(options.store)?;
    let snapshot = store.snapshot();
    let format = ExportFormat::parse(&options.format)?;

    let payload = match format {
        ExportFormat::Json => export_document(&snapshot.tasks, Utc::now())?,
        ExportFormat::Csv => export_csv(&snapshot.tasks),
        ExportFormat::Clip => clipboard_text(&snapshot.tasks),
    };

    let out = match options.out {
        Some(out) => out,
        None => {
            println!("{payload}");
            return Ok(());
        }
    };

    std::fs::write(&out, payload.as_bytes())?;

    let output = ExportOutput {
        format: format.as_str(),
        tasks: snapshot.tasks.len(),
        path: out.display().to_string(),
        bytes: payload.len(),
    };

    let mut human = HumanOutput::new("Exported");
    human.push_summary("Format", output.format.to_string());
    human.push_summary("Tasks", output.tasks.to_string());
    human.push_summary("Path", output.path.clone());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "export",
        &output,
        Some(&human),
    )
}
