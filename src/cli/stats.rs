//! tick stats command.

use std::path::PathBuf;

use chrono::Utc;

use crate::cli::load_store;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::views;

pub struct StatsOptions {
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_stats(options: StatsOptions) -> Result<()> {
    let store = load_store(options.store)?;
    let snapshot = store.snapshot();
    let stats = views::compute_stats(&snapshot.tasks, Utc::now());

    let mut human = HumanOutput::new("Task stats");
    human.push_summary("Total", stats.total.to_string());
    human.push_summary("Completed", stats.completed.to_string());
    human.push_summary("Active", stats.active.to_string());
    human.push_summary("High priority active", stats.high_priority_active.to_string());
    human.push_summary("Overdue", stats.overdue.to_string());
    human.push_summary("Due soon", stats.due_soon.to_string());
    human.push_summary("Completion", format!("{}%", stats.completion_rate));

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "stats",
        &stats,
        Some(&human),
    )
}
