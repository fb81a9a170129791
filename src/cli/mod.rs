//! Command-line interface for tick
//!
//! This module defines the CLI structure using clap derive macros.
//! Command handlers live in the submodules.

use clap::{Parser, Subcommand};

use crate::error::Result;

mod export;
mod stats;
mod task;

/// tick - a small task list
///
/// Tasks live in a single JSON state file; every command loads it, applies
/// one mutation or read, and writes it back.
#[derive(Parser, Debug)]
#[command(name = "tick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the state file (defaults to the platform data dir)
    #[arg(long, global = true, env = "TICK_STORE")]
    pub store: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Due date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Priority: low, medium, high
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// List tasks
    List {
        /// View filter: all, active, completed (saved filter when omitted)
        #[arg(short, long)]
        filter: Option<String>,

        /// Only show tasks with this priority
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Toggle a task's completion
    Done {
        /// Task id
        id: String,
    },

    /// Edit a task's fields
    Edit {
        /// Task id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description (empty string clears it)
        #[arg(short, long)]
        description: Option<String>,

        /// New due date (RFC 3339 or YYYY-MM-DD; empty string clears it)
        #[arg(long)]
        due: Option<String>,

        /// New priority: low, medium, high
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: String,
    },

    /// Set the saved view filter
    Filter {
        /// all, active, or completed
        value: String,
    },

    /// Remove all completed tasks
    Clear,

    /// Show task statistics
    Stats,

    /// Export the task list
    Export {
        /// Format: json, csv, or clip
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let store = self.store;
        let json = self.json;
        let quiet = self.quiet;

        match self.command {
            Commands::Add {
                title,
                description,
                due,
                priority,
            } => task::run_add(task::AddOptions {
                title,
                description,
                due,
                priority,
                store,
                json,
                quiet,
            }),
            Commands::List { filter, priority } => task::run_list(task::ListOptions {
                filter,
                priority,
                store,
                json,
                quiet,
            }),
            Commands::Done { id } => task::run_done(task::DoneOptions {
                id,
                store,
                json,
                quiet,
            }),
            Commands::Edit {
                id,
                title,
                description,
                due,
                priority,
            } => task::run_edit(task::EditOptions {
                id,
                title,
                description,
                due,
                priority,
                store,
                json,
                quiet,
            }),
            Commands::Rm { id } => task::run_delete(task::DeleteOptions {
                id,
                store,
                json,
                quiet,
            }),
            Commands::Filter { value } => task::run_filter(task::FilterOptions {
                value,
                store,
                json,
                quiet,
            }),
            Commands::Clear => task::run_clear(task::ClearOptions { store, json, quiet }),
            Commands::Stats => stats::run_stats(stats::StatsOptions { store, json, quiet }),
            Commands::Export { format, out } => export::run_export(export::ExportOptions {
                format,
                out,
                store,
                json,
                quiet,
            }),
        }
    }
}

/// Resolve the state file location: flag/env, then `.tick.toml`, then the
/// platform data dir.
pub(crate) fn resolve_state_file(
    store: Option<std::path::PathBuf>,
) -> Result<crate::storage::StateFile> {
    if let Some(path) = store {
        return Ok(crate::storage::StateFile::new(path));
    }

    let cwd = std::env::current_dir()?;
    let config = crate::config::Config::load_from_dir(&cwd);
    if let Some(path) = config.storage.path {
        return Ok(crate::storage::StateFile::new(path));
    }

    crate::storage::StateFile::default_location()
}

pub(crate) fn load_store(store: Option<std::path::PathBuf>) -> Result<crate::store::TaskStore> {
    let file = resolve_state_file(store)?;
    crate::store::TaskStore::load(file)
}
