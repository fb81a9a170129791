//! tick - a small persisted task list
//!
//! This library provides the core functionality for the tick CLI tool: a
//! single-writer task store persisted to one JSON state file, with derived
//! filtered views and statistics recomputed on every read.
//!
//! # Core Concepts
//!
//! - **Tasks**: title, optional description, completion flag, priority,
//!   optional due date, creation timestamp
//! - **Store**: canonical task list + active filter, persisted wholesale
//!   after every mutation
//! - **Derived views**: pure filter/stat functions over a snapshot
//! - **Exports**: one-shot JSON / CSV / clipboard-text transforms
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.tick.toml`
//! - `error`: Error types and result aliases
//! - `export`: Export format transforms
//! - `output`: Shared CLI output formatting
//! - `storage`: State-file persistence with atomic writes
//! - `store`: The task store (state + persistence adapter)
//! - `task`: Task records and pure state transitions
//! - `views`: Derived filtered views and statistics

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod storage;
pub mod store;
pub mod task;
pub mod views;

pub use error::{Error, Result};
