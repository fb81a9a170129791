//! Storage layer for tick.
//!
//! The entire store state lives in a single JSON file:
//!
//! ```text
//! {
//!   "schema_version": "tick.v1",
//!   "tasks": [...],
//!   "filter": "all"
//! }
//! ```
//!
//! The file is read once when the store loads and rewritten wholesale after
//! every mutation. Writes go through a temp file + rename so a reader (or a
//! crashed process) never sees a partial state file.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::task::StoreState;

pub const SCHEMA_VERSION: &str = "tick.v1";

/// Default state file name inside the platform data directory.
pub const STATE_FILE_NAME: &str = "tasks.json";

/// On-disk layout of the persisted store state.
#[derive(Debug, Serialize, Deserialize)]
struct StateDocument {
    schema_version: String,
    #[serde(flatten)]
    state: StoreState,
}

/// Handle to the state file backing a task store.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: the per-user data directory for tick.
    pub fn default_location() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "tick")
            .ok_or(Error::NoStoreLocation)?;
        Ok(Self::new(dirs.data_dir().join(STATE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state, or the empty default when no file exists
    /// yet.
    pub fn load(&self) -> Result<StoreState> {
        if !self.path.exists() {
            return Ok(StoreState::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let document: StateDocument = serde_json::from_str(&content)
            .map_err(|_| Error::CorruptState(self.path.clone()))?;
        Ok(document.state)
    }

    /// Persist the full state, replacing whatever was there before.
    pub fn save(&self, state: &StoreState) -> Result<()> {
        let document = StateDocument {
            schema_version: SCHEMA_VERSION.to_string(),
            state: state.clone(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        write_atomic(&self.path, json.as_bytes())
    }
}

/// Write data atomically using temp file + rename.
///
/// The file is either fully written or not at all; readers never observe a
/// half-written state.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}
