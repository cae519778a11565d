//! The authoritative list of lineups, persisted as JSON.
//!
//! ```json
//! {
//!   "lineups": [ { "unique_id": "ABC123", "map": "dust2", ... } ],
//!   "settings": { "cs2_path": "", "sensitivity": 1.0 }
//! }
//! ```
//!
//! Lookups are linear scans; a repository holds tens of records.

use crate::config::Settings;
use crate::constants::REPOSITORY_FILE;
use crate::error::{Error, Result};
use crate::models::LineupRecord;
use crate::services::text_file;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything stored in `lineups.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryState {
    /// Lineups in commit order
    #[serde(default)]
    pub lineups: Vec<LineupRecord>,
    /// User settings
    #[serde(default)]
    pub settings: Settings,
}

impl RepositoryState {
    /// Appends a record. Fails if its id is already present.
    pub fn add(&mut self, record: LineupRecord) -> Result<()> {
        if self.find_by_id(&record.unique_id).is_some() {
            return Err(Error::DuplicateId(record.unique_id));
        }
        self.lineups.push(record);
        Ok(())
    }

    /// Removes and returns the record with `unique_id`, if any.
    pub fn remove_by_id(&mut self, unique_id: &str) -> Option<LineupRecord> {
        let index = self
            .lineups
            .iter()
            .position(|record| record.unique_id == unique_id)?;
        Some(self.lineups.remove(index))
    }

    /// Looks up a record by id.
    pub fn find_by_id(&self, unique_id: &str) -> Option<&LineupRecord> {
        self.lineups
            .iter()
            .find(|record| record.unique_id == unique_id)
    }

    /// Ids of all records.
    pub fn existing_ids(&self) -> HashSet<String> {
        self.lineups
            .iter()
            .map(|record| record.unique_id.clone())
            .collect()
    }
}

/// Handle on the repository file inside a storage directory.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    path: PathBuf,
}

impl RecordRepository {
    /// Repository stored in `storage_dir`.
    pub fn new(storage_dir: &Path) -> Self {
        Self {
            path: storage_dir.join(REPOSITORY_FILE),
        }
    }

    /// Opens the repository in the default storage directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(&crate::config::data_dir()?))
    }

    /// Path of `lineups.json`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored state, or the empty default if nothing is stored yet.
    pub fn load(&self) -> Result<RepositoryState> {
        let Some(content) = text_file::read_if_exists(&self.path)? else {
            debug!(path = %self.path.display(), "no repository yet, using defaults");
            return Ok(RepositoryState::default());
        };

        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the stored state.
    pub fn save(&self, state: &RepositoryState) -> Result<()> {
        let mut json = serde_json::to_string_pretty(state).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })?;
        json.push('\n');
        text_file::atomic_write(&self.path, &json)?;
        debug!(
            path = %self.path.display(),
            lineups = state.lineups.len(),
            "saved repository"
        );
        Ok(())
    }
}
