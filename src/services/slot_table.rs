//! File-backed tables keyed by radio wheel slot.
//!
//! A table is one `{map}_{SIDE}_{suffix}.cfg` file viewed as a map from
//! [`Slot`] to the raw value on that slot's line. Every mutation is a full
//! read-modify-write; there is no locking, so two writers racing on the same
//! file lose updates (last writer wins).

use crate::error::Result;
use crate::models::{Scope, Slot};
use crate::parser::{CommandCodec, LabelCodec, SlotCodec};
use crate::services::text_file;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// In-memory contents of a table, sorted by slot.
pub type SlotMap = BTreeMap<Slot, String>;

/// Table of radio wheel labels (`#MESSAGE` references).
pub type LabelTable = SlotTable<LabelCodec>;

/// Table of radio wheel commands.
pub type CommandTable = SlotTable<CommandCodec>;

/// One slot-keyed table file, parsed with codec `C`.
#[derive(Debug, Clone)]
pub struct SlotTable<C: SlotCodec> {
    path: PathBuf,
    codec: PhantomData<C>,
}

impl<C: SlotCodec> SlotTable<C> {
    /// Table at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            codec: PhantomData,
        }
    }

    /// Table for `scope` inside `config_root`.
    pub fn for_scope(config_root: &Path, scope: &Scope) -> Self {
        Self::at(Self::path_for_stem(config_root, &scope.file_stem()))
    }

    /// Path of the table with file stem `stem`, e.g. `dust2_T`.
    pub fn path_for_stem(config_root: &Path, stem: &str) -> PathBuf {
        config_root.join(format!("{}_{}.cfg", stem, C::SUFFIX))
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the table. A missing file is an empty table.
    ///
    /// Lines not matching the codec are skipped. If a slot appears twice the
    /// later line wins.
    pub fn read(&self) -> Result<SlotMap> {
        let Some(content) = text_file::read_if_exists(&self.path)? else {
            return Ok(SlotMap::new());
        };

        Ok(content.lines().filter_map(C::parse_line).collect())
    }

    /// Replaces the file with `entries`, one line per slot in slot order.
    ///
    /// Output is a pure function of the entries, so equal maps produce
    /// byte-identical files.
    pub fn write(&self, entries: &SlotMap) -> Result<()> {
        text_file::atomic_write(&self.path, &Self::render(entries))
    }

    /// Sets `slot` to `value`, replacing any previous entry.
    pub fn upsert(&self, slot: Slot, value: impl Into<String>) -> Result<()> {
        let mut entries = self.read()?;
        entries.insert(slot, value.into());
        self.write(&entries)?;
        debug!(table = %self.path.display(), %slot, "upserted slot");
        Ok(())
    }

    /// Removes `slot`. Returns whether it was present; an absent slot leaves
    /// the file untouched.
    pub fn remove(&self, slot: Slot) -> Result<bool> {
        let mut entries = self.read()?;
        if entries.remove(&slot).is_none() {
            return Ok(false);
        }
        self.write(&entries)?;
        debug!(table = %self.path.display(), %slot, "removed slot");
        Ok(true)
    }

    /// Formats entries as file content.
    pub fn render(entries: &SlotMap) -> String {
        let mut out = String::new();
        for (slot, value) in entries {
            out.push_str(&C::format_line(*slot, value));
            out.push('\n');
        }
        out
    }
}
