//! The four generated config files managed as one store.
//!
//! | File | Root | Write policy |
//! |------|------|--------------|
//! | `main.cfg` | config | append, strip on delete |
//! | `platform_english.txt` | resource | append, strip on delete |
//! | `{map}_{SIDE}_labels.cfg` | config | rewritten in slot order |
//! | `{map}_{SIDE}_commands.cfg` | config | rewritten in slot order |
//!
//! A store value is not a lock. Only one process should work on a given pair
//! of roots at a time, and multi-file operations are not transactional: if a
//! step fails, the files touched by earlier steps stay modified and the error
//! is returned as-is.

use crate::constants::{ALIAS_FILE, COMMANDS_SUFFIX, LABELS_SUFFIX, LOCALIZATION_FILE};
use crate::error::{Error, Result};
use crate::models::{LineupRecord, Scope, Side, Slot};
use crate::parser::cfg_lines::{
    alias_lines, command_value, label_value, localization_line, AliasLine, LocalizationLine,
};
use crate::services::slot_table::{CommandTable, LabelTable, SlotMap};
use crate::services::text_file;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How `delete_record` matches lines in the two append-only files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMatch {
    /// Drop every line containing the id (alias file) or message name
    /// (localization file) as a substring. `ABC123` also drops lines of
    /// `ABC1234`.
    #[default]
    Substring,
    /// Drop only lines whose parsed key equals the record's key.
    StrictKey,
}

/// Counts reported by [`ConfigStore::rebuild_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildSummary {
    /// Records replayed
    pub records: usize,
    /// Label and command tables written
    pub tables: usize,
}

/// The generated config files under a config root and a resource root.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_root: PathBuf,
    resource_root: PathBuf,
    delete_match: DeleteMatch,
}

impl ConfigStore {
    /// Creates a store over the two roots. Nothing is touched on disk.
    pub fn new(config_root: impl Into<PathBuf>, resource_root: impl Into<PathBuf>) -> Self {
        Self {
            config_root: config_root.into(),
            resource_root: resource_root.into(),
            delete_match: DeleteMatch::default(),
        }
    }

    /// Sets the line matching policy used by `delete_record`.
    pub fn with_delete_match(mut self, delete_match: DeleteMatch) -> Self {
        self.delete_match = delete_match;
        self
    }

    /// Directory holding `main.cfg` and the slot tables.
    pub fn config_root(&self) -> &Path {
        &self.config_root
    }

    /// Directory holding `platform_english.txt`.
    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }

    /// Path of the alias file.
    pub fn alias_path(&self) -> PathBuf {
        self.config_root.join(ALIAS_FILE)
    }

    /// Path of the localization file.
    pub fn localization_path(&self) -> PathBuf {
        self.resource_root.join(LOCALIZATION_FILE)
    }

    /// Label table for a scope.
    pub fn labels(&self, scope: &Scope) -> LabelTable {
        LabelTable::for_scope(&self.config_root, scope)
    }

    /// Command table for a scope.
    pub fn commands(&self, scope: &Scope) -> CommandTable {
        CommandTable::for_scope(&self.config_root, scope)
    }

    /// Writes a new record into all four files.
    ///
    /// The alias and localization entries are appended without checking for
    /// duplicates; id freshness is the repository's job. The slot is
    /// overwritten in both tables if already taken.
    pub fn commit(&self, record: &LineupRecord) -> Result<()> {
        let scope = record.scope();
        let slot = checked_slot(record)?;

        text_file::append_lines(
            &self.alias_path(),
            &alias_lines(
                &record.grenade,
                &record.unique_id,
                record.yaw_value,
                record.pitch_value,
            ),
        )?;
        text_file::append_lines(
            &self.localization_path(),
            &[localization_line(
                &record.message_name,
                &record.formatted_label(),
            )],
        )?;
        self.labels(&scope)
            .upsert(slot, label_value(&record.message_name))?;
        self.commands(&scope)
            .upsert(slot, command_value(&record.grenade, &record.unique_id))?;

        info!(id = %record.unique_id, %scope, %slot, "committed lineup");
        Ok(())
    }

    /// Slots taken in either table of the scope.
    pub fn occupied_slots(&self, scope: &Scope) -> Result<BTreeSet<Slot>> {
        let mut occupied: BTreeSet<Slot> = self.labels(scope).read()?.into_keys().collect();
        occupied.extend(self.commands(scope).read()?.into_keys());
        Ok(occupied)
    }

    /// First free slot in tab-major order, or `None` if all 24 are taken.
    pub fn first_empty_slot(&self, scope: &Scope) -> Result<Option<Slot>> {
        let occupied = self.occupied_slots(scope)?;
        Ok(Slot::all().find(|slot| !occupied.contains(slot)))
    }

    /// Removes everything `commit` wrote for the record.
    ///
    /// Calling it again for the same record changes nothing.
    pub fn delete_record(&self, record: &LineupRecord) -> Result<()> {
        let scope = record.scope();
        let slot = record.slot();

        let aliases = match self.delete_match {
            DeleteMatch::Substring => text_file::retain_lines(&self.alias_path(), |line| {
                !line.contains(record.unique_id.as_str())
            })?,
            DeleteMatch::StrictKey => text_file::retain_lines(&self.alias_path(), |line| {
                !AliasLine::parse(line)
                    .is_some_and(|alias| alias.matches(&record.grenade, &record.unique_id))
            })?,
        };
        let messages = match self.delete_match {
            DeleteMatch::Substring => text_file::retain_lines(&self.localization_path(), |line| {
                !line.contains(record.message_name.as_str())
            })?,
            DeleteMatch::StrictKey => text_file::retain_lines(&self.localization_path(), |line| {
                !LocalizationLine::parse(line).is_some_and(|entry| entry.key == record.message_name)
            })?,
        };
        let label = self.labels(&scope).remove(slot)?;
        let command = self.commands(&scope).remove(slot)?;

        info!(
            id = %record.unique_id,
            %scope,
            %slot,
            aliases,
            messages,
            label,
            command,
            "deleted lineup"
        );
        Ok(())
    }

    /// Regenerates all four files from `records`, in order.
    ///
    /// The alias and localization files are replaced outright. Every label
    /// and command table that has records, or already exists on disk, is
    /// rewritten from the records alone; a later record wins a slot shared
    /// with an earlier one. Running this twice gives identical files.
    pub fn rebuild_all(&self, records: &[LineupRecord]) -> Result<RebuildSummary> {
        let mut aliases = Vec::with_capacity(records.len() * 2);
        let mut messages = Vec::with_capacity(records.len());
        let mut tables: BTreeMap<String, (SlotMap, SlotMap)> = BTreeMap::new();

        for stem in self.existing_table_stems()? {
            tables.entry(stem).or_default();
        }

        for record in records {
            let slot = checked_slot(record)?;
            aliases.extend(alias_lines(
                &record.grenade,
                &record.unique_id,
                record.yaw_value,
                record.pitch_value,
            ));
            messages.push(localization_line(
                &record.message_name,
                &record.formatted_label(),
            ));

            let (labels, commands) = tables.entry(record.scope().file_stem()).or_default();
            if let Some(previous) = labels.insert(slot, label_value(&record.message_name)) {
                warn!(
                    id = %record.unique_id,
                    %slot,
                    replaced = %previous,
                    "slot shared by two lineups, keeping the later one"
                );
            }
            commands.insert(slot, command_value(&record.grenade, &record.unique_id));
        }

        text_file::atomic_write(&self.alias_path(), &join_lines(&aliases))?;
        text_file::atomic_write(&self.localization_path(), &join_lines(&messages))?;

        for (stem, (labels, commands)) in &tables {
            LabelTable::at(LabelTable::path_for_stem(&self.config_root, stem)).write(labels)?;
            CommandTable::at(CommandTable::path_for_stem(&self.config_root, stem))
                .write(commands)?;
        }

        let summary = RebuildSummary {
            records: records.len(),
            tables: tables.len() * 2,
        };
        info!(
            records = summary.records,
            tables = summary.tables,
            "rebuilt config files"
        );
        Ok(summary)
    }

    /// File stems (`dust2_T`) of slot tables already present in the config root.
    fn existing_table_stems(&self) -> Result<BTreeSet<String>> {
        let entries = match fs::read_dir(&self.config_root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(Error::io(&self.config_root, e)),
        };

        let mut stems = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.config_root, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let stem = [LABELS_SUFFIX, COMMANDS_SUFFIX]
                .iter()
                .find_map(|suffix| name.strip_suffix(&format!("_{}.cfg", suffix)))
                .filter(|stem| is_scope_stem(stem));
            if let Some(stem) = stem {
                debug!(stem, "found existing slot table");
                stems.insert(stem.to_string());
            }
        }
        Ok(stems)
    }
}

/// Whether `stem` has the `{map}_{SIDE}` shape of a slot table name.
fn is_scope_stem(stem: &str) -> bool {
    stem.rsplit_once('_').is_some_and(|(map, side)| {
        !map.is_empty() && side.parse::<Side>().is_ok_and(|parsed| parsed.as_str() == side)
    })
}

fn checked_slot(record: &LineupRecord) -> Result<Slot> {
    Slot::new(record.tab, record.text)
}

fn join_lines(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_message_name, Side};
    use tempfile::TempDir;

    fn record(id: &str, tab: u8, text: u8) -> LineupRecord {
        LineupRecord {
            unique_id: id.to_string(),
            side: Side::T,
            map: "dust2".to_string(),
            grenade: "smoke".to_string(),
            display_name: "t smoke xbox".to_string(),
            raw_input_angles: String::new(),
            yaw_value: 10.5,
            pitch_value: -3.25,
            message_name: build_message_name("dust2", "smoke", id),
            tab,
            text,
        }
    }

    fn store(temp: &TempDir) -> ConfigStore {
        ConfigStore::new(temp.path().join("cfg"), temp.path().join("resource"))
    }

    #[test]
    fn test_commit_rejects_out_of_range_slot() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        let err = store.commit(&record("AAAAAA", 3, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidSlot { tab: 3, text: 1 }));
        assert!(!store.alias_path().exists());
    }

    #[test]
    fn test_strict_delete_keeps_prefix_sharing_ids() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp).with_delete_match(DeleteMatch::StrictKey);
        store.commit(&record("ABC123", 0, 1)).unwrap();
        store.commit(&record("ABC1234", 0, 2)).unwrap();

        store.delete_record(&record("ABC123", 0, 1)).unwrap();

        let aliases = fs::read_to_string(store.alias_path()).unwrap();
        assert!(!aliases.contains("smoke_yaw_ABC123 "));
        assert!(aliases.contains("smoke_yaw_ABC1234"));
        assert!(aliases.contains("smoke_pitch_ABC1234"));

        let messages = fs::read_to_string(store.localization_path()).unwrap();
        assert_eq!(messages.lines().count(), 1);
        assert!(messages.contains("CFG_DUST2_SMOKE_ABC1234"));
    }

    #[test]
    fn test_substring_delete_also_drops_prefix_sharing_ids() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.commit(&record("ABC123", 0, 1)).unwrap();
        store.commit(&record("ABC1234", 0, 2)).unwrap();

        store.delete_record(&record("ABC123", 0, 1)).unwrap();

        let aliases = fs::read_to_string(store.alias_path()).unwrap();
        assert!(aliases.is_empty());
        // The table entry of the other record is keyed by slot and survives
        let scope = Scope::new("dust2", Side::T);
        assert_eq!(
            store.occupied_slots(&scope).unwrap(),
            BTreeSet::from([Slot { tab: 0, text: 2 }])
        );
    }

    #[test]
    fn test_existing_table_stems() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        assert!(store.existing_table_stems().unwrap().is_empty());

        fs::create_dir_all(store.config_root()).unwrap();
        fs::write(store.config_root().join("mirage_CT_labels.cfg"), "").unwrap();
        fs::write(store.config_root().join("nuke_T_commands.cfg"), "").unwrap();
        fs::write(store.config_root().join("main.cfg"), "").unwrap();

        let stems: Vec<String> = store.existing_table_stems().unwrap().into_iter().collect();
        assert_eq!(stems, vec!["mirage_CT".to_string(), "nuke_T".to_string()]);
    }

    #[test]
    fn test_existing_table_stems_ignores_other_cfg_files() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        fs::create_dir_all(store.config_root()).unwrap();
        for name in [
            "my_labels.cfg",
            "_T_labels.cfg",
            "dust2_t_commands.cfg",
            "labels.cfg",
            "dust2_T_labels.cfg",
        ] {
            fs::write(store.config_root().join(name), "echo hi\n").unwrap();
        }

        let stems: Vec<String> = store.existing_table_stems().unwrap().into_iter().collect();
        assert_eq!(stems, vec!["dust2_T".to_string()]);
    }

    #[test]
    fn test_rebuild_leaves_unrelated_cfg_files_alone() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        fs::create_dir_all(store.config_root()).unwrap();
        let custom = store.config_root().join("my_labels.cfg");
        fs::write(&custom, "echo hi\n").unwrap();

        let summary = store.rebuild_all(&[]).unwrap();

        assert_eq!(summary.tables, 0);
        assert_eq!(fs::read_to_string(&custom).unwrap(), "echo hi\n");
        assert!(!store.config_root().join("my_commands.cfg").exists());
    }
}
