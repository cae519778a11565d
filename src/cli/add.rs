//! Add command: commit a new lineup to the config files and the repository.

use crate::cli::common::{
    load_repository, parse_grenade, parse_map, print_json, require_configured, CliError,
    CliResult,
};
use crate::models::{build_message_name, LineupRecord, Scope, Side, Slot};
use crate::parser::{calculate_value, parse_getpos};
use crate::services::{generate_unique_id, ConfigStore, RecordRepository, RepositoryState};
use clap::Args;
use serde::Serialize;
use tracing::info;

/// Add a lineup from pasted `getpos` output
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Map name (e.g. dust2, mirage)
    #[arg(long)]
    pub map: String,

    /// Side: T or CT
    #[arg(long)]
    pub side: Side,

    /// Grenade: smoke, grenade, mollotov or decoy
    #[arg(long)]
    pub grenade: String,

    /// Lineup name shown on the radio wheel, one word per line
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Output of the `getpos` console command
    #[arg(long, value_name = "TEXT")]
    pub getpos: String,

    /// Radio tab (0-2); picks the first free slot when omitted
    #[arg(long, requires = "text")]
    pub tab: Option<u8>,

    /// Text entry within the tab (1-8)
    #[arg(long, requires = "tab")]
    pub text: Option<u8>,

    /// Replace the lineup already using the chosen slot
    #[arg(long)]
    pub overwrite: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct AddOutput<'a> {
    lineup: &'a LineupRecord,
    replaced: Vec<String>,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let map = parse_map(&self.map)?;
        let grenade = parse_grenade(&self.grenade)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CliError::validation("Lineup name must not be empty"));
        }

        let (repo, mut state) = load_repository()?;
        require_configured(&state.settings)?;
        state.settings.validate()?;

        let getpos = parse_getpos(&self.getpos)?;
        let store = state.settings.store();
        let scope = Scope::new(map.clone(), self.side);

        let (slot, replaced) = self.choose_slot(&store, &scope, &repo, &mut state)?;

        let unique_id = generate_unique_id(&state.existing_ids())?;
        let sensitivity = state.settings.sensitivity;
        let record = LineupRecord {
            message_name: build_message_name(&map, &grenade, &unique_id),
            unique_id,
            side: self.side,
            map,
            grenade,
            display_name: name.to_string(),
            raw_input_angles: self.getpos.trim().to_string(),
            yaw_value: calculate_value(getpos.yaw(), sensitivity),
            pitch_value: calculate_value(getpos.pitch(), sensitivity),
            tab: slot.tab,
            text: slot.text,
        };

        store.commit(&record).map_err(|e| {
            CliError::from(e).with_context("Config files may be partially written")
        })?;
        state.add(record.clone())?;
        repo.save(&state)?;

        if self.json {
            print_json(&AddOutput {
                lineup: &record,
                replaced,
            })?;
        } else {
            println!("✓ Lineup saved");
            println!("  ID:   {}", record.unique_id);
            println!("  Slot: {}", slot);
            for id in &replaced {
                println!("  Replaced: {}", id);
            }
        }

        Ok(())
    }

    /// Picks the slot for the new lineup.
    ///
    /// With `--overwrite`, records already on the slot are deleted from the
    /// files and the repository first; their ids are returned.
    fn choose_slot(
        &self,
        store: &ConfigStore,
        scope: &Scope,
        repo: &RecordRepository,
        state: &mut RepositoryState,
    ) -> CliResult<(Slot, Vec<String>)> {
        let (Some(tab), Some(text)) = (self.tab, self.text) else {
            let slot = store.first_empty_slot(scope)?.ok_or_else(|| {
                CliError::validation(format!("All slots are occupied for {}", scope))
            })?;
            return Ok((slot, Vec::new()));
        };

        let slot = Slot::new(tab, text)?;
        if !store.occupied_slots(scope)?.contains(&slot) {
            return Ok((slot, Vec::new()));
        }
        if !self.overwrite {
            return Err(CliError::validation(format!(
                "Slot {} is already occupied for {}. Use --overwrite to replace it",
                slot, scope
            )));
        }

        let stem = scope.file_stem();
        let occupants: Vec<LineupRecord> = state
            .lineups
            .iter()
            .filter(|record| record.slot() == slot && record.scope().file_stem() == stem)
            .cloned()
            .collect();

        let mut replaced = Vec::with_capacity(occupants.len());
        for record in occupants {
            store.delete_record(&record)?;
            state.remove_by_id(&record.unique_id);
            info!(id = %record.unique_id, %slot, "replaced lineup");
            replaced.push(record.unique_id);
        }
        repo.save(state)?;

        Ok((slot, replaced))
    }
}
