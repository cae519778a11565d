//! Slots command: show which radio wheel slots are taken for a map and side.

use crate::cli::common::{load_repository, parse_map, print_json, require_configured, CliResult};
use crate::models::{Scope, Side, Slot};
use clap::Args;
use serde::Serialize;

/// Show occupied slots and the first free slot
#[derive(Debug, Clone, Args)]
pub struct SlotsArgs {
    /// Map name
    #[arg(long)]
    pub map: String,

    /// Side: T or CT
    #[arg(long)]
    pub side: Side,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct SlotsOutput {
    map: String,
    side: Side,
    occupied: Vec<Slot>,
    first_empty: Option<Slot>,
}

impl SlotsArgs {
    /// Execute the slots command
    pub fn execute(&self) -> CliResult<()> {
        let map = parse_map(&self.map)?;
        let (_, state) = load_repository()?;
        require_configured(&state.settings)?;

        let store = state.settings.store();
        let scope = Scope::new(map, self.side);
        let occupied = store.occupied_slots(&scope)?;
        let first_empty = store.first_empty_slot(&scope)?;

        if self.json {
            return print_json(&SlotsOutput {
                map: scope.map,
                side: scope.side,
                occupied: occupied.into_iter().collect(),
                first_empty,
            });
        }

        if occupied.is_empty() {
            println!("No occupied slots.");
        } else {
            let taken: Vec<String> = occupied.iter().map(ToString::to_string).collect();
            println!("Occupied: {}", taken.join(", "));
        }
        match first_empty {
            Some(slot) => println!("First empty: {}", slot),
            None => println!("All slots are occupied."),
        }
        Ok(())
    }
}
