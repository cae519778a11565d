//! List command: show the lineups stored in the repository.

use crate::cli::common::{load_repository, parse_map, print_json, CliResult};
use crate::models::{LineupRecord, Side};
use clap::Args;

/// List saved lineups
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Only lineups on this map
    #[arg(long)]
    pub map: Option<String>,

    /// Only lineups for this side
    #[arg(long)]
    pub side: Option<Side>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let map = self.map.as_deref().map(parse_map).transpose()?;
        let (_, state) = load_repository()?;

        let lineups: Vec<&LineupRecord> = state
            .lineups
            .iter()
            .filter(|record| {
                map.as_ref()
                    .map_or(true, |map| record.map.eq_ignore_ascii_case(map))
            })
            .filter(|record| self.side.map_or(true, |side| record.side == side))
            .collect();

        if self.json {
            return print_json(&lineups);
        }

        if lineups.is_empty() {
            println!("No lineups saved.");
            return Ok(());
        }

        println!(
            "{:<8} {:<10} {:<4} {:<10} {:<14} NAME",
            "ID", "MAP", "SIDE", "GRENADE", "SLOT"
        );
        for record in lineups {
            println!(
                "{:<8} {:<10} {:<4} {:<10} {:<14} {}",
                record.unique_id,
                record.map,
                record.side.as_str(),
                record.grenade,
                record.slot().to_string(),
                record.display_name
            );
        }
        Ok(())
    }
}
