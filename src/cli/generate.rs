//! Generate command: rebuild every config file from the repository.

use crate::cli::common::{load_repository, print_json, require_configured, CliError, CliResult};
use clap::Args;
use serde::Serialize;

/// Regenerate all config files from the saved lineups
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct GenerateOutput {
    records: usize,
    tables: usize,
    config_dir: String,
    resource_dir: String,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let (_, state) = load_repository()?;
        require_configured(&state.settings)?;

        let store = state.settings.store();
        let summary = store.rebuild_all(&state.lineups).map_err(|e| {
            CliError::from(e).with_context("Config files may be partially regenerated")
        })?;

        if self.json {
            return print_json(&GenerateOutput {
                records: summary.records,
                tables: summary.tables,
                config_dir: store.config_root().to_string_lossy().to_string(),
                resource_dir: store.resource_root().to_string_lossy().to_string(),
            });
        }

        println!(
            "✓ Generated config files for {} lineup(s), {} slot table(s)",
            summary.records, summary.tables
        );
        println!("  Config:   {}", store.config_root().display());
        println!("  Resource: {}", store.resource_root().display());
        Ok(())
    }
}
