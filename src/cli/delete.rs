//! Delete command: remove a lineup from the config files and the repository.

use crate::cli::common::{load_repository, require_configured, CliError, CliResult};
use crate::services::DeleteMatch;
use clap::Args;

/// Delete a lineup by id
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Lineup id (e.g. ABC123)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Only remove alias and localization lines whose key equals this
    /// lineup's, instead of every line containing the id
    #[arg(long)]
    pub strict: bool,
}

impl DeleteArgs {
    /// Execute the delete command
    pub fn execute(&self) -> CliResult<()> {
        let id = self.id.trim().to_uppercase();
        let (repo, mut state) = load_repository()?;

        let record = state
            .find_by_id(&id)
            .cloned()
            .ok_or_else(|| CliError::validation(format!("Lineup not found: {}", id)))?;
        require_configured(&state.settings)?;

        let delete_match = if self.strict {
            DeleteMatch::StrictKey
        } else {
            DeleteMatch::Substring
        };
        let store = state.settings.store().with_delete_match(delete_match);

        // Files first: if this fails the record stays and the delete can be retried
        store.delete_record(&record).map_err(|e| {
            CliError::from(e).with_context("Config files may be partially updated")
        })?;
        state.remove_by_id(&id);
        repo.save(&state)?;

        println!("✓ Deleted lineup {} ({} {}, {})", id, record.map, record.side, record.slot());
        Ok(())
    }
}
