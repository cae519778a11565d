//! Service layer: the generated config file store and the record repository.
//!
//! The store keeps `main.cfg`, `platform_english.txt` and the per-scope
//! label and command tables consistent with each other. The repository holds
//! the records the files are derived from.

pub mod config_store;
pub mod ids;
pub mod repository;
pub mod slot_table;
pub mod text_file;

// Re-export commonly used types and functions
pub use config_store::{ConfigStore, DeleteMatch, RebuildSummary};
pub use ids::generate_unique_id;
pub use repository::{RecordRepository, RepositoryState};
pub use slot_table::{CommandTable, LabelTable, SlotMap, SlotTable};
