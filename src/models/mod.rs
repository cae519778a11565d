//! Data models for lineups, slots and scopes.
//!
//! Models are independent of file formats and storage.

pub mod lineup;
pub mod slot;

// Re-export all model types
pub use lineup::{build_message_name, format_lineup_name, LineupRecord};
pub use slot::{Scope, Side, Slot};
