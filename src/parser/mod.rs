//! Parsing and formatting of the text formats the tool reads and writes.
//!
//! `cfg_lines` covers the four generated config file grammars, `getpos`
//! covers the console output pasted in by the user.

pub mod cfg_lines;
pub mod getpos;

// Re-export commonly used items
pub use cfg_lines::{CommandCodec, LabelCodec, SlotCodec};
pub use getpos::{calculate_value, parse_getpos, Getpos};
