//! CSAFAP library
//!
//! Manages the radio wheel lineup configs of Counter-Strike 2: a store that
//! treats `main.cfg`, `platform_english.txt` and the per map/side label and
//! command tables as one slot-keyed table, and a JSON repository holding the
//! lineup records those files are generated from.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
