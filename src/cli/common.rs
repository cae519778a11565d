//! Shared CLI error type, exit codes and helpers.

use crate::config::Settings;
use crate::constants::{APP_BINARY_NAME, GRENADES, MAPS};
use crate::error::{Error, ErrorKind};
use crate::services::{RecordRepository, RepositoryState};
use serde::Serialize;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad arguments, unknown ids, occupied or exhausted slots
    Validation = 1,
    /// Filesystem or data file failure
    Io = 2,
}

/// Error reported by a CLI command.
#[derive(Debug)]
pub struct CliError {
    /// Exit code the process should end with
    pub code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// A validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// An I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Prefixes the message with `context`.
    pub fn with_context(mut self, context: &str) -> Self {
        self.message = format!("{}: {}", context, self.message);
        self
    }

    /// Numeric exit code.
    pub const fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        match err.kind() {
            ErrorKind::Io => Self::io(err.to_string()),
            ErrorKind::MalformedInput
            | ErrorKind::Conflict
            | ErrorKind::Exhausted
            | ErrorKind::InvalidInput => Self::validation(err.to_string()),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Opens the repository in the default storage directory and loads it.
pub fn load_repository() -> CliResult<(RecordRepository, RepositoryState)> {
    let repo = RecordRepository::open_default()?;
    let state = repo.load()?;
    Ok((repo, state))
}

/// Fails unless the CS2 path is configured.
pub fn require_configured(settings: &Settings) -> CliResult<()> {
    if settings.is_configured() {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "CS2 installation path is not set. Run: {} config set --cs2-path <DIR>",
            APP_BINARY_NAME
        )))
    }
}

/// Normalizes a map name, rejecting unknown maps.
pub fn parse_map(map: &str) -> CliResult<String> {
    let map = map.to_lowercase();
    if MAPS.contains(&map.as_str()) {
        Ok(map)
    } else {
        Err(CliError::validation(format!(
            "Unknown map '{}'. Valid maps: {}",
            map,
            MAPS.join(", ")
        )))
    }
}

/// Normalizes a grenade name, rejecting unknown grenades.
pub fn parse_grenade(grenade: &str) -> CliResult<String> {
    let grenade = grenade.to_lowercase();
    if GRENADES.contains(&grenade.as_str()) {
        Ok(grenade)
    } else {
        Err(CliError::validation(format!(
            "Unknown grenade '{}'. Valid grenades: {}",
            grenade,
            GRENADES.join(", ")
        )))
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}
