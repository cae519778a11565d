//! Settings management CLI commands.

use crate::cli::common::{load_repository, print_json, CliError, CliResult};
use crate::config::Settings;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Settings management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current settings
    Show(ConfigShowArgs),
    /// Set settings values
    Set(ConfigSetArgs),
}

/// Display current settings
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set settings values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// CS2 installation directory
    #[arg(long, value_name = "DIR")]
    cs2_path: Option<PathBuf>,

    /// In-game mouse sensitivity
    #[arg(long, value_name = "VALUE")]
    sensitivity: Option<f64>,
}

/// JSON-serializable settings for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    settings: &'a Settings,
    storage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_dir: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let (repo, state) = load_repository()?;
        let settings = &state.settings;

        if self.json {
            let configured = settings.is_configured();
            return print_json(&ConfigOutput {
                settings,
                storage: repo.path().to_string_lossy().to_string(),
                config_dir: configured.then(|| settings.cfg_dir().to_string_lossy().to_string()),
                resource_dir: configured
                    .then(|| settings.resource_dir().to_string_lossy().to_string()),
            });
        }

        let heading = format!("{} Settings", APP_NAME);
        println!("{}", heading);
        println!("{}", "=".repeat(heading.len()));
        println!();
        if settings.is_configured() {
            println!("CS2 Path:     {}", settings.cs2_path);
            println!("Config Dir:   {}", settings.cfg_dir().display());
            println!("Resource Dir: {}", settings.resource_dir().display());
        } else {
            println!("CS2 Path:     (not configured)");
        }
        println!("Sensitivity:  {}", settings.sensitivity);
        println!("Storage:      {}", repo.path().display());
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.cs2_path.is_none() && self.sensitivity.is_none() {
            return Err(CliError::validation(
                "At least one setting must be specified: --cs2-path or --sensitivity",
            ));
        }

        let (repo, mut state) = load_repository()?;

        if let Some(path) = &self.cs2_path {
            if !path.is_dir() {
                return Err(CliError::validation(format!(
                    "CS2 installation directory does not exist: {}",
                    path.display()
                )));
            }
            state.settings.cs2_path = path.to_string_lossy().to_string();
        }

        if let Some(sensitivity) = self.sensitivity {
            state.settings.sensitivity = sensitivity;
        }

        state.settings.validate()?;
        repo.save(&state)
            .map_err(|e| CliError::io(format!("Failed to save settings: {}", e)))?;

        println!("Settings updated successfully.");
        Ok(())
    }
}
