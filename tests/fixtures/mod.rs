//! Shared test fixtures for store and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use csafap::models::{build_message_name, LineupRecord, Side};
use csafap::services::ConfigStore;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Creates a record on dust2 T with a deterministic id.
///
/// # Arguments
/// * `unique_id` - Lineup id, also used for the message name
/// * `tab` - Radio tab
/// * `text` - Text entry within the tab
pub fn test_record(unique_id: &str, tab: u8, text: u8) -> LineupRecord {
    test_record_on("dust2", Side::T, "smoke", unique_id, tab, text)
}

/// Creates a record on an arbitrary map, side and grenade.
pub fn test_record_on(
    map: &str,
    side: Side,
    grenade: &str,
    unique_id: &str,
    tab: u8,
    text: u8,
) -> LineupRecord {
    LineupRecord {
        unique_id: unique_id.to_string(),
        side,
        map: map.to_string(),
        grenade: grenade.to_string(),
        display_name: format!("{} {} lineup", side, grenade),
        raw_input_angles: "setpos 0 0 0; setang 45.0 -45.0 0.0".to_string(),
        yaw_value: 2045.45,
        pitch_value: -2045.45,
        message_name: build_message_name(map, grenade, unique_id),
        tab,
        text,
    }
}

/// Creates a store rooted in a fresh temp dir laid out like a CS2 install.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn temp_store() -> (ConfigStore, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let store = ConfigStore::new(
        temp.path().join("csgo").join("cfg").join("CSAFAP"),
        temp.path().join("csgo").join("resource"),
    );
    (store, temp)
}

/// Reads a file, returning an empty string if it does not exist.
pub fn read_or_empty(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// Snapshot of every file under `root`, sorted by path.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect_files(root, &mut files);
    files.sort();
    files
}

fn collect_files(dir: &Path, files: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, files);
        } else {
            let content = fs::read_to_string(&path).expect("Failed to read file");
            files.push((path, content));
        }
    }
}

/// Isolated environment for running the CLI binary.
///
/// `data` holds `lineups.json`, `cs2` stands in for the CS2 installation.
pub struct CliEnv {
    pub temp: TempDir,
    pub data: PathBuf,
    pub cs2: PathBuf,
}

impl CliEnv {
    /// Creates an environment with the CS2 directory present but not configured.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let data = temp.path().join("data");
        let cs2 = temp.path().join("cs2");
        fs::create_dir_all(&cs2).expect("Failed to create cs2 dir");
        Self { temp, data, cs2 }
    }

    /// Creates an environment with `cs2_path` already configured.
    pub fn configured() -> Self {
        let env = Self::new();
        let output = env.run(&["config", "set", "--cs2-path", env.cs2.to_str().unwrap()]);
        assert_success(&output);
        env
    }

    /// Runs the binary with `CSAFAP_DATA_DIR` pointing into this environment.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_csafap"))
            .env("CSAFAP_DATA_DIR", &self.data)
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Directory the slot tables and main.cfg are generated into.
    pub fn cfg_dir(&self) -> PathBuf {
        self.cs2.join("csgo").join("cfg").join("CSAFAP")
    }

    /// Directory holding platform_english.txt.
    pub fn resource_dir(&self) -> PathBuf {
        self.cs2.join("csgo").join("resource")
    }

    /// Parsed `lineups.json`.
    pub fn repository_json(&self) -> serde_json::Value {
        let content =
            fs::read_to_string(self.data.join("lineups.json")).expect("Failed to read lineups.json");
        serde_json::from_str(&content).expect("lineups.json should be valid JSON")
    }
}

/// Asserts exit code 0, showing stderr otherwise.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Stdout parsed as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// A getpos line with the given view angles.
pub fn getpos(pitch: f64, yaw: f64) -> String {
    format!("setpos -1.0 2.0 3.0; setang {:.2} {:.2} 0.00", pitch, yaw)
}
