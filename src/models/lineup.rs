//! Lineup records and the names derived from them.

use crate::models::{Scope, Side, Slot};
use serde::{Deserialize, Serialize};

/// A committed lineup.
///
/// Records are owned by the repository. The generated config files only hold
/// copies of these fields and can be rebuilt from the record list at any time.
///
/// `display_name` and `raw_input_angles` serialize as `name` and `raw_getpos`
/// so existing `lineups.json` files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupRecord {
    /// Six character uppercase alphanumeric id, unique across the repository
    pub unique_id: String,
    /// Team side
    pub side: Side,
    /// Map name
    pub map: String,
    /// Grenade kind
    pub grenade: String,
    /// Name as typed by the user, e.g. "t smoke jungle"
    #[serde(rename = "name")]
    pub display_name: String,
    /// Pasted `getpos` console output the values were computed from
    #[serde(rename = "raw_getpos", default)]
    pub raw_input_angles: String,
    /// Horizontal mouse movement
    pub yaw_value: f64,
    /// Vertical mouse movement
    pub pitch_value: f64,
    /// Localization key, see [`build_message_name`]
    pub message_name: String,
    /// Radio tab
    pub tab: u8,
    /// Text entry within the tab
    pub text: u8,
}

impl LineupRecord {
    /// Slot this record occupies.
    pub const fn slot(&self) -> Slot {
        Slot {
            tab: self.tab,
            text: self.text,
        }
    }

    /// (map, side) scope of this record's tables.
    pub fn scope(&self) -> Scope {
        Scope::new(self.map.clone(), self.side)
    }

    /// Label text written to the localization file.
    pub fn formatted_label(&self) -> String {
        format_lineup_name(&self.display_name)
    }
}

/// Builds the localization key shared by the label table and localization file.
///
/// Format: `CFG_{MAP}_{GRENADE}_{ID}`, all uppercase.
pub fn build_message_name(map: &str, grenade: &str, unique_id: &str) -> String {
    format!(
        "CFG_{}_{}_{}",
        map.to_uppercase(),
        grenade.to_uppercase(),
        unique_id.to_uppercase()
    )
}

/// Formats a lineup name for the radio wheel.
///
/// Each word is capitalized and words are joined with a literal `\n` escape.
/// Five trailing blank lines keep the wheel entries the same height.
///
/// `"t smoke jungle"` becomes `T \n Smoke \n Jungle \n  \n  \n  \n  \n `.
pub fn format_lineup_name(raw_name: &str) -> String {
    let words: Vec<String> = raw_name.split_whitespace().map(capitalize).collect();
    let mut label = words.join(" \\n ");
    label.push_str(" \\n  \\n  \\n  \\n  \\n ");
    label
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
