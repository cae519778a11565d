//! Line grammars for the generated config files.
//!
//! Four formats are handled:
//!
//! ```text
//! main.cfg              alias smoke_yaw_ABC123 "yaw 2045.45 1 1"
//! platform_english.txt  "CFG_DUST2_SMOKE_ABC123"                    "T \n Smoke \n ..."
//! *_labels.cfg          cl_radial_radio_tab_0_text_1 "#CFG_DUST2_SMOKE_ABC123"
//! *_commands.cfg        cl_radial_radio_tab_0_text_1 cmd";smoke_yaw_ABC123;smoke_pitch_ABC123;
//! ```
//!
//! Parsers search each line for the pattern and return `None` for anything
//! else, so hand-edited lines never break reading a file.

use crate::constants::{COMMANDS_SUFFIX, LABELS_SUFFIX};
use crate::models::Slot;
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

/// Spaces between key and value in a localization line.
const LOCALIZATION_GAP: &str = "                    ";

static ALIAS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*alias\s+(\w+?)_(yaw|pitch)_([A-Za-z0-9]+)\s+"(?:yaw|pitch)\s+(\S+)\s+1\s+1""#)
        .expect("alias pattern is valid")
});

static LOCALIZATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"([^"]+)"\s+"(.*)"\s*$"#).expect("localization pattern is valid")
});

static LABEL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"cl_radial_radio_tab_(\d+)_text_(\d+)\s+"(#[^"]+)""#)
        .expect("label pattern is valid")
});

static COMMAND_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"cl_radial_radio_tab_(\d+)_text_(\d+)\s+(.*)").expect("command pattern is valid")
});

/// Mouse axis of an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal
    Yaw,
    /// Vertical
    Pitch,
}

impl Axis {
    /// Lowercase name used in alias names and commands.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yaw => "yaw",
            Self::Pitch => "pitch",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of the alias moving `axis` for a lineup, e.g. `smoke_yaw_ABC123`.
pub fn alias_name(grenade: &str, axis: Axis, unique_id: &str) -> String {
    format!("{}_{}_{}", grenade.to_lowercase(), axis, unique_id)
}

/// Renders a float the way the config files have always carried them:
/// shortest round-trip form, with `.0` kept on integral values.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// One parsed line of `main.cfg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasLine {
    /// Grenade kind, lowercase
    pub grenade: String,
    /// Axis the alias moves
    pub axis: Axis,
    /// Lineup id
    pub unique_id: String,
    /// Movement value as written
    pub value: String,
}

impl AliasLine {
    /// Parses an alias line, returning `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = ALIAS_LINE.captures(line)?;
        let axis = match &caps[2] {
            "yaw" => Axis::Yaw,
            _ => Axis::Pitch,
        };
        Some(Self {
            grenade: caps[1].to_string(),
            axis,
            unique_id: caps[3].to_string(),
            value: caps[4].to_string(),
        })
    }

    /// Whether this alias belongs to the lineup `(grenade, unique_id)`.
    pub fn matches(&self, grenade: &str, unique_id: &str) -> bool {
        self.grenade == grenade.to_lowercase() && self.unique_id == unique_id
    }
}

/// The yaw and pitch alias lines for one lineup, in that order.
pub fn alias_lines(grenade: &str, unique_id: &str, yaw_value: f64, pitch_value: f64) -> [String; 2] {
    [
        format!(
            "alias {} \"yaw {} 1 1\"",
            alias_name(grenade, Axis::Yaw, unique_id),
            format_value(yaw_value)
        ),
        format!(
            "alias {} \"pitch {} 1 1\"",
            alias_name(grenade, Axis::Pitch, unique_id),
            format_value(pitch_value)
        ),
    ]
}

/// One parsed line of `platform_english.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationLine {
    /// Message name
    pub key: String,
    /// Label text, escapes left as written
    pub value: String,
}

impl LocalizationLine {
    /// Parses a localization entry, returning `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = LOCALIZATION_LINE.captures(line)?;
        Some(Self {
            key: caps[1].to_string(),
            value: caps[2].to_string(),
        })
    }
}

/// Formats a localization entry.
pub fn localization_line(message_name: &str, label: &str) -> String {
    format!("\"{}\"{}\"{}\"", message_name, LOCALIZATION_GAP, label)
}

/// Label table value for a message name.
pub fn label_value(message_name: &str) -> String {
    format!("#{}", message_name)
}

/// Command table value running both aliases of a lineup.
pub fn command_value(grenade: &str, unique_id: &str) -> String {
    format!(
        "cmd\";{};{};",
        alias_name(grenade, Axis::Yaw, unique_id),
        alias_name(grenade, Axis::Pitch, unique_id)
    )
}

/// Grammar of a slot-keyed table file.
///
/// Implementations differ only in how the value is delimited on the line.
pub trait SlotCodec {
    /// File name suffix, as in `{map}_{SIDE}_{SUFFIX}.cfg`.
    const SUFFIX: &'static str;

    /// Extracts the slot and raw value from a line.
    fn parse_line(line: &str) -> Option<(Slot, String)>;

    /// Formats one table entry.
    fn format_line(slot: Slot, value: &str) -> String;
}

/// `cl_radial_radio_tab_T_text_N "#MESSAGE"`
#[derive(Debug, Clone, Copy)]
pub struct LabelCodec;

impl SlotCodec for LabelCodec {
    const SUFFIX: &'static str = LABELS_SUFFIX;

    fn parse_line(line: &str) -> Option<(Slot, String)> {
        let caps = LABEL_LINE.captures(line)?;
        Some((slot_from(&caps)?, caps[3].to_string()))
    }

    fn format_line(slot: Slot, value: &str) -> String {
        format!("{} \"{}\"", slot.cvar(), value)
    }
}

/// `cl_radial_radio_tab_T_text_N cmd";...;`
#[derive(Debug, Clone, Copy)]
pub struct CommandCodec;

impl SlotCodec for CommandCodec {
    const SUFFIX: &'static str = COMMANDS_SUFFIX;

    fn parse_line(line: &str) -> Option<(Slot, String)> {
        let caps = COMMAND_LINE.captures(line)?;
        Some((slot_from(&caps)?, caps[3].trim().to_string()))
    }

    fn format_line(slot: Slot, value: &str) -> String {
        format!("{} {}", slot.cvar(), value)
    }
}

// Coordinates outside the wheel make the line unrecognized rather than an error.
fn slot_from(caps: &Captures<'_>) -> Option<Slot> {
    Some(Slot {
        tab: caps[1].parse().ok()?,
        text: caps[2].parse().ok()?,
    })
    .filter(Slot::is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lines_format() {
        let [yaw, pitch] = alias_lines("Smoke", "ABC123", 2045.45, -2045.45);
        assert_eq!(yaw, r#"alias smoke_yaw_ABC123 "yaw 2045.45 1 1""#);
        assert_eq!(pitch, r#"alias smoke_pitch_ABC123 "pitch -2045.45 1 1""#);
    }

    #[test]
    fn test_format_value_matches_existing_files() {
        assert_eq!(format_value(1234.5), "1234.5");
        assert_eq!(format_value(-678.9), "-678.9");
        assert_eq!(format_value(100.0), "100.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(-2045.45), "-2045.45");
    }

    #[test]
    fn test_alias_line_parse() {
        let line = AliasLine::parse(r#"alias mollotov_pitch_X1Y2Z3 "pitch 12.5 1 1""#).unwrap();
        assert_eq!(line.grenade, "mollotov");
        assert_eq!(line.axis, Axis::Pitch);
        assert_eq!(line.unique_id, "X1Y2Z3");
        assert_eq!(line.value, "12.5");
        assert!(line.matches("MOLLOTOV", "X1Y2Z3"));
        assert!(!line.matches("mollotov", "X1Y2Z"));

        assert!(AliasLine::parse("bind mouse5 +jumpthrow").is_none());
        assert!(AliasLine::parse("// alias notes").is_none());
    }

    #[test]
    fn test_localization_line_format_and_parse() {
        let line = localization_line(
            "CFG_DUST2_SMOKE_ABC123",
            "T \\n Smoke \\n  \\n  \\n  \\n  \\n ",
        );
        assert_eq!(
            line,
            r#""CFG_DUST2_SMOKE_ABC123"                    "T \n Smoke \n  \n  \n  \n  \n ""#
        );

        let parsed = LocalizationLine::parse(&line).unwrap();
        assert_eq!(parsed.key, "CFG_DUST2_SMOKE_ABC123");
        assert_eq!(parsed.value, "T \\n Smoke \\n  \\n  \\n  \\n  \\n ");

        assert!(LocalizationLine::parse("\"lang\"").is_none());
        assert!(LocalizationLine::parse("{").is_none());
    }

    #[test]
    fn test_label_codec() {
        let slot = Slot { tab: 1, text: 3 };
        let line = LabelCodec::format_line(slot, "#CFG_DUST2_SMOKE_ABC123");
        assert_eq!(line, r##"cl_radial_radio_tab_1_text_3 "#CFG_DUST2_SMOKE_ABC123""##);
        assert_eq!(
            LabelCodec::parse_line(&line),
            Some((slot, "#CFG_DUST2_SMOKE_ABC123".to_string()))
        );

        // Value must carry the '#' prefix
        assert!(LabelCodec::parse_line(r#"cl_radial_radio_tab_1_text_3 "plain""#).is_none());
        assert!(LabelCodec::parse_line("// comment").is_none());
    }

    #[test]
    fn test_command_codec() {
        let slot = Slot { tab: 0, text: 8 };
        let value = command_value("Smoke", "ABC123");
        assert_eq!(value, r#"cmd";smoke_yaw_ABC123;smoke_pitch_ABC123;"#);

        let line = CommandCodec::format_line(slot, &value);
        assert_eq!(
            line,
            r#"cl_radial_radio_tab_0_text_8 cmd";smoke_yaw_ABC123;smoke_pitch_ABC123;"#
        );
        assert_eq!(CommandCodec::parse_line(&format!("{}  \r", line)), Some((slot, value)));
    }

    #[test]
    fn test_oversized_slot_numbers_are_skipped() {
        assert!(CommandCodec::parse_line("cl_radial_radio_tab_999_text_1 cmd").is_none());
    }

    #[test]
    fn test_slots_outside_the_wheel_are_skipped() {
        assert!(LabelCodec::parse_line(r##"cl_radial_radio_tab_5_text_9 "#CFG_X""##).is_none());
        assert!(LabelCodec::parse_line(r##"cl_radial_radio_tab_0_text_0 "#CFG_X""##).is_none());
        assert!(CommandCodec::parse_line("cl_radial_radio_tab_3_text_1 cmd").is_none());
        assert!(CommandCodec::parse_line("cl_radial_radio_tab_2_text_8 cmd").is_some());
    }

    #[test]
    fn test_label_value() {
        assert_eq!(label_value("CFG_X"), "#CFG_X");
    }
}
