//! Application-wide constants.
//!
//! The enumerations here (maps, grenades, slot ranges) are owned by the
//! command-line front end; the store only consumes them.

/// Display name of the application.
pub const APP_NAME: &str = "CSAFAP";

/// Name of the installed binary, used in help and error hints.
pub const APP_BINARY_NAME: &str = "csafap";

/// Environment variable that overrides the storage directory.
pub const DATA_DIR_ENV: &str = "CSAFAP_DATA_DIR";

/// Default storage directory name under the user's home directory.
pub const DEFAULT_DATA_DIR_NAME: &str = ".csafap";

/// File holding the persisted record repository.
pub const REPOSITORY_FILE: &str = "lineups.json";

/// Shared alias file inside the config root.
pub const ALIAS_FILE: &str = "main.cfg";

/// Shared localization file inside the resource root.
pub const LOCALIZATION_FILE: &str = "platform_english.txt";

/// Suffix of the per-scope label table file.
pub const LABELS_SUFFIX: &str = "labels";

/// Suffix of the per-scope command table file.
pub const COMMANDS_SUFFIX: &str = "commands";

/// Maps with a radio wheel configuration.
pub const MAPS: &[&str] = &[
    "ancient", "anubis", "dust2", "inferno", "mirage", "nuke", "vertigo", "overpass", "train",
];

/// Grenade kinds. "mollotov" keeps the spelling used by existing config files.
pub const GRENADES: &[&str] = &["smoke", "grenade", "mollotov", "decoy"];

/// Default mouse sensitivity.
pub const DEFAULT_SENSITIVITY: f64 = 1.0;

/// Degrees of view rotation per mouse unit at sensitivity 1.0.
pub const SENSITIVITY_MULTIPLIER: f64 = 0.022;

/// First radio wheel tab.
pub const RADIO_TAB_MIN: u8 = 0;
/// Last radio wheel tab.
pub const RADIO_TAB_MAX: u8 = 2;
/// First text entry within a tab.
pub const RADIO_TEXT_MIN: u8 = 1;
/// Last text entry within a tab.
pub const RADIO_TEXT_MAX: u8 = 8;

/// Length of a generated lineup id.
pub const ID_LENGTH: usize = 6;

/// Alphabet ids are drawn from.
pub const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Upper bound on id draws before giving up.
pub const MAX_ID_ATTEMPTS: usize = 1000;
