//! Parsing of the CS2 `getpos` console output.

use crate::constants::SENSITIVITY_MULTIPLIER;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static GETPOS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"setpos\s+([-\d.]+)\s+([-\d.]+)\s+([-\d.]+)\s*;\s*setang\s+([-\d.]+)\s+([-\d.]+)\s+([-\d.]+)",
    )
    .expect("getpos pattern is valid")
});

const GETPOS_FORMAT_HINT: &str =
    "Invalid getpos format. Expected: 'setpos X Y Z; setang PITCH YAW ROLL'";

/// Player position and view angles from `getpos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Getpos {
    /// X, Y, Z
    pub setpos: [f64; 3],
    /// Pitch, yaw, roll
    pub setang: [f64; 3],
}

impl Getpos {
    /// Vertical view angle.
    pub const fn pitch(&self) -> f64 {
        self.setang[0]
    }

    /// Horizontal view angle.
    pub const fn yaw(&self) -> f64 {
        self.setang[1]
    }
}

/// Parses `setpos X Y Z; setang PITCH YAW ROLL`.
///
/// The pattern may appear anywhere in the input, surrounded by any amount of
/// whitespace.
///
/// # Example
///
/// ```
/// use csafap::parser::getpos::parse_getpos;
///
/// let pos = parse_getpos("setpos -123.45 678.90 12.34; setang 90.00 -45.00 0.00")?;
/// assert_eq!(pos.yaw(), -45.0);
/// assert_eq!(pos.pitch(), 90.0);
/// # Ok::<(), csafap::error::Error>(())
/// ```
pub fn parse_getpos(raw: &str) -> Result<Getpos> {
    let caps = GETPOS
        .captures(raw.trim())
        .ok_or_else(|| Error::MalformedGetpos(GETPOS_FORMAT_HINT.to_string()))?;

    let mut values = [0.0_f64; 6];
    for (i, value) in values.iter_mut().enumerate() {
        *value = caps[i + 1].parse().map_err(|_| {
            Error::MalformedGetpos(format!(
                "{}: '{}' is not a number",
                GETPOS_FORMAT_HINT,
                &caps[i + 1]
            ))
        })?;
    }

    Ok(Getpos {
        setpos: [values[0], values[1], values[2]],
        setang: [values[3], values[4], values[5]],
    })
}

/// Converts a view angle into mouse movement units.
///
/// `value = angle / (sensitivity * 0.022)`
pub fn calculate_value(angle: f64, sensitivity: f64) -> f64 {
    angle / (sensitivity * SENSITIVITY_MULTIPLIER)
}
