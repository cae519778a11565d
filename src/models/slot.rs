//! Radio wheel slot coordinates and the (map, side) scope they live in.

use crate::constants::{RADIO_TAB_MAX, RADIO_TAB_MIN, RADIO_TEXT_MAX, RADIO_TEXT_MIN};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position in the radio wheel grid.
///
/// Ordering is tab-major, text-minor, which is also the order tables are
/// written in and the order free slots are searched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Radio tab (0-2)
    pub tab: u8,
    /// Text entry within the tab (1-8)
    pub text: u8,
}

impl Slot {
    /// Creates a slot, rejecting coordinates outside the wheel.
    pub fn new(tab: u8, text: u8) -> Result<Self> {
        let slot = Self { tab, text };
        if slot.is_valid() {
            Ok(slot)
        } else {
            Err(Error::InvalidSlot { tab, text })
        }
    }

    /// Whether both coordinates are within the wheel.
    pub fn is_valid(&self) -> bool {
        (RADIO_TAB_MIN..=RADIO_TAB_MAX).contains(&self.tab)
            && (RADIO_TEXT_MIN..=RADIO_TEXT_MAX).contains(&self.text)
    }

    /// Every slot of the wheel in search order.
    pub fn all() -> impl Iterator<Item = Self> {
        (RADIO_TAB_MIN..=RADIO_TAB_MAX)
            .flat_map(|tab| (RADIO_TEXT_MIN..=RADIO_TEXT_MAX).map(move |text| Self { tab, text }))
    }

    /// Cvar name addressing this slot.
    pub fn cvar(&self) -> String {
        format!("cl_radial_radio_tab_{}_text_{}", self.tab, self.text)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab={} text={}", self.tab, self.text)
    }
}

/// Team side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Terrorists
    #[serde(rename = "T")]
    T,
    /// Counter-terrorists
    #[serde(rename = "CT")]
    Ct,
}

impl Side {
    /// Uppercase name as used in file names and repository data.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::T => "T",
            Self::Ct => "CT",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "T" => Ok(Self::T),
            "CT" => Ok(Self::Ct),
            _ => Err(format!("Invalid side '{}'. Must be 'T' or 'CT'", s)),
        }
    }
}

/// A (map, side) pair selecting one label table and one command table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scope {
    /// Map name, case-insensitive
    pub map: String,
    /// Team side
    pub side: Side,
}

impl Scope {
    /// Creates a scope.
    pub fn new(map: impl Into<String>, side: Side) -> Self {
        Self {
            map: map.into(),
            side,
        }
    }

    /// Shared prefix of this scope's table files, e.g. `dust2_T`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.map.to_lowercase(), self.side.as_str())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.map, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bounds() {
        assert!(Slot::new(0, 1).is_ok());
        assert!(Slot::new(2, 8).is_ok());
        assert!(matches!(
            Slot::new(3, 1),
            Err(Error::InvalidSlot { tab: 3, text: 1 })
        ));
        assert!(Slot::new(0, 0).is_err());
        assert!(Slot::new(0, 9).is_err());
    }

    #[test]
    fn test_all_slots_in_search_order() {
        let slots: Vec<Slot> = Slot::all().collect();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0], Slot { tab: 0, text: 1 });
        assert_eq!(slots[1], Slot { tab: 0, text: 2 });
        assert_eq!(slots[8], Slot { tab: 1, text: 1 });
        assert_eq!(slots[23], Slot { tab: 2, text: 8 });

        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(slots, sorted);
    }

    #[test]
    fn test_slot_cvar() {
        assert_eq!(
            Slot { tab: 1, text: 3 }.cvar(),
            "cl_radial_radio_tab_1_text_3"
        );
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("t".parse::<Side>(), Ok(Side::T));
        assert_eq!("CT".parse::<Side>(), Ok(Side::Ct));
        assert_eq!("ct".parse::<Side>(), Ok(Side::Ct));
        assert!("spectator".parse::<Side>().is_err());
    }

    #[test]
    fn test_scope_file_stem() {
        assert_eq!(Scope::new("Dust2", Side::T).file_stem(), "dust2_T");
        assert_eq!(Scope::new("mirage", Side::Ct).file_stem(), "mirage_CT");
    }
}
