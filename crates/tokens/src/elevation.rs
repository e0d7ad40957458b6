//! Elevation levels
//!
//! A level is a single number that drives shadow depth. Components feed the
//! same value into shadow offset, shadow radius and the platform-native
//! elevation so the three never drift apart.

use crate::error::{Result, TokenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Low elevation (2)
pub const LOW: f32 = 2.0;
/// Medium elevation (4)
pub const MEDIUM: f32 = 4.0;
/// High elevation (8)
pub const HIGH: f32 = 8.0;

/// Elevation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElevationToken {
    /// Resting cards
    Low,
    /// Raised cards
    #[default]
    Medium,
    /// Overlays and dialogs
    High,
}

impl ElevationToken {
    /// Every elevation key, lowest first
    pub const ALL: [ElevationToken; 3] = [
        ElevationToken::Low,
        ElevationToken::Medium,
        ElevationToken::High,
    ];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            ElevationToken::Low => "low",
            ElevationToken::Medium => "medium",
            ElevationToken::High => "high",
        }
    }
}

impl fmt::Display for ElevationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElevationToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        ElevationToken::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TokenError::unknown("elevation", s))
    }
}

/// Elevation table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationTable {
    /// Low
    pub low: f32,
    /// Medium
    pub medium: f32,
    /// High
    pub high: f32,
}

impl ElevationTable {
    /// The standard levels
    pub const fn standard() -> Self {
        Self {
            low: LOW,
            medium: MEDIUM,
            high: HIGH,
        }
    }

    /// Resolve an elevation key
    pub fn get(&self, key: ElevationToken) -> f32 {
        match key {
            ElevationToken::Low => self.low,
            ElevationToken::Medium => self.medium,
            ElevationToken::High => self.high,
        }
    }

    /// Resolve an elevation level by its wire name
    pub fn lookup(&self, name: &str) -> Result<f32> {
        name.parse().map(|key| self.get(key))
    }
}

impl Default for ElevationTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_increasing() {
        let table = ElevationTable::standard();
        assert!(table.get(ElevationToken::Low) < table.get(ElevationToken::Medium));
        assert!(table.get(ElevationToken::Medium) < table.get(ElevationToken::High));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "extreme".parse::<ElevationToken>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown elevation token: extreme");
    }

    #[test]
    fn test_lookup() {
        let table = ElevationTable::standard();
        assert_eq!(table.lookup("high"), Ok(8.0));
        assert!(table.lookup("extreme").is_err());
    }
}
