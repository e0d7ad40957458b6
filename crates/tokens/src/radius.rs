//! Border radius tokens

use crate::error::{Result, TokenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Small radius (4px)
pub const SM: f32 = 4.0;
/// Medium radius (8px)
pub const MD: f32 = 8.0;
/// Large radius (16px)
pub const LG: f32 = 16.0;

/// Radius keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusToken {
    /// 4px
    Sm,
    /// 8px
    #[default]
    Md,
    /// 16px
    Lg,
}

impl RadiusToken {
    /// Every radius key, smallest first
    pub const ALL: [RadiusToken; 3] = [RadiusToken::Sm, RadiusToken::Md, RadiusToken::Lg];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiusToken::Sm => "sm",
            RadiusToken::Md => "md",
            RadiusToken::Lg => "lg",
        }
    }
}

impl fmt::Display for RadiusToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RadiusToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        RadiusToken::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TokenError::unknown("radius", s))
    }
}

/// Radius table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusTable {
    /// Small
    pub sm: f32,
    /// Medium
    pub md: f32,
    /// Large
    pub lg: f32,
}

impl RadiusTable {
    /// The standard scale
    pub const fn standard() -> Self {
        Self {
            sm: SM,
            md: MD,
            lg: LG,
        }
    }

    /// Resolve a radius key
    pub fn get(&self, key: RadiusToken) -> f32 {
        match key {
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
        }
    }

    /// Resolve a radius by its wire name
    pub fn lookup(&self, name: &str) -> Result<f32> {
        name.parse().map(|key| self.get(key))
    }
}

impl Default for RadiusTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_values() {
        let table = RadiusTable::standard();
        assert_eq!(table.get(RadiusToken::Sm), 4.0);
        assert_eq!(table.get(RadiusToken::Md), 8.0);
        assert_eq!(table.get(RadiusToken::Lg), 16.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("lg".parse::<RadiusToken>(), Ok(RadiusToken::Lg));
        assert!("full".parse::<RadiusToken>().is_err());
    }

    #[test]
    fn test_lookup() {
        let table = RadiusTable::standard();
        assert_eq!(table.lookup("md"), Ok(8.0));
        assert_eq!(
            table.lookup("full"),
            Err(TokenError::UnknownKey {
                table: "radius",
                key: "full".to_string()
            })
        );
    }
}
