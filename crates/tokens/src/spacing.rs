//! Spacing scale in pixels, t-shirt sized on a 4px base unit

use crate::error::{Result, TokenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 4px - Extra small
pub const XS: f32 = 4.0;
/// 8px - Small
pub const SM: f32 = 8.0;
/// 16px - Medium
pub const MD: f32 = 16.0;
/// 24px - Large
pub const LG: f32 = 24.0;
/// 32px - Extra large
pub const XL: f32 = 32.0;

/// Spacing keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingToken {
    /// 4px
    Xs,
    /// 8px
    Sm,
    /// 16px
    #[default]
    Md,
    /// 24px
    Lg,
    /// 32px
    Xl,
}

impl SpacingToken {
    /// Every spacing key, smallest first
    pub const ALL: [SpacingToken; 5] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
    ];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            SpacingToken::Xs => "xs",
            SpacingToken::Sm => "sm",
            SpacingToken::Md => "md",
            SpacingToken::Lg => "lg",
            SpacingToken::Xl => "xl",
        }
    }
}

impl fmt::Display for SpacingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpacingToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        SpacingToken::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TokenError::unknown("spacing", s))
    }
}

/// Spacing table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingTable {
    /// 4px
    pub xs: f32,
    /// 8px
    pub sm: f32,
    /// 16px
    pub md: f32,
    /// 24px
    pub lg: f32,
    /// 32px
    pub xl: f32,
}

impl SpacingTable {
    /// The standard scale
    pub const fn standard() -> Self {
        Self {
            xs: XS,
            sm: SM,
            md: MD,
            lg: LG,
            xl: XL,
        }
    }

    /// Resolve a spacing key
    pub fn get(&self, key: SpacingToken) -> f32 {
        match key {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
        }
    }

    /// Resolve spacing by its wire name
    pub fn lookup(&self, name: &str) -> Result<f32> {
        name.parse().map(|key| self.get(key))
    }
}

impl Default for SpacingTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_increasing() {
        let table = SpacingTable::standard();
        let values: Vec<f32> = SpacingToken::ALL.iter().map(|k| table.get(*k)).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_default_key_is_md() {
        assert_eq!(SpacingToken::default(), SpacingToken::Md);
        assert_eq!(SpacingTable::standard().get(SpacingToken::default()), MD);
    }

    #[test]
    fn test_lookup() {
        let table = SpacingTable::standard();
        assert_eq!(table.lookup("sm").unwrap(), 8.0);
        assert_eq!(
            table.lookup("2xl").unwrap_err().to_string(),
            "Unknown spacing token: 2xl"
        );
    }
}
