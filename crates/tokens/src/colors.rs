//! Color tokens
//!
//! Brand palette shared by every component. Values are hex strings the
//! host toolkit understands directly.

use crate::error::{Result, TokenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Brand purple (#A076F9)
pub const PRIMARY: &str = "#A076F9";
/// Screen background (#F7F2FF)
pub const BACKGROUND: &str = "#F7F2FF";
/// Card and control surface (#FFFFFF)
pub const SURFACE: &str = "#FFFFFF";
/// Body text (#3D2C8D)
pub const TEXT: &str = "#3D2C8D";
/// De-emphasized text and placeholders (#BDBDBD)
pub const MUTED: &str = "#BDBDBD";
/// Hairlines and outlines (#EAE4F2)
pub const BORDER: &str = "#EAE4F2";
/// Validation errors (#D32F2F)
pub const ERROR: &str = "#D32F2F";
/// Positive feedback (#388E3C)
pub const SUCCESS: &str = "#388E3C";

/// Semantic color names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    /// Brand color
    Primary,
    /// Screen background
    Background,
    /// Card and control surface
    Surface,
    /// Body text
    #[default]
    Text,
    /// Muted text
    Muted,
    /// Borders
    Border,
    /// Errors
    Error,
    /// Success
    Success,
}

impl ColorToken {
    /// Every color key, in declaration order
    pub const ALL: [ColorToken; 8] = [
        ColorToken::Primary,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::Text,
        ColorToken::Muted,
        ColorToken::Border,
        ColorToken::Error,
        ColorToken::Success,
    ];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::Text => "text",
            ColorToken::Muted => "muted",
            ColorToken::Border => "border",
            ColorToken::Error => "error",
            ColorToken::Success => "success",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        ColorToken::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TokenError::unknown("color", s))
    }
}

/// Color table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTable {
    /// Brand color
    pub primary: &'static str,
    /// Screen background
    pub background: &'static str,
    /// Card and control surface
    pub surface: &'static str,
    /// Body text
    pub text: &'static str,
    /// Muted text
    pub muted: &'static str,
    /// Borders
    pub border: &'static str,
    /// Errors
    pub error: &'static str,
    /// Success
    pub success: &'static str,
}

impl ColorTable {
    /// The standard palette
    pub const fn standard() -> Self {
        Self {
            primary: PRIMARY,
            background: BACKGROUND,
            surface: SURFACE,
            text: TEXT,
            muted: MUTED,
            border: BORDER,
            error: ERROR,
            success: SUCCESS,
        }
    }

    /// Resolve a color key
    pub fn get(&self, key: ColorToken) -> &'static str {
        match key {
            ColorToken::Primary => self.primary,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::Text => self.text,
            ColorToken::Muted => self.muted,
            ColorToken::Border => self.border,
            ColorToken::Error => self.error,
            ColorToken::Success => self.success,
        }
    }

    /// Resolve a color by its wire name
    pub fn lookup(&self, name: &str) -> Result<&'static str> {
        name.parse().map(|key| self.get(key))
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves() {
        let table = ColorTable::standard();
        for key in ColorToken::ALL {
            assert!(table.get(key).starts_with('#'), "{key} has no hex value");
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for key in ColorToken::ALL {
            assert_eq!(key.as_str().parse::<ColorToken>(), Ok(key));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "brand".parse::<ColorToken>().unwrap_err();
        assert_eq!(
            err,
            TokenError::UnknownKey {
                table: "color",
                key: "brand".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unknown color token: brand");
    }

    #[test]
    fn test_lookup() {
        let table = ColorTable::standard();
        assert_eq!(table.lookup("error").unwrap(), ERROR);
        assert!(table.lookup("Error").is_err());
    }

    #[test]
    fn test_serde_wire_name() {
        let json = serde_json::to_string(&ColorToken::Success).unwrap();
        assert_eq!(json, "\"success\"");
        let key: ColorToken = serde_json::from_str("\"muted\"").unwrap();
        assert_eq!(key, ColorToken::Muted);
    }
}
