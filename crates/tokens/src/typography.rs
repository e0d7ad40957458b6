//! Typography tokens
//!
//! Each variant maps to a font size and weight pair.

use crate::error::{Result, TokenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Font size scale in pixels
pub mod font_size {
    /// Heading (20px)
    pub const HEADING: f32 = 20.0;
    /// Body (16px)
    pub const BODY: f32 = 16.0;
    /// Caption (13px)
    pub const CAPTION: f32 = 13.0;
}

/// Font weights
pub mod font_weight {
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Semibold (600)
    pub const SEMIBOLD: u16 = 600;
}

/// A font size and weight pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 600)
    pub font_weight: u16,
}

impl TextStyle {
    /// Create a new text style
    pub const fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
        }
    }
}

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyVariant {
    /// Section headings
    Heading,
    /// Running text
    #[default]
    Body,
    /// Helper and error text
    Caption,
}

impl TypographyVariant {
    /// Every variant, largest first
    pub const ALL: [TypographyVariant; 3] = [
        TypographyVariant::Heading,
        TypographyVariant::Body,
        TypographyVariant::Caption,
    ];

    /// Wire name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            TypographyVariant::Heading => "heading",
            TypographyVariant::Body => "body",
            TypographyVariant::Caption => "caption",
        }
    }
}

impl fmt::Display for TypographyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypographyVariant {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        TypographyVariant::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TokenError::unknown("typography", s))
    }
}

/// Typography table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypographyTable {
    /// Headings
    pub heading: TextStyle,
    /// Running text
    pub body: TextStyle,
    /// Captions
    pub caption: TextStyle,
}

impl TypographyTable {
    /// The standard type scale
    pub const fn standard() -> Self {
        Self {
            heading: TextStyle::new(font_size::HEADING, font_weight::SEMIBOLD),
            body: TextStyle::new(font_size::BODY, font_weight::REGULAR),
            caption: TextStyle::new(font_size::CAPTION, font_weight::REGULAR),
        }
    }

    /// Resolve a typography variant
    pub fn get(&self, variant: TypographyVariant) -> TextStyle {
        match variant {
            TypographyVariant::Heading => self.heading,
            TypographyVariant::Body => self.body,
            TypographyVariant::Caption => self.caption,
        }
    }

    /// Resolve a typography variant by its wire name
    pub fn lookup(&self, name: &str) -> Result<TextStyle> {
        name.parse().map(|variant| self.get(variant))
    }
}

impl Default for TypographyTable {
    fn default() -> Self {
        Self::standard()
    }
}
