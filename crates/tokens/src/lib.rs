//! Design tokens for db-ui
//!
//! Five independent, closed tables map semantic names to primitive values:
//!
//! - [`colors`] - hex colors (`primary`, `surface`, `error`, ...)
//! - [`spacing`] - pixel spacing scale (`xs` .. `xl`)
//! - [`typography`] - font size and weight per text variant
//! - [`radius`] - corner radii
//! - [`elevation`] - shadow depth levels
//!
//! Every table is indexed by a key enum, so a lookup for a declared key can
//! never fail. Names arriving as strings go through `FromStr` and are
//! rejected with [`TokenError`] when they fall outside the key set.
//!
//! # Example
//!
//! ```rust
//! use tokens::{tokens, SpacingToken, TypographyVariant};
//!
//! let t = tokens();
//! assert_eq!(t.spacing.get(SpacingToken::Sm), 8.0);
//! assert_eq!(t.typography.get(TypographyVariant::Heading).font_weight, 600);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod colors;
pub mod elevation;
pub mod error;
pub mod radius;
pub mod spacing;
pub mod typography;

use serde::Serialize;

pub use colors::{ColorTable, ColorToken};
pub use elevation::{ElevationTable, ElevationToken};
pub use error::TokenError;
pub use radius::{RadiusTable, RadiusToken};
pub use spacing::{SpacingTable, SpacingToken};
pub use typography::{TextStyle, TypographyTable, TypographyVariant};

/// The grouped token namespace
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tokens {
    /// Color table
    pub colors: ColorTable,
    /// Spacing table
    pub spacing: SpacingTable,
    /// Typography table
    pub typography: TypographyTable,
    /// Radius table
    pub radius: RadiusTable,
    /// Elevation table
    pub elevation: ElevationTable,
}

impl Tokens {
    /// The standard token set
    pub const fn standard() -> Self {
        Self {
            colors: ColorTable::standard(),
            spacing: SpacingTable::standard(),
            typography: TypographyTable::standard(),
            radius: RadiusTable::standard(),
            elevation: ElevationTable::standard(),
        }
    }
}

impl Default for Tokens {
    fn default() -> Self {
        Self::standard()
    }
}

static TOKENS: Tokens = Tokens::standard();

/// The process-wide token set
///
/// Built at compile time and never mutated.
pub fn tokens() -> &'static Tokens {
    &TOKENS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_matches_standard() {
        assert_eq!(*tokens(), Tokens::standard());
        assert!(std::ptr::eq(tokens(), tokens()));
    }

    #[test]
    fn test_tables_match_module_constants() {
        let t = tokens();
        assert_eq!(t.colors.primary, colors::PRIMARY);
        assert_eq!(t.spacing.md, spacing::MD);
        assert_eq!(t.radius.md, radius::MD);
        assert_eq!(t.elevation.high, elevation::HIGH);
        assert_eq!(t.typography.body.font_size, typography::font_size::BODY);
    }

    #[test]
    fn test_serialize_grouped_namespace() {
        let json = serde_json::to_value(tokens()).unwrap();
        assert_eq!(json["colors"]["surface"], "#FFFFFF");
        assert_eq!(json["spacing"]["lg"], 24.0);
        assert_eq!(json["typography"]["caption"]["fontSize"], 13.0);
        assert_eq!(json["elevation"]["low"], 2.0);
    }
}
