//! db-ui - public API
//!
//! The single entry point for the library. Only the items re-exported here
//! are part of the public API.
//!
//! Components: [`Button`], [`Card`], [`Input`], [`Modal`], [`Stack`] and
//! [`Text`]. Tokens are available grouped under [`tokens`] and individually
//! as [`colors`], [`spacing`], [`typography`], [`radius`] and [`elevation`].
//!
//! # Example
//!
//! ```rust
//! use db_ui::{spacing, tokens, Button, ButtonVariant, Component};
//!
//! let node = Button::new("Cancel")
//!     .with_variant(ButtonVariant::Secondary)
//!     .render(tokens::tokens());
//! assert_eq!(node.text_content(), "Cancel");
//! assert_eq!(spacing::SM, 8.0);
//! ```

#![warn(missing_docs)]

// Components
pub use components::{
    AnimationType, Button, ButtonStyles, ButtonVariant, Card, CardVariant, Component, Input,
    InputVariant, Modal, ModalStyles, Stack, StackDirection, Text,
};

// Render tree and styles
pub use components::{
    AccessibilityProps, AccessibilityRole, Alignment, Color, Dimension, FlexDirection, FlexWrap,
    Handler, JustifyContent, Node, ShadowOffset, Style,
};

/// Grouped token namespace
pub use tokens;

// Tokens - individual tables for convenience
pub use tokens::{colors, elevation, radius, spacing, typography};
pub use tokens::{
    ColorToken, ElevationToken, RadiusToken, SpacingToken, TokenError, Tokens, TypographyVariant,
};
