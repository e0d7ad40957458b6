//! db-ui component library
//!
//! Styled presentational wrappers around the host toolkit's primitives.
//! Every component is a props struct with builder setters; rendering is a
//! pure function of the props and the [`Tokens`] it is given.
//!
//! Style resolution follows the same order everywhere:
//!
//! 1. variant defaults taken from the token tables
//! 2. structural flags (`disabled`, `error`)
//! 3. the caller's style override, merged last with [`Style::merge`]
//!
//! # Available Components
//!
//! - [`Button`] - pressable label, primary or secondary
//! - [`Card`] - surface container, optionally outlined or elevated
//! - [`Input`] - controlled text input
//! - [`Modal`] - controlled overlay with backdrop dismissal
//! - [`Stack`] - one-axis layout with a gap between children
//! - [`Text`] - typography-token text
//!
//! # Example
//!
//! ```rust
//! use components::{Button, ButtonVariant, Component, Stack, Text};
//! use tokens::{tokens, SpacingToken};
//!
//! let t = tokens();
//! let screen = Stack::row()
//!     .with_gap(SpacingToken::Sm)
//!     .child(Text::heading("Hello").render(t))
//!     .child(Button::new("Continue").with_variant(ButtonVariant::Secondary).render(t))
//!     .render(t);
//! assert_eq!(screen.children().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod button;
pub mod card;
pub mod input;
pub mod modal;
pub mod node;
pub mod stack;
pub mod style;
pub mod text;

pub use button::{Button, ButtonStyles, ButtonVariant};
pub use card::{Card, CardVariant};
pub use input::{Input, InputVariant};
pub use modal::{AnimationType, Modal, ModalStyles};
pub use node::{
    AccessibilityProps, AccessibilityRole, Handler, ModalNode, Node, TextInputNode, TextNode,
    TouchableNode, ViewNode,
};
pub use stack::{arrange, flow_direction, gap_inset, Stack, StackDirection};
pub use style::{
    Alignment, Color, Dimension, FlexDirection, FlexWrap, JustifyContent, ShadowOffset, Style,
};
pub use text::Text;

use tokens::Tokens;

/// A component that renders to host primitives
pub trait Component {
    /// Build the render tree for this component
    fn render(self, tokens: &Tokens) -> Node;
}
