//! Card component
//!
//! A surface-colored container. The variant picks at most one visual add-on:
//! a hairline border (`Outlined`) or a drop shadow (`Elevated`).

use crate::node::{AccessibilityProps, AccessibilityRole, Node, ViewNode};
use crate::style::{ShadowOffset, Style};
use crate::Component;
use serde::{Deserialize, Serialize};
use tokens::{ElevationToken, SpacingToken, Tokens};

/// Shadow opacity of elevated cards
pub const SHADOW_OPACITY: f32 = 0.1;

/// Card style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// No border, no shadow
    #[default]
    Default,
    /// Drop shadow
    Elevated,
    /// 1px border
    Outlined,
}

/// Card component properties
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Style variant
    pub variant: CardVariant,
    /// Shadow depth, used only by elevated cards
    pub elevation_level: ElevationToken,
    /// Inner padding
    pub padding: SpacingToken,
    /// Caller overrides
    pub style: Style,
    /// Card content
    pub children: Vec<Node>,
    /// Test ID for testing
    pub test_id: Option<String>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            variant: CardVariant::Default,
            elevation_level: ElevationToken::Medium,
            padding: SpacingToken::Md,
            style: Style::default(),
            children: Vec::new(),
            test_id: None,
        }
    }
}

impl Card {
    /// Create a new default card
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an elevated card
    pub fn elevated(level: ElevationToken) -> Self {
        Self {
            variant: CardVariant::Elevated,
            elevation_level: level,
            ..Self::default()
        }
    }

    /// Create an outlined card
    pub fn outlined() -> Self {
        Self {
            variant: CardVariant::Outlined,
            ..Self::default()
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the elevation level
    pub fn with_elevation(mut self, level: ElevationToken) -> Self {
        self.elevation_level = level;
        self
    }

    /// Set the padding
    pub fn with_padding(mut self, padding: SpacingToken) -> Self {
        self.padding = padding;
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Append a child
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Set test ID
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Get the computed style for this card
    pub fn computed_style(&self, tokens: &Tokens) -> Style {
        let mut style = Style {
            background_color: Some(tokens.colors.surface.to_string()),
            border_radius: Some(tokens.radius.md),
            padding: Some(tokens.spacing.get(self.padding)),
            ..Default::default()
        };

        match self.variant {
            CardVariant::Default => {}
            CardVariant::Outlined => {
                style.border_width = Some(1.0);
                style.border_color = Some(tokens.colors.border.to_string());
            }
            CardVariant::Elevated => {
                // offset, radius and native elevation share one source value
                let depth = tokens.elevation.get(self.elevation_level);
                style.shadow_color = Some(tokens.colors.text.to_string());
                style.shadow_offset = Some(ShadowOffset::down(depth));
                style.shadow_opacity = Some(SHADOW_OPACITY);
                style.shadow_radius = Some(depth);
                style.elevation = Some(depth);
            }
        }

        style.merge(&self.style)
    }
}

impl Component for Card {
    fn render(self, tokens: &Tokens) -> Node {
        let style = self.computed_style(tokens);
        Node::View(ViewNode {
            key: None,
            test_id: self.test_id,
            style,
            accessibility: AccessibilityProps::role(AccessibilityRole::None),
            captures_touches: false,
            children: self.children,
        })
    }
}
