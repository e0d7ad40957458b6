//! Text component

use crate::node::{Node, TextNode};
use crate::style::Style;
use crate::Component;
use tokens::{ColorToken, Tokens, TypographyVariant};

/// Text component properties
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Typography variant
    pub variant: TypographyVariant,
    /// Color token
    pub color: ColorToken,
    /// Caller overrides
    pub style: Style,
    /// Test ID for testing
    pub test_id: Option<String>,
}

impl Text {
    /// Create body text in the text color
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TypographyVariant::Body,
            color: ColorToken::Text,
            style: Style::default(),
            test_id: None,
        }
    }

    /// Create a heading
    pub fn heading(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TypographyVariant::Heading)
    }

    /// Create caption text
    pub fn caption(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TypographyVariant::Caption)
    }

    /// Set typography variant
    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set test ID
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Get the computed style for this text
    pub fn computed_style(&self, tokens: &Tokens) -> Style {
        let typography = tokens.typography.get(self.variant);
        Style {
            font_size: Some(typography.font_size),
            font_weight: Some(typography.font_weight),
            color: Some(tokens.colors.get(self.color).to_string()),
            ..Default::default()
        }
        .merge(&self.style)
    }
}

impl Component for Text {
    fn render(self, tokens: &Tokens) -> Node {
        let style = self.computed_style(tokens);
        Node::Text(TextNode {
            test_id: self.test_id,
            style,
            content: self.content,
            ..Default::default()
        })
    }
}
