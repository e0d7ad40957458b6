//! Button component

use crate::node::{AccessibilityProps, AccessibilityRole, Handler, Node, TextNode, TouchableNode};
use crate::style::{Alignment, Style};
use crate::Component;
use serde::{Deserialize, Serialize};
use tokens::{Tokens, TypographyVariant};

/// Opacity applied to disabled buttons
pub const DISABLED_OPACITY: f32 = 0.5;

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled with the brand color, surface-colored label
    #[default]
    Primary,
    /// Surface fill, brand-colored label and outline
    Secondary,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Label text, also used as the accessibility label
    pub title: String,
    /// Style variant
    pub variant: ButtonVariant,
    /// Whether the button ignores presses
    pub disabled: bool,
    /// On press handler
    pub on_press: Option<Handler>,
    /// Caller overrides for the container style
    pub style: Style,
    /// Test ID for testing
    pub test_id: Option<String>,
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonStyles {
    /// Touchable container
    pub container: Style,
    /// Label text
    pub label: Style,
}

impl Button {
    /// Create a new button with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant: ButtonVariant::default(),
            disabled: false,
            on_press: None,
            style: Style::default(),
            test_id: None,
        }
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_press = Some(Handler::new(move |()| f()));
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

    /// Get the computed styles for this button
    ///
    /// Disabled only dims the button; it never changes colors.
    pub fn computed_styles(&self, tokens: &Tokens) -> ButtonStyles {
        let colors = &tokens.colors;
        let (background, text_color) = match self.variant {
            ButtonVariant::Primary => (colors.primary, colors.surface),
            ButtonVariant::Secondary => (colors.surface, colors.primary),
        };
        let (border_color, border_width) = match self.variant {
            ButtonVariant::Primary => (None, 0.0),
            ButtonVariant::Secondary => (Some(colors.primary.to_string()), 1.0),
        };

        let container = Style {
            background_color: Some(background.to_string()),
            border_color,
            border_width: Some(border_width),
            padding_vertical: Some(tokens.spacing.sm),
            padding_horizontal: Some(tokens.spacing.md),
            border_radius: Some(tokens.radius.md),
            align_items: Some(Alignment::Center),
            opacity: Some(if self.disabled { DISABLED_OPACITY } else { 1.0 }),
            ..Default::default()
        };

        let body = tokens.typography.get(TypographyVariant::Body);
        let label = Style {
            color: Some(text_color.to_string()),
            font_size: Some(body.font_size),
            font_weight: Some(body.font_weight),
            ..Default::default()
        };

        ButtonStyles {
            container: container.merge(&self.style),
            label,
        }
    }
}

impl Component for Button {
    fn render(self, tokens: &Tokens) -> Node {
        let ButtonStyles { container, label } = self.computed_styles(tokens);

        Node::Touchable(TouchableNode {
            key: None,
            test_id: self.test_id,
            style: container,
            accessibility: AccessibilityProps {
                role: Some(AccessibilityRole::Button),
                label: Some(self.title.clone()),
                disabled: Some(self.disabled),
                ..Default::default()
            },
            active_opacity: None,
            disabled: self.disabled,
            on_press: self.on_press,
            children: vec![Node::Text(TextNode {
                style: label,
                content: self.title,
                ..Default::default()
            })],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokens::tokens;

    #[test]
    fn test_button_new() {
        let button = Button::new("Click me");
        assert_eq!(button.title, "Click me");
        assert_eq!(button.variant, ButtonVariant::Primary);
        assert!(!button.disabled);
        assert!(button.on_press.is_none());
    }

    #[test]
    fn test_primary_styles() {
        let t = tokens();
        let styles = Button::new("Go").computed_styles(t);

        assert_eq!(styles.container.background_color.as_deref(), Some(t.colors.primary));
        assert_eq!(styles.label.color.as_deref(), Some(t.colors.surface));
        assert_eq!(styles.container.border_width, Some(0.0));
        assert_eq!(styles.container.border_color, None);
        assert_eq!(styles.container.padding_vertical, Some(t.spacing.sm));
        assert_eq!(styles.container.padding_horizontal, Some(t.spacing.md));
        assert_eq!(styles.container.border_radius, Some(t.radius.md));
        assert_eq!(styles.label.font_size, Some(t.typography.body.font_size));
    }

    #[test]
    fn test_secondary_styles() {
        let t = tokens();
        let styles = Button::new("Back")
            .with_variant(ButtonVariant::Secondary)
            .computed_styles(t);

        assert_eq!(styles.container.background_color.as_deref(), Some(t.colors.surface));
        assert_eq!(styles.label.color.as_deref(), Some(t.colors.primary));
        assert_eq!(styles.container.border_width, Some(1.0));
        assert_eq!(styles.container.border_color.as_deref(), Some(t.colors.primary));
    }

    #[test]
    fn test_disabled_only_changes_opacity() {
        let t = tokens();
        for variant in [ButtonVariant::Primary, ButtonVariant::Secondary] {
            let enabled = Button::new("x").with_variant(variant).computed_styles(t);
            let disabled = Button::new("x")
                .with_variant(variant)
                .disabled(true)
                .computed_styles(t);

            assert_eq!(enabled.container.opacity, Some(1.0));
            assert_eq!(disabled.container.opacity, Some(0.5));
            assert_eq!(enabled.container.background_color, disabled.container.background_color);
            assert_eq!(enabled.label, disabled.label);
        }
    }

    #[test]
    fn test_style_override_wins() {
        let override_style = Style::new().with_background("#000000").with_padding(2.0);
        let styles = Button::new("x")
            .disabled(true)
            .with_style(override_style)
            .computed_styles(tokens());

        assert_eq!(styles.container.background_color.as_deref(), Some("#000000"));
        assert_eq!(styles.container.padding, Some(2.0));
        assert_eq!(styles.container.opacity, Some(0.5));
    }

    #[test]
    fn test_render_and_press() {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&presses);
        let node = Button::new("Save")
            .on_press(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .render(tokens());

        let Node::Touchable(touchable) = &node else {
            panic!("expected touchable, got {node:?}");
        };
        assert_eq!(touchable.accessibility.role, Some(AccessibilityRole::Button));
        assert_eq!(touchable.accessibility.label.as_deref(), Some("Save"));
        assert_eq!(touchable.accessibility.disabled, Some(false));
        assert_eq!(node.text_content(), "Save");

        assert!(node.press(&[0]));
        assert_eq!(presses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_never_fires() {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&presses);
        let node = Button::new("Save")
            .disabled(true)
            .on_press(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .render(tokens());

        assert!(!node.press(&[]));
        assert_eq!(presses.load(Ordering::SeqCst), 0);
        assert_eq!(node.accessibility().disabled, Some(true));
    }
}
