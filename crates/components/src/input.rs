//! Input component
//!
//! Inputs are meant to be controlled: the caller owns the value and feeds
//! every edit back in through `on_change_text`. An input rendered without a
//! value still works, but debug builds log a warning.

use crate::node::{AccessibilityProps, AccessibilityRole, Handler, Node, TextInputNode};
use crate::style::{Color, Dimension, Style, TRANSPARENT};
use crate::Component;
use serde::{Deserialize, Serialize};
use tokens::{Tokens, TypographyVariant};

/// Minimum touch-target height
pub const MIN_HEIGHT: f32 = 44.0;

/// Input style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    /// Filled surface, no visible border
    #[default]
    Default,
    /// Background fill with a 1px border
    Outlined,
}

/// Input component properties
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    /// Current value, owned by the caller
    pub value: Option<String>,
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Placeholder color; the muted token when unset
    pub placeholder_text_color: Option<Color>,
    /// Style variant
    pub variant: InputVariant,
    /// Whether the value failed validation
    pub error: bool,
    /// Whether the input accepts edits
    pub editable: bool,
    /// On change handler
    pub on_change_text: Option<Handler<String>>,
    /// Caller overrides
    pub style: Style,
    /// Test ID for testing
    pub test_id: Option<String>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            value: None,
            placeholder: None,
            placeholder_text_color: None,
            variant: InputVariant::Default,
            error: false,
            editable: true,
            on_change_text: None,
            style: Style::default(),
            test_id: None,
        }
    }
}

impl Input {
    /// Create a new input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controlled input showing `value`
    pub fn controlled(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set placeholder color
    pub fn with_placeholder_color(mut self, color: impl Into<String>) -> Self {
        self.placeholder_text_color = Some(color.into());
        self
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set error state
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Set whether the input accepts edits
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Set on change handler
    pub fn on_change_text(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_change_text = Some(Handler::new(f));
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

    /// Whether the caller supplied a value
    pub fn is_controlled(&self) -> bool {
        self.value.is_some()
    }

    /// Get the computed style for this input
    ///
    /// The error flag wins over the variant for the border color.
    pub fn computed_style(&self, tokens: &Tokens) -> Style {
        let colors = &tokens.colors;
        let outlined = self.variant == InputVariant::Outlined;
        let body = tokens.typography.get(TypographyVariant::Body);

        let background = if outlined {
            colors.background
        } else {
            colors.surface
        };
        let border_color = if self.error {
            colors.error
        } else if outlined {
            colors.border
        } else {
            TRANSPARENT
        };

        let style = Style {
            background_color: Some(background.to_string()),
            color: Some(colors.text.to_string()),
            padding_vertical: Some(tokens.spacing.sm),
            padding_horizontal: Some(tokens.spacing.md),
            border_radius: Some(tokens.radius.md),
            font_size: Some(body.font_size),
            font_weight: Some(body.font_weight),
            border_width: Some(if outlined { 1.0 } else { 0.0 }),
            border_color: Some(border_color.to_string()),
            min_height: Some(Dimension::px(MIN_HEIGHT)),
            ..Default::default()
        };

        style.merge(&self.style)
    }
}

impl Component for Input {
    fn render(self, tokens: &Tokens) -> Node {
        #[cfg(debug_assertions)]
        if !self.is_controlled() {
            tracing::warn!(
                placeholder = self.placeholder.as_deref().unwrap_or_default(),
                "Input should be used as a controlled component (provide `value`)"
            );
        }

        let style = self.computed_style(tokens);
        let placeholder_text_color = self
            .placeholder_text_color
            .unwrap_or_else(|| tokens.colors.muted.to_string());

        Node::TextInput(TextInputNode {
            key: None,
            test_id: self.test_id,
            style,
            accessibility: AccessibilityProps {
                role: Some(AccessibilityRole::None),
                disabled: Some(!self.editable),
                ..Default::default()
            },
            value: self.value,
            placeholder: self.placeholder,
            placeholder_text_color,
            editable: self.editable,
            on_change_text: self.on_change_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokens::tokens;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts WARN events seen by the subscriber
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn warnings_while(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_default_variant() {
        let t = tokens();
        let style = Input::controlled("").computed_style(t);

        assert_eq!(style.background_color.as_deref(), Some(t.colors.surface));
        assert_eq!(style.border_width, Some(0.0));
        assert_eq!(style.border_color.as_deref(), Some(TRANSPARENT));
        assert_eq!(style.color.as_deref(), Some(t.colors.text));
        assert_eq!(style.min_height, Some(Dimension::px(44.0)));
    }

    #[test]
    fn test_outlined_variant() {
        let t = tokens();
        let style = Input::controlled("")
            .with_variant(InputVariant::Outlined)
            .computed_style(t);

        assert_eq!(style.background_color.as_deref(), Some(t.colors.background));
        assert_eq!(style.border_width, Some(1.0));
        assert_eq!(style.border_color.as_deref(), Some(t.colors.border));
    }

    #[test]
    fn test_error_overrides_border_color_for_every_variant() {
        let t = tokens();
        for variant in [InputVariant::Default, InputVariant::Outlined] {
            let style = Input::controlled("ab")
                .with_variant(variant)
                .error(true)
                .computed_style(t);
            assert_eq!(style.border_color.as_deref(), Some(t.colors.error));
        }
    }

    #[test]
    fn test_uncontrolled_still_renders() {
        let input = Input::new().with_placeholder("Type here");
        assert!(!input.is_controlled());

        let node = input.render(tokens());
        let Node::TextInput(text_input) = &node else {
            panic!("expected text input, got {node:?}");
        };
        assert_eq!(text_input.value, None);
        assert_eq!(text_input.placeholder.as_deref(), Some("Type here"));
        assert_eq!(text_input.placeholder_text_color, tokens().colors.muted);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_uncontrolled_warns_once() {
        let warnings = warnings_while(|| {
            Input::new().with_placeholder("Type here").render(tokens());
        });
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_controlled_is_silent() {
        let warnings = warnings_while(|| {
            Input::controlled("x").render(tokens());
        });
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_not_editable_is_disabled() {
        let node = Input::controlled("locked").editable(false).render(tokens());
        assert_eq!(node.accessibility().disabled, Some(true));
        assert!(!node.change_text(&[], "x"));
    }

    #[test]
    fn test_change_text_reaches_owner() {
        let value = Arc::new(Mutex::new(String::new()));
        let owner = Arc::clone(&value);
        let node = Input::controlled("")
            .on_change_text(move |text| *owner.lock() = text)
            .render(tokens());

        assert!(node.change_text(&[], "typed"));
        assert_eq!(*value.lock(), "typed");
    }

    #[test]
    fn test_placeholder_color_override() {
        let node = Input::controlled("")
            .with_placeholder_color("#123456")
            .render(tokens());
        let Node::TextInput(text_input) = &node else {
            panic!("expected text input");
        };
        assert_eq!(text_input.placeholder_text_color, "#123456");
    }
}
