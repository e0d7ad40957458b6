//! Playground screen
//!
//! A single scrollable screen that shows every component in every variant.
//! All interactive components are controlled: their values live in
//! [`PlaygroundState`], and handlers write edits back into it. Each call to
//! [`Playground::render`] builds a fresh tree from the current state.

use crate::config::PlaygroundConfig;
use crate::error::Result;
use components::{
    Alignment, AnimationType, Button, ButtonVariant, Card, Component, Input, InputVariant,
    JustifyContent, Modal, Node, Stack, Style, Text, ViewNode,
};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tokens::{ColorToken, ElevationToken, SpacingToken, Tokens};

/// Caller-owned state of the playground
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaygroundState {
    /// Whether the example modal is open
    pub modal_visible: bool,
    /// Value of the default input
    pub default_input: String,
    /// Value of the outlined input
    pub outlined_input: String,
    /// Value of the validated input
    pub error_input: String,
    /// Value of the input inside the modal
    pub modal_input: String,
    /// Whether the validated input is in error
    pub input_error: bool,
}

/// The playground screen
#[derive(Debug, Clone)]
pub struct Playground {
    state: Arc<Mutex<PlaygroundState>>,
    config: PlaygroundConfig,
    tokens: &'static Tokens,
}

impl Playground {
    /// Create a playground with the given configuration
    pub fn new(config: PlaygroundConfig) -> Self {
        let state = PlaygroundState {
            modal_visible: config.initial_modal_visible,
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            config,
            tokens: tokens::tokens(),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PlaygroundState {
        self.state.lock().clone()
    }

    /// Active configuration
    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    /// Whether `text` fails the length check
    ///
    /// Empty text is never an error.
    pub fn is_too_short(&self, text: &str) -> bool {
        too_short(text, self.config.min_input_length)
    }

    /// Render the whole app
    pub fn render(&self) -> Node {
        let state = self.state();
        let t = self.tokens;

        let content = Stack::new()
            .with_gap(SpacingToken::Lg)
            .child(self.text_section())
            .child(self.button_section())
            .child(self.input_section(&state))
            .child(self.stack_section())
            .child(self.card_section())
            .child(self.modal(&state))
            .render(t);

        let scroll = Node::Scroll(ViewNode {
            test_id: Some("playground".to_string()),
            style: Style {
                flex: Some(1.0),
                padding: Some(t.spacing.lg),
                ..Default::default()
            },
            children: vec![content],
            ..Default::default()
        });

        Node::View(ViewNode {
            test_id: Some("app".to_string()),
            style: Style {
                flex: Some(1.0),
                background_color: Some(t.colors.background.to_string()),
                align_items: Some(Alignment::Center),
                justify_content: Some(JustifyContent::Center),
                ..Default::default()
            },
            children: vec![scroll],
            ..Default::default()
        })
    }

    /// Render the app and serialize it as JSON
    pub fn export(&self) -> Result<String> {
        let tree = self.render();
        let json = if self.config.pretty {
            serde_json::to_string_pretty(&tree)?
        } else {
            serde_json::to_string(&tree)?
        };
        Ok(json)
    }

    fn update(
        &self,
        f: impl Fn(&mut PlaygroundState) + Send + Sync + 'static,
    ) -> impl Fn() + Send + Sync + 'static {
        let state = Arc::clone(&self.state);
        move || f(&mut state.lock())
    }

    fn edit(
        &self,
        f: impl Fn(&mut PlaygroundState, String) + Send + Sync + 'static,
    ) -> impl Fn(String) + Send + Sync + 'static {
        let state = Arc::clone(&self.state);
        move |text| f(&mut state.lock(), text)
    }

    fn text_section(&self) -> Node {
        let t = self.tokens;
        let samples = [
            Text::heading("Text Component"),
            Text::heading("Heading Text"),
            Text::new("Body Text - Default variant"),
            Text::caption("Caption Text - Smaller size"),
            Text::new("Primary Color Text").with_color(ColorToken::Primary),
            Text::new("Error Color Text").with_color(ColorToken::Error),
            Text::new("Success Color Text").with_color(ColorToken::Success),
            Text::new("Muted Color Text").with_color(ColorToken::Muted),
        ];

        Card::elevated(ElevationToken::Medium)
            .child(
                Stack::new()
                    .children(samples.into_iter().map(|text| text.render(t)))
                    .render(t),
            )
            .render(t)
    }

    fn button_section(&self) -> Node {
        let t = self.tokens;
        let variants = Stack::row()
            .with_gap(SpacingToken::Sm)
            .wrap()
            .child(Button::new("Primary").on_press(|| {}).render(t))
            .child(
                Button::new("Secondary")
                    .with_variant(ButtonVariant::Secondary)
                    .on_press(|| {})
                    .render(t),
            )
            .child(Button::new("Disabled").disabled(true).on_press(|| {}).render(t))
            .render(t);

        let open = Button::new("Open Modal")
            .on_press(self.update(|state| state.modal_visible = true))
            .with_test_id("open-modal")
            .render(t);

        Card::outlined()
            .child(
                Stack::new()
                    .child(Text::heading("Button Component").render(t))
                    .child(variants)
                    .child(open)
                    .render(t),
            )
            .render(t)
    }

    fn input_section(&self, state: &PlaygroundState) -> Node {
        let t = self.tokens;
        let min_len = self.config.min_input_length;

        let default_input = Input::controlled(state.default_input.clone())
            .with_placeholder("Default variant input...")
            .on_change_text(self.edit(|state, text| state.default_input = text))
            .with_test_id("default-input")
            .render(t);

        let outlined_input = Input::controlled(state.outlined_input.clone())
            .with_placeholder("Outlined variant input...")
            .with_variant(InputVariant::Outlined)
            .on_change_text(self.edit(|state, text| state.outlined_input = text))
            .with_test_id("outlined-input")
            .render(t);

        let validated = Input::controlled(state.error_input.clone())
            .with_placeholder("Input with error...")
            .with_variant(InputVariant::Outlined)
            .error(state.input_error)
            .on_change_text(self.edit(move |state, text| {
                state.input_error = too_short(&text, min_len);
                state.error_input = text;
            }))
            .with_test_id("error-input")
            .render(t);

        let mut message = Vec::new();
        if state.input_error {
            message.push(
                Text::caption(format!("Input must be at least {min_len} characters"))
                    .with_color(ColorToken::Error)
                    .with_test_id("error-message")
                    .render(t),
            );
        }

        Card::elevated(ElevationToken::Low)
            .child(
                Stack::new()
                    .child(Text::heading("Input Component").render(t))
                    .child(default_input)
                    .child(outlined_input)
                    .child(validated)
                    .child(Node::view(Style::default(), message))
                    .render(t),
            )
            .render(t)
    }

    fn stack_section(&self) -> Node {
        let t = self.tokens;
        let demo_style = Style::new()
            .with_background(t.colors.background)
            .with_padding(t.spacing.sm)
            .with_border_radius(t.radius.sm);

        let column = Stack::column()
            .with_gap(SpacingToken::Sm)
            .with_style(demo_style.clone())
            .children(self.labels(&["Item 1", "Item 2", "Item 3"]))
            .render(t);

        let row = Stack::row()
            .with_gap(SpacingToken::Sm)
            .with_style(demo_style.clone())
            .children(self.labels(&["Item 1", "Item 2", "Item 3"]))
            .render(t);

        let wrapped = Stack::row()
            .with_gap(SpacingToken::Sm)
            .wrap()
            .with_style(demo_style.clone())
            .children((1..=4).map(|i| {
                Button::new(format!("Btn {i}"))
                    .with_variant(ButtonVariant::Secondary)
                    .on_press(|| {})
                    .render(t)
            }))
            .render(t);

        let justified = Stack::row()
            .with_gap(SpacingToken::Sm)
            .with_justify(JustifyContent::SpaceBetween)
            .with_style(demo_style)
            .children(self.labels(&["Left", "Right"]))
            .render(t);

        Card::new()
            .child(
                Stack::new()
                    .child(Text::heading("Stack Component").render(t))
                    .child(Text::new("Column Stack (default):").render(t))
                    .child(column)
                    .child(Text::new("Row Stack:").render(t))
                    .child(row)
                    .child(Text::new("Row Stack with wrap:").render(t))
                    .child(wrapped)
                    .child(Text::new("Row Stack with justify:").render(t))
                    .child(justified)
                    .render(t),
            )
            .render(t)
    }

    fn labels(&self, names: &[&str]) -> Vec<Node> {
        names
            .iter()
            .map(|name| Text::new(*name).render(self.tokens))
            .collect()
    }

    fn card_section(&self) -> Node {
        let t = self.tokens;
        let simple = |card: Card, label: &str| {
            card.with_padding(SpacingToken::Md)
                .child(Text::new(label).render(t))
                .render(t)
        };

        let nested = Card::elevated(ElevationToken::High)
            .with_padding(SpacingToken::Lg)
            .child(
                Stack::new()
                    .child(Text::heading("Card with nested content").render(t))
                    .child(
                        Text::new(
                            "This card has large padding and contains a Stack with multiple items.",
                        )
                        .render(t),
                    )
                    .child(Button::new("Action Button").on_press(|| {}).render(t))
                    .render(t),
            )
            .render(t);

        Stack::new()
            .child(Text::heading("Card Component").render(t))
            .child(simple(Card::new(), "Default Card - No elevation, no border"))
            .child(simple(
                Card::elevated(ElevationToken::Low),
                "Elevated Card - Low elevation",
            ))
            .child(simple(
                Card::elevated(ElevationToken::Medium),
                "Elevated Card - Medium elevation",
            ))
            .child(simple(
                Card::elevated(ElevationToken::High),
                "Elevated Card - High elevation",
            ))
            .child(simple(Card::outlined(), "Outlined Card - With border"))
            .child(nested)
            .render(t)
    }

    fn modal(&self, state: &PlaygroundState) -> Node {
        let t = self.tokens;

        let actions = Stack::row()
            .with_gap(SpacingToken::Sm)
            .with_justify(JustifyContent::FlexEnd)
            .child(
                Button::new("Cancel")
                    .with_variant(ButtonVariant::Secondary)
                    .on_press(self.update(|state| state.modal_visible = false))
                    .with_test_id("modal-cancel")
                    .render(t),
            )
            .child(
                Button::new("Confirm")
                    .on_press(self.update(|state| state.modal_visible = false))
                    .with_test_id("modal-confirm")
                    .render(t),
            )
            .render(t);

        let body = Stack::new()
            .child(Text::heading("Modal Example").render(t))
            .child(
                Text::new(
                    "This is a modal component. You can close it by tapping outside or using the close button.",
                )
                .render(t),
            )
            .child(
                Input::controlled(state.modal_input.clone())
                    .with_placeholder("Type in modal...")
                    .with_variant(InputVariant::Outlined)
                    .on_change_text(self.edit(|state, text| state.modal_input = text))
                    .with_test_id("modal-input")
                    .render(t),
            )
            .child(actions)
            .render(t);

        Modal::new(state.modal_visible)
            .on_close(self.update(|state| state.modal_visible = false))
            .with_padding(SpacingToken::Lg)
            .with_elevation(ElevationToken::High)
            .with_animation(AnimationType::Fade)
            .with_test_id("modal")
            .child(body)
            .render(t)
    }
}

fn too_short(text: &str, min_len: usize) -> bool {
    let len = text.chars().count();
    len > 0 && len < min_len
}

impl Default for Playground {
    fn default() -> Self {
        Self::new(PlaygroundConfig::default())
    }
}
