//! Render tree
//!
//! Components do not draw anything themselves. They compose the host
//! toolkit's primitives (view, scroll view, text, text input, touchable and
//! modal host) into a tree of [`Node`]s that the host renders.
//!
//! The tree serializes to JSON for the host bridge; event handlers are
//! skipped. Events coming back from the host are delivered through
//! [`Node::press`], [`Node::change_text`] and [`Node::request_close`], one at
//! a time, each running to completion before the next.

use crate::modal::AnimationType;
use crate::style::{Color, Style};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Event handler callback
///
/// Cloning shares the underlying closure. Two handlers are equal only when
/// they share the same closure.
pub struct Handler<T = ()>(Arc<dyn Fn(T) + Send + Sync>);

impl<T> Handler<T> {
    /// Wrap a closure
    pub fn new(f: impl Fn(T) + Send + Sync + 'static) -> Self {
        Handler(Arc::new(f))
    }

    /// Invoke the handler
    pub fn call(&self, arg: T) {
        (self.0)(arg)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Handler(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Accessibility role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessibilityRole {
    /// Not exposed as an interactive element
    None,
    /// Pressable control
    Button,
}

/// Accessibility flags passed through to the host
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityProps {
    /// Role exposed to assistive technology
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AccessibilityRole>,
    /// Label read by screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the element is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Whether the element traps accessibility focus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_is_modal: Option<bool>,
}

impl AccessibilityProps {
    /// Props with a role only
    pub fn role(role: AccessibilityRole) -> Self {
        Self {
            role: Some(role),
            ..Default::default()
        }
    }
}

fn is_default_a11y(a11y: &AccessibilityProps) -> bool {
    a11y == &AccessibilityProps::default()
}

/// Base view (also used for scroll views)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewNode {
    /// Reconciliation key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Resolved style
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    /// Accessibility flags
    #[serde(skip_serializing_if = "is_default_a11y")]
    pub accessibility: AccessibilityProps,
    /// Claims touches that land on it, so they never reach an ancestor
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub captures_touches: bool,
    /// Child nodes
    pub children: Vec<Node>,
}

/// Text run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    /// Reconciliation key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Resolved style
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    /// Accessibility flags
    #[serde(skip_serializing_if = "is_default_a11y")]
    pub accessibility: AccessibilityProps,
    /// Text content
    pub content: String,
}

/// Single-line text input
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputNode {
    /// Reconciliation key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Resolved style
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    /// Accessibility flags
    #[serde(skip_serializing_if = "is_default_a11y")]
    pub accessibility: AccessibilityProps,
    /// Externally owned value; `None` leaves the input uncontrolled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Placeholder color
    pub placeholder_text_color: Color,
    /// Whether edits are delivered
    pub editable: bool,
    /// Edit handler
    #[serde(skip)]
    pub on_change_text: Option<Handler<String>>,
}

/// Pressable container
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchableNode {
    /// Reconciliation key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Resolved style
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    /// Accessibility flags
    #[serde(skip_serializing_if = "is_default_a11y")]
    pub accessibility: AccessibilityProps,
    /// Opacity while pressed; `None` uses the host default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_opacity: Option<f32>,
    /// Whether presses are ignored
    pub disabled: bool,
    /// Press handler
    #[serde(skip)]
    pub on_press: Option<Handler>,
    /// Child nodes
    pub children: Vec<Node>,
}

/// Modal overlay host
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalNode {
    /// Reconciliation key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Accessibility flags
    #[serde(skip_serializing_if = "is_default_a11y")]
    pub accessibility: AccessibilityProps,
    /// Whether the overlay is shown
    pub visible: bool,
    /// Render over the current screen instead of replacing it
    pub transparent: bool,
    /// Show/hide transition
    pub animation_type: AnimationType,
    /// Host back gesture
    #[serde(skip)]
    pub on_request_close: Option<Handler>,
    /// Child nodes
    pub children: Vec<Node>,
}

/// A host primitive in the render tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// Base view
    View(ViewNode),
    /// Scrollable view
    Scroll(ViewNode),
    /// Text
    Text(TextNode),
    /// Text input
    TextInput(TextInputNode),
    /// Touchable
    Touchable(TouchableNode),
    /// Modal host
    Modal(ModalNode),
}

impl Node {
    /// Plain view around `children`
    pub fn view(style: Style, children: Vec<Node>) -> Self {
        Node::View(ViewNode {
            style,
            children,
            ..Default::default()
        })
    }

    /// Unstyled text run
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(TextNode {
            content: content.into(),
            ..Default::default()
        })
    }

    /// Reconciliation key
    pub fn key(&self) -> Option<&str> {
        match self {
            Node::View(n) | Node::Scroll(n) => n.key.as_deref(),
            Node::Text(n) => n.key.as_deref(),
            Node::TextInput(n) => n.key.as_deref(),
            Node::Touchable(n) => n.key.as_deref(),
            Node::Modal(n) => n.key.as_deref(),
        }
    }

    /// Set the reconciliation key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        let key = Some(key.into());
        match &mut self {
            Node::View(n) | Node::Scroll(n) => n.key = key,
            Node::Text(n) => n.key = key,
            Node::TextInput(n) => n.key = key,
            Node::Touchable(n) => n.key = key,
            Node::Modal(n) => n.key = key,
        }
        self
    }

    /// Test identifier
    pub fn test_id(&self) -> Option<&str> {
        match self {
            Node::View(n) | Node::Scroll(n) => n.test_id.as_deref(),
            Node::Text(n) => n.test_id.as_deref(),
            Node::TextInput(n) => n.test_id.as_deref(),
            Node::Touchable(n) => n.test_id.as_deref(),
            Node::Modal(n) => n.test_id.as_deref(),
        }
    }

    /// Set the test identifier
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        let test_id = Some(test_id.into());
        match &mut self {
            Node::View(n) | Node::Scroll(n) => n.test_id = test_id,
            Node::Text(n) => n.test_id = test_id,
            Node::TextInput(n) => n.test_id = test_id,
            Node::Touchable(n) => n.test_id = test_id,
            Node::Modal(n) => n.test_id = test_id,
        }
        self
    }

    /// Resolved style; the modal host has none
    pub fn style(&self) -> Option<&Style> {
        match self {
            Node::View(n) | Node::Scroll(n) => Some(&n.style),
            Node::Text(n) => Some(&n.style),
            Node::TextInput(n) => Some(&n.style),
            Node::Touchable(n) => Some(&n.style),
            Node::Modal(_) => None,
        }
    }

    /// Accessibility flags
    pub fn accessibility(&self) -> &AccessibilityProps {
        match self {
            Node::View(n) | Node::Scroll(n) => &n.accessibility,
            Node::Text(n) => &n.accessibility,
            Node::TextInput(n) => &n.accessibility,
            Node::Touchable(n) => &n.accessibility,
            Node::Modal(n) => &n.accessibility,
        }
    }

    /// Child nodes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::View(n) | Node::Scroll(n) => &n.children,
            Node::Touchable(n) => &n.children,
            Node::Modal(n) => &n.children,
            Node::Text(_) | Node::TextInput(_) => &[],
        }
    }

    /// Node at `path`, each element indexing into the children of the previous
    pub fn at(&self, path: &[usize]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    /// First node (depth-first) with the given test id
    pub fn find(&self, test_id: &str) -> Option<&Node> {
        self.path_of(test_id).and_then(|path| self.at(&path))
    }

    /// Path to the first node (depth-first) with the given test id
    pub fn path_of(&self, test_id: &str) -> Option<Vec<usize>> {
        if self.test_id() == Some(test_id) {
            return Some(Vec::new());
        }
        self.children()
            .iter()
            .enumerate()
            .find_map(|(index, child)| {
                child.path_of(test_id).map(|mut rest| {
                    rest.insert(0, index);
                    rest
                })
            })
    }

    /// Concatenated text content of this subtree
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(n) => n.content.clone(),
            _ => self.children().iter().map(Node::text_content).collect(),
        }
    }

    /// Deliver a tap to the node at `path`
    ///
    /// The touch bubbles from the target towards the root. The nearest
    /// touchable claims it and fires its handler once, unless disabled. A
    /// view that captures touches claims it without firing anything. Taps
    /// inside a hidden modal are ignored.
    ///
    /// Returns whether a handler ran.
    pub fn press(&self, path: &[usize]) -> bool {
        let Some(chain) = self.chain(path) else {
            return false;
        };
        if chain
            .iter()
            .any(|node| matches!(node, Node::Modal(modal) if !modal.visible))
        {
            return false;
        }

        for node in chain.iter().rev() {
            match node {
                Node::Touchable(touchable) => {
                    if touchable.disabled {
                        return false;
                    }
                    return match &touchable.on_press {
                        Some(handler) => {
                            handler.call(());
                            true
                        }
                        None => false,
                    };
                }
                Node::View(view) if view.captures_touches => return false,
                _ => {}
            }
        }
        false
    }

    /// Deliver an edit to the text input at `path`
    ///
    /// Returns whether a handler ran.
    pub fn change_text(&self, path: &[usize], text: impl Into<String>) -> bool {
        match self.at(path) {
            Some(Node::TextInput(input)) if input.editable => match &input.on_change_text {
                Some(handler) => {
                    handler.call(text.into());
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Deliver the host back gesture to the modal at `path`
    ///
    /// Returns whether a handler ran.
    pub fn request_close(&self, path: &[usize]) -> bool {
        match self.at(path) {
            Some(Node::Modal(modal)) if modal.visible => match &modal.on_request_close {
                Some(handler) => {
                    handler.call(());
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn chain(&self, path: &[usize]) -> Option<Vec<&Node>> {
        let mut chain = Vec::with_capacity(path.len() + 1);
        let mut node = self;
        chain.push(node);
        for &index in path {
            node = node.children().get(index)?;
            chain.push(node);
        }
        Some(chain)
    }
}
