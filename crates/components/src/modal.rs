//! Modal component
//!
//! A fully controlled overlay. The caller owns `visible` and flips it in
//! response to `on_close`; the modal never changes its own visibility.
//!
//! `on_close` fires when the backdrop is tapped or the host back gesture is
//! used. Taps on the content area are claimed by the content view and never
//! reach the backdrop. Without `on_close` those interactions do nothing.

use crate::node::{
    AccessibilityProps, AccessibilityRole, Handler, ModalNode, Node, TouchableNode, ViewNode,
};
use crate::style::{Alignment, Dimension, JustifyContent, ShadowOffset, Style};
use crate::Component;
use serde::{Deserialize, Serialize};
use tokens::{ElevationToken, SpacingToken, Tokens};

/// Backdrop color behind the content
pub const BACKDROP: &str = "rgba(0, 0, 0, 0.5)";

/// Minimum content width in pixels
pub const MIN_CONTENT_WIDTH: f32 = 300.0;

/// Maximum content width as a share of the screen
pub const MAX_CONTENT_WIDTH_PERCENT: f32 = 90.0;

/// Shadow opacity of the content area
pub const SHADOW_OPACITY: f32 = 0.2;

/// Accessibility label of the backdrop
pub const CLOSE_LABEL: &str = "Close modal";

/// Show/hide transition, performed by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    /// Appear instantly
    None,
    /// Slide in from the bottom
    Slide,
    /// Fade in
    #[default]
    Fade,
}

/// Modal component properties
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    /// Whether the overlay is shown
    pub visible: bool,
    /// Dismissal request handler
    pub on_close: Option<Handler>,
    /// Content padding
    pub padding: SpacingToken,
    /// Content shadow depth
    pub elevation_level: ElevationToken,
    /// Show/hide transition
    pub animation_type: AnimationType,
    /// Caller overrides for the content area
    pub style: Style,
    /// Content
    pub children: Vec<Node>,
    /// Test ID; the backdrop and content get `-overlay` and `-content` suffixes
    pub test_id: Option<String>,
}

/// Computed modal styles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalStyles {
    /// Full-screen backdrop
    pub overlay: Style,
    /// Content area
    pub content: Style,
}

impl Modal {
    /// Create a modal with the given visibility
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            on_close: None,
            padding: SpacingToken::Md,
            elevation_level: ElevationToken::High,
            animation_type: AnimationType::Fade,
            style: Style::default(),
            children: Vec::new(),
            test_id: None,
        }
    }

    /// Set the close handler
    pub fn on_close(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Handler::new(move |()| f()));
        self
    }

    /// Set content padding
    pub fn with_padding(mut self, padding: SpacingToken) -> Self {
        self.padding = padding;
        self
    }

    /// Set content elevation
    pub fn with_elevation(mut self, level: ElevationToken) -> Self {
        self.elevation_level = level;
        self
    }

    /// Set the transition
    pub fn with_animation(mut self, animation_type: AnimationType) -> Self {
        self.animation_type = animation_type;
        self
    }

    /// Set custom content style
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

    /// Get the computed styles for this modal
    pub fn computed_styles(&self, tokens: &Tokens) -> ModalStyles {
        let overlay = Style {
            flex: Some(1.0),
            background_color: Some(BACKDROP.to_string()),
            justify_content: Some(JustifyContent::Center),
            align_items: Some(Alignment::Center),
            padding: Some(tokens.spacing.lg),
            ..Default::default()
        };

        let depth = tokens.elevation.get(self.elevation_level);
        let content = Style {
            background_color: Some(tokens.colors.surface.to_string()),
            min_width: Some(Dimension::px(MIN_CONTENT_WIDTH)),
            max_width: Some(Dimension::percent(MAX_CONTENT_WIDTH_PERCENT)),
            padding: Some(tokens.spacing.get(self.padding)),
            border_radius: Some(tokens.radius.md),
            shadow_color: Some(tokens.colors.text.to_string()),
            shadow_offset: Some(ShadowOffset::down(depth)),
            shadow_opacity: Some(SHADOW_OPACITY),
            shadow_radius: Some(depth * 2.0),
            elevation: Some(depth),
            ..Default::default()
        };

        ModalStyles {
            overlay,
            content: content.merge(&self.style),
        }
    }
}

impl Component for Modal {
    fn render(self, tokens: &Tokens) -> Node {
        let ModalStyles { overlay, content } = self.computed_styles(tokens);
        let suffixed = |suffix: &str| self.test_id.as_ref().map(|id| format!("{id}-{suffix}"));
        let overlay_id = suffixed("overlay");
        let content_id = suffixed("content");

        let on_close = self.on_close.map(|handler| {
            Handler::new(move |()| {
                tracing::debug!("modal dismissal requested");
                handler.call(())
            })
        });

        let content = Node::View(ViewNode {
            key: None,
            test_id: content_id,
            style: content,
            accessibility: AccessibilityProps::role(AccessibilityRole::None),
            captures_touches: true,
            children: self.children,
        });

        let backdrop = Node::Touchable(TouchableNode {
            key: None,
            test_id: overlay_id,
            style: overlay,
            accessibility: AccessibilityProps {
                role: Some(AccessibilityRole::Button),
                label: Some(CLOSE_LABEL.to_string()),
                ..Default::default()
            },
            active_opacity: Some(1.0),
            disabled: false,
            on_press: on_close.clone(),
            children: vec![content],
        });

        Node::Modal(ModalNode {
            key: None,
            test_id: self.test_id,
            accessibility: AccessibilityProps {
                view_is_modal: Some(true),
                ..Default::default()
            },
            visible: self.visible,
            transparent: true,
            animation_type: self.animation_type,
            on_request_close: on_close,
            children: vec![backdrop],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokens::tokens;

    fn counting_modal(visible: bool) -> (Arc<AtomicUsize>, Node) {
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let node = Modal::new(visible)
            .on_close(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .child(Node::text("Body"))
            .with_test_id("dialog")
            .render(tokens());
        (closes, node)
    }

    #[test]
    fn test_overlay_tap_closes_once_per_tap() {
        let (closes, node) = counting_modal(true);
        let overlay = node.path_of("dialog-overlay").unwrap();

        assert!(node.press(&overlay));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert!(node.press(&overlay));
        assert_eq!(closes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_content_tap_never_closes() {
        let (closes, node) = counting_modal(true);
        let content = node.path_of("dialog-content").unwrap();
        let mut body = content.clone();
        body.push(0);

        assert!(!node.press(&content));
        assert!(!node.press(&body));
        assert_eq!(closes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_back_gesture_closes() {
        let (closes, node) = counting_modal(true);
        assert!(node.request_close(&[]));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_never_mutates_visibility() {
        let (_, node) = counting_modal(true);
        let overlay = node.path_of("dialog-overlay").unwrap();
        node.press(&overlay);

        let Node::Modal(modal) = &node else {
            panic!("expected modal host");
        };
        assert!(modal.visible);
    }

    #[test]
    fn test_hidden_modal_ignores_taps() {
        let (closes, node) = counting_modal(false);
        let overlay = node.path_of("dialog-overlay").unwrap();
        assert!(!node.press(&overlay));
        assert!(!node.request_close(&[]));
        assert_eq!(closes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_on_close_is_inert() {
        let node = Modal::new(true).with_test_id("m").render(tokens());
        let overlay = node.path_of("m-overlay").unwrap();
        assert!(!node.press(&overlay));
        assert!(!node.request_close(&[]));
    }

    #[test]
    fn test_computed_styles() {
        let t = tokens();
        let styles = Modal::new(true)
            .with_padding(SpacingToken::Lg)
            .computed_styles(t);
        let depth = t.elevation.high;

        assert_eq!(styles.overlay.background_color.as_deref(), Some(BACKDROP));
        assert_eq!(styles.overlay.padding, Some(t.spacing.lg));
        assert_eq!(styles.content.padding, Some(t.spacing.lg));
        assert_eq!(styles.content.shadow_offset, Some(ShadowOffset::down(depth)));
        assert_eq!(styles.content.shadow_radius, Some(depth * 2.0));
        assert_eq!(styles.content.elevation, Some(depth));
        assert_eq!(styles.content.max_width, Some(Dimension::Percent("90%".to_string())));
    }

    #[test]
    fn test_host_flags() {
        let node = Modal::new(true)
            .with_animation(AnimationType::Slide)
            .render(tokens());
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "modal");
        assert_eq!(json["transparent"], true);
        assert_eq!(json["animationType"], "slide");
        assert_eq!(json["accessibility"]["viewIsModal"], true);
        assert_eq!(json["children"][0]["accessibility"]["label"], CLOSE_LABEL);
    }
}
