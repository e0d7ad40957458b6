//! Stack layout
//!
//! Lays children out along one axis with a fixed gap between neighbours.
//! The gap is applied as a trailing margin on every child except the last,
//! so nothing is added before the first child or after the last one:
//!
//! ```text
//! [A]--gap--[B]--gap--[C]
//! ```
//!
//! Children keep their order. Each one that needs a margin is wrapped in a
//! view keyed by its index; the last child is passed through untouched.
//!
//! `wrap` only lets overflow continue on a new line. Wrapped lines get no
//! cross-axis gap.

use crate::node::{AccessibilityProps, AccessibilityRole, Node, ViewNode};
use crate::style::{Alignment, FlexDirection, FlexWrap, JustifyContent, Style};
use crate::Component;
use serde::{Deserialize, Serialize};
use tokens::{SpacingToken, Tokens};

/// Main axis of a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackDirection {
    /// Horizontal
    Row,
    /// Vertical
    #[default]
    Column,
}

/// Flow direction for a stack direction and reverse flag
pub fn flow_direction(direction: StackDirection, reverse: bool) -> FlexDirection {
    match (direction, reverse) {
        (StackDirection::Row, false) => FlexDirection::Row,
        (StackDirection::Row, true) => FlexDirection::RowReverse,
        (StackDirection::Column, false) => FlexDirection::Column,
        (StackDirection::Column, true) => FlexDirection::ColumnReverse,
    }
}

/// Trailing margin carrying the gap along `direction`
pub fn gap_inset(direction: StackDirection, gap: f32) -> Style {
    match direction {
        StackDirection::Row => Style {
            margin_right: Some(gap),
            ..Default::default()
        },
        StackDirection::Column => Style {
            margin_bottom: Some(gap),
            ..Default::default()
        },
    }
}

/// Insert `gap` between consecutive children
///
/// With fewer than two children the sequence is returned unchanged.
pub fn arrange(children: Vec<Node>, direction: StackDirection, gap: f32) -> Vec<Node> {
    let len = children.len();
    tracing::trace!(children = len, ?direction, gap, "arranging stack");

    children
        .into_iter()
        .enumerate()
        .map(|(index, child)| {
            if index + 1 == len {
                return child;
            }
            Node::View(ViewNode {
                key: Some(index.to_string()),
                style: gap_inset(direction, gap),
                children: vec![child],
                ..Default::default()
            })
        })
        .collect()
}

/// Stack component properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    /// Main axis
    pub direction: StackDirection,
    /// Space between children
    pub gap: SpacingToken,
    /// Cross-axis alignment
    pub align: Option<Alignment>,
    /// Main-axis distribution
    pub justify: Option<JustifyContent>,
    /// Wrap overflow onto new lines
    pub wrap: bool,
    /// Flow against the reading order
    pub reverse: bool,
    /// Caller overrides for the container
    pub style: Style,
    /// Stacked children
    pub children: Vec<Node>,
    /// Test ID for testing
    pub test_id: Option<String>,
}

impl Stack {
    /// Create a column stack with the default gap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row stack
    pub fn row() -> Self {
        Self {
            direction: StackDirection::Row,
            ..Default::default()
        }
    }

    /// Create a column stack
    pub fn column() -> Self {
        Self {
            direction: StackDirection::Column,
            ..Default::default()
        }
    }

    /// Set the gap
    pub fn with_gap(mut self, gap: SpacingToken) -> Self {
        self.gap = gap;
        self
    }

    /// Set align items
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Set justify content
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = Some(justify);
        self
    }

    /// Enable wrapping
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Reverse the flow
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
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

    /// Append several children
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set test ID
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Get the computed container style
    pub fn computed_style(&self) -> Style {
        Style {
            flex_direction: Some(flow_direction(self.direction, self.reverse)),
            align_items: self.align,
            justify_content: self.justify,
            flex_wrap: Some(if self.wrap {
                FlexWrap::Wrap
            } else {
                FlexWrap::NoWrap
            }),
            ..Default::default()
        }
        .merge(&self.style)
    }
}

impl Component for Stack {
    fn render(self, tokens: &Tokens) -> Node {
        let style = self.computed_style();
        let gap = tokens.spacing.get(self.gap);

        Node::View(ViewNode {
            key: None,
            test_id: self.test_id,
            style,
            accessibility: AccessibilityProps::role(AccessibilityRole::None),
            captures_touches: false,
            children: arrange(self.children, self.direction, gap),
        })
    }
}
