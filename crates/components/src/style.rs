//! Style objects
//!
//! A [`Style`] is the resolved set of visual properties a host primitive is
//! rendered with. Unset properties are `None` and are omitted when the style
//! is serialized.
//!
//! Components build their default style from tokens and then apply the
//! caller's override with [`Style::merge`]: every property the override sets
//! replaces the computed one. Nested values such as [`ShadowOffset`] are
//! replaced whole, never merged member by member.

use serde::{Deserialize, Serialize};

/// Color value (hex string or `rgba(...)`)
pub type Color = String;

/// Transparent color used for hidden borders
pub const TRANSPARENT: &str = "transparent";

/// Dimension value (pixels or percentage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed pixel value
    Pixels(f32),
    /// Percentage of parent, e.g. `"90%"`
    Percent(String),
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }
}

/// Shadow offset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowOffset {
    /// Horizontal offset
    pub width: f32,
    /// Vertical offset
    pub height: f32,
}

impl ShadowOffset {
    /// Straight-down offset of the given depth
    pub fn down(height: f32) -> Self {
        Self { width: 0.0, height }
    }
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Left to right
    Row,
    /// Top to bottom
    #[default]
    Column,
    /// Right to left
    RowReverse,
    /// Bottom to top
    ColumnReverse,
}

impl FlexDirection {
    /// Whether the main axis is horizontal
    pub fn is_row(&self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    /// Whether items flow against the reading order
    pub fn is_reversed(&self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }
}

/// Flex wrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexWrap {
    /// Single line
    #[default]
    NoWrap,
    /// Overflow wraps onto additional lines
    Wrap,
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Align to start
    FlexStart,
    /// Align to center
    Center,
    /// Align to end
    FlexEnd,
    /// Stretch to fill
    Stretch,
    /// Baseline alignment
    Baseline,
}

/// Main-axis distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Pack to start
    FlexStart,
    /// Pack to center
    Center,
    /// Pack to end
    FlexEnd,
    /// Space between
    SpaceBetween,
    /// Space around
    SpaceAround,
    /// Space evenly
    SpaceEvenly,
}

/// Resolved style properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Main axis and flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    /// Whether overflow wraps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
    /// Cross-axis alignment of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    /// Main-axis distribution of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    /// Background fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Foreground (text) color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Border width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Corner radius in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Padding on all sides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Top and bottom padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    /// Left and right padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    /// Trailing margin in a row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,
    /// Trailing margin in a column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    /// Minimum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Dimension>,
    /// Maximum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
    /// Minimum height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<Dimension>,
    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight (400, 600)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// Shadow color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<Color>,
    /// Shadow offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset: Option<ShadowOffset>,
    /// Shadow opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<f32>,
    /// Shadow blur radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<f32>,
    /// Platform-native elevation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f32>,
}

macro_rules! merge_fields {
    ($base:ident, $over:ident, [$($field:ident),* $(,)?]) => {
        $(
            if let Some(value) = $over.$field.clone() {
                $base.$field = Some(value);
            }
        )*
    };
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no property is set
    pub fn is_empty(&self) -> bool {
        self == &Style::default()
    }

    /// Apply `overrides` on top of this style, last write wins per property
    pub fn merge(mut self, overrides: &Style) -> Self {
        merge_fields!(
            self,
            overrides,
            [
                flex,
                flex_direction,
                flex_wrap,
                align_items,
                justify_content,
                background_color,
                color,
                border_color,
                border_width,
                border_radius,
                opacity,
                padding,
                padding_vertical,
                padding_horizontal,
                margin_right,
                margin_bottom,
                min_width,
                max_width,
                min_height,
                font_size,
                font_weight,
                shadow_color,
                shadow_offset,
                shadow_opacity,
                shadow_radius,
                elevation,
            ]
        );
        self
    }

    /// Whether any shadow-related property is set
    pub fn has_shadow(&self) -> bool {
        self.shadow_color.is_some()
            || self.shadow_offset.is_some()
            || self.shadow_opacity.is_some()
            || self.shadow_radius.is_some()
            || self.elevation.is_some()
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set uniform padding
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set border radius
    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_override_wins() {
        let base = Style::new().with_background("#FFFFFF").with_padding(16.0);
        let merged = base.merge(&Style::new().with_background("#000000"));

        assert_eq!(merged.background_color.as_deref(), Some("#000000"));
        assert_eq!(merged.padding, Some(16.0));
    }

    #[test]
    fn test_merge_empty_override_is_identity() {
        let base = Style::new().with_opacity(0.5).with_border_radius(8.0);
        assert_eq!(base.clone().merge(&Style::default()), base);
    }

    #[test]
    fn test_merge_replaces_nested_whole() {
        let base = Style {
            shadow_offset: Some(ShadowOffset::down(4.0)),
            ..Default::default()
        };
        let overrides = Style {
            shadow_offset: Some(ShadowOffset {
                width: 2.0,
                height: 0.0,
            }),
            ..Default::default()
        };
        let merged = base.merge(&overrides);
        assert_eq!(
            merged.shadow_offset,
            Some(ShadowOffset {
                width: 2.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_serialization_omits_unset() {
        let style = Style::new().with_font_size(16.0);
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"fontSize":16.0}"#);
    }

    #[test]
    fn test_flex_direction_wire_names() {
        let json = serde_json::to_string(&FlexDirection::ColumnReverse).unwrap();
        assert_eq!(json, "\"column-reverse\"");
        assert!(FlexDirection::RowReverse.is_row());
        assert!(FlexDirection::RowReverse.is_reversed());
        assert!(!FlexDirection::Column.is_row());
    }

    #[test]
    fn test_dimension() {
        assert_eq!(Dimension::percent(90.0), Dimension::Percent("90%".to_string()));
        assert_eq!(serde_json::to_string(&Dimension::px(44.0)).unwrap(), "44.0");
    }

    #[test]
    fn test_has_shadow() {
        assert!(!Style::new().with_padding(4.0).has_shadow());
        let shadowed = Style {
            elevation: Some(2.0),
            ..Default::default()
        };
        assert!(shadowed.has_shadow());
    }
}
