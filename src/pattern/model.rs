use crate::foundation::core::{Size, Vec2};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Geometry kind of a single mask inside a pattern.
pub enum ShapeKind {
    /// Axis-aligned rectangle covering the mask dimensions.
    #[default]
    Rectangle,
    /// Circle using the mask width as its diameter.
    Circle,
    /// Isosceles triangle with its apex at top-center.
    Triangle,
    /// Caller-supplied SVG path data.
    Custom,
    /// Text block rendered from content and a [`TextStyle`].
    Text,
    /// Any unrecognized kind; resolves to an empty path.
    #[serde(other)]
    Unknown,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Horizontal alignment of a text block.
pub enum TextAlign {
    /// Anchor lines at the left edge.
    Left,
    /// Anchor lines at the horizontal center.
    #[default]
    Center,
    /// Anchor lines at the right edge.
    Right,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Typography used by text masks.
pub struct TextStyle {
    /// CSS-style font family list.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// CSS-style font weight (`bold`, `normal`, `700`, ...).
    pub font_weight: String,
    /// Horizontal alignment of every line.
    pub text_align: TextAlign,
    /// Line advance as a multiplier of `font_size`.
    pub line_height: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial, sans-serif".to_string(),
            font_size: 72.0,
            font_weight: "bold".to_string(),
            text_align: TextAlign::Center,
            line_height: 1.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Composable geometric adjustment applied to mask instances.
///
/// Scale multiplies, rotation and position add. `spacing` scales an index-based
/// horizontal stagger, `repetitions` duplicates the whole mask set and `shape_count`
/// limits how many masks of a pattern take part.
pub struct Transform {
    /// Per-axis scale factors.
    pub scale: Vec2,
    /// Rotation in degrees; never normalized.
    pub rotation: f64,
    /// Offset in percentage points.
    pub position: Vec2,
    /// Multiplier for the per-index horizontal stagger.
    pub spacing: f64,
    /// Number of stacked copies of the mask set (1 = none).
    pub repetitions: u32,
    /// Optional prefix length of the pattern's mask list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_count: Option<usize>,
}

impl Transform {
    /// The neutral transform: unit scale, no rotation or offset, one repetition.
    pub const IDENTITY: Self = Self {
        scale: Vec2::new(1.0, 1.0),
        rotation: 0.0,
        position: Vec2::new(0.0, 0.0),
        spacing: 1.0,
        repetitions: 1,
        shape_count: None,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Partial update of a two-component vector.
pub struct AxisPatch {
    /// Replacement x component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Replacement y component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Partial update of a [`Transform`]; absent fields keep their current value.
pub struct TransformPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<AxisPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_count: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Partial update of a [`TextStyle`].
pub struct TextStylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One mask definition within a pattern.
///
/// Masks are identified by their index in [`Pattern::shape_masks`].
pub struct ShapeMask {
    /// Geometry kind.
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Mask extent in pixels.
    pub dimensions: Size,
    /// Mask placement in percentage points (nominally 0..100, never clamped).
    pub position: Vec2,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// SVG path data, used when `kind` is [`ShapeKind::Custom`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_data: Option<String>,
    /// Text content, used when `kind` is [`ShapeKind::Text`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// Text style, used when `kind` is [`ShapeKind::Text`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    /// Individual transform, innermost in composition order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
}

impl ShapeMask {
    /// Create an untransformed mask of `kind` at `position` (percent) with `width`x`height` pixels.
    pub fn new(kind: ShapeKind, width: f64, height: f64, position: Vec2) -> Self {
        Self {
            kind,
            dimensions: Size::new(width, height),
            position,
            rotation: 0.0,
            path_data: None,
            text_content: None,
            text_style: None,
            transform: None,
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_path_data(mut self, d: impl Into<String>) -> Self {
        self.path_data = Some(d.into());
        self
    }

    pub fn with_text(mut self, content: impl Into<String>, style: TextStyle) -> Self {
        self.text_content = Some(content.into());
        self.text_style = Some(style);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A named, reusable set of masks plus an optional global transform.
pub struct Pattern {
    /// Stable pattern key referenced by layers.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered mask definitions.
    #[serde(default)]
    pub shape_masks: Vec<ShapeMask>,
    /// Pattern-level transform, replaced wholesale by a layer override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_transform: Option<Transform>,
}

impl Pattern {
    /// Create a pattern with an identity global transform.
    pub fn new(id: impl Into<String>, name: impl Into<String>, masks: Vec<ShapeMask>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shape_masks: masks,
            global_transform: Some(Transform::IDENTITY),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/model.rs"]
mod tests;
