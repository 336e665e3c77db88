use crate::foundation::core::{Size, Vec2};
use crate::layer::model::Layer;
use crate::pattern::model::{Pattern, ShapeKind, ShapeMask, TextStyle, Transform};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Which tier supplied the outer transform of a resolution.
pub enum TransformSource {
    /// The layer's own pattern-transform override.
    LayerOverride,
    /// The pattern's global transform.
    PatternGlobal,
    /// Neither was set.
    Identity,
}

/// Pick the outer transform: layer override, else pattern global, else identity.
///
/// The override replaces the global transform; the two are never composed.
pub fn resolve_outer_transform(
    layer_override: Option<&Transform>,
    pattern_global: Option<&Transform>,
) -> (Transform, TransformSource) {
    match (layer_override, pattern_global) {
        (Some(t), _) => (*t, TransformSource::LayerOverride),
        (None, Some(t)) => (*t, TransformSource::PatternGlobal),
        (None, None) => (Transform::IDENTITY, TransformSource::Identity),
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Layer-level text overrides for text masks.
pub struct TextOverrides<'a> {
    pub content: Option<&'a str>,
    pub style: Option<&'a TextStyle>,
}

impl<'a> TextOverrides<'a> {
    pub fn from_layer(layer: &'a Layer) -> Self {
        Self {
            content: layer.text_content.as_deref(),
            style: layer.text_style.as_ref(),
        }
    }
}

/// Text of a text mask: layer override, else the mask's own text, else empty.
pub fn resolve_text_content(overrides: &TextOverrides<'_>, mask: &ShapeMask) -> String {
    overrides
        .content
        .or(mask.text_content.as_deref())
        .unwrap_or_default()
        .to_string()
}

/// Style of a text mask: layer override, else the mask's own style.
///
/// `None` means the renderer applies [`TextStyle::default`].
pub fn resolve_text_style(overrides: &TextOverrides<'_>, mask: &ShapeMask) -> Option<TextStyle> {
    overrides.style.or(mask.text_style.as_ref()).cloned()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// A mask instance with every transform folded into final geometry.
pub struct ResolvedMask {
    pub kind: ShapeKind,
    /// Final size in pixels.
    pub dimensions: Size,
    /// Final placement in percentage points.
    pub position: Vec2,
    /// Final rotation in degrees, unnormalized.
    pub rotation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_data: Option<String>,
    /// Set for text masks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    /// Index of the source mask in the pattern.
    pub source_index: usize,
    /// Repetition block this instance belongs to (0 before expansion).
    pub repetition: u32,
}

impl ResolvedMask {
    /// The mask's own geometry with no transform applied at all.
    pub fn at_rest(mask: &ShapeMask, index: usize) -> Self {
        Self {
            kind: mask.kind,
            dimensions: mask.dimensions,
            position: mask.position,
            rotation: mask.rotation,
            path_data: mask.path_data.clone(),
            text_content: (mask.kind == ShapeKind::Text)
                .then(|| mask.text_content.clone().unwrap_or_default()),
            text_style: if mask.kind == ShapeKind::Text {
                mask.text_style.clone()
            } else {
                None
            },
            source_index: index,
            repetition: 0,
        }
    }
}

/// Fold the outer and the mask's own transform into mask `index` of a list of `count`.
///
/// Scales multiply, rotations and offsets add. The spacing stagger
/// `index * outer.spacing * inner.spacing` is added to x only, and only when `count > 1`.
pub fn resolve_mask(
    mask: &ShapeMask,
    index: usize,
    count: usize,
    outer: &Transform,
    text: &TextOverrides<'_>,
) -> ResolvedMask {
    let inner = mask.transform.unwrap_or_default();

    let dimensions = Size::new(
        mask.dimensions.width * outer.scale.x * inner.scale.x,
        mask.dimensions.height * outer.scale.y * inner.scale.y,
    );

    let spacing_offset = if count > 1 {
        (index as f64) * outer.spacing * inner.spacing
    } else {
        0.0
    };

    let position = Vec2::new(
        mask.position.x + outer.position.x + inner.position.x + spacing_offset,
        mask.position.y + outer.position.y + inner.position.y,
    );

    let (text_content, text_style) = if mask.kind == ShapeKind::Text {
        (
            Some(resolve_text_content(text, mask)),
            resolve_text_style(text, mask),
        )
    } else {
        (None, None)
    };

    ResolvedMask {
        kind: mask.kind,
        dimensions,
        position,
        rotation: mask.rotation + outer.rotation + inner.rotation,
        path_data: mask.path_data.clone(),
        text_content,
        text_style,
        source_index: index,
        repetition: 0,
    }
}

/// Resolve every mask of `masks` against the same outer transform.
pub fn resolve_masks(
    masks: &[ShapeMask],
    outer: &Transform,
    text: &TextOverrides<'_>,
) -> Vec<ResolvedMask> {
    let count = masks.len();
    masks
        .iter()
        .enumerate()
        .map(|(i, m)| resolve_mask(m, i, count, outer, text))
        .collect()
}

/// The participating prefix of `masks` for an optional `shape_count`.
///
/// Counts past the end select every mask; nothing is synthesized.
pub fn select_masks(masks: &[ShapeMask], shape_count: Option<usize>) -> &[ShapeMask] {
    match shape_count {
        Some(n) if n < masks.len() => &masks[..n],
        Some(n) => {
            if n > masks.len() {
                tracing::debug!(
                    shape_count = n,
                    available = masks.len(),
                    "shapeCount exceeds mask list; using all masks"
                );
            }
            masks
        }
        None => masks,
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Resolution of one pattern for one layer, before repetition.
pub struct ResolvedPattern {
    pub masks: Vec<ResolvedMask>,
    /// Repetition count taken from the outer transform.
    pub repetitions: u32,
    pub source: TransformSource,
}

/// Resolve `pattern` as applied to `layer` (or with no layer overrides at all).
#[tracing::instrument(skip_all, fields(pattern = %pattern.id))]
pub fn resolve_pattern(pattern: &Pattern, layer: Option<&Layer>) -> ResolvedPattern {
    let layer_override = layer.and_then(|l| l.pattern_transform.as_ref());
    let (outer, source) = resolve_outer_transform(layer_override, pattern.global_transform.as_ref());
    let text = layer.map(TextOverrides::from_layer).unwrap_or_default();

    let masks = select_masks(&pattern.shape_masks, outer.shape_count);
    tracing::debug!(?source, masks = masks.len(), "resolving pattern masks");

    ResolvedPattern {
        masks: resolve_masks(masks, &outer, &text),
        repetitions: outer.repetitions,
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/resolve.rs"]
mod tests;
