//! Collage is a pattern-mask engine for layered media collages.
//!
//! A [`Pattern`] is a reusable set of shape masks. A [`Layer`] picks a pattern and may override
//! its transform and text. For each layer the engine:
//!
//! - resolves every mask against the layer override or pattern transform
//! - expands the result into diagonally cascaded repetitions
//! - synthesizes a renderer-agnostic [`MaskStyleDescriptor`] of SVG data-URI mask images
//!
//! [`rasterize_coverage`] is a reference consumer of that descriptor.
#![forbid(unsafe_code)]

mod compose;
mod document;
mod foundation;
mod geometry;
mod layer;
mod pattern;
mod pipeline;
mod style;

pub use crate::foundation::core::{BezPath, Canvas, Rect, Size, Vec2};
pub use crate::foundation::error::{CollageError, CollageResult};
pub use crate::foundation::math::Num;

pub use crate::pattern::builtin::builtin_patterns;
pub use crate::pattern::edit::resize_masks;
pub use crate::pattern::model::{
    AxisPatch, Pattern, ShapeKind, ShapeMask, TextAlign, TextStyle, TextStylePatch, Transform,
    TransformPatch,
};

pub use crate::layer::model::Layer;

pub use crate::geometry::primitives::{parse_path_data, path_data};
pub use crate::geometry::text::{
    TEXT_EDGE_INSET, TextAnchor, TextBlock, TextLine, escape_markup, layout_text, render_text,
};

pub use crate::compose::expand::{REPETITION_STEP_X, REPETITION_STEP_Y, expand};
pub use crate::compose::resolve::{
    ResolvedMask, ResolvedPattern, TextOverrides, TransformSource, resolve_mask, resolve_masks,
    resolve_outer_transform, resolve_pattern, resolve_text_content, resolve_text_style,
    select_masks,
};

pub use crate::style::raster::{CoverageMask, parse_position, parse_size, rasterize_coverage};
pub use crate::style::synth::{
    MaskComposite, MaskInstance, MaskLayers, MaskRepeat, MaskStyleDescriptor,
    SVG_DATA_URI_PREFIX, decode_mask_image, encode_mask_image, mask_svg, position_string,
    size_string, synthesize,
};

pub use crate::document::model::CollageDocument;
pub use crate::pipeline::{mask_style_for_layer, mask_style_for_pattern};
