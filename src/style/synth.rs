use std::fmt::Write as _;

use crate::compose::resolve::ResolvedMask;
use crate::foundation::core::{Size, Vec2};
use crate::foundation::error::{CollageError, CollageResult};
use crate::foundation::math::Num;
use crate::geometry::primitives::path_data;
use crate::geometry::svg::{close_svg, open_svg};
use crate::geometry::text::{escape_markup, layout_text};
use crate::pattern::model::ShapeKind;

/// Prefix of every encoded mask image.
pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Tiling policy of mask images.
pub enum MaskRepeat {
    /// Each mask image is drawn exactly once.
    #[default]
    #[serde(rename = "no-repeat")]
    NoRepeat,
}

impl MaskRepeat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoRepeat => "no-repeat",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How overlapping mask images combine.
pub enum MaskComposite {
    /// Union: every mask reveals the media inside its own region.
    #[default]
    #[serde(rename = "add")]
    Add,
}

impl MaskComposite {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Parallel per-instance mask sequences plus the fixed global policies.
///
/// Index `k` of `images`, `sizes` and `positions` always describes the same instance, and
/// instances are listed in compositing order.
pub struct MaskLayers {
    /// SVG data URIs.
    pub images: Vec<String>,
    /// `"{width}px {height}px"` per instance.
    pub sizes: Vec<String>,
    /// `"{x}% {y}%"` per instance.
    pub positions: Vec<String>,
    pub repeat: MaskRepeat,
    pub composite: MaskComposite,
}

/// Borrowed view of one instance of [`MaskLayers`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskInstance<'a> {
    pub image: &'a str,
    pub size: &'a str,
    pub position: &'a str,
}

impl MaskLayers {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Zip the parallel sequences back into instances.
    pub fn instances(&self) -> impl Iterator<Item = MaskInstance<'_>> + '_ {
        self.images
            .iter()
            .zip(&self.sizes)
            .zip(&self.positions)
            .map(|((image, size), position)| MaskInstance {
                image,
                size,
                position,
            })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Renderer-agnostic masking description for one layer.
///
/// `mask == None` means the media is shown unmasked.
pub struct MaskStyleDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<MaskLayers>,
}

impl MaskStyleDescriptor {
    /// Descriptor that leaves the media fully visible.
    pub fn unmasked() -> Self {
        Self { mask: None }
    }

    pub fn is_unmasked(&self) -> bool {
        self.mask.is_none()
    }

    /// Number of mask instances (0 when unmasked).
    pub fn len(&self) -> usize {
        self.mask.as_ref().map_or(0, MaskLayers::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the descriptor for an expanded mask list; an empty list yields no masking.
pub fn synthesize(masks: &[ResolvedMask]) -> MaskStyleDescriptor {
    if masks.is_empty() {
        return MaskStyleDescriptor::unmasked();
    }

    let mut layers = MaskLayers {
        images: Vec::with_capacity(masks.len()),
        sizes: Vec::with_capacity(masks.len()),
        positions: Vec::with_capacity(masks.len()),
        repeat: MaskRepeat::NoRepeat,
        composite: MaskComposite::Add,
    };
    for m in masks {
        layers.images.push(encode_mask_image(&mask_svg(m)));
        layers.sizes.push(size_string(m.dimensions));
        layers.positions.push(position_string(m.position));
    }

    MaskStyleDescriptor { mask: Some(layers) }
}

pub fn size_string(dimensions: Size) -> String {
    format!("{}px {}px", Num(dimensions.width), Num(dimensions.height))
}

pub fn position_string(position: Vec2) -> String {
    format!("{}% {}%", Num(position.x), Num(position.y))
}

/// Standalone SVG for one instance: a black shape path or text block, rotated about its center.
pub fn mask_svg(mask: &ResolvedMask) -> String {
    let mut out = String::new();
    open_svg(&mut out, mask.dimensions);

    let rotated = mask.rotation != 0.0;
    if rotated {
        let _ = write!(
            out,
            r#"<g transform="rotate({} {} {})">"#,
            Num(mask.rotation),
            Num(mask.dimensions.width / 2.0),
            Num(mask.dimensions.height / 2.0)
        );
    }

    match mask.kind {
        ShapeKind::Text => {
            let content = mask.text_content.as_deref().unwrap_or_default();
            layout_text(content, mask.dimensions, mask.text_style.as_ref())
                .write_elements(&mut out);
        }
        kind => {
            if kind == ShapeKind::Unknown {
                tracing::debug!(index = mask.source_index, "unknown mask kind renders nothing");
            }
            let d = path_data(kind, mask.dimensions, mask.path_data.as_deref());
            let _ = write!(out, r#"<path d="{}" fill="black"/>"#, escape_markup(&d));
        }
    }

    if rotated {
        out.push_str("</g>");
    }
    close_svg(&mut out);
    out
}

/// Wrap SVG markup into a percent-encoded data URI.
pub fn encode_mask_image(svg: &str) -> String {
    format!("{SVG_DATA_URI_PREFIX}{}", urlencoding::encode(svg))
}

/// Recover the SVG markup from a data URI produced by [`encode_mask_image`].
pub fn decode_mask_image(uri: &str) -> CollageResult<String> {
    let Some(payload) = uri.strip_prefix(SVG_DATA_URI_PREFIX) else {
        return Err(CollageError::validation(
            "mask image is not an svg data uri",
        ));
    };
    urlencoding::decode(payload)
        .map(|s| s.into_owned())
        .map_err(|e| CollageError::validation(format!("mask image payload is not utf-8: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/style/synth.rs"]
mod tests;
