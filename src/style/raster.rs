//! Reference rasterizer for [`MaskStyleDescriptor`].
//!
//! This turns a descriptor into an 8-bit coverage map the same way a CSS mask stack with
//! `mask-repeat: no-repeat` and `mask-composite: add` would: every instance is drawn at its
//! size, placed by the percentage position rule, and coverage is unioned.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{CollageError, CollageResult};
use crate::foundation::math::ceil_px;
use crate::style::synth::{MaskStyleDescriptor, decode_mask_image};

/// Largest instance edge accepted for rasterization.
const MAX_DIM: u32 = 16_384;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Row-major 8-bit mask coverage; 255 reveals media fully.
pub struct CoverageMask {
    pub width: u32,
    pub height: u32,
    pub alpha: Vec<u8>,
}

impl CoverageMask {
    fn filled(canvas: Canvas, value: u8) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            alpha: vec![value; canvas.area()],
        }
    }

    /// Coverage at pixel `(x, y)`; out-of-bounds reads as 0.
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Number of pixels with any coverage.
    pub fn covered_pixels(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }

    /// Write the coverage as a grayscale PNG.
    pub fn save_png(&self, path: &Path) -> CollageResult<()> {
        image::save_buffer_with_format(
            path,
            &self.alpha,
            self.width,
            self.height,
            image::ColorType::L8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write coverage png '{}'", path.display()))?;
        Ok(())
    }
}

/// Rasterize `descriptor` onto `canvas`.
///
/// Unmasked descriptors cover everything. Instances whose size is non-positive or not
/// finite reveal nothing and are skipped.
#[tracing::instrument(skip(descriptor), fields(instances = descriptor.len()))]
pub fn rasterize_coverage(
    descriptor: &MaskStyleDescriptor,
    canvas: Canvas,
) -> CollageResult<CoverageMask> {
    let canvas = Canvas::new(canvas.width, canvas.height)?;
    let Some(layers) = &descriptor.mask else {
        return Ok(CoverageMask::filled(canvas, u8::MAX));
    };

    let mut out = CoverageMask::filled(canvas, 0);
    let mut svg_opts = usvg::Options::default();
    let mut fonts_loaded = false;

    for (k, inst) in layers.instances().enumerate() {
        let Some((w, h)) = parse_size(inst.size) else {
            return Err(CollageError::validation(format!(
                "mask instance {k} has malformed size '{}'",
                inst.size
            )));
        };
        let Some((px, py)) = parse_position(inst.position) else {
            return Err(CollageError::validation(format!(
                "mask instance {k} has malformed position '{}'",
                inst.position
            )));
        };
        let (Some(pw), Some(ph)) = (ceil_px(w), ceil_px(h)) else {
            tracing::debug!(instance = k, w, h, "skipping degenerate mask instance");
            continue;
        };
        if pw > MAX_DIM || ph > MAX_DIM {
            return Err(CollageError::render(format!(
                "mask instance {k} too large: {pw}x{ph} (max {MAX_DIM}x{MAX_DIM})"
            )));
        }

        let ox = ((f64::from(canvas.width) - w) * px / 100.0).round();
        let oy = ((f64::from(canvas.height) - h) * py / 100.0).round();
        if !ox.is_finite() || !oy.is_finite() {
            tracing::debug!(instance = k, px, py, "skipping mask instance with non-finite position");
            continue;
        }

        let svg = decode_mask_image(inst.image)?;
        if !fonts_loaded && svg.contains("<text") {
            svg_opts.fontdb = Arc::new(system_fontdb());
            fonts_loaded = true;
        }
        let tree = usvg::Tree::from_data(svg.as_bytes(), &svg_opts)
            .with_context(|| format!("parse mask instance {k} svg"))?;
        let tile = rasterize_tree(&tree, pw, ph)?;

        union_tile(&mut out, &tile, pw, ph, ox, oy);
    }

    Ok(out)
}

fn system_fontdb() -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    db
}

/// Alpha channel of `tree` rendered into a `width` x `height` pixmap.
fn rasterize_tree(tree: &usvg::Tree, width: u32, height: u32) -> CollageResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CollageError::render("failed to allocate mask pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().chunks_exact(4).map(|px| px[3]).collect())
}

fn union_tile(out: &mut CoverageMask, tile: &[u8], tw: u32, th: u32, ox: f64, oy: f64) {
    let cw = i64::from(out.width);
    let ch = i64::from(out.height);
    let ox = ox.clamp(-(cw as f64), cw as f64) as i64;
    let oy = oy.clamp(-(ch as f64), ch as f64) as i64;
    for ty in 0..i64::from(th) {
        let y = oy + ty;
        if y < 0 || y >= ch {
            continue;
        }
        for tx in 0..i64::from(tw) {
            let x = ox + tx;
            if x < 0 || x >= cw {
                continue;
            }
            let a = tile[(ty * i64::from(tw) + tx) as usize];
            if a == 0 {
                continue;
            }
            let dst = &mut out.alpha[(y * cw + x) as usize];
            *dst = dst.saturating_add(a);
        }
    }
}

fn parse_pair(s: &str, unit: &str) -> Option<(f64, f64)> {
    let mut parts = s
        .split_whitespace()
        .map(|p| p.strip_suffix(unit).and_then(|v| v.parse::<f64>().ok()));
    let a = parts.next()??;
    let b = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b))
}

/// Parse `"{w}px {h}px"`.
pub fn parse_size(s: &str) -> Option<(f64, f64)> {
    parse_pair(s, "px")
}

/// Parse `"{x}% {y}%"`.
pub fn parse_position(s: &str) -> Option<(f64, f64)> {
    parse_pair(s, "%")
}

#[cfg(test)]
#[path = "../../tests/unit/style/raster.rs"]
mod tests;
