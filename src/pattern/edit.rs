//! Pure editing operations over patterns and transforms.
//!
//! Every operation works on owned values; nothing here shares substructure between an
//! original and its derived copy.

use std::f64::consts::TAU;

use crate::foundation::core::Vec2;
use crate::pattern::model::{
    AxisPatch, Pattern, ShapeKind, ShapeMask, TextStyle, TextStylePatch, Transform,
    TransformPatch,
};

/// Horizontal step between grown rectangle and triangle masks, in percentage points.
const LINEAR_STEP: f64 = 15.0;
/// Horizontal step between grown custom masks.
const CUSTOM_STEP: f64 = 30.0;
/// Radius of the ring grown circle masks are arranged on.
const CIRCLE_RING_RADIUS: f64 = 20.0;

fn patch_axis(v: Vec2, patch: Option<AxisPatch>) -> Vec2 {
    match patch {
        Some(p) => Vec2::new(p.x.unwrap_or(v.x), p.y.unwrap_or(v.y)),
        None => v,
    }
}

impl Transform {
    /// Return a copy with every present patch field applied; vectors merge per component.
    pub fn apply_patch(self, patch: &TransformPatch) -> Self {
        Self {
            scale: patch_axis(self.scale, patch.scale),
            rotation: patch.rotation.unwrap_or(self.rotation),
            position: patch_axis(self.position, patch.position),
            spacing: patch.spacing.unwrap_or(self.spacing),
            repetitions: patch.repetitions.unwrap_or(self.repetitions),
            shape_count: patch.shape_count.or(self.shape_count),
        }
    }
}

impl TextStyle {
    /// Return a copy with every present patch field applied.
    pub fn apply_patch(&self, patch: &TextStylePatch) -> Self {
        Self {
            font_family: patch
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.clone()),
            font_size: patch.font_size.unwrap_or(self.font_size),
            font_weight: patch
                .font_weight
                .clone()
                .unwrap_or_else(|| self.font_weight.clone()),
            text_align: patch.text_align.unwrap_or(self.text_align),
            line_height: patch.line_height.unwrap_or(self.line_height),
        }
    }
}

impl Pattern {
    /// Merge `patch` into the transform of the mask at `index`.
    ///
    /// Returns `false` (and leaves the pattern untouched) when `index` is out of range.
    pub fn update_shape_transform(&mut self, index: usize, patch: &TransformPatch) -> bool {
        let Some(mask) = self.shape_masks.get_mut(index) else {
            return false;
        };
        let current = mask.transform.unwrap_or_default();
        mask.transform = Some(current.apply_patch(patch));
        true
    }

    /// Merge `patch` into the global transform.
    pub fn update_global_transform(&mut self, patch: &TransformPatch) {
        let current = self.global_transform.unwrap_or_default();
        self.global_transform = Some(current.apply_patch(patch));
    }

    /// Reset the global transform to identity and drop every individual mask transform.
    pub fn reset_transforms(&mut self) {
        self.global_transform = Some(Transform::IDENTITY);
        for mask in &mut self.shape_masks {
            mask.transform = None;
        }
    }

    /// Deep copy with id `"{id}-copy-{suffix}"` and name `"{name} (Copy)"`.
    pub fn duplicate(&self, suffix: impl std::fmt::Display) -> Self {
        Self {
            id: format!("{}-copy-{suffix}", self.id),
            name: format!("{} (Copy)", self.name),
            shape_masks: self.shape_masks.clone(),
            global_transform: self.global_transform,
        }
    }

    /// Grow or shrink the mask list to `target` entries, see [`resize_masks`].
    pub fn resize(&mut self, target: usize) {
        self.shape_masks = resize_masks(&self.shape_masks, target);
    }
}

/// Derive a mask list of exactly `target` entries.
///
/// Shrinking keeps the prefix. Growing appends copies of the first mask (or a default
/// 150x200 rectangle at 20%/50% for an empty list), positioned per kind:
/// rectangles and triangles step right by 15 points per index, custom shapes by 30,
/// circles are spread on a 20-point ring, and triangles alternate 0/180 degree rotation.
pub fn resize_masks(masks: &[ShapeMask], target: usize) -> Vec<ShapeMask> {
    if target <= masks.len() {
        return masks[..target].to_vec();
    }

    let template = masks.first().cloned().unwrap_or_else(default_template);
    let base = template.position;

    let mut out = Vec::with_capacity(target);
    out.extend_from_slice(masks);
    for i in masks.len()..target {
        let mut mask = template.clone();
        let fi = i as f64;
        match template.kind {
            ShapeKind::Rectangle | ShapeKind::Triangle => {
                mask.position = Vec2::new(base.x + fi * LINEAR_STEP, base.y);
            }
            ShapeKind::Circle => {
                let angle = (fi / target as f64) * TAU;
                mask.position = Vec2::new(
                    base.x + angle.cos() * CIRCLE_RING_RADIUS,
                    base.y + angle.sin() * CIRCLE_RING_RADIUS,
                );
            }
            ShapeKind::Custom => {
                mask.position = Vec2::new(base.x + fi * CUSTOM_STEP, base.y);
            }
            ShapeKind::Text | ShapeKind::Unknown => {}
        }
        if template.kind == ShapeKind::Triangle {
            mask.rotation = ((i % 2) as f64) * 180.0;
        }
        out.push(mask);
    }
    out
}

fn default_template() -> ShapeMask {
    ShapeMask::new(ShapeKind::Rectangle, 150.0, 200.0, Vec2::new(20.0, 50.0))
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/edit.rs"]
mod tests;
