use crate::compose::expand::expand;
use crate::compose::resolve::resolve_pattern;
use crate::layer::model::Layer;
use crate::pattern::model::Pattern;
use crate::style::synth::{MaskStyleDescriptor, synthesize};

/// Mask style for `layer`, looking its pattern up in `patterns`.
///
/// A layer without a pattern, or pointing at a pattern that does not exist, is shown unmasked.
#[tracing::instrument(skip_all, fields(layer = %layer.id))]
pub fn mask_style_for_layer(layer: &Layer, patterns: &[Pattern]) -> MaskStyleDescriptor {
    let Some(pattern_id) = layer.pattern_id.as_deref() else {
        return MaskStyleDescriptor::unmasked();
    };
    let Some(pattern) = patterns.iter().find(|p| p.id == pattern_id) else {
        tracing::debug!(pattern_id, "layer references a missing pattern; rendering unmasked");
        return MaskStyleDescriptor::unmasked();
    };
    mask_style_for_pattern(pattern, Some(layer))
}

/// Resolve, expand and synthesize `pattern` with optional layer overrides.
pub fn mask_style_for_pattern(pattern: &Pattern, layer: Option<&Layer>) -> MaskStyleDescriptor {
    let resolved = resolve_pattern(pattern, layer);
    let expanded = expand(resolved.masks, resolved.repetitions);
    tracing::debug!(
        instances = expanded.len(),
        repetitions = resolved.repetitions,
        "synthesizing mask style"
    );
    synthesize(&expanded)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
