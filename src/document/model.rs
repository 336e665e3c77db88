use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{CollageError, CollageResult};
use crate::geometry::primitives::parse_path_data;
use crate::layer::model::Layer;
use crate::pattern::builtin::builtin_patterns;
use crate::pattern::model::{Pattern, ShapeKind};
use crate::pipeline::mask_style_for_layer;
use crate::style::synth::MaskStyleDescriptor;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON-facing collection of patterns and the layers that reference them.
pub struct CollageDocument {
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl CollageDocument {
    /// Document holding the builtin patterns and no layers.
    pub fn with_builtin_patterns() -> Self {
        Self {
            patterns: builtin_patterns(),
            layers: Vec::new(),
        }
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(s: &str) -> CollageResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CollageResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Read and parse a document from disk. The result is not validated.
    pub fn load(path: impl AsRef<Path>) -> CollageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open collage document '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> CollageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check id uniqueness and that every custom mask carries parseable path data.
    ///
    /// Layers pointing at unknown patterns are accepted; they render unmasked.
    pub fn validate(&self) -> CollageResult<()> {
        let mut seen = HashSet::new();
        for p in &self.patterns {
            if p.id.is_empty() {
                return Err(CollageError::validation("pattern id must be non-empty"));
            }
            if !seen.insert(p.id.as_str()) {
                return Err(CollageError::validation(format!(
                    "duplicate pattern id '{}'",
                    p.id
                )));
            }
            for (i, m) in p.shape_masks.iter().enumerate() {
                if m.kind != ShapeKind::Custom {
                    continue;
                }
                if let Some(d) = m.path_data.as_deref() {
                    parse_path_data(d).map_err(|e| {
                        CollageError::validation(format!("pattern '{}' mask {i}: {e}", p.id))
                    })?;
                }
            }
        }

        let mut seen = HashSet::new();
        for l in &self.layers {
            if l.id.is_empty() {
                return Err(CollageError::validation("layer id must be non-empty"));
            }
            if !seen.insert(l.id.as_str()) {
                return Err(CollageError::validation(format!(
                    "duplicate layer id '{}'",
                    l.id
                )));
            }
        }
        Ok(())
    }

    pub fn pattern(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn pattern_mut(&mut self, id: &str) -> Option<&mut Pattern> {
        self.patterns.iter_mut().find(|p| p.id == id)
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Duplicate pattern `id`, append the copy and return its id.
    pub fn duplicate_pattern(&mut self, id: &str, suffix: impl std::fmt::Display) -> Option<String> {
        let copy = self.pattern(id)?.duplicate(suffix);
        let new_id = copy.id.clone();
        self.patterns.push(copy);
        Some(new_id)
    }

    /// Mask style of layer `layer_id`; an unknown layer id is a validation error.
    pub fn mask_style(&self, layer_id: &str) -> CollageResult<MaskStyleDescriptor> {
        let layer = self
            .layer(layer_id)
            .ok_or_else(|| CollageError::validation(format!("unknown layer id '{layer_id}'")))?;
        Ok(mask_style_for_layer(layer, &self.patterns))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
