use crate::pattern::model::{TextStyle, TextStylePatch, Transform, TransformPatch};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// The slice of a media layer the mask engine consumes.
///
/// Playback, source and visibility state belong to the host editor and are not modelled here.
pub struct Layer {
    /// Stable layer key.
    pub id: String,
    /// Key into the pattern collection; `None` renders the layer unmasked.
    #[serde(default)]
    pub pattern_id: Option<String>,
    /// Replaces the pattern's global transform when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_transform: Option<Transform>,
    /// Overrides the text of every text mask in the pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// Overrides the style of every text mask in the pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl Layer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pattern_id: None,
            pattern_transform: None,
            text_content: None,
            text_style: None,
        }
    }

    pub fn with_pattern(mut self, pattern_id: impl Into<String>) -> Self {
        self.pattern_id = Some(pattern_id.into());
        self
    }

    pub fn with_pattern_transform(mut self, transform: Transform) -> Self {
        self.pattern_transform = Some(transform);
        self
    }

    /// Merge `patch` into the layer override, starting from identity when there is none.
    pub fn update_pattern_transform(&mut self, patch: &TransformPatch) {
        let current = self.pattern_transform.unwrap_or_default();
        self.pattern_transform = Some(current.apply_patch(patch));
    }

    /// Drop the override so the pattern's global transform applies again.
    pub fn clear_pattern_transform(&mut self) {
        self.pattern_transform = None;
    }

    pub fn set_text_content(&mut self, content: impl Into<String>) {
        self.text_content = Some(content.into());
    }

    /// Merge `patch` into the text style override, starting from the default style.
    pub fn update_text_style(&mut self, patch: &TextStylePatch) {
        let next = match &self.text_style {
            Some(current) => current.apply_patch(patch),
            None => TextStyle::default().apply_patch(patch),
        };
        self.text_style = Some(next);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/model.rs"]
mod tests;
