use crate::foundation::error::{CollageError, CollageResult};

pub use kurbo::{BezPath, Rect, Size, Vec2};

/// Pixel dimensions of a rendering surface that mask descriptors are placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> CollageResult<Self> {
        if width == 0 || height == 0 {
            return Err(CollageError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the canvas.
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
