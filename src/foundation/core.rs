pub use kurbo::{Point, Rect, Size};

/// The visible window onto the document, in document units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in document units.
    pub width: f64,
    /// Height in document units; scroll start lines are measured against it.
    pub height: f64,
}

impl Viewport {
    /// A viewport; negative or non-finite extents clamp to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    /// Extent as a [`Size`].
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Clamp a caller-supplied duration or distance to a finite, non-negative value.
pub fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
