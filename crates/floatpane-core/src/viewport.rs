//! Display-area dimensions.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Default small-screen breakpoint in logical pixels.
pub const DEFAULT_BREAKPOINT: f32 = 1024.0;

/// Width and height of the area a surface floats in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Viewport {
    /// Width in logical pixels
    pub width: f32,
    /// Height in logical pixels
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport extent as a [`Size`].
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Widths strictly below `breakpoint` are small screens.
    #[must_use]
    pub fn is_small_screen(&self, breakpoint: f32) -> bool {
        self.width < breakpoint
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert!(Viewport::new(1023.0, 800.0).is_small_screen(DEFAULT_BREAKPOINT));
        assert!(!Viewport::new(1024.0, 800.0).is_small_screen(DEFAULT_BREAKPOINT));
    }

    #[test]
    fn test_viewport_size_conversion() {
        let v = Viewport::from(Size::new(1920.0, 1080.0));
        assert_eq!(v.size(), Size::new(1920.0, 1080.0));
    }
}
