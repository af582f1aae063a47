//! Gesture session state.
//!
//! A session is a single enum, so a surface is never dragging and resizing
//! at once. Anchors live inside the variants and are not visible outside
//! the crate; callers observe only [`InteractionMode`].

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Externally observable gesture mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InteractionMode {
    /// No gesture in progress
    #[default]
    Idle,
    /// Header drag in progress
    Dragging,
    /// Corner resize in progress
    Resizing,
}

/// Pointer and size captured when a resize starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResizeAnchor {
    pub(crate) pointer: Point,
    pub(crate) size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum InteractionSession {
    #[default]
    Idle,
    Dragging {
        /// Pointer minus the surface's top-left at gesture start.
        anchor_offset: Point,
    },
    Resizing {
        anchor: ResizeAnchor,
    },
}

impl InteractionSession {
    pub(crate) const fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Dragging { .. } => InteractionMode::Dragging,
            Self::Resizing { .. } => InteractionMode::Resizing,
        }
    }

    pub(crate) const fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Top-left that keeps the pointer on the same spot of the surface.
    pub(crate) fn drag_origin(anchor_offset: Point, pointer: Point) -> Point {
        pointer - anchor_offset
    }

    /// Anchor size grown by the pointer's travel since gesture start,
    /// floored at `min`.
    pub(crate) fn resized(anchor: ResizeAnchor, pointer: Point, min: Size) -> Size {
        anchor.size.grow(pointer - anchor.pointer).max(min)
    }
}
