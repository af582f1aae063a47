//! Device-independent pointer input.
//!
//! Mouse, touch and pen events are normalized into a single
//! [`PointerInput`] at the platform boundary. Geometry code only ever sees
//! a position plus the two facts it needs from the device: whether the
//! press came from the primary button, and whether the platform's default
//! action (page scroll for touch) can still be suppressed.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
    /// Additional button 1
    Button4,
    /// Additional button 2
    Button5,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub const fn from_code(code: i16) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            3 => Self::Button4,
            _ => Self::Button5,
        }
    }

    /// Whether this is the primary (left) button.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Left)
    }
}

/// Device family an input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InputSource {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch contact
    Touch,
    /// Pen/stylus pointer
    Pen,
}

impl From<&str> for InputSource {
    fn from(s: &str) -> Self {
        match s {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

/// A normalized pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Position in viewport (client) coordinates
    pub position: Point,
    /// Originating device family
    pub source: InputSource,
    /// Pressed button, mouse only
    pub button: Option<MouseButton>,
    /// Whether the platform default action can still be prevented
    pub cancelable: bool,
}

impl PointerInput {
    /// A mouse sample. `button` is `None` for plain moves.
    #[must_use]
    pub const fn mouse(position: Point, button: Option<MouseButton>) -> Self {
        Self {
            position,
            source: InputSource::Mouse,
            button,
            cancelable: true,
        }
    }

    /// A touch sample for the first touch point of an event.
    #[must_use]
    pub const fn touch(position: Point, cancelable: bool) -> Self {
        Self {
            position,
            source: InputSource::Touch,
            button: None,
            cancelable,
        }
    }

    /// A pen sample.
    #[must_use]
    pub const fn pen(position: Point) -> Self {
        Self {
            position,
            source: InputSource::Pen,
            button: None,
            cancelable: true,
        }
    }

    /// Whether this input may start a gesture.
    ///
    /// Touch and pen contacts always qualify; a mouse press qualifies only
    /// for the primary button.
    #[must_use]
    pub fn is_primary_press(&self) -> bool {
        match self.source {
            InputSource::Mouse => self.button.map_or(true, MouseButton::is_primary),
            InputSource::Touch | InputSource::Pen => true,
        }
    }

    /// Whether a move with this input should suppress page scrolling.
    #[must_use]
    pub const fn suppresses_scroll(&self) -> bool {
        matches!(self.source, InputSource::Touch) && self.cancelable
    }
}
