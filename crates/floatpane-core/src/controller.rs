//! Drag/resize controller for a floating surface.
//!
//! The controller owns the public [`SurfaceGeometry`] and the private
//! gesture session. Platform code feeds it normalized [`PointerInput`]s:
//!
//! 1. a press on the header calls [`SurfaceController::begin_drag`], a
//!    press on the bottom-right corner calls
//!    [`SurfaceController::begin_resize`];
//! 2. window-level moves call [`SurfaceController::pointer_move`];
//! 3. window-level releases call [`SurfaceController::pointer_end`].
//!
//! Every move is computed from the anchor captured at gesture start, never
//! from the previous move, so the result depends only on the anchor and the
//! current pointer.
//!
//! # Example
//!
//! ```
//! use floatpane_core::{MouseButton, Point, PointerInput, Rect, Size, SurfaceConfig,
//!     SurfaceController, Viewport};
//!
//! let viewport = Viewport::new(1920.0, 1080.0);
//! let config = SurfaceConfig::new()
//!     .with_initial_size(Size::new(600.0, 400.0))
//!     .with_min_size(Size::new(400.0, 300.0));
//! let mut surface = SurfaceController::new(config, viewport);
//! assert_eq!(surface.position(), Point::new(660.0, 340.0));
//!
//! let press = PointerInput::mouse(Point::new(700.0, 380.0), Some(MouseButton::Left));
//! let rendered = Rect::from_origin_size(surface.position(), surface.size());
//! assert!(surface.begin_drag(&press, rendered).is_started());
//!
//! let moved = PointerInput::mouse(Point::new(900.0, 500.0), None);
//! surface.pointer_move(&moved, viewport, surface.size());
//! assert_eq!(surface.position(), Point::new(860.0, 460.0));
//! ```

use crate::config::SurfaceConfig;
use crate::error::ConfigError;
use crate::event::PointerInput;
use crate::geometry::{Point, Rect, Size};
use crate::session::{InteractionMode, InteractionSession, ResizeAnchor};
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Position and size of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SurfaceGeometry {
    /// Top-left corner in viewport coordinates
    pub position: Point,
    /// Width and height
    pub size: Size,
}

impl SurfaceGeometry {
    /// Create new geometry.
    #[must_use]
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Geometry as a rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// Why a gesture-start request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Viewport is below the small-screen breakpoint
    SmallScreen,
    /// Mouse press with a non-primary button
    SecondaryButton,
    /// Another gesture is already in progress
    GestureActive,
}

/// Result of a gesture-start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureStart {
    /// Gesture began; the caller should suppress the event's default
    /// behavior and start listening for moves.
    Started,
    /// Request was a no-op.
    Ignored(IgnoreReason),
}

impl GestureStart {
    /// Whether a gesture began.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        matches!(self, Self::Started)
    }
}

/// Result of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No gesture active; nothing changed.
    Idle,
    /// Drag updated the position.
    Moved {
        /// Geometry after the move
        geometry: SurfaceGeometry,
        /// Caller should suppress the event's default action
        prevent_default: bool,
    },
    /// Resize updated the size.
    Resized {
        /// Geometry after the move
        geometry: SurfaceGeometry,
        /// Caller should suppress the event's default action
        prevent_default: bool,
    },
}

impl MoveOutcome {
    /// Whether the caller should call `preventDefault` on the event.
    #[must_use]
    pub const fn prevent_default(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Moved {
                prevent_default, ..
            }
            | Self::Resized {
                prevent_default, ..
            } => *prevent_default,
        }
    }

    /// Geometry after the move, if a gesture was active.
    #[must_use]
    pub const fn geometry(&self) -> Option<SurfaceGeometry> {
        match self {
            Self::Idle => None,
            Self::Moved { geometry, .. } | Self::Resized { geometry, .. } => Some(*geometry),
        }
    }
}

/// Tracks drag and resize gestures for one floating surface.
#[derive(Debug, Clone)]
pub struct SurfaceController {
    config: SurfaceConfig,
    viewport: Viewport,
    small_screen: bool,
    geometry: SurfaceGeometry,
    session: InteractionSession,
}

impl SurfaceController {
    /// Create a controller for the given viewport.
    ///
    /// The surface starts centered, or at the origin on small screens. An
    /// initial size below `min_size` is raised to it.
    #[must_use]
    pub fn new(config: SurfaceConfig, viewport: Viewport) -> Self {
        let small_screen = viewport.is_small_screen(config.small_screen_breakpoint);
        let size = config.initial_size.max(config.min_size);
        let position = if small_screen {
            Point::ORIGIN
        } else {
            centered(size, viewport)
        };
        let geometry = SurfaceGeometry::new(position, size);

        debug!(
            x = position.x,
            y = position.y,
            width = geometry.size.width,
            height = geometry.size.height,
            small_screen,
            "surface created"
        );

        Self {
            config,
            viewport,
            small_screen,
            geometry,
            session: InteractionSession::Idle,
        }
    }

    /// Validate `config` and create a controller.
    pub fn try_new(config: SurfaceConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, viewport))
    }

    /// Current top-left corner.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.geometry.position
    }

    /// Current size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.geometry.size
    }

    /// Current geometry.
    #[must_use]
    pub const fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    /// Current gesture mode.
    #[must_use]
    pub const fn mode(&self) -> InteractionMode {
        self.session.mode()
    }

    /// Whether a drag or resize is in progress.
    #[must_use]
    pub const fn is_interacting(&self) -> bool {
        self.session.is_active()
    }

    /// Whether the surface is in full-screen, non-interactive mode.
    #[must_use]
    pub const fn is_small_screen(&self) -> bool {
        self.small_screen
    }

    /// Last viewport recorded at construction or by
    /// [`resize_viewport`](Self::resize_viewport).
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Start dragging from a press on the header.
    ///
    /// `surface` is the live rendered bounding box; the anchor offset is
    /// taken from it rather than from stored state.
    pub fn begin_drag(&mut self, input: &PointerInput, surface: Rect) -> GestureStart {
        if let Some(reason) = self.start_guard(input) {
            trace!(?reason, "drag start ignored");
            return GestureStart::Ignored(reason);
        }

        let anchor_offset = input.position - surface.origin();
        self.session = InteractionSession::Dragging { anchor_offset };
        debug!(
            offset_x = anchor_offset.x,
            offset_y = anchor_offset.y,
            source = ?input.source,
            "drag started"
        );
        GestureStart::Started
    }

    /// Start resizing from a press on the bottom-right corner.
    pub fn begin_resize(&mut self, input: &PointerInput) -> GestureStart {
        if let Some(reason) = self.start_guard(input) {
            trace!(?reason, "resize start ignored");
            return GestureStart::Ignored(reason);
        }

        let anchor = ResizeAnchor {
            pointer: input.position,
            size: self.geometry.size,
        };
        self.session = InteractionSession::Resizing { anchor };
        debug!(
            width = anchor.size.width,
            height = anchor.size.height,
            source = ?input.source,
            "resize started"
        );
        GestureStart::Started
    }

    /// Apply a window-level pointer move.
    ///
    /// `viewport` and `rendered` are read at move time; drags clamp the
    /// rendered surface into the viewport.
    pub fn pointer_move(
        &mut self,
        input: &PointerInput,
        viewport: Viewport,
        rendered: Size,
    ) -> MoveOutcome {
        let prevent_default = input.suppresses_scroll();

        match self.session {
            InteractionSession::Idle => MoveOutcome::Idle,
            InteractionSession::Dragging { anchor_offset } => {
                let proposed = InteractionSession::drag_origin(anchor_offset, input.position);
                self.geometry.position = proposed.clamp_to(viewport.size().slack(rendered));
                trace!(
                    x = self.geometry.position.x,
                    y = self.geometry.position.y,
                    "drag move"
                );
                MoveOutcome::Moved {
                    geometry: self.geometry,
                    prevent_default,
                }
            }
            InteractionSession::Resizing { anchor } => {
                self.geometry.size =
                    InteractionSession::resized(anchor, input.position, self.config.min_size);
                trace!(
                    width = self.geometry.size.width,
                    height = self.geometry.size.height,
                    "resize move"
                );
                MoveOutcome::Resized {
                    geometry: self.geometry,
                    prevent_default,
                }
            }
        }
    }

    /// End the current gesture. Returns `false` if none was active.
    pub fn pointer_end(&mut self) -> bool {
        let mode = self.session.mode();
        if mode == InteractionMode::Idle {
            return false;
        }

        self.session = InteractionSession::Idle;
        debug!(
            ?mode,
            x = self.geometry.position.x,
            y = self.geometry.position.y,
            width = self.geometry.size.width,
            height = self.geometry.size.height,
            "gesture ended"
        );
        true
    }

    /// Record a new viewport size.
    ///
    /// Crossing into small-screen mode ends any gesture and pins the
    /// surface to the origin; crossing out of it re-centers the surface.
    /// Otherwise the position is re-clamped only when
    /// [`SurfaceConfig::reclamp_on_viewport_resize`] is set. Returns whether
    /// the geometry changed.
    pub fn resize_viewport(&mut self, viewport: Viewport, rendered: Size) -> bool {
        let was_small = self.small_screen;
        let before = self.geometry;

        self.viewport = viewport;
        self.small_screen = viewport.is_small_screen(self.config.small_screen_breakpoint);

        if self.small_screen {
            if self.session.is_active() {
                self.session = InteractionSession::Idle;
                debug!("gesture ended by small-screen transition");
            }
            self.geometry.position = Point::ORIGIN;
        } else if was_small {
            self.geometry.position = centered(self.geometry.size, viewport);
        } else if self.config.reclamp_on_viewport_resize {
            self.geometry.position = self
                .geometry
                .position
                .clamp_to(viewport.size().slack(rendered));
        }

        debug!(
            width = viewport.width,
            height = viewport.height,
            small_screen = self.small_screen,
            "viewport resized"
        );
        self.geometry != before
    }

    fn start_guard(&self, input: &PointerInput) -> Option<IgnoreReason> {
        if self.small_screen {
            Some(IgnoreReason::SmallScreen)
        } else if !input.is_primary_press() {
            Some(IgnoreReason::SecondaryButton)
        } else if self.session.is_active() {
            Some(IgnoreReason::GestureActive)
        } else {
            None
        }
    }
}

/// Top-left that centers `size` in `viewport`, never negative.
fn centered(size: Size, viewport: Viewport) -> Point {
    let slack = viewport.size().slack(size);
    Point::new((slack.width / 2.0).max(0.0), (slack.height / 2.0).max(0.0))
}
