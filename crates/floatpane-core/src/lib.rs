//! Core types for floatpane floating surfaces.
//!
//! This crate holds everything that does not touch a real display:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Normalized pointer input: [`PointerInput`]
//! - Configuration: [`SurfaceConfig`] (code, YAML, TOML or JSON)
//! - The drag/resize state machine: [`SurfaceController`]
//! - Scoped listener ownership: [`Subscription`]
//!
//! Platform bindings convert native events into [`PointerInput`] and apply
//! [`SurfaceGeometry`] back onto the rendered element.

mod config;
mod controller;
mod error;
mod event;
mod geometry;
mod session;
mod subscription;
mod viewport;

pub use config::{SurfaceConfig, DEFAULT_INITIAL_SIZE, DEFAULT_MIN_SIZE};
pub use controller::{GestureStart, IgnoreReason, MoveOutcome, SurfaceController, SurfaceGeometry};
pub use error::ConfigError;
pub use event::{InputSource, MouseButton, PointerInput};
pub use geometry::{Point, Rect, Size};
pub use session::InteractionMode;
pub use subscription::{ListenerHost, Subscription};
pub use viewport::{Viewport, DEFAULT_BREAKPOINT};
