//! Browser bindings for floatpane surfaces.
//!
//! This module bridges [`floatpane_core`] to the DOM: it normalizes
//! mouse/touch/pointer events, owns the window-level move/end listeners
//! for the duration of a gesture, and writes geometry back to the element.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod listeners;
#[cfg(target_arch = "wasm32")]
pub mod runtime;
#[cfg(target_arch = "wasm32")]
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use events::event_to_input;
#[cfg(target_arch = "wasm32")]
pub use listeners::WindowListeners;
#[cfg(target_arch = "wasm32")]
pub use runtime::{init, log};
#[cfg(target_arch = "wasm32")]
pub use surface::FloatingSurface;
