//! floatpane: draggable, resizable floating surfaces for the browser.
//!
//! The geometry and gesture logic lives in [`floatpane_core`] and is
//! re-exported here. On `wasm32` the [`browser`] module adds
//! `FloatingSurface`, which binds a controller to a DOM element.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { FloatingSurface } from './floatpane.js';
//!
//! async function main() {
//!     await init();
//!     const surface = new FloatingSurface(document.getElementById('modal'));
//!     header.addEventListener('mousedown', (e) => surface.on_drag_handle_pointer_down(e));
//!     corner.addEventListener('mousedown', (e) => surface.on_resize_handle_pointer_down(e));
//! }
//! ```

#![allow(
    clippy::doc_markdown,
    clippy::cast_possible_wrap,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::manual_let_else,
    clippy::missing_const_for_fn
)]

pub use floatpane_core::*;

pub mod browser;
pub mod style;

pub use style::SurfaceStyle;

#[cfg(target_arch = "wasm32")]
pub use browser::FloatingSurface;
