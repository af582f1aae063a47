//! Window-level gesture listeners.
//!
//! Moves and releases are observed on `window`, not on the surface, so a
//! drag keeps tracking after the pointer leaves the surface's box.

use floatpane_core::ListenerHost;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, Window};

/// Events that move the active gesture.
///
/// `pointermove` is needed when the gesture began on a cancelled
/// `pointerdown`, which suppresses the compatibility mouse events.
pub const MOVE_EVENTS: [&str; 3] = ["mousemove", "touchmove", "pointermove"];

/// Events that end the active gesture.
pub const END_EVENTS: [&str; 5] = [
    "mouseup",
    "pointerup",
    "touchend",
    "touchcancel",
    "pointercancel",
];

/// Move/end closures registered on a browser window.
pub struct WindowListeners {
    window: Window,
    on_move: Closure<dyn FnMut(Event)>,
    on_end: Closure<dyn FnMut(Event)>,
}

impl WindowListeners {
    /// Wrap the callbacks; nothing is registered until
    /// [`ListenerHost::attach`].
    pub fn new<M, E>(window: Window, on_move: M, on_end: E) -> Self
    where
        M: FnMut(Event) + 'static,
        E: FnMut(Event) + 'static,
    {
        Self {
            window,
            on_move: Closure::new(on_move),
            on_end: Closure::new(on_end),
        }
    }

    fn move_fn(&self) -> &js_sys::Function {
        self.on_move.as_ref().unchecked_ref()
    }

    fn end_fn(&self) -> &js_sys::Function {
        self.on_end.as_ref().unchecked_ref()
    }
}

impl std::fmt::Debug for WindowListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowListeners").finish_non_exhaustive()
    }
}

impl ListenerHost for WindowListeners {
    fn attach(&mut self) {
        // touchmove must be non-passive or preventDefault cannot stop scrolling.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);

        for name in MOVE_EVENTS {
            if let Err(err) = self
                .window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    name,
                    self.move_fn(),
                    &options,
                )
            {
                warn!(event = name, ?err, "failed to attach move listener");
            }
        }
        for name in END_EVENTS {
            if let Err(err) = self
                .window
                .add_event_listener_with_callback(name, self.end_fn())
            {
                warn!(event = name, ?err, "failed to attach end listener");
            }
        }
    }

    fn detach(&mut self) {
        for name in MOVE_EVENTS {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(name, self.move_fn())
            {
                warn!(event = name, ?err, "failed to detach move listener");
            }
        }
        for name in END_EVENTS {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(name, self.end_fn())
            {
                warn!(event = name, ?err, "failed to detach end listener");
            }
        }
    }
}
