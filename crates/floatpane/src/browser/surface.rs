//! `FloatingSurface`: a DOM element driven by a [`SurfaceController`].
//!
//! ```javascript
//! import init, { FloatingSurface } from './floatpane.js';
//!
//! await init();
//! const modal = document.getElementById('modal');
//! const surface = new FloatingSurface(modal, '{"initial_size":{"width":600,"height":400}}');
//! header.addEventListener('mousedown', (e) => surface.on_drag_handle_pointer_down(e));
//! header.addEventListener('touchstart', (e) => surface.on_drag_handle_pointer_down(e), { passive: false });
//! corner.addEventListener('mousedown', (e) => surface.on_resize_handle_pointer_down(e));
//! corner.addEventListener('touchstart', (e) => surface.on_resize_handle_pointer_down(e), { passive: false });
//! // or, with Pointer Events:
//! // header.addEventListener('pointerdown', (e) => surface.on_drag_handle_pointer_down(e));
//! window.addEventListener('resize', () => surface.on_viewport_resize());
//! ```

use super::events::event_to_input;
use super::listeners::WindowListeners;
use crate::style::SurfaceStyle;
use floatpane_core::{
    GestureStart, Rect, Subscription, SurfaceConfig, SurfaceController, SurfaceGeometry,
    Viewport,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, Window};

/// State shared between the surface handle and its window listeners.
///
/// Listeners hold only a `Weak` reference, so dropping the surface frees
/// the state, which in turn drops the subscription and detaches them.
struct SurfaceState {
    controller: SurfaceController,
    element: HtmlElement,
    on_change: Option<js_sys::Function>,
    listeners: Option<Subscription<WindowListeners>>,
}

impl SurfaceState {
    fn apply_style(&self) {
        let style = SurfaceStyle::from_geometry(
            &self.controller.geometry(),
            self.controller.is_small_screen(),
        );
        let declarations = self.element.style();
        for (property, value) in style.declarations() {
            if let Err(err) = declarations.set_property(property, value) {
                warn!(property, ?err, "failed to apply surface style");
            }
        }
    }

    /// Callback and geometry to report once the borrow is released.
    fn pending_change(&self) -> Option<(js_sys::Function, SurfaceGeometry)> {
        self.on_change
            .clone()
            .map(|callback| (callback, self.controller.geometry()))
    }
}

type SharedState = Rc<RefCell<SurfaceState>>;

/// Floating, draggable, resizable surface bound to a DOM element.
#[wasm_bindgen]
pub struct FloatingSurface {
    state: SharedState,
}

#[wasm_bindgen]
impl FloatingSurface {
    /// Bind `element`. `config_json` is an optional JSON `SurfaceConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, config_json: Option<String>) -> Result<FloatingSurface, JsValue> {
        let config = match config_json {
            Some(json) => {
                SurfaceConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => SurfaceConfig::default(),
        };
        let window = web_sys::window().ok_or("No window")?;
        let controller = SurfaceController::new(config, read_viewport(&window));

        let state = SurfaceState {
            controller,
            element,
            on_change: None,
            listeners: None,
        };
        state.apply_style();

        Ok(Self {
            state: Rc::new(RefCell::new(state)),
        })
    }

    /// Handler for mousedown/touchstart/pointerdown on the header.
    pub fn on_drag_handle_pointer_down(&self, event: Event) {
        let Some(input) = event_to_input(&event) else {
            return;
        };
        let mut state = self.state.borrow_mut();
        let live = rendered_rect(&state.element);
        let start = state.controller.begin_drag(&input, live);
        self.after_start(&mut state, start, &event);
    }

    /// Handler for mousedown/touchstart/pointerdown on the bottom-right corner.
    pub fn on_resize_handle_pointer_down(&self, event: Event) {
        let Some(input) = event_to_input(&event) else {
            return;
        };
        let mut state = self.state.borrow_mut();
        let start = state.controller.begin_resize(&input);
        self.after_start(&mut state, start, &event);
    }

    /// Re-read the viewport after a window resize.
    pub fn on_viewport_resize(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let change = {
            let mut state = self.state.borrow_mut();
            let rendered = rendered_rect(&state.element).size();
            let changed = state
                .controller
                .resize_viewport(read_viewport(&window), rendered);
            if !state.controller.is_interacting() {
                drop(state.listeners.take());
            }
            state.apply_style();
            if changed {
                state.pending_change()
            } else {
                None
            }
        };
        notify(change);
    }

    /// Register a callback receiving geometry JSON after each change.
    pub fn set_on_change(&self, callback: js_sys::Function) {
        self.state.borrow_mut().on_change = Some(callback);
    }

    /// End any gesture and detach window listeners now.
    pub fn dispose(&self) {
        let listeners = {
            let mut state = self.state.borrow_mut();
            state.controller.pointer_end();
            state.listeners.take()
        };
        drop(listeners);
    }

    /// Left edge in viewport pixels.
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 {
        self.state.borrow().controller.position().x
    }

    /// Top edge in viewport pixels.
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 {
        self.state.borrow().controller.position().y
    }

    /// Width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.state.borrow().controller.size().width
    }

    /// Height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.state.borrow().controller.size().height
    }

    /// Whether a drag or resize is in progress.
    #[wasm_bindgen(getter)]
    pub fn is_interacting(&self) -> bool {
        self.state.borrow().controller.is_interacting()
    }

    /// Whether the surface is in full-screen small-screen mode.
    #[wasm_bindgen(getter)]
    pub fn is_small_screen(&self) -> bool {
        self.state.borrow().controller.is_small_screen()
    }

    /// Current geometry as JSON.
    pub fn geometry_json(&self) -> String {
        serde_json::to_string(&self.state.borrow().controller.geometry()).unwrap_or_default()
    }
}

impl FloatingSurface {
    fn after_start(&self, state: &mut SurfaceState, start: GestureStart, event: &Event) {
        if !start.is_started() {
            return;
        }
        event.prevent_default();

        let Some(window) = web_sys::window() else {
            warn!("no window; gesture abandoned");
            state.controller.pointer_end();
            return;
        };
        let weak = Rc::downgrade(&self.state);
        let listeners = WindowListeners::new(
            window,
            {
                let weak = weak.clone();
                move |event: Event| handle_move(&weak, &event)
            },
            move |_event: Event| handle_end(&weak),
        );
        state.listeners = Some(Subscription::acquire(listeners));
        debug!(mode = ?state.controller.mode(), "window listeners acquired");
    }
}

fn handle_move(weak: &Weak<RefCell<SurfaceState>>, event: &Event) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Some(input) = event_to_input(event) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let change = {
        let Ok(mut state) = shared.try_borrow_mut() else {
            return;
        };
        let rendered = rendered_rect(&state.element).size();
        let outcome = state
            .controller
            .pointer_move(&input, read_viewport(&window), rendered);
        if outcome.prevent_default() {
            event.prevent_default();
        }
        if outcome.geometry().is_none() {
            return;
        }
        state.apply_style();
        state.pending_change()
    };
    notify(change);
}

fn handle_end(weak: &Weak<RefCell<SurfaceState>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let listeners = {
        let Ok(mut state) = shared.try_borrow_mut() else {
            return;
        };
        state.controller.pointer_end();
        state.listeners.take()
    };
    // Dropped outside the borrow; wasm-bindgen defers freeing the running closure.
    drop(listeners);
}

fn notify(change: Option<(js_sys::Function, SurfaceGeometry)>) {
    let Some((callback, geometry)) = change else {
        return;
    };
    let json = serde_json::to_string(&geometry).unwrap_or_default();
    if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
        warn!(?err, "on_change callback threw");
    }
}

fn read_viewport(window: &Window) -> Viewport {
    let dimension = |name: &'static str, value: Result<JsValue, JsValue>| {
        match value.ok().and_then(|v| v.as_f64()) {
            Some(px) => px as f32,
            None => {
                warn!(dimension = name, "window size unreadable; using 0");
                0.0
            }
        }
    };
    Viewport::new(
        dimension("innerWidth", window.inner_width()),
        dimension("innerHeight", window.inner_height()),
    )
}

fn rendered_rect(element: &HtmlElement) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
