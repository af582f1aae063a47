//! Browser event handling - converts web events to floatpane pointer input.
//!
//! Supports mouse, touch and pointer events. All positions are taken in
//! client (viewport) coordinates, the space surface geometry lives in.

use floatpane_core::{InputSource, MouseButton, Point, PointerInput};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, PointerEvent, Touch, TouchEvent};

/// Convert a web_sys MouseEvent.
pub fn mouse_event_to_input(event: &MouseEvent) -> PointerInput {
    let position = Point::new(event.client_x() as f32, event.client_y() as f32);
    PointerInput::mouse(position, Some(MouseButton::from_code(event.button())))
}

/// Convert a web_sys PointerEvent, honoring its device type.
pub fn pointer_event_to_input(event: &PointerEvent) -> PointerInput {
    let position = Point::new(event.client_x() as f32, event.client_y() as f32);
    match InputSource::from(event.pointer_type().as_str()) {
        InputSource::Touch => PointerInput::touch(position, event.cancelable()),
        InputSource::Pen => PointerInput::pen(position),
        InputSource::Mouse => {
            PointerInput::mouse(position, Some(MouseButton::from_code(event.button())))
        }
    }
}

/// Convert a web_sys TouchEvent (first touch only).
///
/// End events carry no active touches, so the first changed touch is used
/// instead. Returns `None` when the event has no touch points at all.
pub fn touch_event_to_input(event: &TouchEvent) -> Option<PointerInput> {
    let touch = first_touch(event)?;
    let position = Point::new(touch.client_x() as f32, touch.client_y() as f32);
    Some(PointerInput::touch(position, event.cancelable()))
}

fn first_touch(event: &TouchEvent) -> Option<Touch> {
    event.touches().get(0).or_else(|| event.changed_touches().get(0))
}

/// Convert any supported DOM event.
///
/// Pointer events are checked before mouse events because every
/// `PointerEvent` is also a `MouseEvent`.
pub fn event_to_input(event: &Event) -> Option<PointerInput> {
    if let Some(touch) = event.dyn_ref::<TouchEvent>() {
        touch_event_to_input(touch)
    } else if let Some(pointer) = event.dyn_ref::<PointerEvent>() {
        Some(pointer_event_to_input(pointer))
    } else {
        event.dyn_ref::<MouseEvent>().map(mouse_event_to_input)
    }
}
