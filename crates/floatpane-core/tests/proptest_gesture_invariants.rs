//! Property tests for drag and resize invariants.

use floatpane_core::{
    InteractionMode, MouseButton, Point, PointerInput, Rect, Size, SurfaceConfig,
    SurfaceController, Viewport,
};
use proptest::prelude::*;

fn pointer() -> impl Strategy<Value = Point> {
    (-10_000.0f32..10_000.0, -10_000.0f32..10_000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn desktop_viewport() -> impl Strategy<Value = Viewport> {
    (1024.0f32..4000.0, 400.0f32..3000.0).prop_map(|(w, h)| Viewport::new(w, h))
}

fn config() -> impl Strategy<Value = SurfaceConfig> {
    (100.0f32..900.0, 100.0f32..700.0, 0.0f32..600.0, 0.0f32..600.0).prop_map(
        |(min_w, min_h, extra_w, extra_h)| {
            SurfaceConfig::new()
                .with_min_size(Size::new(min_w, min_h))
                .with_initial_size(Size::new(min_w + extra_w, min_h + extra_h))
        },
    )
}

fn press(p: Point) -> PointerInput {
    PointerInput::mouse(p, Some(MouseButton::Left))
}

fn moved(p: Point) -> PointerInput {
    PointerInput::mouse(p, None)
}

proptest! {
    #[test]
    fn prop_drag_stays_inside_viewport(
        cfg in config(),
        viewport in desktop_viewport(),
        start in pointer(),
        moves in prop::collection::vec(pointer(), 1..40),
    ) {
        let mut c = SurfaceController::new(cfg, viewport);
        c.begin_drag(&press(start), c.geometry().rect());

        for p in moves {
            c.pointer_move(&moved(p), viewport, c.size());
            let pos = c.position();
            let max_x = (viewport.width - c.size().width).max(0.0);
            let max_y = (viewport.height - c.size().height).max(0.0);
            prop_assert!(pos.x >= 0.0 && pos.x <= max_x, "x {} outside [0, {}]", pos.x, max_x);
            prop_assert!(pos.y >= 0.0 && pos.y <= max_y, "y {} outside [0, {}]", pos.y, max_y);
        }
    }

    #[test]
    fn prop_resize_never_below_minimum(
        cfg in config(),
        viewport in desktop_viewport(),
        start in pointer(),
        moves in prop::collection::vec(pointer(), 1..40),
    ) {
        let mut c = SurfaceController::new(cfg, viewport);
        c.begin_resize(&press(start));

        for p in moves {
            c.pointer_move(&moved(p), viewport, c.size());
            prop_assert!(c.size().width >= cfg.min_size.width);
            prop_assert!(c.size().height >= cfg.min_size.height);
        }
    }

    #[test]
    fn prop_drag_result_depends_only_on_last_pointer(
        viewport in desktop_viewport(),
        start in pointer(),
        detour in prop::collection::vec(pointer(), 0..20),
        last in pointer(),
    ) {
        let cfg = SurfaceConfig::default();
        let mut direct = SurfaceController::new(cfg, viewport);
        let mut wandering = SurfaceController::new(cfg, viewport);
        let live = direct.geometry().rect();

        direct.begin_drag(&press(start), live);
        wandering.begin_drag(&press(start), live);

        for p in detour {
            wandering.pointer_move(&moved(p), viewport, live.size());
        }
        direct.pointer_move(&moved(last), viewport, live.size());
        wandering.pointer_move(&moved(last), viewport, live.size());

        prop_assert_eq!(direct.position(), wandering.position());
    }

    #[test]
    fn prop_resize_result_depends_only_on_last_pointer(
        start in pointer(),
        detour in prop::collection::vec(pointer(), 0..20),
        last in pointer(),
    ) {
        let viewport = Viewport::new(1920.0, 1080.0);
        let cfg = SurfaceConfig::default();
        let mut direct = SurfaceController::new(cfg, viewport);
        let mut wandering = SurfaceController::new(cfg, viewport);

        direct.begin_resize(&press(start));
        wandering.begin_resize(&press(start));
        for p in detour {
            wandering.pointer_move(&moved(p), viewport, wandering.size());
        }
        direct.pointer_move(&moved(last), viewport, direct.size());
        wandering.pointer_move(&moved(last), viewport, wandering.size());

        prop_assert_eq!(direct.size(), wandering.size());
    }

    #[test]
    fn prop_at_most_one_gesture(
        ops in prop::collection::vec((0u8..4, pointer()), 1..60),
    ) {
        let viewport = Viewport::new(1920.0, 1080.0);
        let mut c = SurfaceController::new(SurfaceConfig::default(), viewport);

        for (op, p) in ops {
            let before = c.mode();
            match op {
                0 => {
                    let started = c.begin_drag(&press(p), c.geometry().rect()).is_started();
                    prop_assert!(!started || before == InteractionMode::Idle);
                }
                1 => {
                    let started = c.begin_resize(&press(p)).is_started();
                    prop_assert!(!started || before == InteractionMode::Idle);
                }
                2 => {
                    c.pointer_move(&moved(p), viewport, c.size());
                    prop_assert_eq!(c.mode(), before);
                }
                _ => {
                    c.pointer_end();
                    prop_assert_eq!(c.mode(), InteractionMode::Idle);
                }
            }
        }
    }

    #[test]
    fn prop_idle_moves_change_nothing(
        start in pointer(),
        gesture_moves in prop::collection::vec(pointer(), 0..10),
        idle_moves in prop::collection::vec(pointer(), 1..30),
        resize in any::<bool>(),
    ) {
        let viewport = Viewport::new(1920.0, 1080.0);
        let mut c = SurfaceController::new(SurfaceConfig::default(), viewport);
        if resize {
            c.begin_resize(&press(start));
        } else {
            c.begin_drag(&press(start), c.geometry().rect());
        }
        for p in gesture_moves {
            c.pointer_move(&moved(p), viewport, c.size());
        }
        c.pointer_end();

        let settled = c.geometry();
        for p in idle_moves {
            c.pointer_move(&moved(p), viewport, c.size());
            prop_assert_eq!(c.geometry(), settled);
        }
    }

    #[test]
    fn prop_small_screen_is_inert(
        width in 200.0f32..1023.0,
        height in 200.0f32..2000.0,
        presses in prop::collection::vec(pointer(), 1..10),
    ) {
        let viewport = Viewport::new(width, height);
        let mut c = SurfaceController::new(SurfaceConfig::default(), viewport);
        let initial = c.geometry();
        prop_assert_eq!(initial.position, Point::ORIGIN);

        for p in presses {
            c.begin_drag(&press(p), Rect::from_origin_size(Point::ORIGIN, c.size()));
            c.begin_resize(&press(p));
            c.pointer_move(&moved(p), viewport, c.size());
            prop_assert_eq!(c.geometry(), initial);
            prop_assert!(!c.is_interacting());
        }
    }
}
