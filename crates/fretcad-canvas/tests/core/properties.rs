//! Property-based invariants for the view transform, zoom controls, grid and
//! split layout.
//!
//! 1. Zooming about a cursor keeps the logical point under it fixed.
//! 2. logical -> screen -> logical is the identity.
//! 3. No input sequence drives zoom outside [0.2, 4].
//! 4. Grid size never grows with zoom and never drops below 1/8 inch.
//! 5. Grid major spacing and the ruler interval are one octave apart at most.
//! 6. The split ratio stays inside [0.1, 0.9] while dragging.

use std::sync::Arc;

use fretcad_canvas::{
    adaptive_grid_size, adaptive_ruler_interval, CanvasConfig, DisplaySettings, Point, Size,
    SplitViewLayout, ViewTransform, ViewportController, INCH_TO_PIXEL, MIN_GRID_SIZE,
};
use fretcad_core::{shared, EventBus, Pane};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn zoom() -> impl Strategy<Value = f64> {
    0.2f64..=4.0
}

fn pan() -> impl Strategy<Value = Point> {
    (-5000.0f64..5000.0, -5000.0f64..5000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn cursor() -> impl Strategy<Value = Point> {
    (0.0f64..2000.0, 0.0f64..1500.0).prop_map(|(x, y)| Point::new(x, y))
}

fn inset() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(20.0)]
}

#[derive(Debug, Clone)]
enum Input {
    Wheel(f64, Point),
    ZoomIn,
    ZoomOut,
    Reset,
    Drag(Point, Point),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        (-500.0f64..500.0, cursor()).prop_map(|(d, c)| Input::Wheel(d, c)),
        Just(Input::ZoomIn),
        Just(Input::ZoomOut),
        Just(Input::Reset),
        (cursor(), cursor()).prop_map(|(a, b)| Input::Drag(a, b)),
    ]
}

// ── 1. Pivot invariance ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn zoom_about_cursor_is_pivot_invariant(
        pan in pan(),
        from in zoom(),
        to in zoom(),
        inset in inset(),
        cursor in cursor(),
    ) {
        let t = ViewTransform::new(pan, from, inset);
        let before = t.screen_to_logical(cursor);
        let after = t.zoomed_about(cursor, to).screen_to_logical(cursor);
        prop_assert!((before.x - after.x).abs() < 1e-6, "x drifted {} -> {}", before.x, after.x);
        prop_assert!((before.y - after.y).abs() < 1e-6, "y drifted {} -> {}", before.y, after.y);
    }
}

// ── 2. Round trip ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn logical_screen_round_trip(
        pan in pan(),
        zoom in zoom(),
        inset in inset(),
        x in -10_000.0f64..10_000.0,
        y in -10_000.0f64..10_000.0,
    ) {
        let t = ViewTransform::new(pan, zoom, inset);
        let p = Point::new(x, y);
        let back = t.screen_to_logical(t.logical_to_screen(p));
        prop_assert!((back.x - p.x).abs() < 1e-6);
        prop_assert!((back.y - p.y).abs() < 1e-6);
    }
}

// ── 3. Zoom bounds ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn zoom_stays_in_bounds(inputs in proptest::collection::vec(input(), 1..200)) {
        let mut vp = ViewportController::new(
            Pane::Top,
            CanvasConfig::default(),
            shared(DisplaySettings::default()),
            Arc::new(EventBus::new()),
        );
        vp.set_dimensions(Size::new(1200.0, 800.0));
        for input in inputs {
            match input {
                Input::Wheel(delta, at) => vp.wheel(delta, at),
                Input::ZoomIn => vp.zoom_in(),
                Input::ZoomOut => vp.zoom_out(),
                Input::Reset => vp.zoom_reset(),
                Input::Drag(a, b) => {
                    vp.pointer_down(a);
                    vp.pointer_move(b);
                    vp.pointer_up();
                }
            }
            prop_assert!(vp.zoom() >= 0.2 && vp.zoom() <= 4.0, "zoom {}", vp.zoom());
            prop_assert!(vp.pan().is_finite());
        }
    }
}

// ── 4. Grid size ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn grid_size_monotonic(a in 0.01f64..100.0, b in 0.01f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (g_lo, g_hi) = (adaptive_grid_size(lo), adaptive_grid_size(hi));
        prop_assert!(g_hi <= g_lo);
        prop_assert!(g_hi >= MIN_GRID_SIZE);
        // Always a power-of-two multiple of the minimum
        let octaves = (g_lo / MIN_GRID_SIZE).log2();
        prop_assert_eq!(octaves, octaves.round());
    }
}

// ── 5. Grid and ruler agree ─────────────────────────────────────────────

proptest! {
    #[test]
    fn grid_and_ruler_octaves_agree(zoom in zoom()) {
        let grid_inches = adaptive_grid_size(zoom) / INCH_TO_PIXEL;
        let ratio = grid_inches / adaptive_ruler_interval(zoom);
        prop_assert!(ratio == 1.0 || ratio == 2.0, "zoom {} ratio {}", zoom, ratio);
    }
}

// ── 6. Split ratio ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn split_ratio_clamped_while_dragging(
        positions in proptest::collection::vec(-200.0f64..1200.0, 1..50),
    ) {
        let mut split = SplitViewLayout::new(
            CanvasConfig::default(),
            shared(DisplaySettings::default()),
            Arc::new(EventBus::new()),
        );
        split.set_split(true);
        split.begin_resize();
        for y in positions {
            split.resize_to(y, 1000.0);
            prop_assert!(split.ratio() >= 0.1 && split.ratio() <= 0.9);
        }
        split.end_resize();
        prop_assert!(split.ratio() >= 0.1 && split.ratio() <= 0.9);
    }
}
