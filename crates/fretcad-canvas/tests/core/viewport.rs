use std::sync::Arc;

use fretcad_canvas::{CanvasConfig, DisplaySettings, Point, PointerState, Size, ViewportController};
use fretcad_core::{shared, AppEvent, EventBus, EventBusConfig, Pane, ViewportEvent};

fn recording_bus() -> Arc<EventBus> {
    Arc::new(EventBus::with_config(EventBusConfig {
        enable_history: true,
        ..Default::default()
    }))
}

fn viewport(pane: Pane, show_rulers: bool, bus: Arc<EventBus>) -> ViewportController {
    let display = shared(DisplaySettings {
        show_rulers,
        ..Default::default()
    });
    ViewportController::new(pane, CanvasConfig::default(), display, bus)
}

#[test]
fn test_viewport_creation() {
    let vp = viewport(Pane::Top, true, recording_bus());
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan(), Point::ORIGIN);
    assert_eq!(vp.dimensions(), Size::ZERO);
    assert_eq!(vp.pointer_state(), PointerState::Idle);
    assert_eq!(vp.ruler_inset(), 20.0);
}

#[test]
fn test_center_view_top_pane() {
    let mut vp = viewport(Pane::Top, true, recording_bus());
    vp.set_dimensions(Size::new(1000.0, 800.0));

    // Width-limited: 1000 / (3840 * 1.1)
    assert!((vp.zoom() - 0.2367).abs() < 0.0001);
    // Design centre (1920, 0) lands at the pane centre in pan space
    let centre_x = 1920.0 * vp.zoom() + vp.pan().x;
    let centre_y = 0.0 * vp.zoom() + vp.pan().y;
    assert!((centre_x - 500.0).abs() < 0.01);
    assert!((centre_y - 400.0).abs() < 0.01);
    assert_eq!(vp.zoom_percent(), 24);
}

#[test]
fn test_center_view_side_pane() {
    let mut vp = viewport(Pane::Side, true, recording_bus());
    vp.set_dimensions(Size::new(1000.0, 200.0));

    let zoom = (1000.0 / (3840.0 * 1.1_f64)).min(200.0 / (192.0 * 1.1));
    assert!((vp.zoom() - zoom).abs() < 1e-9);
    let centre_y = 96.0 * vp.zoom() + vp.pan().y;
    assert!((centre_y - 100.0).abs() < 0.01);
}

#[test]
fn test_center_view_clamps_to_max_zoom() {
    let mut vp = viewport(Pane::Side, false, recording_bus());
    vp.set_dimensions(Size::new(40000.0, 4000.0));
    assert_eq!(vp.zoom(), 4.0);
}

#[test]
fn test_wheel_zoom_without_rulers() {
    let mut vp = viewport(Pane::Top, false, recording_bus());
    vp.wheel(-100.0, Point::new(100.0, 100.0));
    assert!((vp.zoom() - 1.1).abs() < 1e-12);
    assert!((vp.pan().x + 10.0).abs() < 1e-9);
    assert!((vp.pan().y + 10.0).abs() < 1e-9);

    vp.wheel(100.0, Point::new(100.0, 100.0));
    assert!((vp.zoom() - 0.99).abs() < 1e-12);
}

#[test]
fn test_wheel_zoom_keeps_logical_point_under_cursor() {
    let mut vp = viewport(Pane::Top, true, recording_bus());
    vp.set_pan(Point::new(-120.0, 340.0));
    let cursor = Point::new(412.0, 95.0);
    let before = vp.transform().screen_to_logical(cursor);

    for _ in 0..5 {
        vp.wheel(-1.0, cursor);
    }
    let after = vp.transform().screen_to_logical(cursor);
    assert!((before.x - after.x).abs() < 1e-6);
    assert!((before.y - after.y).abs() < 1e-6);
}

#[test]
fn test_zoom_bounds() {
    let mut vp = viewport(Pane::Top, true, recording_bus());
    for _ in 0..100 {
        vp.wheel(1.0, Point::new(50.0, 50.0));
    }
    assert_eq!(vp.zoom(), 0.2);
    for _ in 0..100 {
        vp.zoom_in();
    }
    assert_eq!(vp.zoom(), 4.0);
    vp.set_zoom(f64::NAN);
    assert_eq!(vp.zoom(), 4.0);
}

#[test]
fn test_pan_events_published() {
    let bus = recording_bus();
    let mut vp = viewport(Pane::Top, true, Arc::clone(&bus));
    vp.pointer_down(Point::new(0.0, 0.0));
    vp.pointer_move(Point::new(5.0, 0.0));
    vp.pointer_move(Point::new(5.0, 0.0));
    vp.pointer_up();

    let history = bus.history();
    assert_eq!(
        history,
        vec![AppEvent::Viewport(ViewportEvent::PanChanged {
            pane: Pane::Top,
            x: 5.0,
            y: 0.0
        })]
    );
}

#[test]
fn test_zoom_events_published() {
    let bus = recording_bus();
    let mut vp = viewport(Pane::Side, true, Arc::clone(&bus));
    vp.zoom_reset();
    assert!(bus.history().is_empty());

    vp.zoom_in();
    vp.set_dimensions(Size::new(800.0, 300.0));
    let history = bus.history();
    assert_eq!(history.len(), 2);
    assert!(matches!(
        history[0],
        AppEvent::Viewport(ViewportEvent::ZoomChanged { pane: Pane::Side, .. })
    ));
    assert!(matches!(
        history[1],
        AppEvent::Viewport(ViewportEvent::ViewCentered { pane: Pane::Side, .. })
    ));
    assert!(history.iter().all(AppEvent::requires_redraw));
}

#[test]
fn test_render_reflects_state() {
    let mut vp = viewport(Pane::Top, true, recording_bus());
    assert!(vp.render().is_empty());

    vp.set_dimensions(Size::new(640.0, 480.0));
    let list = vp.render();
    assert!(!list.is_empty());
    assert_eq!(list.texts().last(), Some(&"in"));
}

#[test]
fn test_render_after_far_pan() {
    let mut vp = viewport(Pane::Top, true, recording_bus());
    vp.set_dimensions(Size::new(800.0, 600.0));
    vp.set_pan(Point::new(1e18, -1e18));

    let list = vp.render();
    // Both rulers are beyond exact tick indices; only the unit label remains
    assert_eq!(list.texts(), vec!["in"]);
}
