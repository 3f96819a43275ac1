use std::sync::Arc;

use fretcad_canvas::{
    CanvasConfig, CanvasWorkspace, DisplaySettings, GridStyle, Point, Size,
};
use fretcad_core::{
    AppEvent, DisplayEvent, EventBus, EventBusConfig, EventCategory, EventFilter, LayoutEvent,
    Pane, ViewportEvent,
};
use parking_lot::Mutex;

fn workspace() -> (CanvasWorkspace, Arc<EventBus>) {
    let bus = Arc::new(EventBus::with_config(EventBusConfig {
        enable_history: true,
        ..Default::default()
    }));
    let ws = CanvasWorkspace::with_bus(
        CanvasConfig::default(),
        DisplaySettings::default(),
        Arc::clone(&bus),
    );
    (ws, bus)
}

#[test]
fn test_first_resize_centres_top_pane() {
    let (mut ws, bus) = workspace();
    ws.set_container_size(1000.0, 800.0);

    let top = ws.viewport(Pane::Top);
    assert_eq!(top.dimensions(), Size::new(1000.0, 800.0));
    assert!((top.zoom() - 0.2367).abs() < 0.0001);

    let history = bus.history();
    assert_eq!(
        history[0],
        AppEvent::Layout(LayoutEvent::Resized {
            width: 1000.0,
            height: 800.0
        })
    );
    assert!(matches!(
        history[1],
        AppEvent::Viewport(ViewportEvent::ViewCentered { pane: Pane::Top, .. })
    ));
}

#[test]
fn test_panel_shrinks_pane_without_recentering() {
    let (mut ws, _) = workspace();
    ws.set_container_size(1400.0, 800.0);
    let zoom = ws.viewport(Pane::Top).zoom();

    ws.set_panel_open(true);
    assert_eq!(ws.pane_dimensions(Pane::Top), Size::new(1016.0, 800.0));
    assert_eq!(ws.viewport(Pane::Top).zoom(), zoom);

    ws.center_view();
    assert!((ws.viewport(Pane::Top).zoom() - 1016.0 / (3840.0 * 1.1)).abs() < 1e-9);
}

#[test]
fn test_zoom_buttons_target_active_pane() {
    let (mut ws, bus) = workspace();
    ws.set_container_size(1000.0, 800.0);
    ws.toggle_split_view();

    let side_before = ws.viewport(Pane::Side).zoom();
    let top_before = ws.viewport(Pane::Top).zoom();

    ws.pointer_down(Pane::Side, Point::new(50.0, 50.0));
    ws.pointer_up();
    assert_eq!(ws.active_pane(), Pane::Side);
    assert!(bus.history().contains(&AppEvent::Viewport(ViewportEvent::PaneActivated {
        pane: Pane::Side
    })));

    ws.zoom_in();
    assert!((ws.viewport(Pane::Side).zoom() - side_before * 1.1).abs() < 1e-9);
    assert_eq!(ws.viewport(Pane::Top).zoom(), top_before);

    ws.zoom_reset();
    assert_eq!(ws.zoom_percent(), 100);
    assert_eq!(ws.viewport(Pane::Top).zoom(), top_before);
}

#[test]
fn test_closing_split_reactivates_top() {
    let (mut ws, _) = workspace();
    ws.set_container_size(1000.0, 800.0);
    ws.toggle_split_view();
    ws.pointer_down(Pane::Side, Point::new(10.0, 10.0));
    ws.pointer_up();
    ws.toggle_split_view();
    assert_eq!(ws.active_pane(), Pane::Top);
    assert_eq!(ws.pane_dimensions(Pane::Side).height, 0.0);
}

#[test]
fn test_split_drag_through_workspace() {
    let (mut ws, bus) = workspace();
    ws.set_container_size(1000.0, 800.0);
    ws.toggle_split_view();

    ws.begin_split_resize();
    ws.split_resize_to(400.0);
    assert_eq!(ws.split_ratio(), 0.5);
    assert_eq!(ws.viewport(Pane::Top).dimensions(), Size::new(1000.0, 400.0));

    ws.split_resize_to(10.0);
    ws.pointer_up();
    assert!(!ws.is_split_view());
    assert_eq!(ws.viewport(Pane::Top).dimensions(), Size::new(1000.0, 800.0));
    assert!(bus
        .history()
        .contains(&AppEvent::Layout(LayoutEvent::SplitCollapsed)));
}

#[test]
fn test_pan_stops_on_global_pointer_up() {
    let (mut ws, _) = workspace();
    ws.set_container_size(800.0, 600.0);
    let pan = ws.viewport(Pane::Top).pan();

    ws.pointer_down(Pane::Top, Point::new(100.0, 100.0));
    ws.pointer_move(Pane::Top, Point::new(130.0, 90.0));
    ws.pointer_up();
    ws.pointer_move(Pane::Top, Point::new(500.0, 500.0));

    let moved = ws.viewport(Pane::Top).pan();
    assert!((moved.x - (pan.x + 30.0)).abs() < 1e-9);
    assert!((moved.y - (pan.y - 10.0)).abs() < 1e-9);
}

#[test]
fn test_wheel_on_hidden_side_pane_ignored() {
    let (mut ws, _) = workspace();
    ws.set_container_size(800.0, 600.0);
    ws.wheel(Pane::Side, -1.0, Point::new(10.0, 10.0));
    assert_eq!(ws.viewport(Pane::Side).zoom(), 1.0);
}

#[test]
fn test_display_toggles_publish_and_apply() {
    let (mut ws, bus) = workspace();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Display]),
        move |event| sink.lock().push(event.clone()),
    );

    ws.set_container_size(800.0, 600.0);
    ws.set_show_grid(false);
    ws.set_grid_style(GridStyle::Dots);
    ws.set_dashed_minor_grid(false);
    ws.set_show_axes(false);

    let display = ws.display();
    assert!(!display.show_grid);
    assert!(!display.show_axes);
    assert_eq!(display.grid_style, GridStyle::Dots);
    assert_eq!(
        seen.lock().first(),
        Some(&AppEvent::Display(DisplayEvent::GridToggled { visible: false }))
    );
    assert_eq!(seen.lock().len(), 4);
    assert_eq!(
        seen.lock()[1],
        AppEvent::Display(DisplayEvent::GridStyleChanged {
            style: "dots".to_string()
        })
    );
}

#[test]
fn test_unchanged_display_values_publish_nothing() {
    let (mut ws, bus) = workspace();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Display]),
        move |event| sink.lock().push(event.clone()),
    );

    // Defaults: everything visible, line grid, dashed minor lines
    ws.set_show_grid(true);
    ws.set_show_axes(true);
    ws.set_show_rulers(true);
    ws.set_grid_style(GridStyle::Lines);
    ws.set_dashed_minor_grid(true);
    assert!(seen.lock().is_empty());

    ws.set_show_rulers(false);
    ws.set_show_rulers(false);
    assert_eq!(
        *seen.lock(),
        vec![AppEvent::Display(DisplayEvent::RulersToggled { visible: false })]
    );
}

#[test]
fn test_full_page_ignores_panel() {
    let (mut ws, _) = workspace();
    ws.set_container_size(1200.0, 700.0);
    ws.set_panel_open(true);
    ws.toggle_full_page();
    assert!(ws.is_full_page());
    assert_eq!(ws.viewport(Pane::Top).dimensions(), Size::new(1200.0, 700.0));
    ws.toggle_full_page();
    assert_eq!(ws.viewport(Pane::Top).dimensions(), Size::new(816.0, 700.0));
}

#[test]
fn test_invalid_container_size_ignored() {
    let (mut ws, bus) = workspace();
    ws.set_container_size(f64::NAN, 600.0);
    ws.set_container_size(-5.0, 600.0);
    assert_eq!(ws.container_size(), Size::ZERO);
    assert!(bus.history().is_empty());
}
