use std::sync::Arc;

use fretcad_canvas::{CanvasConfig, DisplaySettings, ResizeState, Size, SplitViewLayout};
use fretcad_core::{shared, AppEvent, EventBus, EventBusConfig, LayoutEvent, Pane};

fn layout_with_history() -> (SplitViewLayout, Arc<EventBus>) {
    let bus = Arc::new(EventBus::with_config(EventBusConfig {
        enable_history: true,
        ..Default::default()
    }));
    let layout = SplitViewLayout::new(
        CanvasConfig::default(),
        shared(DisplaySettings::default()),
        Arc::clone(&bus),
    );
    (layout, bus)
}

fn layout_events(bus: &EventBus) -> Vec<LayoutEvent> {
    bus.history()
        .into_iter()
        .filter_map(|e| match e {
            AppEvent::Layout(l) => Some(l),
            _ => None,
        })
        .collect()
}

#[test]
fn test_default_ratio() {
    let (layout, _) = layout_with_history();
    assert!(!layout.is_split());
    assert_eq!(layout.ratio(), 0.75);
    assert_eq!(layout.resize_state(), ResizeState::Idle);
    assert_eq!(layout.visible_panes(), vec![Pane::Top]);
}

#[test]
fn test_drag_to_top_edge_collapses() {
    let (mut layout, bus) = layout_with_history();
    layout.set_split(true);
    layout.begin_resize();
    layout.resize_to(32.0, 800.0); // 0.04
    assert_eq!(layout.ratio(), 0.1);
    assert!(layout.is_split());

    layout.end_resize();
    assert!(!layout.is_split());
    assert!(!layout.is_resizing());
    assert_eq!(
        layout_events(&bus),
        vec![
            LayoutEvent::SplitViewToggled { split: true },
            LayoutEvent::SplitRatioChanged { ratio: 0.1 },
            LayoutEvent::SplitCollapsed,
            LayoutEvent::SplitViewToggled { split: false },
        ]
    );
}

#[test]
fn test_drag_to_bottom_edge_collapses_and_resets() {
    let (mut layout, _) = layout_with_history();
    layout.set_split(true);
    layout.begin_resize();
    layout.resize_to(780.0, 800.0); // 0.975
    assert_eq!(layout.ratio(), 0.9);
    layout.end_resize();
    assert!(!layout.is_split());
    assert_eq!(layout.ratio(), 0.6);

    // Reopening uses the reset ratio
    layout.set_split(true);
    let area = Size::new(500.0, 1000.0);
    assert_eq!(layout.pane_dimensions(Pane::Top, area), Size::new(500.0, 600.0));
    assert_eq!(layout.pane_dimensions(Pane::Side, area), Size::new(500.0, 400.0));
}

#[test]
fn test_release_at_clamp_keeps_split() {
    let (mut layout, _) = layout_with_history();
    layout.set_split(true);
    layout.begin_resize();
    layout.resize_to(80.0, 800.0); // exactly 0.1
    layout.end_resize();
    assert!(layout.is_split());
    assert_eq!(layout.ratio(), 0.1);
}

#[test]
fn test_drag_back_from_edge_keeps_split() {
    let (mut layout, _) = layout_with_history();
    layout.set_split(true);
    layout.begin_resize();
    layout.resize_to(10.0, 800.0);
    layout.resize_to(300.0, 800.0);
    layout.end_resize();
    assert!(layout.is_split());
    assert_eq!(layout.ratio(), 0.375);
}

#[test]
fn test_end_resize_without_drag_is_noop() {
    let (mut layout, bus) = layout_with_history();
    layout.set_split(true);
    layout.end_resize();
    assert!(layout.is_split());
    assert_eq!(layout_events(&bus).len(), 1);
}

#[test]
fn test_apply_dimensions_centres_side_pane_once_visible() {
    let (mut layout, _) = layout_with_history();
    let area = Size::new(1000.0, 800.0);
    layout.apply_dimensions(area);
    assert_eq!(layout.viewport(Pane::Side).dimensions(), Size::new(1000.0, 0.0));
    assert_eq!(layout.viewport(Pane::Side).zoom(), 1.0);

    layout.set_split(true);
    layout.apply_dimensions(area);
    let side = layout.viewport(Pane::Side);
    assert_eq!(side.dimensions(), Size::new(1000.0, 200.0));
    assert!((side.zoom() - 1000.0 / (3840.0 * 1.1)).abs() < 1e-9);
    assert_eq!(layout.viewport(Pane::Top).dimensions(), Size::new(1000.0, 600.0));
}
