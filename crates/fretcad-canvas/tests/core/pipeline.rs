use fretcad_canvas::{
    design_bounds, render, Color, DisplaySettings, DrawCommand, DrawList, GridStyle, Point, Rect,
    RenderState, Size,
};
use fretcad_core::Pane;

fn render_with(display: DisplaySettings, pan: Point, zoom: f64) -> DrawList {
    render(&RenderState {
        pane: Pane::Top,
        size: Size::new(400.0, 300.0),
        pan,
        zoom,
        display: &display,
        ruler_thickness: 20.0,
    })
}

fn lines_with(list: &DrawList, wanted: Color) -> Vec<(Point, Point)> {
    list.iter()
        .filter_map(|c| match c {
            DrawCommand::Line {
                from, to, color, ..
            } if *color == wanted => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_design_bounds() {
    assert_eq!(design_bounds(Pane::Top), Rect::new(0.0, -624.0, 3840.0, 1248.0));
    assert_eq!(design_bounds(Pane::Side), Rect::new(0.0, 0.0, 3840.0, 192.0));
}

#[test]
fn test_major_grid_on_inch_boundaries() {
    let display = DisplaySettings {
        show_rulers: false,
        ..Default::default()
    };
    let list = render_with(display, Point::ORIGIN, 1.0);

    let vertical_majors: Vec<f64> = lines_with(&list, Color::GRID_MAJOR)
        .into_iter()
        .filter(|(from, to)| from.x == to.x)
        .map(|(from, _)| from.x)
        .collect();
    assert!(!vertical_majors.is_empty());
    assert!(vertical_majors.iter().all(|x| x.rem_euclid(96.0) == 0.0));

    let minors = lines_with(&list, Color::GRID_MINOR);
    assert!(!minors.is_empty());
    for (from, to) in minors {
        let coord = if from.x == to.x { from.x } else { from.y };
        assert_eq!(coord.rem_euclid(24.0), 0.0);
        assert_ne!(coord.rem_euclid(96.0), 0.0);
    }
}

#[test]
fn test_dot_grid() {
    let display = DisplaySettings {
        show_rulers: false,
        show_axes: false,
        grid_style: GridStyle::Dots,
        ..Default::default()
    };
    let list = render_with(display, Point::ORIGIN, 1.0);
    assert_eq!(lines_with(&list, Color::GRID_MAJOR).len(), 0);

    let big = list.count(|c| {
        matches!(c, DrawCommand::Dot { radius, color, .. }
            if *radius == 1.5 && *color == Color::GRID_MAJOR_DOT)
    });
    let small = list.count(|c| matches!(c, DrawCommand::Dot { radius, .. } if *radius == 1.0));
    assert!(big > 0);
    assert!(small > big);
}

#[test]
fn test_hidden_layers() {
    let display = DisplaySettings {
        show_grid: false,
        show_axes: false,
        show_rulers: false,
        ..Default::default()
    };
    let list = render_with(display, Point::new(50.0, 150.0), 0.5);
    // Background and bounds only
    assert_eq!(list.len(), 2);
    assert!(list.texts().is_empty());
}

#[test]
fn test_axes_follow_pan_and_inset() {
    let display = DisplaySettings {
        show_grid: false,
        ..Default::default()
    };
    let list = render_with(display, Point::new(100.0, 50.0), 1.0);

    let horizontal = lines_with(&list, Color::AXIS_HORIZONTAL);
    let vertical = lines_with(&list, Color::AXIS_VERTICAL);
    assert_eq!(horizontal.len(), 1);
    assert_eq!(vertical.len(), 1);
    assert_eq!(horizontal[0].0.y, 70.0);
    assert_eq!(vertical[0].0.x, 120.0);
}

#[test]
fn test_axes_offscreen() {
    let display = DisplaySettings {
        show_grid: false,
        show_rulers: false,
        ..Default::default()
    };
    let list = render_with(display, Point::new(-1000.0, -1000.0), 1.0);
    assert!(lines_with(&list, Color::AXIS_HORIZONTAL).is_empty());
    assert!(lines_with(&list, Color::AXIS_VERTICAL).is_empty());
}

#[test]
fn test_ruler_labels_at_half_inch_interval() {
    let display = DisplaySettings {
        show_grid: false,
        show_axes: false,
        ..Default::default()
    };
    let list = render_with(display, Point::ORIGIN, 2.0);
    let texts = list.texts();
    assert_eq!(&texts[..3], &["0.00", "0.50", "1.00"]);
    assert!(texts.contains(&"-0.50"));
}

#[test]
fn test_corner_label_is_bold() {
    let list = render_with(DisplaySettings::default(), Point::ORIGIN, 1.0);
    let corner = list.iter().rev().find_map(|c| match c {
        DrawCommand::Text { text, bold, .. } => Some((text.clone(), *bold)),
        _ => None,
    });
    assert_eq!(corner, Some(("in".to_string(), true)));
}

#[test]
fn test_draw_list_serialises() {
    let list = render_with(DisplaySettings::default(), Point::ORIGIN, 1.0);
    let json = list.to_json().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert!(value.is_array() || value.is_object());
}
