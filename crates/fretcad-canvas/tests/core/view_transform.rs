use fretcad_canvas::{Point, Rect, Size, ViewTransform};

#[test]
fn test_identity_transform() {
    let t = ViewTransform::default();
    assert_eq!(t.zoom, 1.0);
    assert_eq!(t.logical_to_screen(Point::new(12.0, -7.0)), Point::new(12.0, -7.0));
    assert!(t.is_valid());
}

#[test]
fn test_screen_to_logical_accounts_for_inset() {
    let t = ViewTransform::new(Point::new(50.0, 25.0), 2.0, 20.0);
    let logical = t.screen_to_logical(Point::new(170.0, 145.0));
    assert!((logical.x - 50.0).abs() < 0.01);
    assert!((logical.y - 50.0).abs() < 0.01);
}

#[test]
fn test_invalid_zoom() {
    assert!(!ViewTransform::new(Point::ORIGIN, 0.0, 0.0).is_valid());
    assert!(!ViewTransform::new(Point::ORIGIN, f64::NAN, 0.0).is_valid());
    assert!(!ViewTransform::new(Point::new(f64::INFINITY, 0.0), 1.0, 0.0).is_valid());
}

#[test]
fn test_visible_rect_with_inset() {
    // The inset strip is still part of the surface, so it maps to negative logical space
    let t = ViewTransform::new(Point::ORIGIN, 1.0, 20.0);
    let r = t.visible_logical_rect(Size::new(200.0, 100.0));
    assert_eq!(r, Rect::new(-20.0, -20.0, 200.0, 100.0));
}

#[test]
fn test_logical_rect_to_screen() {
    let t = ViewTransform::new(Point::new(10.0, 10.0), 0.5, 20.0);
    let r = t.logical_rect_to_screen(&Rect::new(0.0, -100.0, 200.0, 100.0));
    assert_eq!(r, Rect::new(30.0, -20.0, 100.0, 50.0));
}

#[test]
fn test_zoom_about_cursor_keeps_point_fixed() {
    let t = ViewTransform::new(Point::new(-40.0, 75.0), 0.8, 20.0);
    let cursor = Point::new(333.0, 217.0);
    let before = t.screen_to_logical(cursor);
    let after = t.zoomed_about(cursor, 1.7).screen_to_logical(cursor);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}
