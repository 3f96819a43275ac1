use std::sync::Arc;

use fretcad_canvas::{
    CanvasConfig, CanvasWorkspace, DisplaySettings, DrawSurface, PixmapSurface, SvgSurface,
};
use fretcad_core::{EventBus, Pane};

fn rendered_workspace(width: f64, height: f64) -> CanvasWorkspace {
    let mut ws = CanvasWorkspace::with_bus(
        CanvasConfig::default(),
        DisplaySettings::default(),
        Arc::new(EventBus::new()),
    );
    ws.set_container_size(width, height);
    ws
}

#[test]
fn test_svg_snapshot_contains_every_layer() {
    let ws = rendered_workspace(640.0, 400.0);
    let mut svg = SvgSurface::new(640, 400);
    svg.draw(&ws.render(Pane::Top));
    let doc = svg.to_svg_string();

    assert!(doc.contains("fill=\"#ffffff\""));
    assert!(doc.contains("stroke=\"#e0e0e0\""));
    assert!(doc.contains("stroke=\"rgba(255, 150, 150, 0.8)\""));
    assert!(doc.contains("stroke-dasharray=\"10 10\""));
    assert!(doc.contains("font-weight=\"bold\""));
    assert!(doc.contains(">in</text>"));
}

#[test]
fn test_pixmap_snapshot() {
    let ws = rendered_workspace(320.0, 240.0);
    let list = ws.render(Pane::Top);
    let mut surface = PixmapSurface::new(320, 240).expect("pixmap");
    surface.draw(&list);

    // Ruler corner and the white drawing area
    assert_eq!(surface.pixel_rgb(5, 5), Some([0xf0, 0xf0, 0xf0]));
    assert_eq!(surface.skipped_text(), list.texts().len());

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("top.png");
    surface.save_png(&path).expect("save");
    let image = image::open(&path).expect("decode").to_rgb8();
    assert_eq!(image.dimensions(), (320, 240));
}
