//! The render pipeline: one pure function from view state to draw commands.
//!
//! Order: background, grid, axes, dashed design bounds, rulers. The rulers
//! come last because they sit on top of everything in the inset strip.

use fretcad_core::Pane;

use crate::axes::AxisRenderer;
use crate::color::Color;
use crate::display::DisplaySettings;
use crate::draw::{DrawCommand, DrawList};
use crate::geometry::{Point, Rect, Size};
use crate::grid::{GridRenderer, INCH_TO_PIXEL};
use crate::ruler::RulerRenderer;
use crate::view_transform::ViewTransform;

const BOUNDS_WIDTH: f64 = 0.5;
const BOUNDS_DASH: f64 = 10.0;

/// Fixed drafting extent of a pane, in logical pixels.
///
/// Top view: 40 x 13 inches centred vertically on the x axis.
/// Side view: 40 x 2 inches below the x axis.
pub fn design_bounds(pane: Pane) -> Rect {
    match pane {
        Pane::Top => Rect::new(
            0.0,
            -6.5 * INCH_TO_PIXEL,
            40.0 * INCH_TO_PIXEL,
            13.0 * INCH_TO_PIXEL,
        ),
        Pane::Side => Rect::new(0.0, 0.0, 40.0 * INCH_TO_PIXEL, 2.0 * INCH_TO_PIXEL),
    }
}

/// Everything one frame depends on
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    pub pane: Pane,
    pub size: Size,
    pub pan: Point,
    pub zoom: f64,
    pub display: &'a DisplaySettings,
    pub ruler_thickness: f64,
}

impl RenderState<'_> {
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::new(
            self.pan,
            self.zoom,
            self.display.ruler_inset(self.ruler_thickness),
        )
    }
}

/// Build the draw list for one pane.
///
/// A zero-area surface or an unusable transform yields an empty list.
pub fn render(state: &RenderState<'_>) -> DrawList {
    let mut out = DrawList::new();
    if state.size.is_empty() {
        return out;
    }
    let transform = state.transform();
    if !transform.is_valid() {
        tracing::warn!("Render skipped for {}: invalid transform {:?}", state.pane, transform);
        return out;
    }

    out.push(DrawCommand::FillRect {
        rect: Rect::new(0.0, 0.0, state.size.width, state.size.height),
        color: Color::WHITE,
    });

    let visible = transform.visible_logical_rect(state.size);
    let display = state.display;

    if display.show_grid {
        GridRenderer::render(&transform, &visible, display, &mut out);
    }
    if display.show_axes {
        AxisRenderer::render(&transform, &visible, &mut out);
    }

    out.push(DrawCommand::StrokeRect {
        rect: transform.logical_rect_to_screen(&design_bounds(state.pane)),
        color: Color::BLACK,
        width: BOUNDS_WIDTH,
        dash: Some(BOUNDS_DASH),
    });

    if display.show_rulers {
        RulerRenderer::render(
            state.pan,
            state.zoom,
            state.size,
            state.ruler_thickness,
            &mut out,
        );
    }

    tracing::trace!(
        "{} rendered {} commands at {} zoom {:.3}",
        state.pane,
        out.len(),
        state.size,
        state.zoom
    );
    out
}
