//! Adaptive background grid.
//!
//! The grid size steps by powers of two as zoom crosses octave boundaries, so
//! cell density on screen stays roughly constant. Each cell is split into
//! four sub-cells; lines (or dots) are generated only for the logical region
//! that is actually visible.

use crate::color::Color;
use crate::display::{DisplaySettings, GridStyle};
use crate::draw::{DrawCommand, DrawList};
use crate::geometry::{Point, Rect};
use crate::view_transform::ViewTransform;

/// Logical pixels per inch (96 DPI).
pub const INCH_TO_PIXEL: f64 = 96.0;

/// Smallest grid size: 1/8 inch.
pub const MIN_GRID_SIZE: f64 = 0.125 * INCH_TO_PIXEL;

/// Sub-grid divisions per major cell.
pub const SUBDIVISIONS: i64 = 4;

const MINOR_DASH: f64 = 5.0;
const MINOR_DOT_RADIUS: f64 = 1.0;
const MAJOR_DOT_RADIUS: f64 = 1.5;
const MAX_GRID_LINES: i64 = 10_000;
const MAX_GRID_DOTS: i64 = 250_000;

/// Major grid spacing in logical pixels for a zoom factor.
///
/// `INCH_TO_PIXEL * 2^(-floor(log2(zoom)))`, never below [`MIN_GRID_SIZE`].
pub fn adaptive_grid_size(zoom: f64) -> f64 {
    if !(zoom.is_finite() && zoom > 0.0) {
        return INCH_TO_PIXEL;
    }
    let size = INCH_TO_PIXEL * 2f64.powf(-zoom.log2().floor());
    size.max(MIN_GRID_SIZE)
}

/// Integer index range of sub-grid lines covering `[start, end]`.
fn index_range(start: f64, end: f64, step: f64) -> (i64, i64) {
    ((start / step).floor() as i64, (end / step).ceil() as i64)
}

fn is_major(index: i64) -> bool {
    index.rem_euclid(SUBDIVISIONS) == 0
}

/// Draws the grid for one pane
pub struct GridRenderer;

impl GridRenderer {
    pub fn render(
        transform: &ViewTransform,
        visible: &Rect,
        display: &DisplaySettings,
        out: &mut DrawList,
    ) {
        let grid_size = adaptive_grid_size(transform.zoom);
        let sub = grid_size / SUBDIVISIONS as f64;

        let (x0, x1) = index_range(visible.left(), visible.right(), sub);
        let (y0, y1) = index_range(visible.top(), visible.bottom(), sub);

        let columns = x1.saturating_sub(x0).saturating_add(1);
        let rows = y1.saturating_sub(y0).saturating_add(1);
        let too_many = match display.grid_style {
            GridStyle::Lines => columns.saturating_add(rows) > MAX_GRID_LINES,
            GridStyle::Dots => columns.saturating_mul(rows) > MAX_GRID_DOTS,
        };
        if too_many {
            tracing::warn!(
                "Grid skipped: {} columns x {} rows at zoom {:.3}",
                columns,
                rows,
                transform.zoom
            );
            return;
        }

        match display.grid_style {
            GridStyle::Lines => {
                Self::lines(transform, sub, (x0, x1), (y0, y1), display, out)
            }
            GridStyle::Dots => Self::dots(transform, sub, (x0, x1), (y0, y1), out),
        }
    }

    fn lines(
        t: &ViewTransform,
        sub: f64,
        (x0, x1): (i64, i64),
        (y0, y1): (i64, i64),
        display: &DisplaySettings,
        out: &mut DrawList,
    ) {
        let top = t.screen_y(y0 as f64 * sub);
        let bottom = t.screen_y(y1 as f64 * sub);
        let left = t.screen_x(x0 as f64 * sub);
        let right = t.screen_x(x1 as f64 * sub);
        let dash = display.dashed_minor_grid.then_some(MINOR_DASH);

        // Major lines first, minor lines on top
        for major in [true, false] {
            let (color, dash) = if major {
                (Color::GRID_MAJOR, None)
            } else {
                (Color::GRID_MINOR, dash)
            };
            for i in (x0..=x1).filter(|i| is_major(*i) == major) {
                let x = t.screen_x(i as f64 * sub);
                out.push(DrawCommand::Line {
                    from: Point::new(x, top),
                    to: Point::new(x, bottom),
                    color,
                    width: 1.0,
                    dash,
                });
            }
            for j in (y0..=y1).filter(|j| is_major(*j) == major) {
                let y = t.screen_y(j as f64 * sub);
                out.push(DrawCommand::Line {
                    from: Point::new(left, y),
                    to: Point::new(right, y),
                    color,
                    width: 1.0,
                    dash,
                });
            }
        }
    }

    fn dots(
        t: &ViewTransform,
        sub: f64,
        (x0, x1): (i64, i64),
        (y0, y1): (i64, i64),
        out: &mut DrawList,
    ) {
        for i in x0..=x1 {
            let x = t.screen_x(i as f64 * sub);
            for j in y0..=y1 {
                let center = Point::new(x, t.screen_y(j as f64 * sub));
                let command = if is_major(i) && is_major(j) {
                    DrawCommand::Dot {
                        center,
                        radius: MAJOR_DOT_RADIUS,
                        color: Color::GRID_MAJOR_DOT,
                    }
                } else {
                    DrawCommand::Dot {
                        center,
                        radius: MINOR_DOT_RADIUS,
                        color: Color::GRID_MAJOR,
                    }
                };
                out.push(command);
            }
        }
    }
}
