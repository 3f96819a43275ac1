//! Reference axes through the logical origin.

use crate::color::Color;
use crate::draw::{DrawCommand, DrawList};
use crate::geometry::{Point, Rect};
use crate::view_transform::ViewTransform;

/// Axis line width in screen pixels, independent of zoom.
pub const AXIS_WIDTH: f64 = 1.0;

/// Draws the `y = 0` and `x = 0` lines across the visible region
pub struct AxisRenderer;

impl AxisRenderer {
    pub fn render(transform: &ViewTransform, visible: &Rect, out: &mut DrawList) {
        if visible.top() <= 0.0 && visible.bottom() >= 0.0 {
            let y = transform.screen_y(0.0);
            out.push(DrawCommand::line(
                Point::new(transform.screen_x(visible.left()), y),
                Point::new(transform.screen_x(visible.right()), y),
                Color::AXIS_HORIZONTAL,
                AXIS_WIDTH,
            ));
        }
        if visible.left() <= 0.0 && visible.right() >= 0.0 {
            let x = transform.screen_x(0.0);
            out.push(DrawCommand::line(
                Point::new(x, transform.screen_y(visible.top())),
                Point::new(x, transform.screen_y(visible.bottom())),
                Color::AXIS_VERTICAL,
                AXIS_WIDTH,
            ));
        }
    }
}
