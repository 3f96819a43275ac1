//! Pan/zoom transform between logical design pixels and screen pixels.
//!
//! ```text
//! screen = logical * zoom + pan + ruler_inset
//! logical = (screen - pan - ruler_inset) / zoom
//! ```
//!
//! The same transform drives rendering and pointer math, so what is drawn
//! under the cursor is what a drag or wheel event acts on.

use crate::geometry::{Point, Rect, Size};

/// Pan offset, zoom factor and ruler inset of one pane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub pan: Point,
    pub zoom: f64,
    pub ruler_inset: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan: Point::ORIGIN,
            zoom: 1.0,
            ruler_inset: 0.0,
        }
    }
}

impl ViewTransform {
    pub fn new(pan: Point, zoom: f64, ruler_inset: f64) -> Self {
        Self {
            pan,
            zoom,
            ruler_inset,
        }
    }

    /// Usable for drawing and hit testing: finite with a positive zoom.
    pub fn is_valid(&self) -> bool {
        self.pan.is_finite()
            && self.ruler_inset.is_finite()
            && self.zoom.is_finite()
            && self.zoom > 0.0
    }

    pub fn logical_to_screen(&self, p: Point) -> Point {
        Point::new(
            p.x * self.zoom + self.pan.x + self.ruler_inset,
            p.y * self.zoom + self.pan.y + self.ruler_inset,
        )
    }

    pub fn screen_to_logical(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.pan.x - self.ruler_inset) / self.zoom,
            (p.y - self.pan.y - self.ruler_inset) / self.zoom,
        )
    }

    /// Screen x of a logical x.
    pub fn screen_x(&self, x: f64) -> f64 {
        x * self.zoom + self.pan.x + self.ruler_inset
    }

    /// Screen y of a logical y.
    pub fn screen_y(&self, y: f64) -> f64 {
        y * self.zoom + self.pan.y + self.ruler_inset
    }

    /// Logical rectangle visible on a surface of `size`.
    pub fn visible_logical_rect(&self, size: Size) -> Rect {
        Rect::from_corners(
            self.screen_to_logical(Point::ORIGIN),
            self.screen_to_logical(Point::new(size.width, size.height)),
        )
    }

    pub fn logical_rect_to_screen(&self, rect: &Rect) -> Rect {
        Rect::from_corners(
            self.logical_to_screen(Point::new(rect.left(), rect.top())),
            self.logical_to_screen(Point::new(rect.right(), rect.bottom())),
        )
    }

    /// The transform after zooming to `new_zoom` about a screen-space cursor.
    ///
    /// The logical point under `cursor` is the same before and after. With
    /// `pivot = cursor - ruler_inset` and `f = new_zoom / zoom`:
    ///
    /// ```text
    /// new_pan = pivot - (pivot - pan) * f
    /// ```
    pub fn zoomed_about(&self, cursor: Point, new_zoom: f64) -> ViewTransform {
        let factor = new_zoom / self.zoom;
        let pivot = cursor.offset(-self.ruler_inset, -self.ruler_inset);
        ViewTransform {
            pan: Point::new(
                pivot.x - (pivot.x - self.pan.x) * factor,
                pivot.y - (pivot.y - self.pan.y) * factor,
            ),
            zoom: new_zoom,
            ruler_inset: self.ruler_inset,
        }
    }
}
