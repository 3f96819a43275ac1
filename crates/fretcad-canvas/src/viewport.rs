//! Viewport controller: pan/zoom state and pointer interaction for one pane.
//!
//! Pointer input drives a two-state machine:
//!
//! ```text
//! Idle --pointer_down--> Panning --pointer_move--> Panning (pan += delta)
//! Panning --pointer_up / pointer_leave--> Idle
//! ```
//!
//! Wheel events zoom about the cursor in any state. Every operation is a
//! total function of its inputs: non-finite positions, zero deltas and empty
//! dimensions leave the state untouched.

use std::fmt;
use std::sync::Arc;

use fretcad_core::{AppEvent, EventBus, Pane, Shared, ViewportEvent};

use crate::config::CanvasConfig;
use crate::display::DisplaySettings;
use crate::draw::DrawList;
use crate::geometry::{Point, Size};
use crate::pipeline::{self, design_bounds, RenderState};
use crate::view_transform::ViewTransform;

/// Pointer interaction state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerState {
    Idle,
    /// Dragging; `last` is the previous pointer position in screen pixels.
    Panning { last: Point },
}

/// Owns pan and zoom for one pane and turns input into state changes
pub struct ViewportController {
    pane: Pane,
    pan: Point,
    zoom: f64,
    dimensions: Size,
    pointer: PointerState,
    centered_once: bool,
    config: CanvasConfig,
    display: Shared<DisplaySettings>,
    bus: Arc<EventBus>,
}

impl ViewportController {
    pub fn new(
        pane: Pane,
        config: CanvasConfig,
        display: Shared<DisplaySettings>,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            pane,
            pan: Point::ORIGIN,
            zoom: 1.0,
            dimensions: Size::ZERO,
            pointer: PointerState::Idle,
            centered_once: false,
            config,
            display,
            bus,
        }
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Zoom as a whole percentage for the toolbar readout.
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }

    pub fn dimensions(&self) -> Size {
        self.dimensions
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.pointer, PointerState::Panning { .. })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Pixel inset of the drawing area under the current display toggles.
    pub fn ruler_inset(&self) -> f64 {
        self.display.borrow().ruler_inset(self.config.ruler_thickness)
    }

    pub fn transform(&self) -> ViewTransform {
        ViewTransform::new(self.pan, self.zoom, self.ruler_inset())
    }

    /// Set the pan offset directly. Non-finite offsets are ignored.
    pub fn set_pan(&mut self, pan: Point) {
        if !pan.is_finite() {
            tracing::warn!("{}: ignoring non-finite pan {:?}", self.pane, pan);
            return;
        }
        self.pan = pan;
        self.publish(ViewportEvent::PanChanged {
            pane: self.pane,
            x: pan.x,
            y: pan.y,
        });
    }

    /// Set the zoom, clamped to the configured bounds. Pan is unchanged.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        self.apply_zoom(self.config.clamp_zoom(zoom));
    }

    /// Update the surface size.
    ///
    /// The first time both sides become non-zero the view is centred.
    pub fn set_dimensions(&mut self, dimensions: Size) {
        if !dimensions.is_valid() {
            tracing::warn!("{}: ignoring invalid dimensions {:?}", self.pane, dimensions);
            return;
        }
        self.dimensions = dimensions;
        if !self.centered_once && !dimensions.is_empty() {
            self.center_view();
        }
    }

    pub fn pointer_down(&mut self, position: Point) {
        if !position.is_finite() {
            tracing::warn!("{}: ignoring non-finite pointer {:?}", self.pane, position);
            return;
        }
        self.pointer = PointerState::Panning { last: position };
    }

    pub fn pointer_move(&mut self, position: Point) {
        let PointerState::Panning { last } = self.pointer else {
            return;
        };
        if !position.is_finite() {
            return;
        }
        self.pointer = PointerState::Panning { last: position };
        let (dx, dy) = (position.x - last.x, position.y - last.y);
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.set_pan(self.pan.offset(dx, dy));
    }

    pub fn pointer_up(&mut self) {
        self.pointer = PointerState::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = PointerState::Idle;
    }

    /// Zoom one wheel step about `cursor` (screen pixels, relative to the
    /// pane). Negative `delta_y` zooms in.
    pub fn wheel(&mut self, delta_y: f64, cursor: Point) {
        if !delta_y.is_finite() || delta_y == 0.0 || !cursor.is_finite() {
            return;
        }
        let factor = if delta_y < 0.0 {
            self.config.wheel_zoom_in
        } else {
            self.config.wheel_zoom_out
        };
        let new_zoom = self.config.clamp_zoom(self.zoom * factor);
        if new_zoom == self.zoom {
            return;
        }
        let next = self.transform().zoomed_about(cursor, new_zoom);
        self.pan = next.pan;
        self.zoom = next.zoom;
        tracing::debug!("{}: wheel zoom to {:.3} about {}", self.pane, self.zoom, cursor);
        self.publish(ViewportEvent::ZoomChanged {
            pane: self.pane,
            zoom: self.zoom,
        });
    }

    /// Multiply zoom by the zoom-in step. Pan is unchanged.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.config.button_zoom_in);
    }

    /// Multiply zoom by the zoom-out step. Pan is unchanged.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom * self.config.button_zoom_out);
    }

    /// Back to 100%. Pan is unchanged.
    pub fn zoom_reset(&mut self) {
        self.set_zoom(1.0);
    }

    /// Fit the pane's design rectangle into the current dimensions.
    ///
    /// `zoom = min(w / (rw * margin), h / (rh * margin))`, clamped to the
    /// zoom bounds, with the rectangle centre placed at the pane centre (in
    /// pan space, before the ruler inset). Does nothing while the pane has no
    /// area.
    pub fn center_view(&mut self) {
        let size = self.dimensions;
        if size.is_empty() {
            tracing::debug!("{}: centre view skipped, no area", self.pane);
            return;
        }
        let bounds = design_bounds(self.pane);
        let margin = self.config.fit_margin;
        let fit = (size.width / (bounds.width * margin)).min(size.height / (bounds.height * margin));
        if !(fit.is_finite() && fit > 0.0) {
            return;
        }
        let zoom = self.config.clamp_zoom(fit);
        let center = bounds.center();

        self.zoom = zoom;
        self.pan = Point::new(
            size.width / 2.0 - center.x * zoom,
            size.height / 2.0 - center.y * zoom,
        );
        self.centered_once = true;
        tracing::debug!("{}: centred at zoom {:.4} pan {}", self.pane, zoom, self.pan);
        self.publish(ViewportEvent::ViewCentered {
            pane: self.pane,
            zoom,
        });
    }

    /// Draw the pane with the current state and shared display toggles.
    pub fn render(&self) -> DrawList {
        let display = *self.display.borrow();
        pipeline::render(&RenderState {
            pane: self.pane,
            size: self.dimensions,
            pan: self.pan,
            zoom: self.zoom,
            display: &display,
            ruler_thickness: self.config.ruler_thickness,
        })
    }

    fn apply_zoom(&mut self, zoom: f64) {
        if zoom == self.zoom {
            return;
        }
        self.zoom = zoom;
        tracing::debug!("{}: zoom {:.3}", self.pane, zoom);
        self.publish(ViewportEvent::ZoomChanged {
            pane: self.pane,
            zoom,
        });
    }

    fn publish(&self, event: ViewportEvent) {
        self.bus.publish(AppEvent::Viewport(event));
    }
}

impl fmt::Display for ViewportController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.pane, self.zoom, self.pan.x, self.pan.y
        )
    }
}

impl fmt::Debug for ViewportController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportController")
            .field("pane", &self.pane)
            .field("pan", &self.pan)
            .field("zoom", &self.zoom)
            .field("dimensions", &self.dimensions)
            .field("pointer", &self.pointer)
            .finish()
    }
}
