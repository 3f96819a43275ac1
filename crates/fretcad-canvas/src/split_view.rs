//! Split view: a top pane and a side pane stacked vertically.
//!
//! Each pane has its own [`ViewportController`]; the layout only decides how
//! much height each one gets. The divider drag is its own state machine:
//!
//! ```text
//! Idle --begin_resize--> Resizing --resize_to--> Resizing
//! Resizing --end_resize--> Idle   (may collapse the split)
//! ```
//!
//! While dragging, the applied ratio is clamped to the configured range. The
//! unclamped pointer ratio is kept so that release can tell a drag past an
//! edge from one that stopped at the clamp.

use std::sync::Arc;

use fretcad_core::{AppEvent, EventBus, LayoutEvent, Pane, Shared};

use crate::config::CanvasConfig;
use crate::display::DisplaySettings;
use crate::geometry::Size;
use crate::viewport::ViewportController;

/// Divider drag state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeState {
    Idle,
    /// `raw_ratio` is the last pointer ratio before clamping.
    Resizing { raw_ratio: f64 },
}

/// Two independent panes and the ratio between them
#[derive(Debug)]
pub struct SplitViewLayout {
    top: ViewportController,
    side: ViewportController,
    is_split: bool,
    ratio: f64,
    resize: ResizeState,
    config: CanvasConfig,
    bus: Arc<EventBus>,
}

impl SplitViewLayout {
    pub fn new(config: CanvasConfig, display: Shared<DisplaySettings>, bus: Arc<EventBus>) -> Self {
        Self {
            top: ViewportController::new(Pane::Top, config, display.clone(), Arc::clone(&bus)),
            side: ViewportController::new(Pane::Side, config, display, Arc::clone(&bus)),
            is_split: false,
            ratio: config.default_split_ratio,
            resize: ResizeState::Idle,
            config,
            bus,
        }
    }

    pub fn is_split(&self) -> bool {
        self.is_split
    }

    /// Fraction of the height given to the top pane while split.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn resize_state(&self) -> ResizeState {
        self.resize
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.resize, ResizeState::Resizing { .. })
    }

    pub fn viewport(&self, pane: Pane) -> &ViewportController {
        match pane {
            Pane::Top => &self.top,
            Pane::Side => &self.side,
        }
    }

    pub fn viewport_mut(&mut self, pane: Pane) -> &mut ViewportController {
        match pane {
            Pane::Top => &mut self.top,
            Pane::Side => &mut self.side,
        }
    }

    /// Panes currently on screen, top first.
    pub fn visible_panes(&self) -> Vec<Pane> {
        if self.is_split {
            vec![Pane::Top, Pane::Side]
        } else {
            vec![Pane::Top]
        }
    }

    pub fn set_split(&mut self, split: bool) {
        if self.is_split == split {
            return;
        }
        self.is_split = split;
        if !split {
            self.resize = ResizeState::Idle;
        }
        tracing::debug!("Split view {}", if split { "on" } else { "off" });
        self.bus
            .publish(AppEvent::Layout(LayoutEvent::SplitViewToggled { split }));
    }

    pub fn toggle_split(&mut self) {
        self.set_split(!self.is_split);
    }

    /// Size of `pane` inside an area of `available` pixels.
    ///
    /// Both panes get the full width. The side pane has no height unless
    /// split view is on.
    pub fn pane_dimensions(&self, pane: Pane, available: Size) -> Size {
        let height = match (pane, self.is_split) {
            (Pane::Top, false) => available.height,
            (Pane::Top, true) => available.height * self.ratio,
            (Pane::Side, true) => available.height * (1.0 - self.ratio),
            (Pane::Side, false) => 0.0,
        };
        Size::new(available.width, height)
    }

    /// Push the current pane sizes to both controllers.
    pub fn apply_dimensions(&mut self, available: Size) {
        let top = self.pane_dimensions(Pane::Top, available);
        let side = self.pane_dimensions(Pane::Side, available);
        self.top.set_dimensions(top);
        self.side.set_dimensions(side);
    }

    /// Pointer down on the divider. Ignored unless split.
    pub fn begin_resize(&mut self) {
        if self.is_split {
            self.resize = ResizeState::Resizing {
                raw_ratio: self.ratio,
            };
        }
    }

    /// Divider dragged to `pointer_y` within a container of `container_height`.
    pub fn resize_to(&mut self, pointer_y: f64, container_height: f64) {
        if !self.is_resizing() {
            return;
        }
        if !(pointer_y.is_finite() && container_height.is_finite() && container_height > 0.0) {
            return;
        }
        let raw_ratio = pointer_y / container_height;
        self.resize = ResizeState::Resizing { raw_ratio };
        let ratio = self.config.clamp_split_ratio(raw_ratio);
        if ratio != self.ratio {
            self.ratio = ratio;
            self.bus
                .publish(AppEvent::Layout(LayoutEvent::SplitRatioChanged { ratio }));
        }
    }

    /// Pointer released anywhere after a divider drag.
    ///
    /// Past the top edge the split closes. Past the bottom edge it closes and
    /// the ratio returns to the reset value for next time.
    pub fn end_resize(&mut self) {
        let ResizeState::Resizing { raw_ratio } = self.resize else {
            return;
        };
        self.resize = ResizeState::Idle;

        if raw_ratio < self.config.split_min_ratio {
            tracing::debug!("Split collapsed at top (ratio {:.3})", raw_ratio);
            self.collapse();
        } else if raw_ratio > self.config.split_max_ratio {
            tracing::debug!("Split collapsed at bottom (ratio {:.3})", raw_ratio);
            self.ratio = self.config.split_reset_ratio;
            self.collapse();
        }
    }

    fn collapse(&mut self) {
        self.bus.publish(AppEvent::Layout(LayoutEvent::SplitCollapsed));
        self.set_split(false);
    }
}
