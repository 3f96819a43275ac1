//! The canvas workspace: the boundary a host UI talks to.
//!
//! It owns the container size, the full-page and parameter-panel flags, the
//! shared display toggles and the split layout with both panes. Toolbar
//! commands (zoom buttons) go to the *active* pane, the one that last took a
//! pointer-down. Every state change is published on the event bus so the host
//! knows when to repaint.

use std::sync::Arc;

use fretcad_core::{
    event_bus, shared, AppEvent, DisplayEvent, EventBus, LayoutEvent, Pane, Shared,
    ViewportEvent,
};

use crate::config::CanvasConfig;
use crate::display::{DisplaySettings, GridStyle};
use crate::draw::DrawList;
use crate::geometry::{Point, Size};
use crate::split_view::SplitViewLayout;
use crate::viewport::ViewportController;

/// Drafting canvas with a top pane and an optional side pane
#[derive(Debug)]
pub struct CanvasWorkspace {
    config: CanvasConfig,
    container: Size,
    is_full_page: bool,
    is_panel_open: bool,
    active: Pane,
    display: Shared<DisplaySettings>,
    split: SplitViewLayout,
    bus: Arc<EventBus>,
}

impl CanvasWorkspace {
    /// Workspace publishing on the global event bus.
    pub fn new(config: CanvasConfig, display: DisplaySettings) -> Self {
        Self::with_bus(config, display, event_bus())
    }

    pub fn with_bus(config: CanvasConfig, display: DisplaySettings, bus: Arc<EventBus>) -> Self {
        let display = shared(display);
        Self {
            config,
            container: Size::ZERO,
            is_full_page: false,
            is_panel_open: false,
            active: Pane::Top,
            split: SplitViewLayout::new(config, display.clone(), Arc::clone(&bus)),
            display,
            bus,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn is_full_page(&self) -> bool {
        self.is_full_page
    }

    pub fn is_panel_open(&self) -> bool {
        self.is_panel_open
    }

    pub fn is_split_view(&self) -> bool {
        self.split.is_split()
    }

    pub fn split_ratio(&self) -> f64 {
        self.split.ratio()
    }

    pub fn split_layout(&self) -> &SplitViewLayout {
        &self.split
    }

    pub fn active_pane(&self) -> Pane {
        self.active
    }

    pub fn viewport(&self, pane: Pane) -> &ViewportController {
        self.split.viewport(pane)
    }

    /// Snapshot of the display toggles.
    pub fn display(&self) -> DisplaySettings {
        *self.display.borrow()
    }

    /// Handle to the toggles shared by both panes.
    pub fn shared_display(&self) -> Shared<DisplaySettings> {
        self.display.clone()
    }

    // ----- Layout --------------------------------------------------------

    /// Area left for the panes once the parameter panel takes its width.
    pub fn available_dimensions(&self) -> Size {
        let panel = if self.is_panel_open && !self.is_full_page {
            self.config.panel_width
        } else {
            0.0
        };
        Size::new((self.container.width - panel).max(0.0), self.container.height)
    }

    pub fn pane_dimensions(&self, pane: Pane) -> Size {
        self.split.pane_dimensions(pane, self.available_dimensions())
    }

    /// New size of the hosting container, from a resize observer.
    pub fn set_container_size(&mut self, width: f64, height: f64) {
        let size = Size::new(width, height);
        if !size.is_valid() {
            tracing::warn!("Ignoring invalid container size {:?}", size);
            return;
        }
        if size == self.container {
            return;
        }
        self.container = size;
        self.bus
            .publish(AppEvent::Layout(LayoutEvent::Resized { width, height }));
        self.relayout();
    }

    pub fn set_panel_open(&mut self, open: bool) {
        if self.is_panel_open == open {
            return;
        }
        self.is_panel_open = open;
        self.bus
            .publish(AppEvent::Layout(LayoutEvent::PanelToggled { open }));
        self.relayout();
    }

    pub fn toggle_full_page(&mut self) {
        self.is_full_page = !self.is_full_page;
        self.bus.publish(AppEvent::Layout(LayoutEvent::FullPageToggled {
            full_page: self.is_full_page,
        }));
        self.relayout();
    }

    pub fn toggle_split_view(&mut self) {
        self.split.toggle_split();
        if !self.split.is_split() && self.active == Pane::Side {
            self.activate(Pane::Top);
        }
        self.relayout();
    }

    /// Pointer down on the split divider.
    pub fn begin_split_resize(&mut self) {
        self.split.begin_resize();
    }

    /// Divider drag; `pointer_y` is relative to the top of the container.
    pub fn split_resize_to(&mut self, pointer_y: f64) {
        let height = self.available_dimensions().height;
        let before = self.split.ratio();
        self.split.resize_to(pointer_y, height);
        if self.split.ratio() != before {
            self.relayout();
        }
    }

    /// Pointer released anywhere in the document after a divider drag.
    pub fn end_split_resize(&mut self) {
        if !self.split.is_resizing() {
            return;
        }
        self.split.end_resize();
        if !self.split.is_split() && self.active == Pane::Side {
            self.activate(Pane::Top);
        }
        self.relayout();
    }

    fn relayout(&mut self) {
        let available = self.available_dimensions();
        self.split.apply_dimensions(available);
    }

    // ----- Zoom commands ---------------------------------------------------

    pub fn zoom_in(&mut self) {
        self.split.viewport_mut(self.active).zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.split.viewport_mut(self.active).zoom_out();
    }

    pub fn zoom_reset(&mut self) {
        self.split.viewport_mut(self.active).zoom_reset();
    }

    /// Fit both panes, each against its own size.
    pub fn center_view(&mut self) {
        for pane in [Pane::Top, Pane::Side] {
            self.split.viewport_mut(pane).center_view();
        }
    }

    /// Zoom readout of the active pane, in percent.
    pub fn zoom_percent(&self) -> i64 {
        self.viewport(self.active).zoom_percent()
    }

    // ----- Pointer routing ---------------------------------------------------

    pub fn pointer_down(&mut self, pane: Pane, position: Point) {
        if pane == Pane::Side && !self.split.is_split() {
            return;
        }
        self.activate(pane);
        self.split.viewport_mut(pane).pointer_down(position);
    }

    pub fn pointer_move(&mut self, pane: Pane, position: Point) {
        self.split.viewport_mut(pane).pointer_move(position);
    }

    /// Pointer released anywhere: ends every drag in progress.
    pub fn pointer_up(&mut self) {
        self.split.viewport_mut(Pane::Top).pointer_up();
        self.split.viewport_mut(Pane::Side).pointer_up();
        self.end_split_resize();
    }

    pub fn pointer_leave(&mut self, pane: Pane) {
        self.split.viewport_mut(pane).pointer_leave();
    }

    pub fn wheel(&mut self, pane: Pane, delta_y: f64, cursor: Point) {
        if pane == Pane::Side && !self.split.is_split() {
            return;
        }
        self.split.viewport_mut(pane).wheel(delta_y, cursor);
    }

    fn activate(&mut self, pane: Pane) {
        if self.active != pane {
            self.active = pane;
            self.bus
                .publish(AppEvent::Viewport(ViewportEvent::PaneActivated { pane }));
        }
    }

    // ----- Display toggles ---------------------------------------------------
    // Unchanged values publish nothing.

    pub fn set_show_grid(&mut self, visible: bool) {
        if std::mem::replace(&mut self.display.borrow_mut().show_grid, visible) == visible {
            return;
        }
        self.bus
            .publish(AppEvent::Display(DisplayEvent::GridToggled { visible }));
    }

    pub fn set_show_axes(&mut self, visible: bool) {
        if std::mem::replace(&mut self.display.borrow_mut().show_axes, visible) == visible {
            return;
        }
        self.bus
            .publish(AppEvent::Display(DisplayEvent::AxesToggled { visible }));
    }

    pub fn set_show_rulers(&mut self, visible: bool) {
        if std::mem::replace(&mut self.display.borrow_mut().show_rulers, visible) == visible {
            return;
        }
        self.bus
            .publish(AppEvent::Display(DisplayEvent::RulersToggled { visible }));
    }

    pub fn set_grid_style(&mut self, style: GridStyle) {
        if std::mem::replace(&mut self.display.borrow_mut().grid_style, style) == style {
            return;
        }
        self.bus.publish(AppEvent::Display(DisplayEvent::GridStyleChanged {
            style: style.to_string(),
        }));
    }

    pub fn set_dashed_minor_grid(&mut self, dashed: bool) {
        if std::mem::replace(&mut self.display.borrow_mut().dashed_minor_grid, dashed) == dashed {
            return;
        }
        self.bus
            .publish(AppEvent::Display(DisplayEvent::DashedMinorGridToggled { dashed }));
    }

    // ----- Rendering -----------------------------------------------------------

    pub fn render(&self, pane: Pane) -> DrawList {
        self.viewport(pane).render()
    }

    /// Draw lists for every visible pane, top first.
    pub fn render_all(&self) -> Vec<(Pane, DrawList)> {
        self.split
            .visible_panes()
            .into_iter()
            .map(|pane| (pane, self.render(pane)))
            .collect()
    }
}
