//! Event type definitions for the event bus.
//!
//! This module defines all application events organized by category.
//! Events are cloneable and serializable so a host can log or replay them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One of the two drafting panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    /// The primary (top) view of the guitar body.
    #[default]
    Top,
    /// The secondary (side / edge) view shown in split mode.
    Side,
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pane::Top => write!(f, "Top View"),
            Pane::Side => write!(f, "Side View"),
        }
    }
}

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Pan/zoom changes of a single pane
    Viewport(ViewportEvent),
    /// Display toggle changes (shared by all panes)
    Display(DisplayEvent),
    /// Container, full-page and split layout changes
    Layout(LayoutEvent),
    /// Settings and configuration
    Settings(SettingsEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Viewport(_) => EventCategory::Viewport,
            AppEvent::Display(_) => EventCategory::Display,
            AppEvent::Layout(_) => EventCategory::Layout,
            AppEvent::Settings(_) => EventCategory::Settings,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Viewport(e) => e.description(),
            AppEvent::Display(e) => e.description(),
            AppEvent::Layout(e) => e.description(),
            AppEvent::Settings(e) => e.description(),
        }
    }

    /// Whether the host should repaint after this event.
    pub fn requires_redraw(&self) -> bool {
        !matches!(self, AppEvent::Settings(SettingsEvent::Saved { .. }))
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Pan/zoom events.
    Viewport,
    /// Display toggle events.
    Display,
    /// Layout events.
    Layout,
    /// Settings and configuration events.
    Settings,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventCategory::Viewport => write!(f, "Viewport"),
            EventCategory::Display => write!(f, "Display"),
            EventCategory::Layout => write!(f, "Layout"),
            EventCategory::Settings => write!(f, "Settings"),
        }
    }
}

/// Pan/zoom events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewportEvent {
    /// Zoom factor changed (pan may have changed with it).
    ZoomChanged {
        /// Pane whose zoom changed.
        pane: Pane,
        /// New zoom factor.
        zoom: f64,
    },
    /// Pan offset changed by a drag.
    PanChanged {
        /// Pane that was panned.
        pane: Pane,
        /// New horizontal offset in pixels.
        x: f64,
        /// New vertical offset in pixels.
        y: f64,
    },
    /// The design rectangle was fitted into the pane.
    ViewCentered {
        /// Pane that was centered.
        pane: Pane,
        /// Zoom chosen by the fit.
        zoom: f64,
    },
    /// The pane became the target of the zoom buttons.
    PaneActivated {
        /// Newly active pane.
        pane: Pane,
    },
}

impl ViewportEvent {
    fn description(&self) -> String {
        match self {
            ViewportEvent::ZoomChanged { pane, zoom } => {
                format!("{}: zoom {:.0}%", pane, zoom * 100.0)
            }
            ViewportEvent::PanChanged { pane, x, y } => {
                format!("{}: pan ({:.1}, {:.1})", pane, x, y)
            }
            ViewportEvent::ViewCentered { pane, zoom } => {
                format!("{}: centered at {:.0}%", pane, zoom * 100.0)
            }
            ViewportEvent::PaneActivated { pane } => format!("{} activated", pane),
        }
    }
}

/// Display toggle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayEvent {
    /// Grid visibility toggled.
    GridToggled {
        /// New visibility.
        visible: bool,
    },
    /// Axis visibility toggled.
    AxesToggled {
        /// New visibility.
        visible: bool,
    },
    /// Ruler visibility toggled.
    RulersToggled {
        /// New visibility.
        visible: bool,
    },
    /// Grid drawing style changed.
    GridStyleChanged {
        /// New style name ("lines" or "dots").
        style: String,
    },
    /// Minor grid dashing toggled.
    DashedMinorGridToggled {
        /// Whether minor lines are dashed.
        dashed: bool,
    },
}

impl DisplayEvent {
    fn description(&self) -> String {
        fn on_off(flag: bool) -> &'static str {
            if flag {
                "on"
            } else {
                "off"
            }
        }
        match self {
            DisplayEvent::GridToggled { visible } => format!("Grid {}", on_off(*visible)),
            DisplayEvent::AxesToggled { visible } => format!("Axes {}", on_off(*visible)),
            DisplayEvent::RulersToggled { visible } => format!("Rulers {}", on_off(*visible)),
            DisplayEvent::GridStyleChanged { style } => format!("Grid style: {}", style),
            DisplayEvent::DashedMinorGridToggled { dashed } => {
                format!("Dashed minor grid {}", on_off(*dashed))
            }
        }
    }
}

/// Layout events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// The hosting container was resized.
    Resized {
        /// New width in pixels.
        width: f64,
        /// New height in pixels.
        height: f64,
    },
    /// Full-page mode toggled.
    FullPageToggled {
        /// Whether full-page mode is now on.
        full_page: bool,
    },
    /// The parameter side panel opened or closed.
    PanelToggled {
        /// Whether the panel is now open.
        open: bool,
    },
    /// Split view toggled by the user.
    SplitViewToggled {
        /// Whether split view is now on.
        split: bool,
    },
    /// The split handle moved.
    SplitRatioChanged {
        /// New fraction of the height given to the top pane.
        ratio: f64,
    },
    /// Releasing the split handle near an edge closed split view.
    SplitCollapsed,
}

impl LayoutEvent {
    fn description(&self) -> String {
        match self {
            LayoutEvent::Resized { width, height } => {
                format!("Resized to {:.0}x{:.0}", width, height)
            }
            LayoutEvent::FullPageToggled { full_page } => format!("Full page: {}", full_page),
            LayoutEvent::PanelToggled { open } => format!("Panel open: {}", open),
            LayoutEvent::SplitViewToggled { split } => format!("Split view: {}", split),
            LayoutEvent::SplitRatioChanged { ratio } => format!("Split ratio: {:.2}", ratio),
            LayoutEvent::SplitCollapsed => "Split view collapsed".to_string(),
        }
    }
}

/// Settings and configuration events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingsEvent {
    /// Configuration loaded from disk.
    Loaded {
        /// File that was read.
        path: PathBuf,
    },
    /// Configuration written to disk.
    Saved {
        /// File that was written.
        path: PathBuf,
    },
}

impl SettingsEvent {
    fn description(&self) -> String {
        match self {
            SettingsEvent::Loaded { path } => format!("Settings loaded from {}", path.display()),
            SettingsEvent::Saved { path } => format!("Settings saved to {}", path.display()),
        }
    }
}
