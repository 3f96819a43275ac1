//! Display toggles shared by every pane.
//!
//! Panes hold a [`Shared`](fretcad_core::Shared) handle to one
//! [`DisplaySettings`] value and read it on every render, so a toggle made
//! through one pane is seen by all of them on their next frame.

use crate::error::UnknownGridStyle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the background grid is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridStyle {
    /// Solid major lines with lighter minor lines between them.
    #[default]
    Lines,
    /// A dot at every sub-grid intersection.
    Dots,
}

impl fmt::Display for GridStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridStyle::Lines => write!(f, "lines"),
            GridStyle::Dots => write!(f, "dots"),
        }
    }
}

impl FromStr for GridStyle {
    type Err = UnknownGridStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lines" | "line" => Ok(GridStyle::Lines),
            "dots" | "dot" => Ok(GridStyle::Dots),
            _ => Err(UnknownGridStyle(s.to_string())),
        }
    }
}

/// Presentation toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_grid: bool,
    pub show_rulers: bool,
    pub show_axes: bool,
    pub grid_style: GridStyle,
    pub dashed_minor_grid: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_rulers: true,
            show_axes: true,
            grid_style: GridStyle::Lines,
            dashed_minor_grid: true,
        }
    }
}

impl DisplaySettings {
    /// Pixel inset of the drawing area for the given ruler thickness.
    pub fn ruler_inset(&self, ruler_thickness: f64) -> f64 {
        if self.show_rulers {
            ruler_thickness
        } else {
            0.0
        }
    }
}
