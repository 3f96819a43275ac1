//! Tuning constants for the viewport controller and split layout.

use serde::{Deserialize, Serialize};

/// Canvas behaviour settings
///
/// Everything here has a sensible default; a settings file only needs to name
/// the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Ruler bar thickness in pixels (also the drawing inset when rulers show)
    pub ruler_thickness: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Factor applied by the zoom-in button
    pub button_zoom_in: f64,
    /// Factor applied by the zoom-out button
    pub button_zoom_out: f64,
    /// Factor per wheel tick towards the user (negative delta)
    pub wheel_zoom_in: f64,
    /// Factor per wheel tick away from the user (positive delta)
    pub wheel_zoom_out: f64,
    /// Centre view leaves `1 / fit_margin` of the pane around the design
    pub fit_margin: f64,
    /// Share of the height given to the top pane when split view opens
    pub default_split_ratio: f64,
    /// Ratio restored after the split is collapsed by dragging past the bottom
    pub split_reset_ratio: f64,
    pub split_min_ratio: f64,
    pub split_max_ratio: f64,
    /// Width taken by the parameter panel when it is open
    pub panel_width: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            ruler_thickness: 20.0,
            min_zoom: 0.2,
            max_zoom: 4.0,
            button_zoom_in: 1.1,
            button_zoom_out: 0.9,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            fit_margin: 1.1,
            default_split_ratio: 0.75,
            split_reset_ratio: 0.6,
            split_min_ratio: 0.1,
            split_max_ratio: 0.9,
            panel_width: 384.0,
        }
    }
}

impl CanvasConfig {
    /// Clamp a zoom factor into `[min_zoom, max_zoom]`.
    // Inverted bounds are possible before validation; never panics.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    pub fn clamp_split_ratio(&self, ratio: f64) -> f64 {
        ratio.max(self.split_min_ratio).min(self.split_max_ratio)
    }
}
