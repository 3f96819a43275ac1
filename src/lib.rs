//! # FretCAD
//!
//! A guitar-design drafting canvas. The workspace is organized as:
//!
//! 1. **fretcad-core** - errors, unit conversion, event bus, layer tree and
//!    parameter state
//! 2. **fretcad-canvas** - the pan/zoom viewport engine: transform, adaptive
//!    grid, axes, rulers, split top/side views and draw surfaces
//! 3. **fretcad-settings** - configuration file model, JSON/TOML persistence
//! 4. **fretcad** - this crate: logging setup and a headless snapshot renderer
//!
//! ## Usage
//!
//! ```text
//! fretcad [--config <path>] [--out <file.svg|file.png>]
//! ```

pub mod cli;

use std::path::Path;

use fretcad_canvas::{CanvasWorkspace, DrawSurface, PixmapSurface, RenderError, SvgSurface};
use fretcad_core::{LayerTree, MeasurementSystem, Pane, ParameterSet, ParameterValue};
use fretcad_settings::Config;

pub use cli::CliArgs;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("FretCAD {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}

/// Snapshot file types, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Svg,
    Png,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Ok(Self::Svg),
            Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(Self::Png),
            _ => Err(RenderError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// What a snapshot run produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotSummary {
    pub format: SnapshotFormat,
    pub commands: usize,
    pub labels: usize,
    pub zoom: f64,
}

/// Render the top view at the configured snapshot size and write it to `out`.
///
/// The view is centred on the design before drawing.
pub fn render_snapshot(config: &Config, out: &Path) -> anyhow::Result<SnapshotSummary> {
    config.validate()?;
    let format = SnapshotFormat::from_path(out)?;
    let (width, height) = (config.ui.snapshot_width, config.ui.snapshot_height);

    let mut workspace = CanvasWorkspace::new(config.canvas, config.display);
    workspace.set_container_size(f64::from(width), f64::from(height));
    workspace.center_view();
    let list = workspace.render(Pane::Top);

    match format {
        SnapshotFormat::Svg => {
            let mut svg = SvgSurface::new(width, height);
            svg.draw(&list);
            svg.save(out)?;
        }
        SnapshotFormat::Png => {
            let mut pixmap = PixmapSurface::new(width, height)?;
            pixmap.draw(&list);
            pixmap.save_png(out)?;
        }
    }

    Ok(SnapshotSummary {
        format,
        commands: list.len(),
        labels: list.texts().len(),
        zoom: workspace.viewport(Pane::Top).zoom(),
    })
}

/// One line per panel parameter, in the chosen measurement system.
pub fn design_summary(system: MeasurementSystem) -> Vec<String> {
    let parameters = ParameterSet::guitar_defaults().converted(system);
    parameters
        .panel_parameters()
        .into_iter()
        .map(|p| {
            let value = match &p.value {
                ParameterValue::Number {
                    value,
                    unit: Some(unit),
                } => format!("{} {}", value, unit),
                ParameterValue::Number { value, unit: None } => value.to_string(),
                ParameterValue::Text { value } => value.clone(),
                ParameterValue::Choice { selected, .. } => selected.clone(),
            };
            format!("{} / {}: {}", p.category, p.name, value)
        })
        .collect()
}

/// Log the default guitar's layers and panel parameters.
pub fn log_design_summary(system: MeasurementSystem) {
    let layers = LayerTree::guitar();
    tracing::info!("Layers: {}", layers.layer_ids().join(", "));
    for line in design_summary(system) {
        tracing::info!("{}", line);
    }
}
