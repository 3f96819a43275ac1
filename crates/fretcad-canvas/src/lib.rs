//! # FretCAD Canvas
//!
//! The drafting canvas behind the FretCAD designer: an infinite, pannable and
//! zoomable 2D surface with an adaptive grid, origin axes, inch rulers and an
//! optional split into a top view and a side view.
//!
//! ## Core Components
//!
//! - **ViewTransform**: logical ↔ screen mapping (`screen = logical·zoom + pan + inset`)
//! - **ViewportController**: pan/zoom state and pointer interaction for one pane
//! - **SplitViewLayout**: two panes and the draggable divider between them
//! - **CanvasWorkspace**: container size, parameter panel, full page, active pane
//! - **Renderers**: grid, axes and rulers emitted into a [`DrawList`]
//! - **Surfaces**: SVG documents and tiny-skia pixmaps that replay a draw list
//!
//! ## Architecture
//!
//! ```text
//! CanvasWorkspace
//!   ├── DisplaySettings (shared by both panes)
//!   └── SplitViewLayout
//!         ├── ViewportController (top)
//!         └── ViewportController (side)
//!
//! pipeline::render(RenderState) -> DrawList
//!   ├── background
//!   ├── GridRenderer
//!   ├── AxisRenderer
//!   ├── design bounds
//!   └── RulerRenderer
//!
//! DrawList --> SvgSurface | PixmapSurface
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fretcad_canvas::{CanvasConfig, CanvasWorkspace, DisplaySettings, SvgSurface, DrawSurface};
//! use fretcad_core::Pane;
//!
//! let mut workspace = CanvasWorkspace::new(CanvasConfig::default(), DisplaySettings::default());
//! workspace.set_container_size(1280.0, 800.0);
//!
//! let list = workspace.render(Pane::Top);
//! let mut svg = SvgSurface::new(1280, 800);
//! svg.draw(&list);
//! ```

pub mod axes;
pub mod color;
pub mod config;
pub mod display;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod pipeline;
pub mod renderer;
pub mod ruler;
pub mod split_view;
pub mod svg_renderer;
pub mod view_transform;
pub mod viewport;
pub mod workspace;

pub use axes::AxisRenderer;
pub use color::Color;
pub use config::CanvasConfig;
pub use display::{DisplaySettings, GridStyle};
pub use draw::{DrawCommand, DrawList, DrawSurface, TextAlign, TextBaseline};
pub use error::{RenderError, Result, UnknownGridStyle};
pub use geometry::{Point, Rect, Size};
pub use grid::{adaptive_grid_size, GridRenderer, INCH_TO_PIXEL, MIN_GRID_SIZE};
pub use pipeline::{design_bounds, render, RenderState};
pub use renderer::PixmapSurface;
pub use ruler::{adaptive_ruler_interval, format_label, RulerRenderer};
pub use split_view::{ResizeState, SplitViewLayout};
pub use svg_renderer::SvgSurface;
pub use view_transform::ViewTransform;
pub use viewport::{PointerState, ViewportController};
pub use workspace::CanvasWorkspace;
