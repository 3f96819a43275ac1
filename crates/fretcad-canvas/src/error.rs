//! Error types for snapshot export.
//!
//! Rendering itself never fails: an unusable surface yields an empty draw
//! list. Errors only come from turning a draw list into a file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while exporting a rendered pane
#[derive(Error, Debug)]
pub enum RenderError {
    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the raster image failed
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// tiny-skia refused to allocate a pixmap of this size
    #[error("Cannot allocate a {width}x{height} pixmap")]
    PixmapAllocation {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The output path has no extension we know how to write
    #[error("Unsupported snapshot format: {}", path.display())]
    UnsupportedFormat {
        /// The rejected path.
        path: PathBuf,
    },
}

/// A grid style name that is neither `lines` nor `dots`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown grid style: {0}")]
pub struct UnknownGridStyle(pub String);

/// Result type for export operations
pub type Result<T> = std::result::Result<T, RenderError>;
