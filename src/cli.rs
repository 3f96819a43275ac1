//! Command-line arguments for the headless renderer.

use std::path::PathBuf;

use clap::Parser;

/// Parsed `fretcad` arguments
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "fretcad",
    version,
    about = "Render a snapshot of the FretCAD top view"
)]
pub struct CliArgs {
    /// Config file; the platform default when absent
    #[arg(short, long, env = "FRETCAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot file (.svg or .png); `ui.snapshot_path` from the config when absent
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}
