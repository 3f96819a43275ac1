use clap::Parser;
use fretcad::{init_logging, render_snapshot, CliArgs};
use fretcad_settings::Config;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging()?;

    let config_path = match args.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&config_path);

    let out = args.out.unwrap_or_else(|| config.ui.snapshot_path.clone());
    let summary = render_snapshot(&config, &out)?;
    tracing::info!(
        "{} commands ({} labels) written to {}",
        summary.commands,
        summary.labels,
        out.display()
    );

    fretcad::log_design_summary(config.ui.measurement_system);
    Ok(())
}
