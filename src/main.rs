use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use armature_to_spine_json::export::batch::convert_path;
use armature_to_spine_json::ConvertConfig;

/// Converts armature exports (`Json/*.json`) into Spine skeleton JSON.
#[derive(Parser)]
#[command(name = "armature2spine", version, about, long_about = None)]
struct Cli {
    /// Source export file, or a directory searched for `**/Json/*.json`.
    #[arg(long)]
    src: Option<PathBuf>,

    /// Destination root. Defaults to a `spine` directory next to each source.
    #[arg(long)]
    dst: Option<PathBuf>,

    /// Converter settings (RON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop a directory run at the first file that fails.
    #[arg(long)]
    fail_fast: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let src = match cli.src {
        Some(src) => src,
        None => return Ok(()),
    };

    let config = match &cli.config {
        Some(path) => ConvertConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => ConvertConfig::default(),
    };

    let report = convert_path(&src, cli.dst.as_deref(), &config, cli.fail_fast)
        .with_context(|| format!("conversion of {} failed", src.display()))?;

    info!(
        "{} converted, {} skipped, {} failed",
        report.converted.len(),
        report.skipped.len(),
        report.failed.len()
    );
    if !report.is_success() {
        bail!("{} of the exports failed to convert", report.failed.len());
    }
    Ok(())
}
