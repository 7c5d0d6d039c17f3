use std::path::Path;

use anyhow::Result;
use hgr_core::config::HgrConfig;
use hgr_core::decode::decode_frame_with_stats;
use hgr_export::encode::PngExporter;
use hgr_source::dump::load_dump;

use crate::cli::Cli;
use crate::config::{DEFAULT_CONFIG, resolve_config};

/// Load, decode, encode. The output file is only created once the input
/// has passed the size check.
///
/// # Errors
/// Returns an error on read failure, size mismatch, bad config or write failure.
pub fn run(cli: &Cli) -> Result<()> {
    let mut config = resolve_config(cli.config.as_deref(), Path::new(DEFAULT_CONFIG))?;
    if cli.invert {
        config.palette = config.palette.inverted();
    }
    convert(&cli.input, &cli.output, &config)
}

/// Convert one dump file to one PNG file.
///
/// # Errors
/// Returns an error on read failure, size mismatch or write failure.
pub fn convert(input: &Path, output: &Path, config: &HgrConfig) -> Result<()> {
    let dump = load_dump(input)?;

    let (raster, stats) = decode_frame_with_stats(&dump.frame());
    log::debug!(
        "decoded {}: {} visible bytes, {} holes, {} shifted, {} bits lit",
        dump.path().display(),
        stats.visible,
        stats.holes,
        stats.shifted,
        stats.lit_bits
    );

    PngExporter::new(config.palette, config.output).save(&raster, output)
}
