use std::path::PathBuf;

use clap::Parser;

/// hgrdump — decode an Apple II hi-res page dump to PNG.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Raw 8 KiB HGR page dump.
    pub input: PathBuf,

    /// PNG file to write.
    pub output: PathBuf,

    /// TOML configuration file. Without it, hgrdump.toml is read if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Swap the on and off palette colors.
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
