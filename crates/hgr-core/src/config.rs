use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// RGB triple.
pub type Rgb = [u8; 3];

/// Conversion settings. Every field has a usable default.
///
/// # Example
/// ```
/// use hgr_core::config::HgrConfig;
/// let config = HgrConfig::default();
/// assert_eq!(config.palette.off, [0, 0, 0]);
/// assert_eq!(config.palette.on, [255, 255, 255]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HgrConfig {
    /// Colors for the two sample levels.
    pub palette: Palette,
    /// Encoder settings.
    pub output: OutputConfig,
}

/// Two-entry palette, indexed by [`crate::frame::Pixel::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Palette {
    /// Color of an unset bit.
    pub off: Rgb,
    /// Color of a set bit.
    pub on: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            off: [0, 0, 0],
            on: [255, 255, 255],
        }
    }
}

impl Palette {
    /// Swap the two entries.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            off: self.on,
            on: self.off,
        }
    }

    /// Entries in index order.
    #[must_use]
    pub fn entries(&self) -> [Rgb; 2] {
        [self.off, self.on]
    }
}

/// PNG deflate effort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Fast,
    Default,
    #[default]
    Best,
}

/// Output settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Deflate effort for the PNG stream.
    pub compression: Compression,
}

/// On-disk layout: every field optional, merged over the defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    palette: PaletteSection,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
struct PaletteSection {
    off: Option<Rgb>,
    on: Option<Rgb>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    compression: Option<Compression>,
}

/// Parse a TOML config string over the defaults.
///
/// # Errors
/// Returns an error on malformed TOML or if both palette entries are the
/// same color.
///
/// # Example
/// ```
/// use hgr_core::config::{parse_config, Compression};
/// let config = parse_config("[palette]\non = [0, 255, 0]\n").unwrap();
/// assert_eq!(config.palette.on, [0, 255, 0]);
/// assert_eq!(config.palette.off, [0, 0, 0]);
/// assert_eq!(config.output.compression, Compression::Best);
/// ```
pub fn parse_config(content: &str) -> Result<HgrConfig> {
    let file: ConfigFile = toml::from_str(content).context("TOML parse error")?;

    let mut config = HgrConfig::default();
    if let Some(v) = file.palette.off {
        config.palette.off = v;
    }
    if let Some(v) = file.palette.on {
        config.palette.on = v;
    }
    if let Some(v) = file.output.compression {
        config.output.compression = v;
    }

    if config.palette.off == config.palette.on {
        return Err(CoreError::Config(format!(
            "palette entries are identical ({:?}); the image would be blank",
            config.palette.on
        ))
        .into());
    }
    Ok(config)
}
