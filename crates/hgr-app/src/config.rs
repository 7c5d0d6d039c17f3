use std::path::Path;

use anyhow::{Context, Result};
use hgr_core::config::{HgrConfig, parse_config};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "hgrdump.toml";

/// Load a TOML config file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<HgrConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let config = parse_config(&content).with_context(|| format!("in {}", path.display()))?;
    log::debug!("config loaded from {}: {config:?}", path.display());
    Ok(config)
}

/// An explicit path must exist. Without one, `default` is used if present,
/// otherwise the built-in defaults.
///
/// # Errors
/// Returns an error if the chosen file cannot be read or parsed.
pub fn resolve_config(explicit: Option<&Path>, default: &Path) -> Result<HgrConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    if default.exists() {
        load_config(default)
    } else {
        log::warn!(
            "config {} not found, using defaults",
            default.display()
        );
        Ok(HgrConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[palette]\noff = [0, 0, 64]").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.palette.off, [0, 0, 64]);
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = load_config(Path::new("/nonexistent/hgrdump.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/hgrdump.toml"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let typo = dir.path().join("hgrdmup.toml");
        let default = dir.path().join(DEFAULT_CONFIG);
        assert!(resolve_config(Some(typo.as_path()), &default).is_err());
    }

    #[test]
    fn absent_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join(DEFAULT_CONFIG);
        assert_eq!(
            resolve_config(None, &default).unwrap(),
            HgrConfig::default()
        );
    }

    #[test]
    fn present_default_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join(DEFAULT_CONFIG);
        std::fs::write(&default, "[palette]\non = [0, 255, 0]\n").unwrap();
        let config = resolve_config(None, &default).unwrap();
        assert_eq!(config.palette.on, [0, 255, 0]);
    }
}
