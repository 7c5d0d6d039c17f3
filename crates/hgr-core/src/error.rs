use thiserror::Error;

/// Errors originating from the core crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The page dump is not exactly one HGR page long.
    #[error("expected {expected:#06x} bytes, got {actual:#06x}")]
    InputSize {
        /// Required length.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}
