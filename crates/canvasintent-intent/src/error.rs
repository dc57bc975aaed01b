//! Intent engine error types.
//!
//! Classification itself never fails; errors only arise while loading
//! configuration or a registry document.

/// Unified error type for the intent engine.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    // -- Configuration -------------------------------------------------------
    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    /// The configuration file could not be parsed.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    // -- Registry ------------------------------------------------------------
    /// The registry document failed validation.
    #[error("taxonomy error: {0}")]
    Taxonomy(#[from] canvasintent_taxonomy::TaxonomyError),

    // -- I/O ---------------------------------------------------------------
    /// Reading a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the intent crate.
pub type Result<T> = std::result::Result<T, IntentError>;
