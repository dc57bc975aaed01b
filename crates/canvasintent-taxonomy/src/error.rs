//! Taxonomy error types.
//!
//! Registry construction and loading surface errors through
//! [`TaxonomyError`].  Lookups never fail; they return `Option`.

/// Unified error type for the taxonomy crate.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    // -- Validation ----------------------------------------------------------
    /// Two nodes share the same identifier.
    #[error("duplicate node id: {id}")]
    DuplicateId { id: String },

    /// A node has no term list for the base locale.
    #[error("node `{id}` has no terms for the base locale `{locale}`")]
    MissingBaseLocale { id: String, locale: String },

    /// A node declares a locale whose term list is empty or blank.
    #[error("node `{id}` has an empty term list for locale `{locale}`")]
    EmptyTerms { id: String, locale: String },

    /// A node has an empty identifier.
    #[error("node identifier must not be empty")]
    EmptyId,

    // -- Parsing -------------------------------------------------------------
    /// A locale tag is not one of the supported locales.
    #[error("unknown locale tag: {tag}")]
    UnknownLocale { tag: String },

    /// JSON deserialization of a registry document failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the taxonomy crate.
pub type Result<T> = std::result::Result<T, TaxonomyError>;
