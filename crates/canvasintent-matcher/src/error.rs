//! Matcher error types.
//!
//! Nothing on the matching path returns these to callers.  Registry entries
//! that fail to compile at index build are reported through
//! [`MatcherError`], logged at `warn` and skipped, so a single bad pattern
//! degrades one concept instead of the whole engine.

/// Compilation failures for registry-supplied patterns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcherError {
    /// A parameter-extractor regex failed to compile.
    #[error("invalid regex pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A parameter-extractor regex has no capture group.
    #[error("pattern `{pattern}` has no capture group")]
    MissingCaptureGroup { pattern: String },

    /// A modifier pattern has more than one `*` placeholder or nothing
    /// around it.
    #[error("unparsable modifier wildcard `{pattern}`")]
    InvalidWildcard { pattern: String },
}

/// Convenience alias used throughout the matcher crate.
pub type Result<T> = std::result::Result<T, MatcherError>;
