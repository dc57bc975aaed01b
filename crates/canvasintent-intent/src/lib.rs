//! Intent classification engine for CanvasIntent.
//!
//! This crate turns free-form, multilingual canvas commands into a
//! structured action:
//!
//! - **Classification**: [`IntentEngine::classify`] ranks concepts with the
//!   matcher, merges parameters and decides whether to ask the user for
//!   clarification.
//! - **Entity extraction**: colors, numbers with units, named positions and
//!   quoted names via [`entities::extract_entities`].
//! - **Error recovery**: "did you mean" and tool-mismatch payloads via
//!   [`IntentEngine::build_error_recovery`] and [`format_rich_error`].
//!
//! The free functions [`classify`], [`get_recommendation`],
//! [`validate_tool_selection`] and [`build_error_recovery`] use a shared
//! default engine over the built-in taxonomy.

pub mod classifier;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod recovery;

pub use classifier::{
    Alternative, ClassificationMethod, ClassificationResult, IntentAnalysis, Recommendation,
    RecommendedAction, ToolMismatchWarning,
};
pub use config::{AmbiguityThresholds, CanvasLayout, EngineConfig};
pub use engine::{
    IntentEngine, build_error_recovery, classify, default_engine, get_recommendation,
    validate_tool_selection,
};
pub use entities::{
    EntityKind, EntityValue, ExtractedEntity, NumberUnit, Position, Span, extract_entities,
    resolve_overlaps,
};
pub use error::{IntentError, Result};
pub use recovery::{ErrorKind, ErrorRecovery, RecoveryContext, closest_match, format_rich_error};
