//! Concept taxonomy for CanvasIntent.
//!
//! This crate provides:
//!
//! - **Locales**: the closed set of supported language tags and the
//!   per-locale [`TermTable`] with its explicit fallback chain.
//! - **Nodes**: [`ConceptNode`] (a canonical intent mapped to a canvas
//!   action) and [`ModifierNode`] (a timing, style or behavior adjustment).
//! - **Registry**: the immutable, validated [`Registry`] of nodes, either
//!   the built-in canvas taxonomy or one loaded from JSON.

pub mod builtin;
pub mod error;
pub mod locale;
pub mod registry;
pub mod types;

pub use error::{Result, TaxonomyError};
pub use locale::{Locale, TermTable, fallback_chain};
pub use registry::{Registry, RegistryDocument};
pub use types::{
    Category, ConceptNode, ModifierCategory, ModifierNode, ParamTransform, ParameterExtractor,
    Params, PatchValue, ToolMapping, normalize_hex, number_value,
};
