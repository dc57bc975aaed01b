//! CanvasIntent matcher.
//!
//! This crate turns free-form text into ranked concept matches over a
//! [`canvasintent_taxonomy::Registry`]:
//!
//! - **[`index`]**: keyword and phrase indices plus compiled patterns,
//!   derived once from the registry.
//! - **[`strategy`]**: the ordered phrase / keyword / fuzzy pipeline and
//!   its shared [`CandidateSet`].
//! - **[`matcher`]**: the [`Matcher`] orchestrator, modifier detection and
//!   parameter extraction.
//! - **[`locale_detect`]**: script and Latin-language heuristics.
//!
//! Matching never fails.  Registry entries that cannot be compiled are
//! logged and skipped when the index is built.

pub mod config;
pub mod error;
pub mod index;
pub mod locale_detect;
pub mod matcher;
pub mod modifier;
pub mod params;
pub mod similarity;
pub mod strategy;

pub use config::MatcherConfig;
pub use error::{MatcherError, Result};
pub use index::{IndexEntry, TermIndex, normalize};
pub use locale_detect::detect_locale;
pub use matcher::{Matcher, TaxonomyMatch};
pub use modifier::{ActiveModifier, ModifierPattern};
pub use strategy::{
    Candidate, CandidateSet, FuzzyStrategy, KeywordStrategy, MatchContext, MatchStage,
    MatchStrategy, PhraseStrategy, should_short_circuit,
};
