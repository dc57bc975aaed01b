//! Matcher tuning knobs.

use serde::{Deserialize, Serialize};

/// Scoring thresholds and bonuses used by the match strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Minimum similarity a fuzzy candidate needs to be kept.  Also the
    /// confidence below which a classification asks for clarification.
    ///
    /// Default: **0.6**.
    pub min_confidence: f64,

    /// How many alternatives are reported.  The matcher returns up to twice
    /// this many ranked candidates.
    ///
    /// Default: **5**.
    pub max_suggestions: usize,

    /// The fuzzy stage is skipped once any candidate scores above this,
    /// locale bonuses excluded.
    ///
    /// Default: **0.85**.
    pub short_circuit_threshold: f64,

    /// Bonus for a phrase written in the preferred locale.
    ///
    /// Default: **0.02**.
    pub phrase_locale_bonus: f64,

    /// Bonus for a keyword or fuzzy match in the preferred locale.
    ///
    /// Default: **0.05**.
    pub locale_bonus: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.6,
            max_suggestions: 5,
            short_circuit_threshold: 0.85,
            phrase_locale_bonus: 0.02,
            locale_bonus: 0.05,
        }
    }
}

impl MatcherConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum fuzzy confidence.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Set the number of alternatives reported.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Set the score above which the fuzzy stage is skipped.
    pub fn with_short_circuit_threshold(mut self, threshold: f64) -> Self {
        self.short_circuit_threshold = threshold;
        self
    }

    /// Set the phrase and keyword locale bonuses.
    pub fn with_locale_bonuses(mut self, phrase: f64, other: f64) -> Self {
        self.phrase_locale_bonus = phrase;
        self.locale_bonus = other;
        self
    }

    /// The maximum number of candidates `find_matches` returns.
    pub fn result_limit(&self) -> usize {
        self.max_suggestions.saturating_mul(2)
    }
}
