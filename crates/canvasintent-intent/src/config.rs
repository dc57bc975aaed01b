//! Engine configuration.
//!
//! [`EngineConfig`] bundles the matcher thresholds with the classifier's own
//! policy knobs.  Every field has a default, so a TOML file only needs the
//! values it overrides:
//!
//! ```toml
//! keyword_threshold = 0.9
//!
//! [matcher]
//! min_confidence = 0.55
//!
//! [ambiguity]
//! margin = 0.05
//! ```

use std::path::Path;

use canvasintent_matcher::MatcherConfig;
use canvasintent_taxonomy::builtin::FALLBACK_SUGGESTIONS;
use serde::{Deserialize, Serialize};

use crate::entities::Position;
use crate::error::{IntentError, Result};

// ---------------------------------------------------------------------------
// Ambiguity
// ---------------------------------------------------------------------------

/// When two top candidates count as neck-and-neck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbiguityThresholds {
    /// The runner-up must score above this.
    ///
    /// Default: **0.7**.
    pub floor: f64,

    /// ...and lie within this distance of the best score.
    ///
    /// Default: **0.1**.
    pub margin: f64,
}

impl Default for AmbiguityThresholds {
    fn default() -> Self {
        Self {
            floor: 0.7,
            margin: 0.1,
        }
    }
}

impl AmbiguityThresholds {
    /// Whether `second` is close enough to `best` to need a clarification.
    pub fn is_ambiguous(&self, best: f64, second: f64) -> bool {
        second > self.floor && best - second <= self.margin + f64::EPSILON * 8.0
    }
}

// ---------------------------------------------------------------------------
// Canvas layout
// ---------------------------------------------------------------------------

/// The canvas geometry that named positions resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
    /// Inset from the edges for edge and corner positions.
    pub margin: u32,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            margin: 100,
        }
    }
}

impl CanvasLayout {
    /// Resolve a named position to `(x, y)` canvas coordinates.
    pub fn resolve(&self, position: Position) -> (u32, u32) {
        let left = self.margin;
        let right = self.width.saturating_sub(self.margin);
        let top = self.margin;
        let bottom = self.height.saturating_sub(self.margin);
        let cx = self.width / 2;
        let cy = self.height / 2;

        match position {
            Position::Center => (cx, cy),
            Position::Top => (cx, top),
            Position::Bottom => (cx, bottom),
            Position::Left => (left, cy),
            Position::Right => (right, cy),
            Position::TopLeft => (left, top),
            Position::TopRight => (right, top),
            Position::BottomLeft => (left, bottom),
            Position::BottomRight => (right, bottom),
        }
    }
}

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Classifier and recovery policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Matcher thresholds and bonuses.
    pub matcher: MatcherConfig,

    /// Neck-and-neck detection.
    pub ambiguity: AmbiguityThresholds,

    /// A non-phrase best match above this is reported as a `keyword`
    /// classification, otherwise as `pattern`.
    ///
    /// Default: **0.85**.
    pub keyword_threshold: f64,

    /// A different action must score above this to be suggested for a
    /// mismatched tool.
    ///
    /// Default: **0.8**.
    pub mismatch_threshold: f64,

    /// Maximum edit distance for a "did you mean" suggestion.
    ///
    /// Default: **3**.
    pub did_you_mean_distance: usize,

    pub canvas: CanvasLayout,

    /// Concept ids offered when nothing matches.
    pub fallback_suggestions: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            ambiguity: AmbiguityThresholds::default(),
            keyword_threshold: 0.85,
            mismatch_threshold: 0.8,
            did_you_mean_distance: 3,
            canvas: CanvasLayout::default(),
            fallback_suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "engine configuration loaded");
        Ok(config)
    }

    /// Replace the matcher configuration.
    pub fn with_matcher(mut self, matcher: MatcherConfig) -> Self {
        self.matcher = matcher;
        self
    }

    /// Set the ambiguity floor and margin.
    pub fn with_ambiguity(mut self, floor: f64, margin: f64) -> Self {
        self.ambiguity = AmbiguityThresholds { floor, margin };
        self
    }

    /// Set the score above which a match is reported as `keyword`.
    pub fn with_keyword_threshold(mut self, threshold: f64) -> Self {
        self.keyword_threshold = threshold;
        self
    }

    /// Set the score a different action needs to be suggested on mismatch.
    pub fn with_mismatch_threshold(mut self, threshold: f64) -> Self {
        self.mismatch_threshold = threshold;
        self
    }

    /// Set the "did you mean" edit-distance cutoff.
    pub fn with_did_you_mean_distance(mut self, distance: usize) -> Self {
        self.did_you_mean_distance = distance;
        self
    }

    /// Replace the canvas layout.
    pub fn with_canvas(mut self, canvas: CanvasLayout) -> Self {
        self.canvas = canvas;
        self
    }

    /// Replace the fallback suggestion list.
    pub fn with_fallback_suggestions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_suggestions = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Reject values outside their meaningful ranges.
    pub fn validate(&self) -> Result<()> {
        let unit_fields = [
            ("matcher.min_confidence", self.matcher.min_confidence),
            ("matcher.short_circuit_threshold", self.matcher.short_circuit_threshold),
            ("matcher.phrase_locale_bonus", self.matcher.phrase_locale_bonus),
            ("matcher.locale_bonus", self.matcher.locale_bonus),
            ("ambiguity.floor", self.ambiguity.floor),
            ("ambiguity.margin", self.ambiguity.margin),
            ("keyword_threshold", self.keyword_threshold),
            ("mismatch_threshold", self.mismatch_threshold),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(IntentError::Config {
                    reason: format!("{name} must be within 0..=1, got {value}"),
                });
            }
        }

        if self.matcher.max_suggestions == 0 {
            return Err(IntentError::Config {
                reason: "matcher.max_suggestions must be at least 1".into(),
            });
        }

        let canvas = &self.canvas;
        if canvas.width == 0 || canvas.height == 0 {
            return Err(IntentError::Config {
                reason: "canvas dimensions must be non-zero".into(),
            });
        }
        if canvas.margin.saturating_mul(2) >= canvas.width.min(canvas.height) {
            return Err(IntentError::Config {
                reason: format!(
                    "canvas.margin {} leaves no room on a {}x{} canvas",
                    canvas.margin, canvas.width, canvas.height
                ),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ambiguity.floor, 0.7);
        assert_eq!(config.did_you_mean_distance, 3);
        assert_eq!(config.fallback_suggestions[0], "create_circle");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            keyword_threshold = 0.9

            [matcher]
            max_suggestions = 3

            [ambiguity]
            margin = 0.05
            "#,
        )
        .unwrap();
        assert_eq!(config.keyword_threshold, 0.9);
        assert_eq!(config.matcher.max_suggestions, 3);
        assert_eq!(config.matcher.min_confidence, 0.6);
        assert_eq!(config.ambiguity.margin, 0.05);
        assert_eq!(config.ambiguity.floor, 0.7);
        assert_eq!(config.canvas, CanvasLayout::default());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = EngineConfig::from_toml_str("mismatch_threshold = 1.5").unwrap_err();
        assert!(matches!(err, IntentError::Config { .. }));
        assert!(err.to_string().contains("mismatch_threshold"));

        let config = EngineConfig::new().with_matcher(MatcherConfig::new().with_max_suggestions(0));
        assert!(config.validate().is_err());

        let config = EngineConfig::new().with_canvas(CanvasLayout {
            width: 150,
            height: 100,
            margin: 50,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = EngineConfig::from_toml_str("keyword_threshold = [").unwrap_err();
        assert!(matches!(err, IntentError::Toml(_)));
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "did_you_mean_distance = 2\n").unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.did_you_mean_distance, 2);

        let missing = EngineConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, IntentError::Io(_)));
    }

    #[test]
    fn named_positions_resolve_on_the_default_canvas() {
        let canvas = CanvasLayout::default();
        assert_eq!(canvas.resolve(Position::Center), (960, 540));
        assert_eq!(canvas.resolve(Position::TopLeft), (100, 100));
        assert_eq!(canvas.resolve(Position::BottomRight), (1820, 980));
        assert_eq!(canvas.resolve(Position::Top), (960, 100));
    }

    #[test]
    fn ambiguity_is_inclusive_of_the_margin() {
        let thresholds = AmbiguityThresholds::default();
        assert!(thresholds.is_ambiguous(0.9, 0.8));
        assert!(thresholds.is_ambiguous(0.97, 0.9));
        assert!(!thresholds.is_ambiguous(0.95, 0.8));
        assert!(!thresholds.is_ambiguous(0.75, 0.7));
    }
}
