//! The multi-strategy matcher.
//!
//! A [`Matcher`] owns a shared [`Registry`] and lazily builds its
//! [`TermIndex`] on first use.  Racing first callers all observe one
//! complete index; [`Matcher::reset`] discards it and needs exclusive
//! access.

use std::fmt;
use std::sync::{Arc, OnceLock};

use canvasintent_taxonomy::{ConceptNode, Locale, Params, Registry, fallback_chain};
use serde::Serialize;

use crate::config::MatcherConfig;
use crate::index::{TermIndex, normalize, words};
use crate::locale_detect;
use crate::modifier::ActiveModifier;
use crate::params::extract_all;
use crate::strategy::{
    CandidateSet, MatchContext, MatchStage, MatchStrategy, default_strategies,
    should_short_circuit,
};

/// A ranked concept match.
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyMatch {
    pub node_id: String,
    pub similarity: f64,
    /// A copy of the matched concept.
    #[serde(skip)]
    pub node: ConceptNode,
    pub matched_term: String,
    pub matched_locale: Locale,
    pub stage: MatchStage,
}

/// Phrase, keyword and fuzzy matching over one registry.
pub struct Matcher {
    registry: Arc<Registry>,
    config: MatcherConfig,
    index: OnceLock<TermIndex>,
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl Matcher {
    /// Create a matcher with the default strategy pipeline.
    pub fn new(registry: Arc<Registry>, config: MatcherConfig) -> Self {
        Self {
            registry,
            config,
            index: OnceLock::new(),
            strategies: default_strategies(),
        }
    }

    /// A matcher over the built-in taxonomy with default settings.
    pub fn builtin() -> Self {
        Self::new(Arc::new(Registry::builtin()), MatcherConfig::default())
    }

    /// Replace the strategy pipeline.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn MatchStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A shared handle to the registry.
    pub fn registry_handle(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// The derived index, built on first access.
    pub fn index(&self) -> &TermIndex {
        self.index.get_or_init(|| TermIndex::build(&self.registry))
    }

    /// Whether the index has been built yet.
    pub fn is_index_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// Discard the cached index; the next call rebuilds it.
    pub fn reset(&mut self) {
        if self.index.take().is_some() {
            tracing::debug!("term index discarded");
        }
    }

    /// Rank the concepts that match `input`.
    ///
    /// Returns at most `2 × max_suggestions` matches, best first.  Never
    /// fails: unmatched input yields an empty list.
    pub fn find_matches(&self, input: &str, preferred: Option<Locale>) -> Vec<TaxonomyMatch> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return Vec::new();
        }
        let tokens = words(&normalized);
        let ctx = MatchContext {
            registry: &self.registry,
            index: self.index(),
            config: &self.config,
            normalized: &normalized,
            words: &tokens,
            preferred,
        };

        let mut candidates = CandidateSet::new();
        for strategy in &self.strategies {
            let stage = strategy.stage();
            if stage.is_fallback()
                && should_short_circuit(&candidates, self.config.short_circuit_threshold)
            {
                tracing::debug!(stage = ?stage, "stage skipped, confident match found");
                continue;
            }
            strategy.run(&ctx, &mut candidates);
            tracing::debug!(stage = ?stage, candidates = candidates.len(), "match stage complete");
        }

        candidates
            .into_ranked(&self.registry, self.config.result_limit())
            .into_iter()
            .filter_map(|candidate| {
                let node = self.registry.concepts().get(candidate.position)?.clone();
                Some(TaxonomyMatch {
                    node_id: node.id.clone(),
                    similarity: candidate.similarity,
                    node,
                    matched_term: candidate.matched_term,
                    matched_locale: candidate.matched_locale,
                    stage: candidate.stage,
                })
            })
            .collect()
    }

    /// Every modifier that fires on `input`, in registry order.
    ///
    /// Each modifier reports the first pattern that fires, scanning
    /// `[preferred, base]`.
    pub fn detect_modifiers(&self, input: &str, preferred: Option<Locale>) -> Vec<ActiveModifier> {
        let normalized = normalize(input);
        let chain = fallback_chain(preferred);
        let index = self.index();

        index
            .modifiers()
            .iter()
            .zip(self.registry.modifiers())
            .filter_map(|(compiled, node)| {
                let (locale, pattern, captured) = compiled.detect(&normalized, &chain)?;
                tracing::debug!(modifier = %node.id, pattern = %pattern, captured = ?captured, "modifier detected");
                Some(ActiveModifier {
                    id: node.id.clone(),
                    category: node.category,
                    captured_value: captured,
                    patch: node.resolve_patch(captured),
                    matched_pattern: pattern.to_string(),
                    locale,
                })
            })
            .collect()
    }

    /// Run a concept's parameter extractors against the raw input.
    ///
    /// Unknown concepts yield no parameters.
    pub fn extract_parameters(
        &self,
        input: &str,
        concept_id: &str,
        preferred: Option<Locale>,
    ) -> Params {
        let Some(position) = self.registry.position(concept_id) else {
            return Params::new();
        };
        let chain = fallback_chain(preferred);
        extract_all(self.index().extractors(position), input, &chain)
    }

    /// Guess the locale of `input`.
    pub fn detect_locale(&self, input: &str) -> Locale {
        locale_detect::detect_locale(input)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stages: Vec<MatchStage> = self.strategies.iter().map(|s| s.stage()).collect();
        f.debug_struct("Matcher")
            .field("concepts", &self.registry.len())
            .field("config", &self.config)
            .field("index_built", &self.is_index_built())
            .field("stages", &stages)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::strategy::KeywordStrategy;

    #[test]
    fn index_is_built_lazily_and_reset() {
        let mut matcher = Matcher::builtin();
        assert!(!matcher.is_index_built());
        matcher.find_matches("rotate", Some(Locale::En));
        assert!(matcher.is_index_built());
        matcher.reset();
        assert!(!matcher.is_index_built());
    }

    #[test]
    fn verbatim_phrase_scores_high() {
        let matcher = Matcher::builtin();
        let matches = matcher.find_matches("draw a circle", Some(Locale::En));
        assert_eq!(matches[0].node_id, "create_circle");
        assert!(matches[0].similarity >= 0.95);
        assert_eq!(matches[0].stage, MatchStage::Phrase);
    }

    #[test]
    fn keyword_stage_adds_the_locale_bonus() {
        let matcher = Matcher::builtin().with_strategies(vec![Box::new(KeywordStrategy)]);
        let preferred = matcher.find_matches("rotate", Some(Locale::En));
        assert_eq!(preferred[0].node_id, "rotate");
        assert_eq!(preferred[0].stage, MatchStage::Keyword);
        assert!((preferred[0].similarity - 0.9).abs() < 1e-9);

        let other = matcher.find_matches("rotate", Some(Locale::Fr));
        assert!((other[0].similarity - 0.85).abs() < 1e-9);
    }

    #[test]
    fn single_word_term_scores_the_same_under_any_locale() {
        let matcher = Matcher::builtin();
        for locale in [Locale::En, Locale::Fr, Locale::De] {
            let matches = matcher.find_matches("rotate", Some(locale));
            assert_eq!(matches[0].node_id, "rotate");
            assert_eq!(matches[0].stage, MatchStage::Fuzzy);
            assert!((matches[0].similarity - 1.0).abs() < 1e-9, "{locale}");
        }
    }

    #[test]
    fn phrase_inside_a_longer_word_still_counts() {
        let matcher = Matcher::builtin();
        let matches = matcher.find_matches("draw a circles", Some(Locale::En));
        assert_eq!(matches[0].node_id, "create_circle");
        assert_eq!(matches[0].stage, MatchStage::Phrase);
        assert!(matches[0].similarity >= 0.95);
    }

    #[test]
    fn empty_input_has_no_matches() {
        let matcher = Matcher::builtin();
        assert!(matcher.find_matches("   ", None).is_empty());
    }

    #[test]
    fn result_count_is_bounded() {
        let matcher = Matcher::builtin();
        let matches = matcher.find_matches(
            "circle rectangle star line text rotate move orbit bounce pulse shake glow blur",
            Some(Locale::En),
        );
        assert!(matches.len() <= matcher.config().result_limit());
    }

    #[test]
    fn duration_modifier_captures_seconds() {
        let matcher = Matcher::builtin();
        let modifiers = matcher.detect_modifiers("rotate it for 3 seconds", Some(Locale::En));
        let duration = modifiers.iter().find(|m| m.id == "duration").unwrap();
        assert_eq!(duration.captured_value, Some(3.0));
        assert_eq!(duration.patch["duration"], json!(3000));
    }

    #[test]
    fn later_modifier_follows_registry_order() {
        let matcher = Matcher::builtin();
        let ids: Vec<String> = matcher
            .detect_modifiers("spin counterclockwise slowly", Some(Locale::En))
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["slow", "clockwise", "counterclockwise"]);
    }

    #[test]
    fn extracts_parameters_for_concept() {
        let matcher = Matcher::builtin();
        let params = matcher.extract_parameters("rotate 90 degrees", "rotate", Some(Locale::En));
        assert_eq!(params["angle"], json!(90));
        assert!(matcher.extract_parameters("rotate", "no_such_concept", None).is_empty());
    }
}
