//! Match strategies and the shared candidate accumulator.
//!
//! | Stage | Technique | Score |
//! |-------|-----------|-------|
//! | 1 | Indexed phrase contained in the input (Aho-Corasick) | 0.95 (+ locale bonus) |
//! | 2 | Whitespace tokens looked up in the keyword index | 0.7 – 0.95 |
//! | 3 | Composite string similarity against every term | ≥ min confidence |
//!
//! Strategies run in order against one [`CandidateSet`], which keeps the
//! best score per concept.  Between stages the orchestrator evaluates
//! [`should_short_circuit`]; fallback stages are skipped once a confident
//! candidate exists.  Confidence is judged before locale bonuses, so the
//! preferred locale never decides which stages run.

use std::collections::{HashMap, HashSet};

use canvasintent_taxonomy::{Locale, Registry};
use serde::Serialize;

use crate::config::MatcherConfig;
use crate::index::{TermIndex, keyword_form, normalize};
use crate::similarity;

/// Keyword stage base score.
const KEYWORD_BASE: f64 = 0.7;
/// Bonus when the token is a whole word of the term.
const KEYWORD_WHOLE_WORD_BONUS: f64 = 0.1;
/// Per shared word between input and term.
const KEYWORD_OVERLAP_STEP: f64 = 0.05;
const KEYWORD_OVERLAP_CAP: f64 = 0.15;
const KEYWORD_MAX: f64 = 0.95;

/// Phrase stage base score.
const PHRASE_SCORE: f64 = 0.95;

// ---------------------------------------------------------------------------
// Stages and context
// ---------------------------------------------------------------------------

/// The strategy that produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    Phrase,
    Keyword,
    Fuzzy,
}

impl MatchStage {
    /// Fallback stages only run while no confident candidate exists.
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fuzzy)
    }
}

/// Everything a strategy needs to score one input.
pub struct MatchContext<'a> {
    pub registry: &'a Registry,
    pub index: &'a TermIndex,
    pub config: &'a MatcherConfig,
    /// Lowercased, whitespace-collapsed input.
    pub normalized: &'a str,
    /// Keyword forms of every input token, stop words included.
    pub words: &'a [String],
    pub preferred: Option<Locale>,
}

impl MatchContext<'_> {
    fn is_preferred(&self, locale: Locale) -> bool {
        self.preferred == Some(locale)
    }
}

// ---------------------------------------------------------------------------
// CandidateSet
// ---------------------------------------------------------------------------

/// The best score seen so far for one concept.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub position: usize,
    pub similarity: f64,
    /// `similarity` without the locale bonus.
    pub unbiased: f64,
    pub matched_term: String,
    pub matched_locale: Locale,
    pub stage: MatchStage,
}

/// Accumulator keyed by registry position, keeping the maximum similarity.
#[derive(Debug, Default)]
pub struct CandidateSet {
    best: HashMap<usize, Candidate>,
    best_unbiased: Option<f64>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score; only a strictly higher score replaces the current
    /// one, so the earliest stage wins ties.
    pub fn offer(&mut self, candidate: Candidate) {
        self.best_unbiased = Some(
            self.best_unbiased
                .map_or(candidate.unbiased, |best| best.max(candidate.unbiased)),
        );
        match self.best.get(&candidate.position) {
            Some(current) if current.similarity >= candidate.similarity => {}
            _ => {
                self.best.insert(candidate.position, candidate);
            }
        }
    }

    /// The highest similarity recorded so far.
    pub fn best_score(&self) -> Option<f64> {
        self.best.values().map(|c| c.similarity).reduce(f64::max)
    }

    /// The highest similarity offered so far, ignoring locale bonuses.
    pub fn best_unbiased_score(&self) -> Option<f64> {
        self.best_unbiased
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Rank by similarity desc, priority desc, registry order asc.
    pub fn into_ranked(self, registry: &Registry, limit: usize) -> Vec<Candidate> {
        let priority = |position: usize| {
            registry
                .concepts()
                .get(position)
                .map_or(i32::MIN, |c| c.priority)
        };

        let mut ranked: Vec<Candidate> = self.best.into_values().collect();
        ranked.sort_by(|a, b| {
            b.similarity
                .total_cmp(&a.similarity)
                .then_with(|| priority(b.position).cmp(&priority(a.position)))
                .then_with(|| a.position.cmp(&b.position))
        });
        ranked.truncate(limit);
        ranked
    }
}

/// Whether some candidate already scores above `threshold` before any
/// locale bonus.
pub fn should_short_circuit(candidates: &CandidateSet, threshold: f64) -> bool {
    candidates
        .best_unbiased_score()
        .is_some_and(|score| score > threshold)
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// One matching technique.
pub trait MatchStrategy: Send + Sync {
    fn stage(&self) -> MatchStage;

    /// Score the input, recording results in `candidates`.
    fn run(&self, ctx: &MatchContext<'_>, candidates: &mut CandidateSet);
}

/// Stage 1: indexed phrases contained in the input.
#[derive(Debug, Default)]
pub struct PhraseStrategy;

impl MatchStrategy for PhraseStrategy {
    fn stage(&self) -> MatchStage {
        MatchStage::Phrase
    }

    fn run(&self, ctx: &MatchContext<'_>, candidates: &mut CandidateSet) {
        let phrases = ctx.index.phrases();
        for slot in ctx.index.contained_phrases(ctx.normalized) {
            for entry in &phrases[slot].entries {
                let bonus = if ctx.is_preferred(entry.locale) {
                    ctx.config.phrase_locale_bonus
                } else {
                    0.0
                };
                candidates.offer(Candidate {
                    position: entry.position,
                    similarity: (PHRASE_SCORE + bonus).min(1.0),
                    unbiased: PHRASE_SCORE,
                    matched_term: entry.term.clone(),
                    matched_locale: entry.locale,
                    stage: MatchStage::Phrase,
                });
            }
        }
    }
}

/// Stage 2: single-word keyword lookup.
#[derive(Debug, Default)]
pub struct KeywordStrategy;

impl KeywordStrategy {
    /// Returns `(similarity, unbiased)`.
    fn score(
        ctx: &MatchContext<'_>,
        input_words: &HashSet<&str>,
        token: &str,
        term: &str,
        locale: Locale,
    ) -> (f64, f64) {
        let term_words: HashSet<&str> = term.split_whitespace().map(keyword_form).collect();

        let mut score = KEYWORD_BASE;
        if term_words.contains(token) {
            score += KEYWORD_WHOLE_WORD_BONUS;
        }
        let overlap = input_words.intersection(&term_words).count() as f64;
        score += (KEYWORD_OVERLAP_STEP * overlap).min(KEYWORD_OVERLAP_CAP);

        let unbiased = score.min(KEYWORD_MAX);
        if ctx.is_preferred(locale) {
            score += ctx.config.locale_bonus;
        }
        (score.min(KEYWORD_MAX), unbiased)
    }
}

impl MatchStrategy for KeywordStrategy {
    fn stage(&self) -> MatchStage {
        MatchStage::Keyword
    }

    fn run(&self, ctx: &MatchContext<'_>, candidates: &mut CandidateSet) {
        let input_words: HashSet<&str> = ctx.words.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        for token in ctx.words {
            if !seen.insert(token.as_str()) {
                continue;
            }
            for entry in ctx.index.keyword_entries(token) {
                let (similarity, unbiased) =
                    Self::score(ctx, &input_words, token, &entry.term, entry.locale);
                candidates.offer(Candidate {
                    position: entry.position,
                    similarity,
                    unbiased,
                    matched_term: entry.term.clone(),
                    matched_locale: entry.locale,
                    stage: MatchStage::Keyword,
                });
            }
        }
    }
}

/// Stage 3: composite similarity against every term of every locale.
#[derive(Debug, Default)]
pub struct FuzzyStrategy;

impl MatchStrategy for FuzzyStrategy {
    fn stage(&self) -> MatchStage {
        MatchStage::Fuzzy
    }

    fn run(&self, ctx: &MatchContext<'_>, candidates: &mut CandidateSet) {
        if ctx.normalized.is_empty() {
            return;
        }
        for (position, concept) in ctx.registry.concepts().iter().enumerate() {
            for (locale, terms) in concept.terms.iter() {
                for term in terms {
                    let term = normalize(term);
                    let unbiased = similarity::composite(ctx.normalized, &term);
                    let score = if ctx.is_preferred(locale) {
                        (unbiased + ctx.config.locale_bonus).min(1.0)
                    } else {
                        unbiased
                    };
                    if score >= ctx.config.min_confidence {
                        candidates.offer(Candidate {
                            position,
                            similarity: score,
                            unbiased,
                            matched_term: term,
                            matched_locale: locale,
                            stage: MatchStage::Fuzzy,
                        });
                    }
                }
            }
        }
    }
}

/// The default pipeline: phrase, keyword, fuzzy.
pub fn default_strategies() -> Vec<Box<dyn MatchStrategy>> {
    vec![
        Box::new(PhraseStrategy),
        Box::new(KeywordStrategy),
        Box::new(FuzzyStrategy),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(position: usize, similarity: f64, stage: MatchStage) -> Candidate {
        Candidate {
            position,
            similarity,
            unbiased: similarity,
            matched_term: format!("term-{position}"),
            matched_locale: Locale::En,
            stage,
        }
    }

    #[test]
    fn candidate_set_keeps_maximum() {
        let mut set = CandidateSet::new();
        set.offer(candidate(0, 0.7, MatchStage::Keyword));
        set.offer(candidate(0, 0.9, MatchStage::Keyword));
        set.offer(candidate(0, 0.8, MatchStage::Fuzzy));
        assert_eq!(set.len(), 1);
        assert_eq!(set.best_score(), Some(0.9));
    }

    #[test]
    fn ties_keep_the_earlier_stage() {
        let mut set = CandidateSet::new();
        set.offer(candidate(3, 0.9, MatchStage::Keyword));
        set.offer(candidate(3, 0.9, MatchStage::Fuzzy));
        let ranked = set.into_ranked(&Registry::builtin(), 10);
        assert_eq!(ranked[0].stage, MatchStage::Keyword);
    }

    #[test]
    fn short_circuit_is_strictly_above_threshold() {
        let mut set = CandidateSet::new();
        assert!(!should_short_circuit(&set, 0.85));
        set.offer(candidate(0, 0.85, MatchStage::Keyword));
        assert!(!should_short_circuit(&set, 0.85));
        set.offer(candidate(1, 0.9, MatchStage::Keyword));
        assert!(should_short_circuit(&set, 0.85));
    }

    #[test]
    fn locale_bonus_does_not_trigger_the_short_circuit() {
        let mut set = CandidateSet::new();
        set.offer(Candidate {
            unbiased: 0.85,
            ..candidate(0, 0.9, MatchStage::Keyword)
        });
        assert_eq!(set.best_score(), Some(0.9));
        assert_eq!(set.best_unbiased_score(), Some(0.85));
        assert!(!should_short_circuit(&set, 0.85));
    }

    #[test]
    fn unbiased_maximum_survives_a_lower_offer() {
        let mut set = CandidateSet::new();
        set.offer(candidate(0, 0.95, MatchStage::Phrase));
        set.offer(candidate(1, 0.7, MatchStage::Keyword));
        assert_eq!(set.best_unbiased_score(), Some(0.95));
        assert!(should_short_circuit(&set, 0.85));
    }

    #[test]
    fn ranking_uses_priority_then_registry_order() {
        let registry = Registry::builtin();
        let circle = registry.position("create_circle").unwrap();
        let rotate = registry.position("rotate").unwrap();
        let rect = registry.position("create_rect").unwrap();

        let mut set = CandidateSet::new();
        set.offer(candidate(rect, 0.9, MatchStage::Keyword));
        set.offer(candidate(circle, 0.9, MatchStage::Keyword));
        set.offer(candidate(rotate, 0.9, MatchStage::Keyword));

        let ranked: Vec<usize> = set
            .into_ranked(&registry, 10)
            .into_iter()
            .map(|c| c.position)
            .collect();
        // rotate has the higher priority; the two shapes share one and keep
        // registry order.
        assert_eq!(ranked, vec![rotate, circle, rect]);
    }

    #[test]
    fn ranking_truncates_to_limit() {
        let mut set = CandidateSet::new();
        for position in 0..8 {
            set.offer(candidate(position, 0.5 + position as f64 / 100.0, MatchStage::Fuzzy));
        }
        let ranked = set.into_ranked(&Registry::builtin(), 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].position, 7);
    }

    #[test]
    fn only_fuzzy_is_a_fallback() {
        assert!(MatchStage::Fuzzy.is_fallback());
        assert!(!MatchStage::Phrase.is_fallback());
        assert!(!MatchStage::Keyword.is_fallback());
    }
}
