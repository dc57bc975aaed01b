//! Derived term indices.
//!
//! [`TermIndex::build`] is a pure function of the registry: it walks every
//! concept once and produces
//!
//! - a keyword index (normalized word → entries, highest priority first),
//! - a phrase index (multi-word and unsegmented-script terms) compiled into
//!   an Aho-Corasick automaton,
//! - the compiled modifier patterns and parameter extractors.
//!
//! The index is never mutated after construction.

use std::collections::{HashMap, HashSet};

use aho_corasick::AhoCorasick;
use canvasintent_taxonomy::{Locale, Registry};
use serde::Serialize;

use crate::locale_detect::is_unsegmented;
use crate::modifier::CompiledModifier;
use crate::params::CompiledExtractor;

/// Words shorter than this (in characters) are never indexed.
pub const MIN_WORD_CHARS: usize = 2;

/// Closed-class words that are never indexed as keywords.
///
/// They still count toward word overlap when a term is scored.
const STOP_WORDS: &[&str] = &[
    // en
    "an", "the", "to", "at", "it", "its", "of", "on", "in", "into", "with", "for", "and", "or",
    "me", "my", "by", "as", "is", "be", "so", "this", "that", "then", "now", "some", "all",
    "please", "make", "create", "add", "draw", "set", "get", "go", "about", "after", "up",
    // es
    "el", "la", "los", "las", "un", "una", "de", "del", "en", "con", "por", "para", "que", "al",
    "lo", "crea", "dibuja", "añade", "haz", "pon", "favor",
    // fr
    "le", "les", "une", "des", "du", "et", "au", "aux", "avec", "pour", "sur", "dessine", "crée",
    "ajoute", "fais", "trace",
    // de
    "der", "die", "das", "den", "dem", "ein", "eine", "einen", "und", "mit", "zu", "im", "um",
    "zeichne", "erstelle", "füge", "mach", "bitte", "für", "als",
    // it
    "il", "gli", "uno", "di", "per", "disegna", "aggiungi", "fai", "intorno",
    // pt
    "os", "um", "uma", "do", "da", "com", "em", "desenhe", "crie", "adicione", "faça",
    // nl
    "het", "een", "teken", "maak", "voeg",
    // ru / uk
    "на", "нарисуй", "создай", "намалюй",
];

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Lowercase, trim and collapse internal whitespace.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip leading and trailing punctuation from a single word.
pub fn keyword_form(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

/// The keyword forms of every whitespace token, including stop words.
pub fn words(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(keyword_form)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a word is on the stop list.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Whether a word is long enough and meaningful enough to index.
pub fn is_indexable(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_CHARS && !is_stop_word(word)
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One term of one concept, as stored in the keyword or phrase index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// The normalized term.
    pub term: String,
    pub locale: Locale,
    pub concept_id: String,
    pub priority: i32,
    /// Registry position of the concept, the final ranking tie-breaker.
    pub position: usize,
}

/// All entries sharing one normalized phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseGroup {
    pub phrase: String,
    pub entries: Vec<IndexEntry>,
}

// ---------------------------------------------------------------------------
// TermIndex
// ---------------------------------------------------------------------------

/// Read-only lookup structures derived from a [`Registry`].
#[derive(Debug)]
pub struct TermIndex {
    keywords: HashMap<String, Vec<IndexEntry>>,
    phrases: Vec<PhraseGroup>,
    automaton: Option<AhoCorasick>,
    modifiers: Vec<CompiledModifier>,
    extractors: Vec<Vec<CompiledExtractor>>,
}

impl TermIndex {
    /// Build every index from the registry.
    pub fn build(registry: &Registry) -> Self {
        let mut keywords: HashMap<String, Vec<IndexEntry>> = HashMap::new();
        let mut phrases: Vec<PhraseGroup> = Vec::new();
        let mut phrase_slots: HashMap<String, usize> = HashMap::new();

        for (position, concept) in registry.concepts().iter().enumerate() {
            for (locale, terms) in concept.terms.iter() {
                for term in terms {
                    let normalized = normalize(term);
                    if normalized.is_empty() {
                        continue;
                    }
                    let entry = IndexEntry {
                        term: normalized.clone(),
                        locale,
                        concept_id: concept.id.clone(),
                        priority: concept.priority,
                        position,
                    };

                    let mut seen = HashSet::new();
                    for word in words(&normalized) {
                        if is_indexable(&word) && seen.insert(word.clone()) {
                            keywords.entry(word).or_default().push(entry.clone());
                        }
                    }

                    let unsegmented = normalized.chars().any(is_unsegmented);
                    let multi_word = normalized.contains(' ');
                    let long_enough = normalized.chars().count() >= MIN_WORD_CHARS;
                    if (multi_word || unsegmented) && long_enough {
                        let slot = *phrase_slots.entry(normalized.clone()).or_insert_with(|| {
                            phrases.push(PhraseGroup {
                                phrase: normalized.clone(),
                                entries: Vec::new(),
                            });
                            phrases.len() - 1
                        });
                        phrases[slot].entries.push(entry);
                    }
                }
            }
        }

        // Stable sort keeps registry order among equal priorities.
        for entries in keywords.values_mut() {
            entries.sort_by(|a, b| b.priority.cmp(&a.priority));
        }

        let automaton = build_automaton(&phrases);

        let modifiers = registry
            .modifiers()
            .iter()
            .map(CompiledModifier::compile)
            .collect();

        let extractors = registry
            .concepts()
            .iter()
            .map(|concept| {
                concept
                    .tool_mapping
                    .parameter_extractors
                    .iter()
                    .map(|extractor| CompiledExtractor::compile(&concept.id, extractor))
                    .collect()
            })
            .collect();

        let index = Self {
            keywords,
            phrases,
            automaton,
            modifiers,
            extractors,
        };
        tracing::info!(
            keywords = index.keywords.len(),
            phrases = index.phrases.len(),
            modifiers = index.modifiers.len(),
            automaton = index.automaton.is_some(),
            "term index built"
        );
        index
    }

    /// Entries for a keyword, highest priority first.
    pub fn keyword_entries(&self, word: &str) -> &[IndexEntry] {
        self.keywords.get(word).map(Vec::as_slice).unwrap_or_default()
    }

    /// The number of distinct indexed keywords.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Phrase groups in first-seen order.
    pub fn phrases(&self) -> &[PhraseGroup] {
        &self.phrases
    }

    /// Indices of the phrase groups contained in `normalized` as plain
    /// substrings.
    ///
    /// Uses the Aho-Corasick automaton when it was built, a linear scan
    /// otherwise.  Each group is reported at most once.
    pub fn contained_phrases(&self, normalized: &str) -> Vec<usize> {
        let mut hits = Vec::new();
        let mut seen = HashSet::new();

        match &self.automaton {
            Some(ac) => {
                for mat in ac.find_overlapping_iter(normalized) {
                    let slot = mat.pattern().as_usize();
                    if seen.insert(slot) {
                        hits.push(slot);
                    }
                }
            }
            None => {
                for (slot, group) in self.phrases.iter().enumerate() {
                    if normalized.contains(group.phrase.as_str()) {
                        hits.push(slot);
                    }
                }
            }
        }

        hits.sort_unstable();
        hits
    }

    /// Whether the phrase automaton was built.
    pub fn has_automaton(&self) -> bool {
        self.automaton.is_some()
    }

    /// Compiled modifiers, in registry order.
    pub fn modifiers(&self) -> &[CompiledModifier] {
        &self.modifiers
    }

    /// Compiled extractors for the concept at `position`.
    pub fn extractors(&self, position: usize) -> &[CompiledExtractor] {
        self.extractors.get(position).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether two indices hold the same entries.
    pub fn same_entries(&self, other: &TermIndex) -> bool {
        self.keywords == other.keywords && self.phrases == other.phrases
    }
}

fn build_automaton(phrases: &[PhraseGroup]) -> Option<AhoCorasick> {
    if phrases.is_empty() {
        return None;
    }
    let patterns: Vec<&str> = phrases.iter().map(|g| g.phrase.as_str()).collect();
    match AhoCorasick::new(&patterns) {
        Ok(ac) => {
            tracing::trace!(count = patterns.len(), "phrase automaton built");
            Some(ac)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to build phrase automaton, using linear scan");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use canvasintent_taxonomy::{Category, ConceptNode, TermTable};

    use super::*;

    fn registry() -> Registry {
        Registry::new(
            vec![
                ConceptNode::new("create_circle", Category::Item, "create_circle")
                    .with_priority(1)
                    .with_terms(
                        TermTable::new()
                            .with(Locale::En, &["Circle", "draw a  circle", "x"])
                            .with(Locale::ZhCn, &["圆形"]),
                    ),
                ConceptNode::new("orbit", Category::Motion, "animate_orbit")
                    .with_priority(5)
                    .with_terms(TermTable::new().with(Locale::En, &["orbit", "circle around"])),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn normalization_collapses_whitespace() {
        assert_eq!(normalize("  Draw   A\tCircle "), "draw a circle");
        assert_eq!(keyword_form("circle!"), "circle");
        assert_eq!(keyword_form("what's"), "what's");
        assert_eq!(words("make a #ff0000 circle"), vec!["make", "a", "ff0000", "circle"]);
    }

    #[test]
    fn keywords_skip_short_and_stop_words() {
        let index = TermIndex::build(&registry());
        assert!(index.keyword_entries("x").is_empty());
        assert!(index.keyword_entries("draw").is_empty());
        assert!(index.keyword_entries("a").is_empty());
        assert_eq!(index.keyword_entries("orbit").len(), 1);
    }

    #[test]
    fn keyword_entries_sorted_by_priority() {
        let index = TermIndex::build(&registry());
        let entries = index.keyword_entries("circle");
        let ids: Vec<&str> = entries.iter().map(|e| e.concept_id.as_str()).collect();
        // orbit (priority 5) before create_circle (priority 1), which has two
        // terms containing the word.
        assert_eq!(ids, vec!["orbit", "create_circle", "create_circle"]);
    }

    #[test]
    fn phrases_include_multi_word_and_cjk_terms() {
        let index = TermIndex::build(&registry());
        let phrases: Vec<&str> = index.phrases().iter().map(|g| g.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["draw a circle", "圆形", "circle around"]);
        assert!(index.has_automaton());
    }

    #[test]
    fn contained_phrases_match_as_substrings() {
        let index = TermIndex::build(&registry());
        assert_eq!(index.contained_phrases("please draw a circle now"), vec![0]);
        assert_eq!(index.contained_phrases("redraw a circles"), vec![0]);
        assert_eq!(index.contained_phrases("画一个红色的圆形"), vec![1]);
        assert!(index.contained_phrases("draw the circle").is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let registry = registry();
        let first = TermIndex::build(&registry);
        let second = TermIndex::build(&registry);
        assert!(first.same_entries(&second));
    }

    #[test]
    fn builtin_registry_indexes_cleanly() {
        let index = TermIndex::build(&Registry::builtin());
        assert!(index.keyword_count() > 100);
        assert!(index.has_automaton());
        for (position, concept) in Registry::builtin().concepts().iter().enumerate() {
            assert_eq!(
                index.extractors(position).len(),
                concept.tool_mapping.parameter_extractors.len()
            );
            for extractor in index.extractors(position) {
                assert!(extractor.pattern_count() > 0, "{} has no usable patterns", concept.id);
            }
        }
        for modifier in index.modifiers() {
            assert!(!modifier.patterns.is_empty(), "{} has no usable patterns", modifier.id);
        }
    }
}
