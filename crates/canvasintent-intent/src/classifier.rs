//! Classification: one ranked, parameterized recommendation per input.
//!
//! [`IntentEngine::classify`] runs the matcher, modifier detection and the
//! entity extractor, then decides three things:
//!
//! 1. **Method**: how the best concept was found (`phrase`, `keyword`,
//!    `pattern`, or `unknown` when nothing matched).
//! 2. **Parameters**: concept defaults, overridden by extracted parameters,
//!    then modifier patches; entity-derived values only fill parameters the
//!    input did not set through the first two.
//! 3. **Clarification**: whether the caller should ask the user first, and
//!    the prompt to show.

use std::collections::BTreeSet;

use canvasintent_matcher::{ActiveModifier, MatchStage, TaxonomyMatch};
use canvasintent_taxonomy::{ConceptNode, Locale, Params, number_value};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::engine::IntentEngine;
use crate::entities::{EntityValue, ExtractedEntity, NumberUnit, extract_entities, resolve_overlaps};

/// The concept whose quoted names become its `text` parameter.
const TEXT_CONCEPT: &str = "create_text";

/// Candidates listed in an ambiguity prompt.
const PROMPT_CANDIDATES: usize = 3;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How the best concept was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    Phrase,
    Keyword,
    Pattern,
    Unknown,
}

impl ClassificationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phrase => "phrase",
            Self::Keyword => "keyword",
            Self::Pattern => "pattern",
            Self::Unknown => "unknown",
        }
    }
}

/// The matcher's verdict on one input.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub method: ClassificationMethod,
    /// Similarity of the best match, 0 when nothing matched.
    pub confidence: f64,
    pub matched_concept: Option<TaxonomyMatch>,
    pub active_modifiers: Vec<ActiveModifier>,
    /// Parameters captured by the concept's extractors.
    pub extracted_params: Params,
    pub locale: Locale,
    /// Concept ids to offer when nothing matched.
    pub suggestions: Vec<String>,
}

/// The action a downstream executor should run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedAction {
    pub action_name: String,
    pub params: Params,
}

/// A runner-up concept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub concept_id: String,
    pub action_name: String,
    pub confidence: f64,
    pub matched_term: String,
}

/// Everything [`IntentEngine::classify`] learned about one input.
#[derive(Debug, Clone, Serialize)]
pub struct IntentAnalysis {
    pub input: String,
    pub classification: ClassificationResult,
    /// Entities after overlap resolution, in input order.
    pub entities: Vec<ExtractedEntity>,
    pub recommended: Option<RecommendedAction>,
    pub alternatives: Vec<Alternative>,
    pub needs_clarification: bool,
    pub clarification: Option<String>,
}

/// A condensed view of [`IntentAnalysis`] for callers that only need the
/// action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub action: String,
    pub params: Params,
    pub confidence: f64,
    pub explanation: String,
}

/// Raised when a chosen tool disagrees with what the input asks for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolMismatchWarning {
    pub selected_action: String,
    pub suggested_action: String,
    pub suggested_concept: String,
    pub confidence: f64,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

impl IntentEngine {
    /// Classify `input`, detecting the locale when none is given.
    ///
    /// Never fails: unmatched input yields an `unknown` classification with
    /// fallback suggestions.
    pub fn classify(&self, input: &str, locale: Option<Locale>) -> IntentAnalysis {
        let locale = locale.unwrap_or_else(|| self.matcher.detect_locale(input));
        let matches = self.matcher.find_matches(input, Some(locale));
        let modifiers = self.matcher.detect_modifiers(input, Some(locale));
        let entities = resolve_overlaps(extract_entities(input));

        let Some(best) = matches.first() else {
            info!(locale = %locale, "no concept matched");
            return self.unknown(input, locale, modifiers, entities);
        };

        let method = match best.stage {
            MatchStage::Phrase => ClassificationMethod::Phrase,
            _ if best.similarity > self.config.keyword_threshold => ClassificationMethod::Keyword,
            _ => ClassificationMethod::Pattern,
        };
        let extracted = self.matcher.extract_parameters(input, &best.node_id, Some(locale));
        let params = self.merge_params(&best.node, &extracted, &modifiers, &entities);

        let alternatives: Vec<Alternative> = matches
            .iter()
            .skip(1)
            .take(self.config.matcher.max_suggestions)
            .map(|m| Alternative {
                concept_id: m.node_id.clone(),
                action_name: m.node.action_name().to_string(),
                confidence: m.similarity,
                matched_term: m.matched_term.clone(),
            })
            .collect();

        let low_confidence = best.similarity < self.config.matcher.min_confidence;
        let ambiguous = matches
            .get(1)
            .is_some_and(|second| self.config.ambiguity.is_ambiguous(best.similarity, second.similarity));
        let clarification = if ambiguous {
            Some(self.ambiguity_prompt(input, &matches, locale))
        } else if low_confidence {
            Some(self.did_you_mean_prompt(best, locale))
        } else {
            None
        };

        info!(
            concept = %best.node_id,
            method = method.as_str(),
            confidence = best.similarity,
            locale = %locale,
            modifiers = modifiers.len(),
            entities = entities.len(),
            ambiguous,
            "input classified"
        );

        IntentAnalysis {
            input: input.to_string(),
            recommended: Some(RecommendedAction {
                action_name: best.node.action_name().to_string(),
                params,
            }),
            classification: ClassificationResult {
                method,
                confidence: best.similarity,
                matched_concept: Some(best.clone()),
                active_modifiers: modifiers,
                extracted_params: extracted,
                locale,
                suggestions: Vec::new(),
            },
            entities,
            alternatives,
            needs_clarification: ambiguous || low_confidence,
            clarification,
        }
    }

    /// The recommended action with a one-line explanation, or `None` when
    /// nothing matched.
    pub fn get_recommendation(&self, input: &str, locale: Option<Locale>) -> Option<Recommendation> {
        let analysis = self.classify(input, locale);
        let IntentAnalysis {
            classification,
            recommended,
            ..
        } = analysis;
        let recommended = recommended?;
        let concept = classification.matched_concept.as_ref()?;

        let mut explanation = format!(
            "Matched \"{}\" ({}) by {} matching with {}% confidence",
            concept.matched_term,
            concept.matched_locale,
            classification.method.as_str(),
            percent(classification.confidence),
        );
        if !classification.active_modifiers.is_empty() {
            let ids: Vec<&str> = classification
                .active_modifiers
                .iter()
                .map(|m| m.id.as_str())
                .collect();
            explanation.push_str(&format!("; modifiers: {}", ids.join(", ")));
        }

        Some(Recommendation {
            action: recommended.action_name,
            params: recommended.params,
            confidence: classification.confidence,
            explanation,
        })
    }

    /// Check a chosen action against what `user_input` asks for.
    ///
    /// Returns a warning when the best match maps to a different action and
    /// scores above the mismatch threshold.
    pub fn validate_tool_selection(
        &self,
        action_name: &str,
        user_input: &str,
    ) -> Option<ToolMismatchWarning> {
        let locale = self.matcher.detect_locale(user_input);
        let best = self
            .matcher
            .find_matches(user_input, Some(locale))
            .into_iter()
            .next()?;
        let suggested = best.node.action_name();
        if suggested == action_name || best.similarity <= self.config.mismatch_threshold {
            return None;
        }

        tracing::warn!(
            selected = %action_name,
            suggested = %suggested,
            confidence = best.similarity,
            "tool selection does not match the request"
        );
        Some(ToolMismatchWarning {
            selected_action: action_name.to_string(),
            suggested_action: suggested.to_string(),
            suggested_concept: best.node_id.clone(),
            confidence: best.similarity,
            message: format!(
                "\"{action_name}\" does not fit this request; \"{suggested}\" matches \"{}\" with {}% confidence",
                best.matched_term,
                percent(best.similarity),
            ),
        })
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn unknown(
        &self,
        input: &str,
        locale: Locale,
        modifiers: Vec<ActiveModifier>,
        entities: Vec<ExtractedEntity>,
    ) -> IntentAnalysis {
        let examples: Vec<String> = self
            .config
            .fallback_suggestions
            .iter()
            .map(|id| self.concept_label(id, locale))
            .collect();
        let clarification = format!(
            "I couldn't match \"{}\" to a canvas action. Could you rephrase it? For example: {}.",
            input.trim(),
            examples.join(", ")
        );

        IntentAnalysis {
            input: input.to_string(),
            classification: ClassificationResult {
                method: ClassificationMethod::Unknown,
                confidence: 0.0,
                matched_concept: None,
                active_modifiers: modifiers,
                extracted_params: Params::new(),
                locale,
                suggestions: self.config.fallback_suggestions.clone(),
            },
            entities,
            recommended: None,
            alternatives: Vec::new(),
            needs_clarification: true,
            clarification: Some(clarification),
        }
    }

    /// Defaults, then extracted parameters, then modifier patches; entity
    /// values only fill what those left unset by the input.
    fn merge_params(
        &self,
        node: &ConceptNode,
        extracted: &Params,
        modifiers: &[ActiveModifier],
        entities: &[ExtractedEntity],
    ) -> Params {
        let mut params = node.tool_mapping.default_params.clone();
        let mut from_input: BTreeSet<String> = BTreeSet::new();

        for (key, value) in extracted {
            params.insert(key.clone(), value.clone());
            from_input.insert(key.clone());
        }
        for modifier in modifiers {
            for (key, value) in &modifier.patch {
                params.insert(key.clone(), value.clone());
                from_input.insert(key.clone());
            }
        }

        let mut from_entities: BTreeSet<String> = BTreeSet::new();
        for entity in entities {
            for (key, value) in self.entity_params(node, entity) {
                if from_input.contains(key) || from_entities.contains(key) {
                    continue;
                }
                debug!(param = key, value = %value, "parameter filled from entity");
                params.insert(key.to_string(), value);
                from_entities.insert(key.to_string());
            }
        }
        params
    }

    /// The parameters one entity can fill for `node`.
    fn entity_params(&self, node: &ConceptNode, entity: &ExtractedEntity) -> Vec<(&'static str, Value)> {
        match &entity.normalized_value {
            EntityValue::Color(hex) => vec![("fill", Value::String(hex.clone()))],
            EntityValue::Position(position) => {
                let (x, y) = self.config.canvas.resolve(*position);
                vec![("x", Value::from(x)), ("y", Value::from(y))]
            }
            EntityValue::Number { value, unit } => match unit {
                NumberUnit::Pixels | NumberUnit::None => {
                    let key = if is_circular(node) { "radius" } else { "size" };
                    vec![(key, number_value(*value))]
                }
                NumberUnit::Seconds => vec![("duration", number_value(value * 1000.0))],
                NumberUnit::Milliseconds => vec![("duration", number_value(*value))],
                NumberUnit::Degrees => vec![("angle", number_value(*value))],
                NumberUnit::Percent => Vec::new(),
            },
            EntityValue::Name(text) if node.id == TEXT_CONCEPT => {
                vec![("text", Value::String(text.clone()))]
            }
            EntityValue::Name(_) => Vec::new(),
        }
    }

    fn concept_label(&self, id: &str, locale: Locale) -> String {
        self.matcher
            .registry()
            .concept(id)
            .and_then(|c| c.terms.first_term(Some(locale)))
            .unwrap_or(id)
            .to_string()
    }

    fn did_you_mean_prompt(&self, best: &TaxonomyMatch, locale: Locale) -> String {
        format!(
            "Did you mean \"{}\"? ({}% confidence)",
            self.concept_label(&best.node_id, locale),
            percent(best.similarity)
        )
    }

    fn ambiguity_prompt(&self, input: &str, matches: &[TaxonomyMatch], locale: Locale) -> String {
        let mut prompt = format!("\"{}\" could mean several things:", input.trim());
        for (rank, m) in matches.iter().take(PROMPT_CANDIDATES).enumerate() {
            prompt.push_str(&format!(
                "\n{}. {} ({}%)",
                rank + 1,
                self.concept_label(&m.node_id, locale),
                percent(m.similarity)
            ));
        }
        prompt.push_str("\nWhich one did you mean?");
        prompt
    }
}

/// Concepts whose size is a radius.
fn is_circular(node: &ConceptNode) -> bool {
    node.id.contains("circle") || node.tool_mapping.default_params.contains_key("radius")
}

fn percent(similarity: f64) -> i64 {
    (similarity * 100.0).round() as i64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
