//! Modifier pattern grammar and detection.
//!
//! A modifier term is either a literal phrase (`quickly`) or a template with
//! exactly one `*` placeholder standing for a number (`for * seconds`,
//! `*秒`).  Templates compile once into a case-insensitive regex whose
//! single capture group is the number.

use canvasintent_taxonomy::{Locale, ModifierCategory, ModifierNode, Params};
use regex::Regex;
use serde::Serialize;

use crate::error::{MatcherError, Result};
use crate::index::normalize;

const NUMBER_CAPTURE: &str = r"(\d+(?:[.,]\d+)?)";

// ---------------------------------------------------------------------------
// ModifierPattern
// ---------------------------------------------------------------------------

/// A parsed modifier term.
#[derive(Debug, Clone)]
pub enum ModifierPattern {
    /// Matched by substring containment on the normalized input.
    Literal(String),
    /// Literal prefix, one numeric placeholder, literal suffix.
    Numeric {
        prefix: String,
        suffix: String,
        regex: Regex,
    },
}

impl ModifierPattern {
    /// Parse a term into a pattern.
    ///
    /// Fails on blank terms, on more than one `*`, and on a bare `*` with
    /// nothing around it.
    pub fn parse(term: &str) -> Result<Self> {
        let normalized = normalize(term);
        let invalid = || MatcherError::InvalidWildcard {
            pattern: term.to_string(),
        };

        match normalized.matches('*').count() {
            0 if normalized.is_empty() => Err(invalid()),
            0 => Ok(Self::Literal(normalized)),
            1 => {
                let (prefix, suffix) = normalized.split_once('*').ok_or_else(invalid)?;
                let (prefix, suffix) = (prefix.trim(), suffix.trim());
                if prefix.is_empty() && suffix.is_empty() {
                    return Err(invalid());
                }
                let regex = Regex::new(&numeric_regex(prefix, suffix)).map_err(|e| {
                    MatcherError::InvalidPattern {
                        pattern: term.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(Self::Numeric {
                    prefix: prefix.to_string(),
                    suffix: suffix.to_string(),
                    regex,
                })
            }
            _ => Err(invalid()),
        }
    }

    /// Test the pattern against normalized input.
    ///
    /// Returns `None` when it does not fire, otherwise the captured number
    /// (always `None` for literals).
    pub fn find(&self, normalized: &str) -> Option<Option<f64>> {
        match self {
            Self::Literal(literal) => normalized.contains(literal.as_str()).then_some(None),
            Self::Numeric { regex, .. } => {
                let caps = regex.captures(normalized)?;
                let value = caps
                    .get(1)
                    .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok());
                Some(value)
            }
        }
    }
}

fn literal_regex(part: &str) -> String {
    regex::escape(part).replace(' ', r"\s+")
}

fn starts_with_word(part: &str) -> bool {
    part.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}

fn ends_with_word(part: &str) -> bool {
    part.chars().last().is_some_and(|c| c.is_ascii_alphanumeric())
}

fn numeric_regex(prefix: &str, suffix: &str) -> String {
    let mut pattern = String::from("(?i)");
    if !prefix.is_empty() {
        if starts_with_word(prefix) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&literal_regex(prefix));
        pattern.push_str(r"\s*");
    }
    pattern.push_str(NUMBER_CAPTURE);
    if !suffix.is_empty() {
        pattern.push_str(r"\s*");
        pattern.push_str(&literal_regex(suffix));
        if ends_with_word(suffix) {
            pattern.push_str(r"\b");
        }
    }
    pattern
}

// ---------------------------------------------------------------------------
// Compiled modifiers
// ---------------------------------------------------------------------------

/// A modifier with every locale's patterns compiled.
#[derive(Debug, Clone)]
pub struct CompiledModifier {
    pub id: String,
    pub patterns: Vec<(Locale, String, ModifierPattern)>,
}

impl CompiledModifier {
    /// Compile a modifier, skipping (and logging) patterns that fail.
    pub fn compile(node: &ModifierNode) -> Self {
        let mut patterns = Vec::new();
        for (locale, terms) in node.terms.iter() {
            for term in terms {
                match ModifierPattern::parse(term) {
                    Ok(pattern) => patterns.push((locale, term.clone(), pattern)),
                    Err(e) => {
                        tracing::warn!(modifier = %node.id, locale = %locale, error = %e, "modifier pattern skipped");
                    }
                }
            }
        }
        Self {
            id: node.id.clone(),
            patterns,
        }
    }

    /// The first pattern that fires, scanning locales in `chain` order.
    pub fn detect(&self, normalized: &str, chain: &[Locale]) -> Option<(Locale, &str, Option<f64>)> {
        chain.iter().find_map(|locale| {
            self.patterns
                .iter()
                .filter(|(pattern_locale, _, _)| pattern_locale == locale)
                .find_map(|(_, raw, pattern)| {
                    pattern
                        .find(normalized)
                        .map(|captured| (*locale, raw.as_str(), captured))
                })
        })
    }
}

/// A modifier that fired on the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveModifier {
    pub id: String,
    pub category: ModifierCategory,
    /// The number captured by a `*` placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_value: Option<f64>,
    /// The resolved parameter patch.
    pub patch: Params,
    pub matched_pattern: String,
    pub locale: Locale,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_patterns_use_containment() {
        let pattern = ModifierPattern::parse("Quickly").unwrap();
        assert_eq!(pattern.find("spin quickly"), Some(None));
        assert_eq!(pattern.find("spin slowly"), None);
    }

    #[test]
    fn numeric_pattern_captures_value() {
        let pattern = ModifierPattern::parse("for * seconds").unwrap();
        assert_eq!(pattern.find("rotate it for 3 seconds"), Some(Some(3.0)));
        assert_eq!(pattern.find("rotate for 2,5 seconds"), Some(Some(2.5)));
        assert_eq!(pattern.find("rotate for seconds"), None);
    }

    #[test]
    fn numeric_pattern_without_spaces() {
        let pattern = ModifierPattern::parse("*秒").unwrap();
        assert_eq!(pattern.find("旋转3秒"), Some(Some(3.0)));
    }

    #[test]
    fn suffix_respects_word_boundary() {
        let pattern = ModifierPattern::parse("* sec").unwrap();
        assert_eq!(pattern.find("5 sec"), Some(Some(5.0)));
        assert_eq!(pattern.find("5 second"), None);
    }

    #[test]
    fn malformed_wildcards_are_rejected() {
        assert!(matches!(
            ModifierPattern::parse("* and *"),
            Err(MatcherError::InvalidWildcard { .. })
        ));
        assert!(matches!(
            ModifierPattern::parse(" * "),
            Err(MatcherError::InvalidWildcard { .. })
        ));
        assert!(ModifierPattern::parse("   ").is_err());
    }

    #[test]
    fn compiled_modifier_follows_locale_chain() {
        use canvasintent_taxonomy::{PatchValue, TermTable};

        let node = ModifierNode::new("duration", ModifierCategory::Timing)
            .with_patch("duration", PatchValue::captured(1000.0))
            .with_terms(
                TermTable::new()
                    .with(Locale::En, &["* seconds", "* and * bad"])
                    .with(Locale::De, &["* sekunden"]),
            );
        let compiled = CompiledModifier::compile(&node);
        assert_eq!(compiled.patterns.len(), 2);

        let hit = compiled.detect("drehe 4 sekunden", &[Locale::De, Locale::En]);
        assert_eq!(hit, Some((Locale::De, "* sekunden", Some(4.0))));
        assert_eq!(compiled.detect("drehe 4 sekunden", &[Locale::En]), None);
    }
}
