//! Parameter extraction from raw input.

use canvasintent_taxonomy::{Locale, ParamTransform, ParameterExtractor, Params};
use regex::Regex;
use serde_json::Value;

use crate::error::MatcherError;

/// A [`ParameterExtractor`] with its regexes compiled.
#[derive(Debug, Clone)]
pub struct CompiledExtractor {
    pub param: String,
    pub transform: Option<ParamTransform>,
    patterns: Vec<(Locale, Regex)>,
}

impl CompiledExtractor {
    /// Compile every pattern of the extractor.
    ///
    /// Patterns that do not compile or lack a capture group are logged and
    /// dropped; the remaining ones still work.
    pub fn compile(concept_id: &str, extractor: &ParameterExtractor) -> Self {
        let mut patterns = Vec::new();
        for (locale, sources) in extractor.patterns.iter() {
            for source in sources {
                match compile_pattern(source) {
                    Ok(regex) => patterns.push((locale, regex)),
                    Err(e) => tracing::warn!(
                        concept = %concept_id,
                        param = %extractor.param,
                        error = %e,
                        "parameter pattern skipped"
                    ),
                }
            }
        }
        Self {
            param: extractor.param.clone(),
            transform: extractor.transform,
            patterns,
        }
    }

    /// The number of usable patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Extract the value from the first matching pattern, trying locales in
    /// `chain` order and patterns in declared order.
    ///
    /// A capture whose transform fails does not stop the search.
    pub fn extract(&self, input: &str, chain: &[Locale]) -> Option<Value> {
        chain.iter().find_map(|locale| {
            self.patterns
                .iter()
                .filter(|(pattern_locale, _)| pattern_locale == locale)
                .find_map(|(_, regex)| {
                    let raw = regex.captures(input)?.get(1)?.as_str();
                    match self.transform {
                        Some(transform) => transform.apply(raw),
                        None => {
                            let trimmed = raw.trim();
                            (!trimmed.is_empty()).then(|| Value::String(trimmed.to_string()))
                        }
                    }
                })
        })
    }
}

fn compile_pattern(source: &str) -> Result<Regex, MatcherError> {
    let regex = Regex::new(source).map_err(|e| MatcherError::InvalidPattern {
        pattern: source.to_string(),
        reason: e.to_string(),
    })?;
    // Group 0 is the whole match.
    if regex.captures_len() < 2 {
        return Err(MatcherError::MissingCaptureGroup {
            pattern: source.to_string(),
        });
    }
    Ok(regex)
}

/// Run a concept's extractors; the first extractor to produce a value for a
/// parameter wins.
pub fn extract_all(extractors: &[CompiledExtractor], input: &str, chain: &[Locale]) -> Params {
    let mut params = Params::new();
    for extractor in extractors {
        if params.contains_key(&extractor.param) {
            continue;
        }
        if let Some(value) = extractor.extract(input, chain) {
            params.insert(extractor.param.clone(), value);
        }
    }
    params
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
