//! Structured recovery payloads for failed or mismatched actions.
//!
//! [`IntentEngine::build_error_recovery`] turns an error category and
//! whatever context the caller has into an [`ErrorRecovery`]: a message, a
//! hint, concrete suggestions and, where an identifier is close to a known
//! one, a "did you mean".  Every function here is total: sparse context
//! produces a generic payload, never an error.

use std::fmt;
use std::str::FromStr;

use canvasintent_taxonomy::Locale;
use serde::{Deserialize, Serialize};

use crate::engine::IntentEngine;

/// Available items echoed back in a payload.
const MAX_AVAILABLE_ITEMS: usize = 5;

/// Relation kinds understood by `create_relation`.
const RELATION_TYPES: &[&str] = &["group", "attach", "align"];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The closed set of error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    ItemNotFound,
    InvalidRelation,
    GeneratorNotFound,
    ToolMismatch,
    ValidationError,
    Other,
}

impl ErrorKind {
    /// The wire code, e.g. `ITEM_NOT_FOUND`.
    pub fn code(self) -> &'static str {
        match self {
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::InvalidRelation => "INVALID_RELATION",
            Self::GeneratorNotFound => "GENERATOR_NOT_FOUND",
            Self::ToolMismatch => "TOOL_MISMATCH",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::Other => "OTHER",
        }
    }

    /// Parse a code in any case with `_`, `-` or space separators.
    /// Unrecognised codes map to [`ErrorKind::Other`].
    pub fn from_code(code: &str) -> Self {
        let key: String = code
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        match key.as_str() {
            "ITEM_NOT_FOUND" => Self::ItemNotFound,
            "INVALID_RELATION" => Self::InvalidRelation,
            "GENERATOR_NOT_FOUND" => Self::GeneratorNotFound,
            "TOOL_MISMATCH" => Self::ToolMismatch,
            "VALIDATION_ERROR" => Self::ValidationError,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ErrorKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

/// What the caller knows about the failure.  Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryContext {
    /// The identifier that could not be resolved.
    pub failed_id: Option<String>,
    /// Identifiers that do exist.
    pub available_items: Vec<String>,
    /// The user's original request.
    pub user_input: Option<String>,
    /// The action that was attempted.
    pub attempted_action: Option<String>,
    /// Only `TOOL_MISMATCH` (matcher locale) and `OTHER` (display terms)
    /// read this; the identifier-based kinds are locale-independent.
    pub locale: Option<Locale>,
    /// The underlying error message, if any.
    pub message: Option<String>,
}

impl RecoveryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failed_id(mut self, id: impl Into<String>) -> Self {
        self.failed_id = Some(id.into());
        self
    }

    pub fn with_available_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_user_input(mut self, input: impl Into<String>) -> Self {
        self.user_input = Some(input.into());
        self
    }

    pub fn with_attempted_action(mut self, action: impl Into<String>) -> Self {
        self.attempted_action = Some(action.into());
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// A recovery payload ready for display or serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecovery {
    pub error: String,
    pub code: String,
    pub hint: String,
    pub suggestions: Vec<String>,
    /// At most five of the caller's available items.
    pub available_items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_you_mean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

// ---------------------------------------------------------------------------
// Building payloads
// ---------------------------------------------------------------------------

impl IntentEngine {
    /// Build the recovery payload for `kind`.
    pub fn build_error_recovery(&self, kind: ErrorKind, context: &RecoveryContext) -> ErrorRecovery {
        let cutoff = self.config.did_you_mean_distance;
        let available: Vec<String> = context
            .available_items
            .iter()
            .take(MAX_AVAILABLE_ITEMS)
            .cloned()
            .collect();
        let mut recovery = ErrorRecovery {
            error: String::new(),
            code: kind.code().to_string(),
            hint: String::new(),
            suggestions: Vec::new(),
            available_items: available.clone(),
            did_you_mean: None,
            example: None,
        };

        match kind {
            ErrorKind::ItemNotFound => {
                recovery.error = match &context.failed_id {
                    Some(id) => format!("Item \"{id}\" was not found on the canvas"),
                    None => "The requested item was not found on the canvas".into(),
                };
                recovery.hint = "Check the item id; list_items shows what is on the canvas.".into();
                recovery.did_you_mean = context
                    .failed_id
                    .as_deref()
                    .and_then(|id| closest_match(id, &context.available_items, cutoff));
                if let Some(candidate) = &recovery.did_you_mean {
                    recovery.suggestions.push(format!("Use \"{candidate}\" instead"));
                }
                if available.is_empty() {
                    recovery.suggestions.push("Create an item first, then refer to it by id".into());
                } else {
                    recovery.suggestions.push("Pick one of the available items".into());
                }
                recovery.suggestions.push("Run list_items to see every item id".into());

                let target = recovery
                    .did_you_mean
                    .as_deref()
                    .or_else(|| available.first().map(String::as_str));
                recovery.example = target.map(|target| {
                    let action = context.attempted_action.as_deref().unwrap_or("animate_rotate");
                    format!(r#"{action} {{"target": "{target}"}}"#)
                });
            }

            ErrorKind::InvalidRelation => {
                recovery.error = match (&context.attempted_action, &context.failed_id) {
                    (_, Some(id)) => format!("Cannot create a relation with \"{id}\""),
                    (Some(action), None) => format!("Relation \"{action}\" is not valid"),
                    (None, None) => "The relation could not be created".into(),
                };
                recovery.hint = format!(
                    "Relations need two existing items and a type ({}).",
                    RELATION_TYPES.join(", ")
                );
                recovery.did_you_mean = context
                    .failed_id
                    .as_deref()
                    .and_then(|id| closest_match(id, &context.available_items, cutoff));
                recovery.suggestions = vec![
                    "Make sure both the source and the target exist".into(),
                    "An item cannot be related to itself".into(),
                    format!("Use one of the relation types: {}", RELATION_TYPES.join(", ")),
                ];
                let (source, target) = match available.as_slice() {
                    [a, b, ..] => (a.as_str(), b.as_str()),
                    _ => ("item_1", "item_2"),
                };
                recovery.example = Some(format!(
                    r#"create_relation {{"type": "attach", "source": "{source}", "target": "{target}"}}"#
                ));
            }

            ErrorKind::GeneratorNotFound => {
                recovery.error = match &context.failed_id {
                    Some(id) => format!("No generator named \"{id}\""),
                    None => "The requested generator does not exist".into(),
                };
                recovery.hint = "Generators are named after canvas actions.".into();
                let known: Vec<String> = if context.available_items.is_empty() {
                    self.registry()
                        .action_names()
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                } else {
                    context.available_items.clone()
                };
                recovery.did_you_mean = context
                    .failed_id
                    .as_deref()
                    .and_then(|id| closest_match(id, &known, cutoff));
                if let Some(candidate) = &recovery.did_you_mean {
                    recovery.suggestions.push(format!("Use the \"{candidate}\" generator"));
                }
                recovery.suggestions.push("Describe the action in words and let it be classified".into());
                recovery.available_items = known.into_iter().take(MAX_AVAILABLE_ITEMS).collect();
            }

            ErrorKind::ToolMismatch => {
                let attempted = context.attempted_action.as_deref().unwrap_or("the selected tool");
                recovery.error = format!("{attempted} does not match the request");
                recovery.hint = "Pick the tool whose action matches what the user asked for.".into();
                if let Some(input) = context.user_input.as_deref() {
                    let locale = context
                        .locale
                        .unwrap_or_else(|| self.matcher.detect_locale(input));
                    let better = self
                        .matcher
                        .find_matches(input, Some(locale))
                        .into_iter()
                        .find(|m| {
                            Some(m.node.action_name()) != context.attempted_action.as_deref()
                                && m.similarity > self.config.mismatch_threshold
                        });
                    if let Some(m) = better {
                        let action = m.node.action_name().to_string();
                        recovery
                            .suggestions
                            .push(format!("Use {action} instead of {attempted}"));
                        recovery.example = Some(format!(
                            "{action} {}",
                            serde_json::Value::Object(
                                m.node.tool_mapping.default_params.clone().into_iter().collect()
                            )
                        ));
                        recovery.did_you_mean = Some(action);
                    }
                }
                if recovery.did_you_mean.is_none() {
                    recovery.suggestions.push("Ask the user to clarify what they want".into());
                }
            }

            ErrorKind::ValidationError => {
                recovery.error = context
                    .message
                    .clone()
                    .unwrap_or_else(|| "The parameters are invalid".into());
                recovery.hint = "Check parameter names, types and ranges.".into();
                recovery.suggestions = vec![
                    "Numbers must be plain values without units".into(),
                    "Colors must be hex strings such as #ff0000".into(),
                ];
                recovery.example = context
                    .attempted_action
                    .as_deref()
                    .and_then(|action| self.registry().concepts_for_action(action).next())
                    .map(|concept| {
                        format!(
                            "{} {}",
                            concept.action_name(),
                            serde_json::Value::Object(
                                concept.tool_mapping.default_params.clone().into_iter().collect()
                            )
                        )
                    });
            }

            ErrorKind::Other => {
                recovery.error = context
                    .message
                    .clone()
                    .unwrap_or_else(|| "Something went wrong".into());
                recovery.hint = "Try rephrasing the request.".into();
                let locale = context.locale;
                recovery.suggestions = self
                    .config
                    .fallback_suggestions
                    .iter()
                    .filter_map(|id| self.registry().concept(id))
                    .filter_map(|concept| concept.terms.first_term(locale))
                    .map(|term| format!("Try \"{term}\""))
                    .collect();
            }
        }

        tracing::debug!(
            code = %recovery.code,
            did_you_mean = ?recovery.did_you_mean,
            "error recovery built"
        );
        recovery
    }
}

/// The candidate nearest to `target` by case-insensitive edit distance,
/// if within `max_distance`.  Ties keep the earlier candidate.
pub fn closest_match(target: &str, candidates: &[String], max_distance: usize) -> Option<String> {
    let target = target.to_lowercase();
    let mut best: Option<(usize, &String)> = None;
    for candidate in candidates {
        let distance = strsim::levenshtein(&target, &candidate.to_lowercase());
        if distance > max_distance {
            continue;
        }
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, candidate));
        }
    }
    best.map(|(_, candidate)| candidate.clone())
}

/// Render a payload as flat, ordered text.
pub fn format_rich_error(recovery: &ErrorRecovery) -> String {
    let mut lines = vec![
        format!("Error: {}", recovery.error),
        format!("Code: {}", recovery.code),
    ];
    if let Some(candidate) = &recovery.did_you_mean {
        lines.push(format!("Did you mean: {candidate}?"));
    }
    if !recovery.hint.is_empty() {
        lines.push(format!("Hint: {}", recovery.hint));
    }
    if !recovery.suggestions.is_empty() {
        lines.push("Suggestions:".into());
        lines.extend(recovery.suggestions.iter().map(|s| format!("  - {s}")));
    }
    if !recovery.available_items.is_empty() {
        lines.push(format!("Available items: {}", recovery.available_items.join(", ")));
    }
    if let Some(example) = &recovery.example {
        lines.push(format!("Example: {example}"));
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
