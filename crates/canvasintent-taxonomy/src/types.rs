//! Taxonomy type definitions.
//!
//! A [`ConceptNode`] is a canonical intent (e.g. "orbital motion") with
//! multilingual surface forms and a mapping to a downstream canvas action.
//! A [`ModifierNode`] is an adjustment (timing, style, behavior) that patches
//! the parameters of whichever concept is matched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::TermTable;

/// Ordered parameter map handed to the downstream action.
pub type Params = BTreeMap<String, Value>;

// ---------------------------------------------------------------------------
// Concepts
// ---------------------------------------------------------------------------

/// The taxonomy branch a concept belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Motion,
    Transformation,
    Timing,
    Item,
    Background,
    Effect,
    Relation,
    Query,
    Export,
    Browser,
}

impl Category {
    /// The lowercase name used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Motion => "motion",
            Self::Transformation => "transformation",
            Self::Timing => "timing",
            Self::Item => "item",
            Self::Background => "background",
            Self::Effect => "effect",
            Self::Relation => "relation",
            Self::Query => "query",
            Self::Export => "export",
            Self::Browser => "browser",
        }
    }
}

/// A canonical intent node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptNode {
    /// Globally unique identifier (e.g. `create_circle`).
    pub id: String,

    /// Taxonomy branch.
    pub category: Category,

    /// Tie-breaker between equally similar matches; higher wins.
    #[serde(default)]
    pub priority: i32,

    /// How the concept maps onto a downstream action.
    pub tool_mapping: ToolMapping,

    /// Surface phrases per locale, in preference order.
    pub terms: TermTable,
}

impl ConceptNode {
    /// Create a concept with no terms, default params or extractors.
    pub fn new(id: impl Into<String>, category: Category, action_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            priority: 0,
            tool_mapping: ToolMapping {
                action_name: action_name.into(),
                default_params: Params::new(),
                parameter_extractors: Vec::new(),
            },
            terms: TermTable::new(),
        }
    }

    /// Set the tie-break priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the default parameters from a JSON object.
    ///
    /// Non-object values are ignored.
    pub fn with_defaults(mut self, defaults: Value) -> Self {
        if let Value::Object(map) = defaults {
            self.tool_mapping.default_params = map.into_iter().collect();
        }
        self
    }

    /// Append a parameter extractor.
    pub fn with_extractor(mut self, extractor: ParameterExtractor) -> Self {
        self.tool_mapping.parameter_extractors.push(extractor);
        self
    }

    /// Set the term table.
    pub fn with_terms(mut self, terms: TermTable) -> Self {
        self.terms = terms;
        self
    }

    /// The downstream action name.
    pub fn action_name(&self) -> &str {
        &self.tool_mapping.action_name
    }
}

/// Structural translation from a concept to a downstream operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolMapping {
    /// Name of the operation the canvas application understands.
    pub action_name: String,

    /// Parameters used when the input does not provide a value.
    #[serde(default)]
    pub default_params: Params,

    /// Regex extractors that pull parameter values out of the raw input.
    #[serde(default)]
    pub parameter_extractors: Vec<ParameterExtractor>,
}

// ---------------------------------------------------------------------------
// Parameter extraction
// ---------------------------------------------------------------------------

/// Locale-specific regex patterns for a single parameter.
///
/// Each pattern must contain exactly one capture group; the first group of
/// the first matching pattern becomes the parameter value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterExtractor {
    /// The parameter name the captured value is stored under.
    pub param: String,

    /// Regex patterns per locale, tried in declared order.
    pub patterns: TermTable,

    /// Conversion applied to the captured text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<ParamTransform>,
}

impl ParameterExtractor {
    /// Create an extractor with no patterns.
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            patterns: TermTable::new(),
            transform: None,
        }
    }

    /// Set the pattern table.
    pub fn with_patterns(mut self, patterns: TermTable) -> Self {
        self.patterns = patterns;
        self
    }

    /// Set the transform.
    pub fn with_transform(mut self, transform: ParamTransform) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// Conversion applied to a captured parameter string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamTransform {
    /// Parse as a whole number.
    Integer,
    /// Parse as a floating point number (`,` accepted as decimal mark).
    Number,
    /// Parse a percentage and divide by 100.
    Percentage,
    /// Parse seconds and convert to milliseconds.
    Milliseconds,
    /// Lowercase the captured text.
    Lowercase,
    /// Trim surrounding whitespace.
    Trim,
    /// Normalize a `#rgb` / `#rrggbb` literal to lowercase `#rrggbb`.
    HexColor,
}

impl ParamTransform {
    /// Apply the transform; `None` when the raw text does not convert.
    pub fn apply(self, raw: &str) -> Option<Value> {
        let raw = raw.trim();
        match self {
            Self::Integer => parse_number(raw).map(|n| Value::from(n.round() as i64)),
            Self::Number => parse_number(raw).map(number_value),
            Self::Percentage => parse_number(raw).map(|n| number_value(n / 100.0)),
            Self::Milliseconds => parse_number(raw).map(|n| number_value(n * 1000.0)),
            Self::Lowercase => Some(Value::String(raw.to_lowercase())),
            Self::Trim => (!raw.is_empty()).then(|| Value::String(raw.to_string())),
            Self::HexColor => normalize_hex(raw).map(Value::String),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Convert a number to JSON, using an integer when it has no fraction.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

/// Normalize `#rgb` / `#rrggbb` (with or without `#`) to lowercase `#rrggbb`.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let digits = raw.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits = digits.to_ascii_lowercase();
    match digits.len() {
        6 => Some(format!("#{digits}")),
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            Some(format!("#{expanded}"))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// The kind of adjustment a modifier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierCategory {
    Timing,
    Style,
    Behavior,
}

/// A non-action adjustment that patches the parameters of the matched
/// concept.
///
/// Term patterns may contain a single `*`, which stands for a captured
/// number (e.g. `for * seconds`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierNode {
    /// Unique identifier (e.g. `duration`).
    pub id: String,

    /// Kind of adjustment.
    pub category: ModifierCategory,

    /// Parameter patch merged into the recommendation when the modifier
    /// fires.
    pub modifications: BTreeMap<String, PatchValue>,

    /// Pattern strings per locale.
    pub terms: TermTable,
}

impl ModifierNode {
    /// Create a modifier with no modifications or terms.
    pub fn new(id: impl Into<String>, category: ModifierCategory) -> Self {
        Self {
            id: id.into(),
            category,
            modifications: BTreeMap::new(),
            terms: TermTable::new(),
        }
    }

    /// Add a patch entry.
    pub fn with_patch(mut self, param: impl Into<String>, value: PatchValue) -> Self {
        self.modifications.insert(param.into(), value);
        self
    }

    /// Set the term table.
    pub fn with_terms(mut self, terms: TermTable) -> Self {
        self.terms = terms;
        self
    }

    /// Resolve the patch against the captured number (if any).
    ///
    /// Entries that need a captured value are skipped when none was
    /// captured.
    pub fn resolve_patch(&self, captured: Option<f64>) -> Params {
        self.modifications
            .iter()
            .filter_map(|(param, value)| value.resolve(captured).map(|v| (param.clone(), v)))
            .collect()
    }
}

/// A single value in a modifier patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchValue {
    /// A constant value.
    Fixed(Value),
    /// The captured number multiplied by `scale`.
    Captured { scale: f64 },
}

impl PatchValue {
    /// Shorthand for a fixed value.
    pub fn fixed(value: impl Into<Value>) -> Self {
        Self::Fixed(value.into())
    }

    /// Shorthand for a captured value with a scale factor.
    pub fn captured(scale: f64) -> Self {
        Self::Captured { scale }
    }

    /// Resolve to a concrete JSON value.
    pub fn resolve(&self, captured: Option<f64>) -> Option<Value> {
        match self {
            Self::Fixed(value) => Some(value.clone()),
            Self::Captured { scale } => captured.map(|n| number_value(n * scale)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
