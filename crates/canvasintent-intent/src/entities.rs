//! Concept-independent entity extraction.
//!
//! [`extract_entities`] scans the raw input for colors, numbers, named
//! positions and quoted names.  Passes run in that order and may report
//! overlapping spans (the `000` inside `#000` is also a number);
//! [`resolve_overlaps`] reconciles them with a fixed precedence:
//! color > name > position > number.
//!
//! Spans are character offsets into the original input, end exclusive.

use std::sync::LazyLock;

use canvasintent_taxonomy::normalize_hex;
use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The kind of an extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Color,
    Number,
    Position,
    Name,
}

impl EntityKind {
    /// Higher wins when spans overlap.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Color => 3,
            Self::Name => 2,
            Self::Position => 1,
            Self::Number => 0,
        }
    }
}

/// The unit attached to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumberUnit {
    #[serde(rename = "px")]
    Pixels,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "deg")]
    Degrees,
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "none")]
    None,
}

impl NumberUnit {
    fn from_suffix(suffix: &str) -> Self {
        match suffix.to_ascii_lowercase().as_str() {
            "px" | "pixel" | "pixels" => Self::Pixels,
            "%" => Self::Percent,
            "°" | "deg" | "degree" | "degrees" => Self::Degrees,
            "ms" | "millisecond" | "milliseconds" => Self::Milliseconds,
            "s" | "sec" | "secs" | "second" | "seconds" => Self::Seconds,
            _ => Self::None,
        }
    }
}

/// A named canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// Map a position keyword (any case, `-` or space separated) to its
    /// canonical position.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let key: String = keyword
            .to_lowercase()
            .split(|c: char| c == '-' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        let position = match key.as_str() {
            "center" | "centre" | "middle" => Self::Center,
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            "top-left" | "upper-left" => Self::TopLeft,
            "top-right" | "upper-right" => Self::TopRight,
            "bottom-left" | "lower-left" => Self::BottomLeft,
            "bottom-right" | "lower-right" => Self::BottomRight,
            _ => return None,
        };
        Some(position)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

/// The normalized value of an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityValue {
    /// Lowercase `#rrggbb`.
    Color(String),
    Number { value: f64, unit: NumberUnit },
    Position(Position),
    /// The quoted text, trimmed.
    Name(String),
}

/// Character offsets, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One entity found in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedEntity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// The matched text as written.
    pub raw_value: String,
    pub normalized_value: EntityValue,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// Named colors recognised as whole words.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("red", "#ff0000"),
    ("green", "#00ff00"),
    ("blue", "#0000ff"),
    ("yellow", "#ffff00"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("pink", "#ffc0cb"),
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("brown", "#a52a2a"),
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("gold", "#ffd700"),
    ("silver", "#c0c0c0"),
    ("navy", "#000080"),
    ("teal", "#008080"),
    ("lime", "#00ff00"),
    ("violet", "#ee82ee"),
    ("indigo", "#4b0082"),
    ("maroon", "#800000"),
    ("olive", "#808000"),
    ("coral", "#ff7f50"),
    ("turquoise", "#40e0d0"),
    ("crimson", "#dc143c"),
    ("beige", "#f5f5dc"),
    // es / pt / it / fr
    ("rojo", "#ff0000"),
    ("azul", "#0000ff"),
    ("verde", "#00ff00"),
    ("amarillo", "#ffff00"),
    ("negro", "#000000"),
    ("blanco", "#ffffff"),
    ("vermelho", "#ff0000"),
    ("amarelo", "#ffff00"),
    ("preto", "#000000"),
    ("branco", "#ffffff"),
    ("rosso", "#ff0000"),
    ("giallo", "#ffff00"),
    ("nero", "#000000"),
    ("bianco", "#ffffff"),
    ("rouge", "#ff0000"),
    ("bleu", "#0000ff"),
    ("vert", "#00ff00"),
    ("jaune", "#ffff00"),
    ("noir", "#000000"),
    ("blanc", "#ffffff"),
];

/// Color names in scripts without word spaces; matched by containment.
const UNSPACED_COLORS: &[(&str, &str)] = &[
    ("红色", "#ff0000"),
    ("蓝色", "#0000ff"),
    ("绿色", "#00ff00"),
    ("黄色", "#ffff00"),
    ("黑色", "#000000"),
    ("白色", "#ffffff"),
    ("紅色", "#ff0000"),
    ("藍色", "#0000ff"),
    ("綠色", "#00ff00"),
    ("赤い", "#ff0000"),
    ("青い", "#0000ff"),
    ("黄色い", "#ffff00"),
    ("빨간", "#ff0000"),
    ("파란", "#0000ff"),
];

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").expect("hex color pattern")
});

static RGB_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\brgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*\d*\.?\d+\s*)?\)",
    )
    .expect("rgb color pattern")
});

static NAMED_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<String> = NAMED_COLORS.iter().map(|(name, _)| regex::escape(name)).collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", names.join("|"))).expect("named color pattern")
});

static UNSPACED_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = UNSPACED_COLORS.iter().map(|(name, _)| *name).collect();
    // Longest first so `黄色い` wins over `黄色`.
    names.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));
    let escaped: Vec<String> = names.iter().map(|name| regex::escape(name)).collect();
    Regex::new(&escaped.join("|")).expect("unspaced color pattern")
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d+(?:\.\d+)?)(?:\s*(px|pixels?|ms|milliseconds?|deg|degrees?|s|secs?|seconds?)\b|\s*(%|°))?",
    )
    .expect("number pattern")
});

static POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:top|upper|bottom|lower)[- ](?:left|right)|center|centre|middle|top|bottom|left|right)\b",
    )
    .expect("position pattern")
});

/// Opening and closing quote pairs.  Single quotes only open after
/// whitespace, an opening bracket or the start of input, so apostrophes
/// in `what's` do not start a name.
static QUOTED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#""([^"\n]+)""#,
        r"(?:^|[\s(\[])'([^'\n]+)'",
        r"“([^”\n]+)”",
        r"‘([^’\n]+)’",
        r"«([^»\n]+)»",
        r"「([^」\n]+)」",
        r"『([^』\n]+)』",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("quote pattern"))
    .collect()
});

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Scan `input` for every entity kind.  Overlaps are kept.
pub fn extract_entities(input: &str) -> Vec<ExtractedEntity> {
    let offsets = CharOffsets::new(input);
    let mut entities = Vec::new();

    for m in HEX_COLOR.find_iter(input) {
        if let Some(hex) = normalize_hex(m.as_str()) {
            entities.push(offsets.entity(EntityKind::Color, m.start(), m.end(), input, EntityValue::Color(hex)));
        }
    }

    for caps in RGB_COLOR.captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        let channels: Vec<u8> = (1..=3)
            .filter_map(|i| caps.get(i)?.as_str().parse::<u32>().ok())
            .map(|c| c.min(255) as u8)
            .collect();
        if let [r, g, b] = channels[..] {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            entities.push(offsets.entity(EntityKind::Color, whole.start(), whole.end(), input, EntityValue::Color(hex)));
        }
    }

    for m in NAMED_COLOR.find_iter(input) {
        if let Some(hex) = named_color_hex(NAMED_COLORS, m.as_str()) {
            entities.push(offsets.entity(EntityKind::Color, m.start(), m.end(), input, EntityValue::Color(hex)));
        }
    }
    for m in UNSPACED_COLOR.find_iter(input) {
        if let Some(hex) = named_color_hex(UNSPACED_COLORS, m.as_str()) {
            entities.push(offsets.entity(EntityKind::Color, m.start(), m.end(), input, EntityValue::Color(hex)));
        }
    }

    for caps in NUMBER.captures_iter(input) {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Ok(value) = digits.as_str().parse::<f64>() else {
            continue;
        };
        let unit = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or(NumberUnit::None, |suffix| NumberUnit::from_suffix(suffix.as_str()));
        entities.push(offsets.entity(
            EntityKind::Number,
            whole.start(),
            whole.end(),
            input,
            EntityValue::Number { value, unit },
        ));
    }

    for m in POSITION.find_iter(input) {
        if let Some(position) = Position::from_keyword(m.as_str()) {
            entities.push(offsets.entity(EntityKind::Position, m.start(), m.end(), input, EntityValue::Position(position)));
        }
    }

    for pattern in QUOTED.iter() {
        for caps in pattern.captures_iter(input) {
            let Some(inner) = caps.get(1) else { continue };
            let text = inner.as_str().trim();
            if text.is_empty() {
                continue;
            }
            // Extend the span over the quote characters on either side.
            let start = input[..inner.start()]
                .char_indices()
                .next_back()
                .map_or(inner.start(), |(i, _)| i);
            let end = input[inner.end()..]
                .chars()
                .next()
                .map_or(inner.end(), |c| inner.end() + c.len_utf8());
            entities.push(offsets.entity(EntityKind::Name, start, end, input, EntityValue::Name(text.to_string())));
        }
    }

    tracing::debug!(count = entities.len(), "entities extracted");
    entities
}

/// Drop entities that overlap a higher-precedence one.
///
/// Equal precedence keeps the earlier span.  The survivors are returned in
/// input order.
pub fn resolve_overlaps(entities: Vec<ExtractedEntity>) -> Vec<ExtractedEntity> {
    let mut ordered = entities;
    ordered.sort_by(|a, b| {
        b.kind
            .precedence()
            .cmp(&a.kind.precedence())
            .then_with(|| a.span.start.cmp(&b.span.start))
            .then_with(|| b.span.len().cmp(&a.span.len()))
    });

    let mut kept: Vec<ExtractedEntity> = Vec::with_capacity(ordered.len());
    for entity in ordered {
        if kept.iter().all(|k| !k.span.overlaps(&entity.span)) {
            kept.push(entity);
        }
    }
    kept.sort_by_key(|e| (e.span.start, e.span.end));
    kept
}

fn named_color_hex(table: &[(&str, &str)], matched: &str) -> Option<String> {
    let lowered = matched.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, hex)| hex.to_string())
}

/// Byte to character offset conversion for one input.
struct CharOffsets {
    /// Byte offset of every char boundary, plus the input length.
    boundaries: Vec<usize>,
}

impl CharOffsets {
    fn new(input: &str) -> Self {
        let mut boundaries: Vec<usize> = input.char_indices().map(|(i, _)| i).collect();
        boundaries.push(input.len());
        Self { boundaries }
    }

    fn char_offset(&self, byte: usize) -> usize {
        self.boundaries.partition_point(|&b| b < byte)
    }

    fn entity(
        &self,
        kind: EntityKind,
        start: usize,
        end: usize,
        input: &str,
        value: EntityValue,
    ) -> ExtractedEntity {
        ExtractedEntity {
            kind,
            raw_value: input[start..end].to_string(),
            normalized_value: value,
            span: Span {
                start: self.char_offset(start),
                end: self.char_offset(end),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
