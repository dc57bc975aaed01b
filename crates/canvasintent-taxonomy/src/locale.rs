//! Locales and per-locale term tables.
//!
//! Every concept carries surface forms for some subset of the supported
//! locales.  [`TermTable`] stores them in locale order and resolves lookups
//! through an explicit fallback chain: the preferred locale first, then the
//! base locale ([`Locale::BASE`]).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

macro_rules! locales {
    ($($variant:ident => $code:literal, $name:literal;)+) => {
        /// A supported language tag.
        ///
        /// The declaration order defines the iteration order of every
        /// [`TermTable`], so English comes first.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum Locale {
            $(
                #[doc = $name]
                $variant,
            )+
        }

        impl Locale {
            /// Every supported locale, in declaration order.
            pub const ALL: &'static [Locale] = &[$(Locale::$variant),+];

            /// The canonical tag (e.g. `en`, `zh-CN`).
            pub fn code(self) -> &'static str {
                match self {
                    $(Locale::$variant => $code,)+
                }
            }

            /// The English name of the language.
            pub fn name(self) -> &'static str {
                match self {
                    $(Locale::$variant => $name,)+
                }
            }
        }
    };
}

locales! {
    En => "en", "English";
    Es => "es", "Spanish";
    Fr => "fr", "French";
    De => "de", "German";
    It => "it", "Italian";
    Pt => "pt", "Portuguese";
    Nl => "nl", "Dutch";
    Ru => "ru", "Russian";
    Uk => "uk", "Ukrainian";
    Pl => "pl", "Polish";
    Cs => "cs", "Czech";
    Sk => "sk", "Slovak";
    Sv => "sv", "Swedish";
    Da => "da", "Danish";
    No => "no", "Norwegian";
    Fi => "fi", "Finnish";
    Tr => "tr", "Turkish";
    El => "el", "Greek";
    Hu => "hu", "Hungarian";
    Ro => "ro", "Romanian";
    Bg => "bg", "Bulgarian";
    Hr => "hr", "Croatian";
    Sr => "sr", "Serbian";
    Sl => "sl", "Slovenian";
    Lt => "lt", "Lithuanian";
    Lv => "lv", "Latvian";
    Et => "et", "Estonian";
    Vi => "vi", "Vietnamese";
    Id => "id", "Indonesian";
    Ms => "ms", "Malay";
    Tl => "tl", "Filipino";
    Sw => "sw", "Swahili";
    ZhCn => "zh-CN", "Chinese (Simplified)";
    ZhTw => "zh-TW", "Chinese (Traditional)";
    Ja => "ja", "Japanese";
    Ko => "ko", "Korean";
    Th => "th", "Thai";
    Ar => "ar", "Arabic";
    He => "he", "Hebrew";
    Fa => "fa", "Persian";
    Ur => "ur", "Urdu";
    Hi => "hi", "Hindi";
    Bn => "bn", "Bengali";
    Ta => "ta", "Tamil";
    Te => "te", "Telugu";
}

impl Locale {
    /// The base locale every node must provide terms for.
    pub const BASE: Locale = Locale::En;

    /// Parse a tag, returning `None` for unsupported locales.
    ///
    /// Matching is case-insensitive and accepts `_` as a separator.  Region
    /// subtags are dropped except for Chinese, where they select the script.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().replace('_', "-").to_lowercase();
        if tag.is_empty() {
            return None;
        }

        match tag.as_str() {
            "zh" | "zh-cn" | "zh-sg" | "zh-hans" | "zh-hans-cn" => return Some(Locale::ZhCn),
            "zh-tw" | "zh-hk" | "zh-mo" | "zh-hant" | "zh-hant-tw" => return Some(Locale::ZhTw),
            "iw" => return Some(Locale::He),
            "nb" | "nn" => return Some(Locale::No),
            "fil" => return Some(Locale::Tl),
            "in" => return Some(Locale::Id),
            _ => {}
        }

        let primary = tag.split('-').next().unwrap_or_default();
        Locale::ALL
            .iter()
            .copied()
            .find(|locale| locale.code().eq_ignore_ascii_case(primary))
    }

    /// Whether the locale's script separates words with spaces.
    pub fn is_space_delimited(self) -> bool {
        !matches!(self, Locale::ZhCn | Locale::ZhTw | Locale::Ja | Locale::Th)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s).ok_or_else(|| TaxonomyError::UnknownLocale { tag: s.to_string() })
    }
}

impl TryFrom<String> for Locale {
    type Error = TaxonomyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code().to_string()
    }
}

/// The ordered, deduplicated lookup chain for a preferred locale.
///
/// `None` yields only the base locale.
pub fn fallback_chain(preferred: Option<Locale>) -> Vec<Locale> {
    match preferred {
        Some(locale) if locale != Locale::BASE => vec![locale, Locale::BASE],
        _ => vec![Locale::BASE],
    }
}

// ---------------------------------------------------------------------------
// TermTable
// ---------------------------------------------------------------------------

/// Locale → ordered list of strings.
///
/// Locales that are absent or map to an empty list are treated the same:
/// [`TermTable::get`] returns `None` for both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermTable(BTreeMap<Locale, Vec<String>>);

impl TermTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used by the built-in registry data.
    pub fn with(mut self, locale: Locale, terms: &[&str]) -> Self {
        self.insert(locale, terms.iter().map(|t| (*t).to_string()).collect());
        self
    }

    /// Insert or replace the list for a locale.
    pub fn insert(&mut self, locale: Locale, terms: Vec<String>) {
        self.0.insert(locale, terms);
    }

    /// The terms for exactly this locale, if any.
    pub fn get(&self, locale: Locale) -> Option<&[String]> {
        self.0
            .get(&locale)
            .map(Vec::as_slice)
            .filter(|terms| !terms.is_empty())
    }

    /// Whether the table has a non-empty list for the locale.
    pub fn contains(&self, locale: Locale) -> bool {
        self.get(locale).is_some()
    }

    /// Iterate over every locale and its list, in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &[String])> {
        self.0.iter().map(|(locale, terms)| (*locale, terms.as_slice()))
    }

    /// The locales present in the table.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.0.keys().copied()
    }

    /// Resolve through the fallback chain, yielding each populated locale.
    pub fn resolve(&self, preferred: Option<Locale>) -> Vec<(Locale, &[String])> {
        fallback_chain(preferred)
            .into_iter()
            .filter_map(|locale| self.get(locale).map(|terms| (locale, terms)))
            .collect()
    }

    /// The first term of the first populated locale in the fallback chain.
    pub fn first_term(&self, preferred: Option<Locale>) -> Option<&str> {
        self.resolve(preferred)
            .first()
            .and_then(|(_, terms)| terms.first())
            .map(String::as_str)
    }

    /// Total number of terms across all locales.
    pub fn term_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Whether the table holds no terms at all.
    pub fn is_empty(&self) -> bool {
        self.term_count() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags_case_insensitively() {
        assert_eq!(Locale::from_tag("EN"), Some(Locale::En));
        assert_eq!(Locale::from_tag("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::from_tag("de_AT"), Some(Locale::De));
        assert_eq!(Locale::from_tag("zh"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_tag("zh-Hant"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_tag("zh-TW"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_tag("iw"), Some(Locale::He));
        assert_eq!(Locale::from_tag("xx"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn from_str_reports_unknown_tag() {
        let err = "klingon".parse::<Locale>().unwrap_err();
        assert!(matches!(err, TaxonomyError::UnknownLocale { .. }));
    }

    #[test]
    fn codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.code()), Some(*locale));
        }
    }

    #[test]
    fn fallback_chain_is_deduplicated() {
        assert_eq!(fallback_chain(None), vec![Locale::En]);
        assert_eq!(fallback_chain(Some(Locale::En)), vec![Locale::En]);
        assert_eq!(
            fallback_chain(Some(Locale::Fr)),
            vec![Locale::Fr, Locale::En]
        );
    }

    #[test]
    fn empty_lists_are_treated_as_missing() {
        let mut table = TermTable::new().with(Locale::En, &["rotate"]);
        table.insert(Locale::Es, Vec::new());

        assert!(table.contains(Locale::En));
        assert!(!table.contains(Locale::Es));
        assert!(table.get(Locale::Es).is_none());
    }

    #[test]
    fn resolve_prefers_requested_locale() {
        let table = TermTable::new()
            .with(Locale::En, &["rotate", "spin"])
            .with(Locale::De, &["drehe"]);

        assert_eq!(table.first_term(Some(Locale::De)), Some("drehe"));
        assert_eq!(table.first_term(Some(Locale::Ja)), Some("rotate"));
        assert_eq!(table.resolve(Some(Locale::De)).len(), 2);
    }

    #[test]
    fn serializes_with_locale_codes() {
        let table = TermTable::new().with(Locale::ZhCn, &["旋转"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"zh-CN":["旋转"]}"#);

        let back: TermTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
