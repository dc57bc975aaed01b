//! Heuristic locale detection.
//!
//! Scripts that identify a language outright are checked first, in a fixed
//! order (kana before Han, since Japanese mixes both).  Latin-script input
//! is scored on diacritics and function words.  The result only biases
//! scoring; it never filters candidates.

use canvasintent_taxonomy::Locale;

/// Characters that only occur in Traditional Chinese.
const TRADITIONAL_ONLY: &str = "圓畫轉動這個們說國對會來時為與學實點體電話網頁圖設計開關顏顯應變還當後邊從\
發現經過進麼樣讓處區義閉誰讀寫聽見門問間長東車馬鳥魚無層陰陽線條塊複製刪錄儲匯擷螢環繞彈躍漸暈組齊緩順\
針脈衝鏡傾縮搖紅綠藍黃";

const URDU_LETTERS: &str = "ٹڈڑںےۓ";
const PERSIAN_LETTERS: &str = "پچژگکی";
const UKRAINIAN_LETTERS: &str = "іїєґІЇЄҐ";

// ---------------------------------------------------------------------------
// Script classes
// ---------------------------------------------------------------------------

pub(crate) fn is_kana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}')
}

pub(crate) fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

pub(crate) fn is_han(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}')
}

pub(crate) fn is_thai(c: char) -> bool {
    matches!(c, '\u{0E00}'..='\u{0E7F}')
}

fn is_hebrew(c: char) -> bool {
    matches!(c, '\u{0590}'..='\u{05FF}')
}

fn is_arabic(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}'
    )
}

fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}')
}

fn is_greek(c: char) -> bool {
    matches!(c, '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}')
}

/// Characters from scripts written without spaces between words.
///
/// Terms in these scripts are matched by containment rather than by
/// whitespace tokens.
pub(crate) fn is_unsegmented(c: char) -> bool {
    is_han(c) || is_kana(c) || is_hangul(c) || is_thai(c)
}

// ---------------------------------------------------------------------------
// Latin scoring
// ---------------------------------------------------------------------------

struct LatinProfile {
    locale: Locale,
    /// Diacritics that point strongly at this language.
    strong: &'static str,
    /// Diacritics shared with neighbours.
    weak: &'static str,
    words: &'static [&'static str],
}

/// Profiles in tie-break order.
const LATIN_PROFILES: &[LatinProfile] = &[
    LatinProfile {
        locale: Locale::Es,
        strong: "ñ¿¡",
        weak: "áíóú",
        words: &["el", "los", "las", "una", "del", "por", "para", "con", "y", "al", "dibuja", "crea", "haz"],
    },
    LatinProfile {
        locale: Locale::Fr,
        strong: "çèêëîïœù",
        weak: "éàâô",
        words: &["le", "les", "une", "des", "du", "et", "avec", "pour", "sur", "au", "dessine", "fais"],
    },
    LatinProfile {
        locale: Locale::De,
        strong: "äöüß",
        weak: "",
        words: &["der", "die", "das", "den", "dem", "ein", "eine", "einen", "und", "mit", "zeichne", "bitte"],
    },
    LatinProfile {
        locale: Locale::It,
        strong: "ìò",
        weak: "àèé",
        words: &["il", "lo", "gli", "uno", "della", "di", "disegna", "fai", "crea"],
    },
    LatinProfile {
        locale: Locale::Pt,
        strong: "ãõ",
        weak: "çâêôá",
        words: &["um", "uma", "com", "os", "não", "você", "desenhe", "faça", "crie"],
    },
    LatinProfile {
        locale: Locale::Nl,
        strong: "",
        weak: "",
        words: &["het", "een", "en", "teken", "maak", "naar", "voeg"],
    },
];

fn latin_score(profile: &LatinProfile, lowered: &str, words: &[&str]) -> u32 {
    let strong = profile
        .strong
        .chars()
        .filter(|c| lowered.contains(*c))
        .count() as u32;
    let weak = profile.weak.chars().filter(|c| lowered.contains(*c)).count() as u32;
    let function_words = words
        .iter()
        .filter(|word| profile.words.contains(word))
        .count() as u32;
    strong * 3 + weak + function_words
}

fn detect_latin(input: &str) -> Locale {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let mut best = (Locale::En, 0u32);
    for profile in LATIN_PROFILES {
        let score = latin_score(profile, &lowered, &words);
        // Strictly greater keeps the earlier profile on ties.
        if score > best.1 {
            best = (profile.locale, score);
        }
    }
    best.0
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Guess the locale of a free-form command.
///
/// Falls back to English when nothing distinguishes the input.
pub fn detect_locale(input: &str) -> Locale {
    let has = |pred: fn(char) -> bool| input.chars().any(pred);

    let locale = if has(is_kana) {
        Locale::Ja
    } else if has(is_hangul) {
        Locale::Ko
    } else if has(is_han) {
        if input.chars().any(|c| TRADITIONAL_ONLY.contains(c)) {
            Locale::ZhTw
        } else {
            Locale::ZhCn
        }
    } else if has(is_thai) {
        Locale::Th
    } else if has(is_hebrew) {
        Locale::He
    } else if has(is_arabic) {
        if input.chars().any(|c| URDU_LETTERS.contains(c)) {
            Locale::Ur
        } else if input.chars().any(|c| PERSIAN_LETTERS.contains(c)) {
            Locale::Fa
        } else {
            Locale::Ar
        }
    } else if has(is_cyrillic) {
        if input.chars().any(|c| UKRAINIAN_LETTERS.contains(c)) {
            Locale::Uk
        } else {
            Locale::Ru
        }
    } else if has(is_greek) {
        Locale::El
    } else if has(|c| matches!(c, '\u{0900}'..='\u{097F}')) {
        Locale::Hi
    } else if has(|c| matches!(c, '\u{0980}'..='\u{09FF}')) {
        Locale::Bn
    } else if has(|c| matches!(c, '\u{0B80}'..='\u{0BFF}')) {
        Locale::Ta
    } else if has(|c| matches!(c, '\u{0C00}'..='\u{0C7F}')) {
        Locale::Te
    } else {
        detect_latin(input)
    };

    tracing::debug!(locale = %locale, "locale detected");
    locale
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_scripts() {
        assert_eq!(detect_locale("円を描いて"), Locale::Ja);
        assert_eq!(detect_locale("원을 그려"), Locale::Ko);
        assert_eq!(detect_locale("画一个圆"), Locale::ZhCn);
        assert_eq!(detect_locale("畫一個圓"), Locale::ZhTw);
    }

    #[test]
    fn right_to_left_scripts() {
        assert_eq!(detect_locale("סובב את העיגול"), Locale::He);
        assert_eq!(detect_locale("تدوير الدائرة"), Locale::Ar);
        assert_eq!(detect_locale("دایره را بچرخان"), Locale::Fa);
        assert_eq!(detect_locale("دائرے کو گھمائیں"), Locale::Ur);
    }

    #[test]
    fn cyrillic_and_greek() {
        assert_eq!(detect_locale("нарисуй круг"), Locale::Ru);
        assert_eq!(detect_locale("намалюй коло і поверни"), Locale::Uk);
        assert_eq!(detect_locale("σχεδίασε έναν κύκλο"), Locale::El);
    }

    #[test]
    fn indic_and_thai() {
        assert_eq!(detect_locale("वृत्त घुमाओ"), Locale::Hi);
        assert_eq!(detect_locale("বৃত্ত আঁকো"), Locale::Bn);
        assert_eq!(detect_locale("வட்டம்"), Locale::Ta);
        assert_eq!(detect_locale("వృత్తం"), Locale::Te);
        assert_eq!(detect_locale("หมุนวงกลม"), Locale::Th);
    }

    #[test]
    fn latin_languages() {
        assert_eq!(detect_locale("gira el círculo lentamente"), Locale::Es);
        assert_eq!(detect_locale("fais tourner le cercle"), Locale::Fr);
        assert_eq!(detect_locale("drehe den Kreis schnell"), Locale::De);
        assert_eq!(detect_locale("disegna il cerchio"), Locale::It);
        assert_eq!(detect_locale("desenhe um círculo"), Locale::Pt);
        assert_eq!(detect_locale("teken een cirkel"), Locale::Nl);
    }

    #[test]
    fn english_is_the_fallback() {
        assert_eq!(detect_locale("make a #ff0000 circle 50px at center"), Locale::En);
        assert_eq!(detect_locale("rotate it for 3 seconds"), Locale::En);
        assert_eq!(detect_locale(""), Locale::En);
    }
}
