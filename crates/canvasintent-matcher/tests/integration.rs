//! Integration tests for the canvasintent-matcher crate.
//!
//! These tests run the full phrase / keyword / fuzzy pipeline against the
//! built-in taxonomy and against small hand-built registries.

use std::sync::Arc;
use std::thread;

use canvasintent_matcher::{
    FuzzyStrategy, KeywordStrategy, MatchStage, Matcher, MatcherConfig, PhraseStrategy,
    detect_locale,
};
use canvasintent_taxonomy::{Category, ConceptNode, Locale, Registry, TermTable};
use serde_json::json;

fn registry(concepts: Vec<ConceptNode>) -> Arc<Registry> {
    Arc::new(Registry::new(concepts, vec![]).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════
//  Ranking
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn every_multi_word_english_term_is_found_verbatim() {
    let matcher = Matcher::builtin();
    for concept in matcher.registry().concepts() {
        for term in concept.terms.get(Locale::En).unwrap_or_default() {
            if !term.contains(' ') {
                continue;
            }
            let matches = matcher.find_matches(term, Some(Locale::En));
            let hit = matches
                .iter()
                .find(|m| m.node_id == concept.id)
                .unwrap_or_else(|| panic!("`{term}` did not match {}", concept.id));
            assert!(hit.similarity >= 0.95, "`{term}` scored {}", hit.similarity);
        }
    }
}

#[test]
fn preferred_locale_never_lowers_the_score() {
    let matcher = Matcher::builtin();
    for input in ["dibuja un círculo", "rota", "drehe den kreis", "旋转"] {
        for target in ["create_circle", "rotate"] {
            let score = |locale: Option<Locale>| {
                matcher
                    .find_matches(input, locale)
                    .into_iter()
                    .find(|m| m.node_id == target)
                    .map_or(0.0, |m| m.similarity)
            };
            let detected = detect_locale(input);
            assert!(
                score(Some(detected)) >= score(None),
                "{input} / {target}: preferring {detected} lowered the score"
            );
        }
    }
}

#[test]
fn every_single_word_term_prefers_its_own_locale() {
    let matcher = Matcher::builtin();
    let mut checked = 0;
    for concept in matcher.registry().concepts() {
        for (locale, terms) in concept.terms.iter() {
            for term in terms.iter().filter(|t| t.split_whitespace().count() == 1) {
                let score = |preferred: Option<Locale>| {
                    matcher
                        .find_matches(term, preferred)
                        .into_iter()
                        .find(|m| m.node_id == concept.id)
                        .map_or(0.0, |m| m.similarity)
                };
                let own = score(Some(locale));
                assert!(own > 0.0, "`{term}` ({locale}) did not match {}", concept.id);

                let other = if locale == Locale::En { Locale::Fr } else { Locale::En };
                for preferred in [None, Some(other)] {
                    let rival = score(preferred);
                    assert!(
                        own >= rival,
                        "`{term}` ({locale}) scored {own} but {rival} under {preferred:?}"
                    );
                }
                checked += 1;
            }
        }
    }
    assert!(checked > 300);
}

#[test]
fn spanish_phrase_wins_in_spanish() {
    let matcher = Matcher::builtin();
    let matches = matcher.find_matches("dibuja un círculo", Some(Locale::Es));
    assert_eq!(matches[0].node_id, "create_circle");
    assert_eq!(matches[0].matched_locale, Locale::Es);
    assert_eq!(matches[0].stage, MatchStage::Phrase);
}

#[test]
fn unsegmented_scripts_match_by_containment() {
    let matcher = Matcher::builtin();
    let matches = matcher.find_matches("请画一个红色的圆形", Some(Locale::ZhCn));
    assert_eq!(matches[0].node_id, "create_circle");

    let matches = matcher.find_matches("赤い円を描く", Some(Locale::Ja));
    assert_eq!(matches[0].node_id, "create_circle");
}

#[test]
fn priority_breaks_similarity_ties() {
    let matcher = Matcher::builtin();
    let matches = matcher.find_matches("rotate the circle", Some(Locale::En));
    assert_eq!(matches[0].node_id, "rotate");
    assert_eq!(matches[1].node_id, "create_circle");
    assert!((matches[0].similarity - matches[1].similarity).abs() < 1e-9);
}

#[test]
fn registry_order_breaks_priority_ties() {
    let concepts = vec![
        ConceptNode::new("first", Category::Motion, "a")
            .with_terms(TermTable::new().with(Locale::En, &["wobble"])),
        ConceptNode::new("second", Category::Motion, "b")
            .with_terms(TermTable::new().with(Locale::En, &["wobble"])),
    ];
    let matcher = Matcher::new(registry(concepts), MatcherConfig::default());
    let ids: Vec<String> = matcher
        .find_matches("wobble", Some(Locale::En))
        .into_iter()
        .map(|m| m.node_id)
        .collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn distant_variants_stay_below_min_confidence() {
    let concepts = vec![
        ConceptNode::new("spin", Category::Motion, "animate_rotate")
            .with_terms(TermTable::new().with(Locale::En, &["spin around"])),
    ];
    let matcher = Matcher::new(registry(concepts), MatcherConfig::default());
    // No phrase or keyword hit, and the edit distance is too large.
    let matches = matcher.find_matches("spinning arounds", Some(Locale::En));
    assert!(matches.is_empty());

    let matches = matcher.find_matches("spin around", Some(Locale::En));
    assert_eq!(matches[0].stage, MatchStage::Phrase);
}

#[test]
fn fuzzy_only_pipeline() {
    let concepts = vec![
        ConceptNode::new("fade", Category::Motion, "animate_fade")
            .with_terms(TermTable::new().with(Locale::En, &["fade out slowly"])),
    ];
    let matcher = Matcher::new(registry(concepts), MatcherConfig::default())
        .with_strategies(vec![Box::new(FuzzyStrategy)]);
    let matches = matcher.find_matches("fade out", Some(Locale::En));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].stage, MatchStage::Fuzzy);
    // containment: 0.6 + 8/15 * 0.3 + 0.05 locale bonus
    assert!((matches[0].similarity - (0.6 + 8.0 / 15.0 * 0.3 + 0.05)).abs() < 1e-9);
}

#[test]
fn confident_matches_skip_the_fuzzy_stage() {
    let concepts = || {
        vec![
            ConceptNode::new("spin_around", Category::Motion, "animate_rotate")
                .with_terms(TermTable::new().with(Locale::En, &["spin around"])),
            ConceptNode::new("spi", Category::Motion, "animate_rotate")
                .with_terms(TermTable::new().with(Locale::En, &["spi"])),
        ]
    };

    // The phrase scores 0.95 before any bonus, so the fuzzy stage never runs.
    let matcher = Matcher::new(registry(concepts()), MatcherConfig::default()).with_strategies(
        vec![Box::new(PhraseStrategy), Box::new(KeywordStrategy), Box::new(FuzzyStrategy)],
    );
    let matches = matcher.find_matches("spin around", Some(Locale::En));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].stage, MatchStage::Phrase);

    // With a higher threshold it runs and finds "spi" by containment.
    let config = MatcherConfig::default().with_short_circuit_threshold(0.95);
    let matcher = Matcher::new(registry(concepts()), config);
    let matches = matcher.find_matches("spin around", Some(Locale::En));
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[1].node_id, "spi");
    assert_eq!(matches[1].stage, MatchStage::Fuzzy);
}

#[test]
fn locale_bonus_alone_never_skips_the_fuzzy_stage() {
    let concepts = vec![
        ConceptNode::new("spin", Category::Motion, "animate_rotate")
            .with_terms(TermTable::new().with(Locale::En, &["spin"])),
        ConceptNode::new("spinning", Category::Motion, "animate_rotate")
            .with_terms(TermTable::new().with(Locale::En, &["spinning"])),
    ];
    let matcher = Matcher::new(registry(concepts), MatcherConfig::default());

    // The keyword hit is 0.85 before the bonus in either locale, so the
    // fuzzy stage runs both times and the exact term scores 1.0.
    for locale in [Locale::En, Locale::Fr] {
        let matches = matcher.find_matches("spin", Some(locale));
        assert_eq!(matches.len(), 2, "{locale}");
        assert_eq!(matches[0].node_id, "spin");
        assert!((matches[0].similarity - 1.0).abs() < 1e-9);
        assert_eq!(matches[1].node_id, "spinning");
    }
}

#[test]
fn token_inside_a_multi_word_term_gets_the_whole_word_bonus() {
    let concepts = vec![
        ConceptNode::new("fade_out", Category::Motion, "animate_fade")
            .with_terms(TermTable::new().with(Locale::En, &["fade out"])),
    ];
    let matcher = Matcher::new(registry(concepts), MatcherConfig::default());
    let matches = matcher.find_matches("fade", Some(Locale::En));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].stage, MatchStage::Keyword);
    // 0.7 base + 0.1 whole word + 0.05 overlap + 0.05 locale
    assert!((matches[0].similarity - 0.9).abs() < 1e-9);
}

#[test]
fn fuzzy_stage_scores_terms_of_every_locale() {
    let matcher = Matcher::builtin();
    // Only the French "disparais" contains the input; English is preferred.
    let matches = matcher.find_matches("disparai", Some(Locale::En));
    assert_eq!(matches[0].node_id, "fade_out");
    assert_eq!(matches[0].matched_locale, Locale::Fr);
    let expected = 0.6 + 8.0 / 9.0 * 0.3;
    assert!((matches[0].similarity - expected).abs() < 1e-9);

    // Preferring French adds the bonus on top.
    let matches = matcher.find_matches("disparai", Some(Locale::Fr));
    assert!((matches[0].similarity - (expected + 0.05)).abs() < 1e-9);
}

#[test]
fn noise_has_no_matches() {
    let matcher = Matcher::builtin();
    assert!(matcher.find_matches("xyzzy plugh qwerty", Some(Locale::En)).is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
//  Modifiers and parameters
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn modifiers_in_other_locales() {
    let matcher = Matcher::builtin();
    let modifiers = matcher.detect_modifiers("gira durante 2 segundos", Some(Locale::Es));
    let duration = modifiers.iter().find(|m| m.id == "duration").unwrap();
    assert_eq!(duration.locale, Locale::Es);
    assert_eq!(duration.patch["duration"], json!(2000));

    let modifiers = matcher.detect_modifiers("旋转5秒", Some(Locale::ZhCn));
    assert!(modifiers.iter().any(|m| m.id == "duration" && m.captured_value == Some(5.0)));
}

#[test]
fn fixed_patches_need_no_capture() {
    let matcher = Matcher::builtin();
    let modifiers = matcher.detect_modifiers("bounce forever", Some(Locale::En));
    let looped = modifiers.iter().find(|m| m.id == "loop_forever").unwrap();
    assert_eq!(looped.captured_value, None);
    assert_eq!(looped.patch["loop"], json!(true));
    assert_eq!(looped.patch["repeat"], json!(-1));
}

#[test]
fn parameters_fall_back_to_english_patterns() {
    let matcher = Matcher::builtin();
    let params =
        matcher.extract_parameters("export as jpeg please", "export_image", Some(Locale::Fr));
    assert_eq!(params["format"], json!("jpeg"));
}

#[test]
fn color_parameter_is_normalized() {
    let matcher = Matcher::builtin();
    let params =
        matcher.extract_parameters("circle with color #F0A", "create_circle", Some(Locale::En));
    assert_eq!(params["fill"], json!("#ff00aa"));
}

// ═══════════════════════════════════════════════════════════════════════
//  Concurrency
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn concurrent_first_callers_share_one_index() {
    let matcher = Arc::new(Matcher::builtin());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || {
                let matches = matcher.find_matches("draw a circle", Some(Locale::En));
                (
                    matches[0].node_id.clone(),
                    matcher.index() as *const _ as usize,
                )
            })
        })
        .collect();

    let results: Vec<(String, usize)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.iter().all(|(id, _)| id == "create_circle"));
    assert!(results.windows(2).all(|w| w[0].1 == w[1].1));
}
