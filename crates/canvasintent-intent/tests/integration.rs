//! Integration tests for the canvasintent-intent crate.
//!
//! These tests drive the public engine surface end to end: classification,
//! parameter merging, clarification policy and error recovery.

use std::sync::Arc;
use std::thread;

use canvasintent_intent::{
    ClassificationMethod, EngineConfig, EntityKind, EntityValue, ErrorKind, IntentEngine,
    NumberUnit, Position, RecoveryContext, build_error_recovery, classify, extract_entities,
    format_rich_error, get_recommendation, resolve_overlaps, validate_tool_selection,
};
use canvasintent_taxonomy::{Category, ConceptNode, Locale, Registry, TermTable};
use serde_json::json;

fn wobble_engine(config: EngineConfig) -> IntentEngine {
    let concepts = vec![
        ConceptNode::new("wobble", Category::Motion, "animate_wobble")
            .with_terms(TermTable::new().with(Locale::En, &["wobble"])),
        ConceptNode::new("wobble_effect", Category::Effect, "apply_wobble")
            .with_terms(TermTable::new().with(Locale::En, &["wobble effect"])),
    ];
    let registry = Registry::new(concepts, vec![]).unwrap();
    IntentEngine::new(Arc::new(registry), config).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
//  Classification
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn verbatim_phrase_classifies_with_high_confidence() {
    let analysis = classify("please draw a circle", Some(Locale::En));
    assert_eq!(analysis.classification.method, ClassificationMethod::Phrase);
    assert!(analysis.classification.confidence >= 0.95);
    assert_eq!(
        analysis.recommended.as_ref().map(|r| r.action_name.as_str()),
        Some("create_circle")
    );
}

#[test]
fn preferred_locale_never_lowers_confidence() {
    let engine = IntentEngine::builtin();
    for (input, native) in [
        ("dessine un cercle", Locale::Fr),
        ("cercle", Locale::Fr),
        ("draw a circle", Locale::En),
        ("zeichne einen kreis", Locale::De),
        ("rotate", Locale::En),
        ("circle", Locale::En),
        ("drehe", Locale::De),
        ("kreis", Locale::De),
    ] {
        let preferred = engine.classify(input, Some(native)).classification.confidence;
        let other = engine.classify(input, Some(Locale::It)).classification.confidence;
        assert!(preferred >= other, "{input}: {preferred} < {other}");
    }
}

#[test]
fn duration_modifier_flows_into_params() {
    let analysis = classify("rotate it for 3 seconds", Some(Locale::En));
    let duration = analysis
        .classification
        .active_modifiers
        .iter()
        .find(|m| m.id == "duration")
        .expect("duration modifier");
    assert_eq!(duration.captured_value, Some(3.0));
    assert_eq!(analysis.recommended.unwrap().params["duration"], json!(3000));
}

#[test]
fn classification_is_deterministic() {
    let engine = IntentEngine::builtin();
    for input in [
        "make a #ff0000 circle 50px at center",
        "spin slowly forever",
        "wobble",
        "画一个红色的圆形",
    ] {
        let first = serde_json::to_value(engine.classify(input, None)).unwrap();
        let second = serde_json::to_value(engine.classify(input, None)).unwrap();
        assert_eq!(first, second, "{input}");
    }
}

#[test]
fn colored_circle_command_end_to_end() {
    let input = "make a #ff0000 circle 50px at center";

    let entities = resolve_overlaps(extract_entities(input));
    assert_eq!(entities.len(), 3);
    assert_eq!(entities[0].kind, EntityKind::Color);
    assert_eq!(entities[0].normalized_value, EntityValue::Color("#ff0000".into()));
    assert_eq!(
        entities[1].normalized_value,
        EntityValue::Number { value: 50.0, unit: NumberUnit::Pixels }
    );
    assert_eq!(entities[2].normalized_value, EntityValue::Position(Position::Center));

    let analysis = classify(input, None);
    assert_eq!(analysis.classification.locale, Locale::En);
    let recommended = analysis.recommended.unwrap();
    assert_eq!(recommended.action_name, "create_circle");
    assert_eq!(recommended.params["fill"], json!("#ff0000"));
    assert_eq!(recommended.params["radius"], json!(50));
    assert_eq!(recommended.params["x"], json!(960));
    assert_eq!(recommended.params["y"], json!(540));
}

#[test]
fn spanish_command_with_named_color() {
    let analysis = classify("dibuja un círculo rojo", None);
    assert_eq!(analysis.classification.locale, Locale::Es);
    let recommended = analysis.recommended.unwrap();
    assert_eq!(recommended.action_name, "create_circle");
    assert_eq!(recommended.params["fill"], json!("#ff0000"));
}

#[test]
fn chinese_command_without_spaces() {
    let analysis = classify("画一个红色的圆形", None);
    assert_eq!(analysis.classification.locale, Locale::ZhCn);
    let recommended = analysis.recommended.unwrap();
    assert_eq!(recommended.action_name, "create_circle");
    assert_eq!(recommended.params["fill"], json!("#ff0000"));
}

// ═══════════════════════════════════════════════════════════════════════
//  Clarification
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn neck_and_neck_candidates_need_clarification() {
    let engine = wobble_engine(EngineConfig::default());
    let analysis = engine.classify("wobble effect", Some(Locale::En));

    assert_eq!(
        analysis.classification.matched_concept.as_ref().map(|m| m.node_id.as_str()),
        Some("wobble_effect")
    );
    assert!(analysis.needs_clarification);
    assert!(!analysis.alternatives.is_empty());
    assert_eq!(analysis.alternatives[0].concept_id, "wobble");

    let prompt = analysis.clarification.unwrap();
    assert!(prompt.contains("1. wobble effect (97%)"), "{prompt}");
    assert!(prompt.contains("2. wobble (90%)"), "{prompt}");
}

#[test]
fn ambiguity_thresholds_are_tunable() {
    let engine = wobble_engine(EngineConfig::default().with_ambiguity(0.7, 0.05));
    let analysis = engine.classify("wobble effect", Some(Locale::En));
    assert!(!analysis.needs_clarification);
    assert!(analysis.clarification.is_none());
    assert!(!analysis.alternatives.is_empty());
}

#[test]
fn noise_is_unknown_with_suggestions() {
    let analysis = classify("xq zv 12 ##", Some(Locale::En));
    assert_eq!(analysis.classification.method, ClassificationMethod::Unknown);
    assert_eq!(analysis.classification.confidence, 0.0);
    assert!(!analysis.classification.suggestions.is_empty());
    assert!(analysis.needs_clarification);
    assert!(analysis.recommended.is_none());
    assert!(analysis.alternatives.is_empty());
}

#[test]
fn low_confidence_match_asks_did_you_mean() {
    let config = EngineConfig::default()
        .with_matcher(canvasintent_matcher::MatcherConfig::new().with_min_confidence(0.95));
    let engine = IntentEngine::with_config(config).unwrap();
    let analysis = engine.classify("rotate it quickly", Some(Locale::En));
    assert!(analysis.needs_clarification);
    let prompt = analysis.clarification.unwrap();
    assert!(prompt.starts_with("Did you mean \"rotate\"?"), "{prompt}");
}

// ═══════════════════════════════════════════════════════════════════════
//  Recommendation and tool validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn recommendation_is_a_view_of_classify() {
    let input = "fade out slowly";
    let analysis = classify(input, Some(Locale::En));
    let recommendation = get_recommendation(input, Some(Locale::En)).unwrap();
    let recommended = analysis.recommended.unwrap();
    assert_eq!(recommendation.action, recommended.action_name);
    assert_eq!(recommendation.params, recommended.params);
    assert_eq!(recommendation.confidence, analysis.classification.confidence);
}

#[test]
fn mismatched_tool_is_flagged() {
    let warning = validate_tool_selection("animate_move", "rotate the star 45 degrees").unwrap();
    assert_eq!(warning.suggested_action, "animate_rotate");
    assert_eq!(warning.selected_action, "animate_move");
    assert!(validate_tool_selection("animate_rotate", "rotate the star 45 degrees").is_none());
}

// ═══════════════════════════════════════════════════════════════════════
//  Error recovery
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn item_not_found_proposes_the_nearest_id() {
    let context = RecoveryContext::new()
        .with_failed_id("itme_1")
        .with_available_items(["item_1", "item_2"]);
    let recovery = build_error_recovery(ErrorKind::from_code("ITEM_NOT_FOUND"), &context);
    assert_eq!(recovery.did_you_mean.as_deref(), Some("item_1"));

    let text = format_rich_error(&recovery);
    assert!(text.starts_with("Error: "));
    assert!(text.contains("Did you mean: item_1?"));
}

#[test]
fn recovery_context_deserializes_from_json() {
    let context: RecoveryContext = serde_json::from_value(json!({
        "failed_id": "circel_1",
        "available_items": ["circle_1", "rect_1"],
        "locale": "en"
    }))
    .unwrap();
    assert_eq!(context.locale, Some(Locale::En));
    let recovery = build_error_recovery(ErrorKind::ItemNotFound, &context);
    assert_eq!(recovery.did_you_mean.as_deref(), Some("circle_1"));
}

// ═══════════════════════════════════════════════════════════════════════
//  Concurrency
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn shared_engine_classifies_across_threads() {
    let engine = Arc::new(IntentEngine::builtin());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                engine
                    .classify("draw a circle", Some(Locale::En))
                    .recommended
                    .map(|r| r.action_name)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("create_circle"));
    }
}
