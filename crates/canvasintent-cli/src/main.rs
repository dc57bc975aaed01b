//! CLI entry point for CanvasIntent.
//!
//! This binary provides the `canvasintent` command for classifying canvas
//! commands, inspecting entities and locales, and rendering recovery
//! payloads.  Results go to stdout; logs go to stderr.

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use canvasintent_intent::{
    EngineConfig, ErrorKind, IntentEngine, RecoveryContext, extract_entities, format_rich_error,
    resolve_overlaps,
};
use canvasintent_taxonomy::{Locale, Registry};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, joined};

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    let engine = build_engine(cli.config.as_deref(), cli.registry.as_deref())?;

    match cli.command {
        Commands::Classify { text, locale } => cmd_classify(&engine, &joined(&text), locale),
        Commands::Recommend { text, locale } => cmd_recommend(&engine, &joined(&text), locale),
        Commands::DetectLocale { text } => {
            let locale = engine.matcher().detect_locale(&joined(&text));
            println!("{locale}\t{}", locale.name());
            Ok(())
        }
        Commands::Entities { text, raw } => {
            let entities = extract_entities(&joined(&text));
            if raw {
                print_json(&entities)
            } else {
                print_json(&resolve_overlaps(entities))
            }
        }
        Commands::Validate { action, text } => cmd_validate(&engine, &action, &joined(&text)),
        Commands::Recover {
            kind,
            failed_id,
            available,
            input,
            action,
            message,
            locale,
            json,
        } => {
            let context = RecoveryContext {
                failed_id,
                available_items: available,
                user_input: input,
                attempted_action: action,
                locale: parse_locale(locale)?,
                message,
            };
            let recovery = engine.build_error_recovery(ErrorKind::from_code(&kind), &context);
            if json {
                print_json(&recovery)
            } else {
                println!("{}", format_rich_error(&recovery));
                Ok(())
            }
        }
        Commands::Concepts { locale } => cmd_concepts(&engine, parse_locale(locale)?),
    }
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

fn cmd_classify(engine: &IntentEngine, text: &str, locale: Option<String>) -> Result<()> {
    let analysis = engine.classify(text, parse_locale(locale)?);
    info!(
        method = analysis.classification.method.as_str(),
        confidence = analysis.classification.confidence,
        "classification finished"
    );
    print_json(&analysis)
}

fn cmd_recommend(engine: &IntentEngine, text: &str, locale: Option<String>) -> Result<()> {
    match engine.get_recommendation(text, parse_locale(locale)?) {
        Some(recommendation) => print_json(&recommendation),
        None => {
            println!("No matching action. Try rephrasing the request.");
            Ok(())
        }
    }
}

fn cmd_validate(engine: &IntentEngine, action: &str, text: &str) -> Result<()> {
    match engine.validate_tool_selection(action, text) {
        Some(warning) => print_json(&warning),
        None => {
            println!("ok: {action} fits the request");
            Ok(())
        }
    }
}

fn cmd_concepts(engine: &IntentEngine, locale: Option<Locale>) -> Result<()> {
    println!();
    println!("  {:<22} {:<15} {:<26} {:>4}  term", "id", "category", "action", "prio");
    println!("  {}", "-".repeat(80));
    for concept in engine.registry().concepts() {
        println!(
            "  {:<22} {:<15} {:<26} {:>4}  {}",
            concept.id,
            concept.category.as_str(),
            concept.action_name(),
            concept.priority,
            concept.terms.first_term(locale).unwrap_or("-"),
        );
    }
    println!();
    println!(
        "  {} concepts, {} modifiers",
        engine.registry().len(),
        engine.registry().modifiers().len()
    );
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_engine(config_path: Option<&Path>, registry_path: Option<&Path>) -> Result<IntentEngine> {
    let config = match config_path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let engine = match registry_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read registry {}", path.display()))?;
            let registry = Registry::from_json_str(&json)
                .with_context(|| format!("invalid registry {}", path.display()))?;
            IntentEngine::new(Arc::new(registry), config)?
        }
        None => IntentEngine::with_config(config)?,
    };
    Ok(engine)
}

fn parse_locale(tag: Option<String>) -> Result<Option<Locale>> {
    tag.map(|tag| Locale::from_tag(&tag).with_context(|| format!("unknown locale `{tag}`")))
        .transpose()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Initialise the global tracing subscriber, writing to stderr.
fn init_tracing(default_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
