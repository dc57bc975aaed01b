//! The instantiable engine context and its process-wide default.
//!
//! An [`IntentEngine`] owns one [`Matcher`] (and through it the registry and
//! the lazily built index) plus the [`EngineConfig`].  Engines are
//! independent: tests and embedders build their own, while the free
//! functions in this module delegate to a shared default instance.

use std::sync::{Arc, OnceLock};

use canvasintent_matcher::Matcher;
use canvasintent_taxonomy::{Locale, Registry};

use crate::classifier::{IntentAnalysis, Recommendation, ToolMismatchWarning};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::recovery::{ErrorKind, ErrorRecovery, RecoveryContext};

/// Classification engine over one registry.
#[derive(Debug)]
pub struct IntentEngine {
    pub(crate) matcher: Matcher,
    pub(crate) config: EngineConfig,
}

impl IntentEngine {
    /// Build an engine over `registry`, validating `config` first.
    pub fn new(registry: Arc<Registry>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let matcher = Matcher::new(registry, config.matcher.clone());
        tracing::debug!(concepts = matcher.registry().len(), "intent engine created");
        Ok(Self { matcher, config })
    }

    /// An engine over the built-in taxonomy with default settings.
    pub fn builtin() -> Self {
        let config = EngineConfig::default();
        Self {
            matcher: Matcher::new(Arc::new(Registry::builtin()), config.matcher.clone()),
            config,
        }
    }

    /// An engine over the built-in taxonomy with custom settings.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Self::new(Arc::new(Registry::builtin()), config)
    }

    /// Build an engine from a JSON registry document.
    pub fn from_registry_json(json: &str, config: EngineConfig) -> Result<Self> {
        let registry = Registry::from_json_str(json)?;
        Self::new(Arc::new(registry), config)
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn registry(&self) -> &Registry {
        self.matcher.registry()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Drop the cached index.  Exclusive access keeps this away from
    /// in-flight classifications.
    pub fn reset(&mut self) {
        self.matcher.reset();
    }
}

impl Default for IntentEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Default instance
// ---------------------------------------------------------------------------

/// The shared engine over the built-in taxonomy.
pub fn default_engine() -> &'static IntentEngine {
    static ENGINE: OnceLock<IntentEngine> = OnceLock::new();
    ENGINE.get_or_init(IntentEngine::builtin)
}

/// [`IntentEngine::classify`] on the default engine.
pub fn classify(input: &str, locale: Option<Locale>) -> IntentAnalysis {
    default_engine().classify(input, locale)
}

/// [`IntentEngine::get_recommendation`] on the default engine.
pub fn get_recommendation(input: &str, locale: Option<Locale>) -> Option<Recommendation> {
    default_engine().get_recommendation(input, locale)
}

/// [`IntentEngine::validate_tool_selection`] on the default engine.
pub fn validate_tool_selection(action_name: &str, user_input: &str) -> Option<ToolMismatchWarning> {
    default_engine().validate_tool_selection(action_name, user_input)
}

/// [`IntentEngine::build_error_recovery`] on the default engine.
pub fn build_error_recovery(kind: ErrorKind, context: &RecoveryContext) -> ErrorRecovery {
    default_engine().build_error_recovery(kind, context)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use canvasintent_matcher::MatcherConfig;

    use super::*;
    use crate::error::IntentError;

    #[test]
    fn default_engine_is_shared() {
        let a = default_engine() as *const IntentEngine;
        let b = default_engine() as *const IntentEngine;
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EngineConfig::new().with_matcher(MatcherConfig::new().with_min_confidence(2.0));
        assert!(matches!(
            IntentEngine::with_config(config),
            Err(IntentError::Config { .. })
        ));
    }

    #[test]
    fn registry_json_round_trips_into_an_engine() {
        let document = Registry::builtin().to_document();
        let json = serde_json::to_string(&document).unwrap();
        let engine = IntentEngine::from_registry_json(&json, EngineConfig::default()).unwrap();
        assert_eq!(engine.registry().len(), Registry::builtin().len());
    }

    #[test]
    fn malformed_registry_json_is_an_error() {
        let err = IntentEngine::from_registry_json("{", EngineConfig::default()).unwrap_err();
        assert!(matches!(err, IntentError::Taxonomy(_)));
    }

    #[test]
    fn reset_rebuilds_the_index_on_demand() {
        let mut engine = IntentEngine::builtin();
        engine.classify("rotate", Some(Locale::En));
        assert!(engine.matcher().is_index_built());
        engine.reset();
        assert!(!engine.matcher().is_index_built());
        assert_eq!(
            engine.classify("rotate", Some(Locale::En)).recommended.map(|r| r.action_name),
            Some("animate_rotate".to_string())
        );
    }
}
