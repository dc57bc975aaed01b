//! The immutable concept registry.
//!
//! A [`Registry`] is loaded once (either the built-in taxonomy or a JSON
//! document) and never mutated afterwards.  Registry order is significant:
//! it is the final tie-breaker when ranking matches, which keeps every
//! ranking deterministic.

use std::collections::HashMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::error::{Result, TaxonomyError};
use crate::locale::{Locale, TermTable};
use crate::types::{ConceptNode, ModifierNode};

/// On-disk shape of a registry document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryDocument {
    #[serde(default)]
    pub concepts: Vec<ConceptNode>,
    #[serde(default)]
    pub modifiers: Vec<ModifierNode>,
}

/// Read-only collection of concept and modifier nodes.
#[derive(Debug, Clone)]
pub struct Registry {
    concepts: Vec<ConceptNode>,
    modifiers: Vec<ModifierNode>,
    by_id: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry, validating every node.
    ///
    /// Fails on duplicate ids (across concepts and modifiers), missing base
    /// locale terms, or blank term lists.
    pub fn new(concepts: Vec<ConceptNode>, modifiers: Vec<ModifierNode>) -> Result<Self> {
        let mut seen = HashSet::new();

        for concept in &concepts {
            validate_node(&concept.id, &concept.terms)?;
            if !seen.insert(concept.id.as_str()) {
                return Err(TaxonomyError::DuplicateId {
                    id: concept.id.clone(),
                });
            }
        }
        for modifier in &modifiers {
            validate_node(&modifier.id, &modifier.terms)?;
            if !seen.insert(modifier.id.as_str()) {
                return Err(TaxonomyError::DuplicateId {
                    id: modifier.id.clone(),
                });
            }
        }

        let registry = Self::assemble(concepts, modifiers);
        tracing::debug!(
            concepts = registry.concepts.len(),
            modifiers = registry.modifiers.len(),
            "registry loaded"
        );
        Ok(registry)
    }

    /// The built-in canvas taxonomy.
    pub fn builtin() -> Self {
        Self::assemble(builtin::concepts(), builtin::modifiers())
    }

    /// Load and validate a registry from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: RegistryDocument = serde_json::from_str(json)?;
        Self::new(document.concepts, document.modifiers)
    }

    /// Export the registry as a serializable document.
    pub fn to_document(&self) -> RegistryDocument {
        RegistryDocument {
            concepts: self.concepts.clone(),
            modifiers: self.modifiers.clone(),
        }
    }

    fn assemble(concepts: Vec<ConceptNode>, modifiers: Vec<ModifierNode>) -> Self {
        let by_id = concepts
            .iter()
            .enumerate()
            .map(|(idx, concept)| (concept.id.clone(), idx))
            .collect();
        Self {
            concepts,
            modifiers,
            by_id,
        }
    }

    /// All concepts, in registry order.
    pub fn concepts(&self) -> &[ConceptNode] {
        &self.concepts
    }

    /// All modifiers, in registry order.
    pub fn modifiers(&self) -> &[ModifierNode] {
        &self.modifiers
    }

    /// Look up a concept by id.
    pub fn concept(&self, id: &str) -> Option<&ConceptNode> {
        self.position(id).map(|idx| &self.concepts[idx])
    }

    /// The registry position of a concept.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Look up a modifier by id.
    pub fn modifier(&self, id: &str) -> Option<&ModifierNode> {
        self.modifiers.iter().find(|m| m.id == id)
    }

    /// Concepts that map onto the given action name.
    pub fn concepts_for_action<'a>(
        &'a self,
        action_name: &'a str,
    ) -> impl Iterator<Item = &'a ConceptNode> + 'a {
        self.concepts
            .iter()
            .filter(move |c| c.action_name() == action_name)
    }

    /// Whether any concept maps onto the given action name.
    pub fn has_action(&self, action_name: &str) -> bool {
        self.concepts_for_action(action_name).next().is_some()
    }

    /// The distinct action names, in registry order.
    pub fn action_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.concepts
            .iter()
            .map(ConceptNode::action_name)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// The number of concepts.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether the registry has no concepts.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

fn validate_node(id: &str, terms: &TermTable) -> Result<()> {
    if id.trim().is_empty() {
        return Err(TaxonomyError::EmptyId);
    }
    for (locale, list) in terms.iter() {
        if list.iter().all(|t| t.trim().is_empty()) {
            return Err(TaxonomyError::EmptyTerms {
                id: id.to_string(),
                locale: locale.code().to_string(),
            });
        }
    }
    if !terms.contains(Locale::BASE) {
        return Err(TaxonomyError::MissingBaseLocale {
            id: id.to_string(),
            locale: Locale::BASE.code().to_string(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ModifierCategory};

    fn concept(id: &str) -> ConceptNode {
        ConceptNode::new(id, Category::Motion, id)
            .with_terms(TermTable::new().with(Locale::En, &[id]))
    }

    #[test]
    fn builtin_registry_is_valid() {
        let builtin = Registry::builtin();
        let validated = Registry::new(builtin.concepts().to_vec(), builtin.modifiers().to_vec());
        assert!(validated.is_ok(), "builtin registry invalid: {validated:?}");
        assert!(builtin.len() > 30);
        assert!(builtin.concept("create_circle").is_some());
        assert!(builtin.modifier("duration").is_some());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Registry::new(vec![concept("spin"), concept("spin")], vec![]);
        assert!(matches!(result, Err(TaxonomyError::DuplicateId { id }) if id == "spin"));
    }

    #[test]
    fn modifier_ids_share_the_namespace() {
        let modifier = ModifierNode::new("spin", ModifierCategory::Behavior)
            .with_terms(TermTable::new().with(Locale::En, &["spinning"]));
        let result = Registry::new(vec![concept("spin")], vec![modifier]);
        assert!(matches!(result, Err(TaxonomyError::DuplicateId { .. })));
    }

    #[test]
    fn missing_english_is_rejected() {
        let node = ConceptNode::new("drehen", Category::Motion, "animate_rotate")
            .with_terms(TermTable::new().with(Locale::De, &["drehe"]));
        let result = Registry::new(vec![node], vec![]);
        assert!(matches!(result, Err(TaxonomyError::MissingBaseLocale { .. })));
    }

    #[test]
    fn blank_terms_are_rejected() {
        let node = ConceptNode::new("blank", Category::Motion, "noop")
            .with_terms(TermTable::new().with(Locale::En, &["ok"]).with(Locale::Fr, &["  "]));
        let result = Registry::new(vec![node], vec![]);
        assert!(matches!(result, Err(TaxonomyError::EmptyTerms { .. })));
    }

    #[test]
    fn lookups_by_id_and_action() {
        let registry = Registry::new(vec![concept("spin"), concept("orbit")], vec![]).unwrap();
        assert_eq!(registry.position("orbit"), Some(1));
        assert!(registry.has_action("spin"));
        assert!(!registry.has_action("explode"));
        assert_eq!(registry.action_names(), vec!["spin", "orbit"]);
    }

    #[test]
    fn json_document_round_trip() {
        let registry = Registry::new(vec![concept("spin")], vec![]).unwrap();
        let json = serde_json::to_string(&registry.to_document()).unwrap();
        let loaded = Registry::from_json_str(&json).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.concepts()[0].id, "spin");
    }
}
