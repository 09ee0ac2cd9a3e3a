//! Load rule books from TOML files
//!
//! ```toml
//! [variables.distance]
//! close = [0.0, 0.0, 5.0]
//!
//! [variables.level]
//! low = [0.0, 0.0, 0.3]
//!
//! [rule_sets.evasion]
//! inputs = ["distance", "level"]
//! output = "level"
//! rules = [{ if = ["close", "low"], then = "low" }]
//! ```
//!
//! Each term is built once and shared by every rule that names it.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::core::error::{FuzzyError, Result};
use crate::fuzzy::engine::InferenceEngine;
use crate::fuzzy::membership::MembershipFunction;
use crate::fuzzy::rule::{Rule, RuleSetId, Term};

#[derive(Debug, Deserialize)]
struct RulebookFile {
    #[serde(default)]
    variables: BTreeMap<String, BTreeMap<String, [f32; 3]>>,
    #[serde(default)]
    rule_sets: BTreeMap<String, RuleSetFile>,
}

#[derive(Debug, Deserialize)]
struct RuleSetFile {
    inputs: [String; 2],
    output: String,
    #[serde(default)]
    rules: Vec<RuleFile>,
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(rename = "if")]
    when: [String; 2],
    then: String,
}

/// Load a rule book from disk
pub fn load_rulebook(path: &Path) -> Result<InferenceEngine> {
    let content = fs::read_to_string(path)?;
    let engine = parse_rulebook(&content)?;
    tracing::info!(
        "Loaded rule book {:?} with {} rule sets",
        path,
        engine.rule_set_ids().len()
    );
    Ok(engine)
}

/// Build an engine from rule book TOML
pub fn parse_rulebook(content: &str) -> Result<InferenceEngine> {
    let file: RulebookFile = toml::from_str(content)?;

    let mut variables: BTreeMap<&str, BTreeMap<&str, Term>> = BTreeMap::new();
    for (variable, terms) in &file.variables {
        let built = variables.entry(variable.as_str()).or_default();
        for (name, [a, b, c]) in terms {
            built.insert(name.as_str(), Arc::new(MembershipFunction::new(*a, *b, *c)?));
        }
    }

    let lookup = |variable: &str, term: &str| -> Result<Term> {
        variables
            .get(variable)
            .and_then(|terms| terms.get(term))
            .cloned()
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: variable.to_string(),
                term: term.to_string(),
            })
    };

    let mut engine = InferenceEngine::new();
    for (name, set) in &file.rule_sets {
        let id = RuleSetId::new(name.as_str());
        engine.add_rule_set(id.clone());

        let [input1, input2] = &set.inputs;
        for rule in &set.rules {
            let [term1, term2] = &rule.when;
            engine.push_rule(
                id.clone(),
                Rule::new(
                    lookup(input1.as_str(), term1.as_str())?,
                    lookup(input2.as_str(), term2.as_str())?,
                    lookup(set.output.as_str(), rule.then.as_str())?,
                ),
            );
        }
        tracing::debug!("Rule set {} loaded with {} rules", id, set.rules.len());
    }

    Ok(engine)
}
