//! Inference engine: min-activation with centroid-singleton defuzzification
//!
//! Each rule fires with `min(m1, m2)` and pulls the output toward its
//! consequent's centroid in proportion to that weight. The result is the
//! weighted average over all rules of the set, or 0 when nothing fired.
//!
//! The engine holds no state between calls. Build it, then share it
//! read-only; `evaluate` takes `&self` and the type is `Send + Sync`.

use ahash::AHashMap;
use serde::Serialize;

use crate::core::error::{FuzzyError, Result};
use crate::fuzzy::rule::{Rule, RuleActivation, RuleSetId, Term};

/// Full breakdown of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Per-rule activations in insertion order
    pub activations: Vec<RuleActivation>,
    pub weighted_sum: f32,
    pub weight_total: f32,
    pub output: f32,
}

/// Collection of independent, named rule sets
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    rule_sets: AHashMap<RuleSetId, Vec<Rule>>,
}

impl InferenceEngine {
    /// Create an engine with no rule sets
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule set with no rules yet
    ///
    /// Evaluating an empty set yields 0 rather than `UnknownRuleSet`.
    pub fn add_rule_set(&mut self, rule_set: RuleSetId) {
        self.rule_sets.entry(rule_set).or_default();
    }

    /// Append a rule to `rule_set`, creating the set on first use
    ///
    /// Overlapping or duplicate rules are kept; each contributes to the
    /// average. Any absent term fails with `InvalidRule` and leaves the
    /// engine untouched.
    pub fn add_rule(
        &mut self,
        rule_set: RuleSetId,
        antecedent1: impl Into<Option<Term>>,
        antecedent2: impl Into<Option<Term>>,
        consequent: impl Into<Option<Term>>,
    ) -> Result<()> {
        let rule = Rule::from_parts(antecedent1.into(), antecedent2.into(), consequent.into())?;
        self.push_rule(rule_set, rule);
        Ok(())
    }

    /// Append an already assembled rule
    pub fn push_rule(&mut self, rule_set: RuleSetId, rule: Rule) {
        self.rule_sets.entry(rule_set).or_default().push(rule);
    }

    /// Rules of a set in insertion order
    pub fn rules(&self, rule_set: &RuleSetId) -> Option<&[Rule]> {
        self.rule_sets.get(rule_set).map(Vec::as_slice)
    }

    pub fn has_rule_set(&self, rule_set: &RuleSetId) -> bool {
        self.rule_sets.contains_key(rule_set)
    }

    /// Registered set identifiers, sorted by name
    pub fn rule_set_ids(&self) -> Vec<&RuleSetId> {
        let mut ids: Vec<_> = self.rule_sets.keys().collect();
        ids.sort();
        ids
    }

    /// Crisp output of `rule_set` for the two inputs
    pub fn evaluate(&self, rule_set: &RuleSetId, input1: f32, input2: f32) -> Result<f32> {
        self.evaluate_traced(rule_set, input1, input2)
            .map(|evaluation| evaluation.output)
    }

    /// Like `evaluate`, but keeps every rule's activation for diagnostics
    pub fn evaluate_traced(
        &self,
        rule_set: &RuleSetId,
        input1: f32,
        input2: f32,
    ) -> Result<Evaluation> {
        let rules = self
            .rule_sets
            .get(rule_set)
            .ok_or_else(|| FuzzyError::UnknownRuleSet(rule_set.clone()))?;

        let mut activations = Vec::with_capacity(rules.len());
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        for rule in rules {
            let activation = rule.activation(input1, input2);
            tracing::trace!(
                "{} rule: m1 {:.3}, m2 {:.3}, weight {:.3}, centroid {:.3}",
                rule_set,
                activation.membership1,
                activation.membership2,
                activation.weight,
                activation.centroid
            );

            weighted_sum += activation.weight * activation.centroid;
            weight_total += activation.weight;
            activations.push(activation);
        }

        let output = if weight_total > 0.0 {
            weighted_sum / weight_total
        } else {
            0.0
        };

        tracing::debug!(
            "{} evaluated ({}, {}): sum {:.4}, weight {:.4}, output {:.4}",
            rule_set,
            input1,
            input2,
            weighted_sum,
            weight_total,
            output
        );

        Ok(Evaluation {
            activations,
            weighted_sum,
            weight_total,
            output,
        })
    }
}
