//! Weighted fuzzy rules and rule-set identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::core::error::{FuzzyError, Result};
use crate::fuzzy::membership::MembershipFunction;

/// Shared handle to a term. Many rules may point at the same triangle.
pub type Term = Arc<MembershipFunction>;

/// Name of an independent rule set inside an engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleSetId(String);

impl RuleSetId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Rule set deciding whether a hand evades
    pub fn evasion() -> Self {
        Self::new("evasion")
    }

    /// Rule set deciding whether the boss attacks
    pub fn attack() -> Self {
        Self::new("attack")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleSetId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for RuleSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// IF input1 is `antecedent1` AND input2 is `antecedent2` THEN output is `consequent`
#[derive(Debug, Clone)]
pub struct Rule {
    pub antecedent1: Term,
    pub antecedent2: Term,
    pub consequent: Term,
}

impl Rule {
    pub fn new(antecedent1: Term, antecedent2: Term, consequent: Term) -> Self {
        Self {
            antecedent1,
            antecedent2,
            consequent,
        }
    }

    /// Assemble a rule from possibly absent parts
    ///
    /// Fails with `InvalidRule` naming the first missing slot.
    pub fn from_parts(
        antecedent1: Option<Term>,
        antecedent2: Option<Term>,
        consequent: Option<Term>,
    ) -> Result<Self> {
        Ok(Self::new(
            antecedent1.ok_or(FuzzyError::InvalidRule("antecedent1"))?,
            antecedent2.ok_or(FuzzyError::InvalidRule("antecedent2"))?,
            consequent.ok_or(FuzzyError::InvalidRule("consequent"))?,
        ))
    }

    /// Firing strength for a pair of crisp inputs (fuzzy AND as minimum)
    pub fn activation(&self, input1: f32, input2: f32) -> RuleActivation {
        let membership1 = self.antecedent1.membership(input1);
        let membership2 = self.antecedent2.membership(input2);
        RuleActivation {
            membership1,
            membership2,
            weight: membership1.min(membership2),
            centroid: self.consequent.centroid(),
        }
    }
}

/// How strongly one rule fired during an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleActivation {
    pub membership1: f32,
    pub membership2: f32,
    pub weight: f32,
    pub centroid: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(a: f32, b: f32, c: f32) -> Term {
        Arc::new(MembershipFunction::new(a, b, c).unwrap())
    }

    #[test]
    fn test_from_parts_reports_missing_slot() {
        let t = term(0.0, 1.0, 2.0);
        let err = Rule::from_parts(Some(t.clone()), None, Some(t.clone())).unwrap_err();
        assert!(matches!(err, FuzzyError::InvalidRule("antecedent2")));

        let err = Rule::from_parts(Some(t.clone()), Some(t), None).unwrap_err();
        assert!(matches!(err, FuzzyError::InvalidRule("consequent")));
    }

    #[test]
    fn test_activation_takes_minimum() {
        let rule = Rule::new(term(0.0, 0.0, 5.0), term(0.2, 0.5, 0.8), term(0.0, 0.0, 0.3));
        let activation = rule.activation(4.0, 0.5);
        assert!((activation.membership1 - 0.2).abs() < 1e-6);
        assert_eq!(activation.membership2, 1.0);
        assert!((activation.weight - 0.2).abs() < 1e-6);
        assert!((activation.centroid - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_rule_set_id_display() {
        assert_eq!(RuleSetId::evasion().to_string(), "evasion");
        assert_eq!(RuleSetId::from("attack"), RuleSetId::attack());
    }
}
