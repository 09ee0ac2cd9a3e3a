//! Standard term catalogue and rule sets of the boss
//!
//! Evasion reads (distance to player, own health ratio) and answers how
//! likely a hand is to dodge. Attack reads (readiness, player aggression)
//! and answers how likely the boss is to strike. Both outputs use the same
//! low / medium / high likelihood terms on [0, 1].

use std::sync::Arc;

use crate::core::error::Result;
use crate::fuzzy::{InferenceEngine, MembershipFunction, RuleSetId, Term};

/// Low / medium / high terms over one unit-interval variable
#[derive(Debug, Clone)]
pub struct LevelTerms {
    pub low: Term,
    pub medium: Term,
    pub high: Term,
}

impl LevelTerms {
    fn unit_interval() -> Result<Self> {
        Ok(Self {
            low: term(0.0, 0.0, 0.3)?,
            medium: term(0.2, 0.5, 0.8)?,
            high: term(0.7, 1.0, 1.0)?,
        })
    }
}

/// Close / medium / far terms over world-unit distance
#[derive(Debug, Clone)]
pub struct DistanceTerms {
    pub close: Term,
    pub medium: Term,
    pub far: Term,
}

/// Every term the standard rule sets refer to
#[derive(Debug, Clone)]
pub struct StandardTerms {
    pub distance: DistanceTerms,
    /// Used for both readiness and health ratio
    pub level: LevelTerms,
    pub aggression: LevelTerms,
    pub likelihood: LevelTerms,
}

impl StandardTerms {
    pub fn new() -> Result<Self> {
        Ok(Self {
            distance: DistanceTerms {
                close: term(0.0, 0.0, 5.0)?,
                medium: term(3.0, 7.0, 10.0)?,
                far: term(8.0, 15.0, 20.0)?,
            },
            level: LevelTerms::unit_interval()?,
            aggression: LevelTerms::unit_interval()?,
            likelihood: LevelTerms::unit_interval()?,
        })
    }
}

fn term(a: f32, b: f32, c: f32) -> Result<Term> {
    Ok(Arc::new(MembershipFunction::new(a, b, c)?))
}

/// Build the engine holding the standard evasion and attack sets
pub fn standard_engine() -> Result<InferenceEngine> {
    let terms = StandardTerms::new()?;
    let mut engine = InferenceEngine::new();
    add_evasion_rules(&mut engine, &terms)?;
    add_attack_rules(&mut engine, &terms)?;
    Ok(engine)
}

/// Healthy hands close to the player rarely dodge; wounded ones do.
fn add_evasion_rules(engine: &mut InferenceEngine, terms: &StandardTerms) -> Result<()> {
    let d = &terms.distance;
    let h = &terms.level;
    let out = &terms.likelihood;

    let table = [
        (&d.close, &h.low, &out.high),
        (&d.close, &h.medium, &out.medium),
        (&d.close, &h.high, &out.low),
        (&d.medium, &h.low, &out.medium),
        (&d.medium, &h.medium, &out.medium),
        (&d.medium, &h.high, &out.low),
        (&d.far, &h.low, &out.low),
        (&d.far, &h.medium, &out.low),
        (&d.far, &h.high, &out.low),
    ];
    for (distance, health, likelihood) in table {
        engine.add_rule(
            RuleSetId::evasion(),
            distance.clone(),
            health.clone(),
            likelihood.clone(),
        )?;
    }
    Ok(())
}

/// A ready boss punishes an aggressive player.
fn add_attack_rules(engine: &mut InferenceEngine, terms: &StandardTerms) -> Result<()> {
    let r = &terms.level;
    let a = &terms.aggression;
    let out = &terms.likelihood;

    let table = [
        (&r.low, &a.low, &out.low),
        (&r.low, &a.medium, &out.low),
        (&r.low, &a.high, &out.medium),
        (&r.medium, &a.low, &out.low),
        (&r.medium, &a.medium, &out.medium),
        (&r.medium, &a.high, &out.high),
        (&r.high, &a.low, &out.medium),
        (&r.high, &a.medium, &out.high),
        (&r.high, &a.high, &out.high),
    ];
    for (readiness, aggression, likelihood) in table {
        engine.add_rule(
            RuleSetId::attack(),
            readiness.clone(),
            aggression.clone(),
            likelihood.clone(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_engine_has_both_sets() {
        let engine = standard_engine().unwrap();
        assert_eq!(engine.rules(&RuleSetId::evasion()).map(|r| r.len()), Some(9));
        assert_eq!(engine.rules(&RuleSetId::attack()).map(|r| r.len()), Some(9));
    }

    #[test]
    fn test_medium_readiness_medium_aggression_is_medium() {
        let engine = standard_engine().unwrap();
        let p = engine.evaluate(&RuleSetId::attack(), 0.5, 0.5).unwrap();
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_wounded_hand_next_to_player_dodges_more() {
        let engine = standard_engine().unwrap();
        let wounded = engine.evaluate(&RuleSetId::evasion(), 1.0, 0.1).unwrap();
        let healthy = engine.evaluate(&RuleSetId::evasion(), 1.0, 0.95).unwrap();
        assert!(wounded > healthy);
    }

    #[test]
    fn test_outputs_are_probabilities() {
        let engine = standard_engine().unwrap();
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            for j in 0..=20 {
                let y = j as f32 / 20.0;
                let attack = engine.evaluate(&RuleSetId::attack(), x, y).unwrap();
                let evasion = engine.evaluate(&RuleSetId::evasion(), x * 20.0, y).unwrap();
                assert!((0.0..=1.0).contains(&attack));
                assert!((0.0..=1.0).contains(&evasion));
            }
        }
    }
}
