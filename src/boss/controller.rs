//! Boss controller - the decision layer above the fuzzy engine
//!
//! Called once per fixed tick with what the boss can observe. Advances the
//! per-hand timers, then, for hands that are idle, gates by distance,
//! asks the engine for a probability and samples it through the policy.
//! Motion and rendering consume the returned events.

use serde::Serialize;
use std::sync::Arc;

use crate::boss::health::Health;
use crate::boss::policy::DecisionPolicy;
use crate::boss::random::RandomSource;
use crate::boss::state::{HandState, HandTimings, HandTransition};
use crate::core::config::BossConfig;
use crate::core::error::{FuzzyError, Result};
use crate::core::types::{Hand, Tick, Vec3};
use crate::fuzzy::{InferenceEngine, RuleSetId};
use crate::simulation::scheduler::secs_to_ticks;

/// Everything the boss perceives on one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub left_hand: Vec3,
    pub right_hand: Vec3,
    pub player: Vec3,
    /// Player aggression supplied by the player's own tracker (0.0 to 1.0)
    pub player_aggression: f32,
}

impl Observation {
    pub fn hand_position(&self, hand: Hand) -> Vec3 {
        match hand {
            Hand::Left => self.left_hand,
            Hand::Right => self.right_hand,
        }
    }

    pub fn distance_to_player(&self, hand: Hand) -> f32 {
        self.hand_position(hand).distance(&self.player)
    }
}

/// Events for the motion and presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BossEvent {
    AttackStarted {
        hand: Hand,
        target: Vec3,
        probability: f32,
    },
    Strike {
        hand: Hand,
        target: Vec3,
    },
    AttackReady {
        hand: Hand,
    },
    AvoidanceStarted {
        hand: Hand,
        probability: f32,
    },
    AvoidanceFinished {
        hand: Hand,
    },
    AvoidanceReady {
        hand: Hand,
    },
}

/// Attack readiness: a fixed value until the first attack, then a linear
/// climb from 0 to 1 after every attack cooldown
#[derive(Debug, Clone, Copy)]
struct Readiness {
    initial: f32,
    recovery_ticks: Tick,
    recovering_since: Option<Tick>,
}

impl Readiness {
    fn value(&self, now: Tick) -> f32 {
        match self.recovering_since {
            None => self.initial,
            Some(_) if self.recovery_ticks == 0 => 1.0,
            Some(since) => {
                let elapsed = now.saturating_sub(since) as f32;
                (elapsed / self.recovery_ticks as f32).min(1.0)
            }
        }
    }
}

pub struct BossController {
    config: BossConfig,
    engine: Arc<InferenceEngine>,
    policy: DecisionPolicy,
    timings: HandTimings,
    hands: [HandState; 2],
    health: Health,
    readiness: Readiness,
    current_tick: Tick,
}

impl BossController {
    /// Create a controller over a frozen rule base
    ///
    /// The engine must define the `evasion` and `attack` rule sets; the
    /// config must validate.
    pub fn new(config: BossConfig, engine: Arc<InferenceEngine>) -> Result<Self> {
        config.validate()?;
        for id in [RuleSetId::evasion(), RuleSetId::attack()] {
            if !engine.has_rule_set(&id) {
                return Err(FuzzyError::UnknownRuleSet(id));
            }
        }

        let readiness = Readiness {
            initial: config.initial_readiness,
            recovery_ticks: secs_to_ticks(config.readiness_recovery_secs, config.tick_rate),
            recovering_since: None,
        };

        Ok(Self {
            timings: HandTimings::from_config(&config),
            health: Health::new(config.max_hp),
            hands: [HandState::Idle; 2],
            policy: DecisionPolicy,
            readiness,
            current_tick: 0,
            config,
            engine,
        })
    }

    pub fn config(&self) -> &BossConfig {
        &self.config
    }

    pub fn hand_state(&self, hand: Hand) -> HandState {
        self.hands[hand.index()]
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.health.take_damage(damage);
        if self.health.is_dead() {
            tracing::info!("Boss defeated at tick {}", self.current_tick);
        }
    }

    /// Current attack readiness (0.0 to 1.0)
    pub fn readiness(&self) -> f32 {
        self.readiness.value(self.current_tick)
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Run one fixed tick
    ///
    /// A dead boss still finishes its running timers but decides nothing.
    pub fn tick(
        &mut self,
        observation: &Observation,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<BossEvent>> {
        self.current_tick += 1;
        let mut events = Vec::new();

        self.advance_hands(&mut events);

        if !self.health.is_dead() {
            self.decide_attack(observation, rng, &mut events)?;
            self.decide_avoidance(observation, rng, &mut events)?;
        }

        Ok(events)
    }

    fn advance_hands(&mut self, events: &mut Vec<BossEvent>) {
        for &hand in Hand::all() {
            let Some(transition) = self.hands[hand.index()].advance(&self.timings) else {
                continue;
            };

            tracing::debug!("Tick {}: {} hand {:?}", self.current_tick, hand, transition);
            events.push(match transition {
                HandTransition::Strike { target } => BossEvent::Strike { hand, target },
                HandTransition::AttackReady => {
                    self.readiness.recovering_since = Some(self.current_tick);
                    BossEvent::AttackReady { hand }
                }
                HandTransition::AvoidanceFinished => BossEvent::AvoidanceFinished { hand },
                HandTransition::AvoidanceReady => BossEvent::AvoidanceReady { hand },
            });
        }
    }

    /// One attack at a time across both hands
    fn decide_attack(
        &mut self,
        observation: &Observation,
        rng: &mut dyn RandomSource,
        events: &mut Vec<BossEvent>,
    ) -> Result<()> {
        if self.hands.iter().any(HandState::is_attack_phase) {
            return Ok(());
        }

        let hand = if rng.sample() > 0.5 {
            Hand::Right
        } else {
            Hand::Left
        };
        if !self.hands[hand.index()].is_idle()
            || observation.distance_to_player(hand) >= self.config.detection_range
        {
            return Ok(());
        }

        let readiness = self.readiness();
        let probability = self.engine.evaluate(
            &RuleSetId::attack(),
            readiness,
            observation.player_aggression,
        )?;

        if self
            .policy
            .commit(probability, self.config.attack_probability_scale, rng)
        {
            let target = observation.player;
            self.hands[hand.index()].start_attack(target, &self.timings);
            tracing::info!(
                "Tick {}: {} hand attacks (p={:.3}, readiness={:.2})",
                self.current_tick,
                hand,
                probability,
                readiness
            );
            events.push(BossEvent::AttackStarted {
                hand,
                target,
                probability,
            });
        }

        Ok(())
    }

    /// Left before right; while any hand avoids or cools down from avoiding,
    /// neither starts a new avoidance
    fn decide_avoidance(
        &mut self,
        observation: &Observation,
        rng: &mut dyn RandomSource,
        events: &mut Vec<BossEvent>,
    ) -> Result<()> {
        if self.hands.iter().any(HandState::is_avoidance_phase) {
            return Ok(());
        }

        for &hand in Hand::all() {
            if !self.hands[hand.index()].is_idle() {
                continue;
            }

            let distance = observation.distance_to_player(hand);
            if distance > self.config.avoidance_detection_range {
                continue;
            }

            let probability =
                self.engine
                    .evaluate(&RuleSetId::evasion(), distance, self.health.ratio())?;

            if self
                .policy
                .commit(probability, self.config.avoidance_probability_scale, rng)
            {
                self.hands[hand.index()].start_avoidance(&self.timings);
                tracing::info!(
                    "Tick {}: {} hand evades (p={:.3}, distance={:.2})",
                    self.current_tick,
                    hand,
                    probability,
                    distance
                );
                events.push(BossEvent::AvoidanceStarted { hand, probability });
                break;
            }
        }

        Ok(())
    }
}
