//! Per-hand state machine
//!
//! ```text
//! Idle -> Attacking -> CoolingDown -> Idle
//! Idle -> Avoiding -> AvoidanceCoolingDown -> Idle
//! ```
//!
//! Every timed state counts down in ticks. The fuzzy engine is consulted
//! only while a hand is `Idle`.

use serde::Serialize;

use crate::core::config::BossConfig;
use crate::core::types::{Tick, Vec3};
use crate::simulation::scheduler::secs_to_ticks;

/// Phase lengths in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandTimings {
    pub attack_delay: Tick,
    pub attack_cooldown: Tick,
    pub avoidance_duration: Tick,
    pub avoidance_cooldown: Tick,
}

impl HandTimings {
    pub fn from_config(config: &BossConfig) -> Self {
        let ticks = |secs| secs_to_ticks(secs, config.tick_rate);
        Self {
            attack_delay: ticks(config.attack_delay_secs),
            attack_cooldown: ticks(config.attack_cooldown_secs),
            avoidance_duration: ticks(config.avoidance_duration_secs),
            avoidance_cooldown: ticks(config.avoidance_cooldown_secs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HandState {
    #[default]
    Idle,
    /// Winding up toward the position the player held when the attack began
    Attacking { remaining: Tick, target: Vec3 },
    CoolingDown { remaining: Tick },
    Avoiding { remaining: Tick },
    AvoidanceCoolingDown { remaining: Tick },
}

/// What happened when a timed state ran out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandTransition {
    /// Wind-up finished; the hand strikes `target` and starts cooling down
    Strike { target: Vec3 },
    /// Attack cooldown over, hand is idle again
    AttackReady,
    /// Hand is back in place and starts its avoidance cooldown
    AvoidanceFinished,
    /// Avoidance cooldown over, hand is idle again
    AvoidanceReady,
}

impl HandState {
    pub fn is_idle(&self) -> bool {
        matches!(self, HandState::Idle)
    }

    /// Attacking or cooling down from an attack
    pub fn is_attack_phase(&self) -> bool {
        matches!(
            self,
            HandState::Attacking { .. } | HandState::CoolingDown { .. }
        )
    }

    /// Avoiding or cooling down from an avoidance
    pub fn is_avoidance_phase(&self) -> bool {
        matches!(
            self,
            HandState::Avoiding { .. } | HandState::AvoidanceCoolingDown { .. }
        )
    }

    /// Begin winding up an attack. Returns false unless idle.
    pub fn start_attack(&mut self, target: Vec3, timings: &HandTimings) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = HandState::Attacking {
            remaining: timings.attack_delay,
            target,
        };
        true
    }

    /// Begin an avoidance. Returns false unless idle.
    pub fn start_avoidance(&mut self, timings: &HandTimings) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = HandState::Avoiding {
            remaining: timings.avoidance_duration,
        };
        true
    }

    /// Count down one tick, moving to the next state when time runs out
    pub fn advance(&mut self, timings: &HandTimings) -> Option<HandTransition> {
        match *self {
            HandState::Idle => None,
            HandState::Attacking { remaining, target } => {
                if remaining <= 1 {
                    *self = HandState::CoolingDown {
                        remaining: timings.attack_cooldown,
                    };
                    Some(HandTransition::Strike { target })
                } else {
                    *self = HandState::Attacking {
                        remaining: remaining - 1,
                        target,
                    };
                    None
                }
            }
            HandState::CoolingDown { remaining } => {
                if remaining <= 1 {
                    *self = HandState::Idle;
                    Some(HandTransition::AttackReady)
                } else {
                    *self = HandState::CoolingDown {
                        remaining: remaining - 1,
                    };
                    None
                }
            }
            HandState::Avoiding { remaining } => {
                if remaining <= 1 {
                    *self = HandState::AvoidanceCoolingDown {
                        remaining: timings.avoidance_cooldown,
                    };
                    Some(HandTransition::AvoidanceFinished)
                } else {
                    *self = HandState::Avoiding {
                        remaining: remaining - 1,
                    };
                    None
                }
            }
            HandState::AvoidanceCoolingDown { remaining } => {
                if remaining <= 1 {
                    *self = HandState::Idle;
                    Some(HandTransition::AvoidanceReady)
                } else {
                    *self = HandState::AvoidanceCoolingDown {
                        remaining: remaining - 1,
                    };
                    None
                }
            }
        }
    }
}
