//! Boss configuration with documented constants
//!
//! Every tunable number of the encounter lives here. Durations are in
//! seconds and converted to ticks by the scheduler.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{FuzzyError, Result};

/// Configuration for the boss decision layer
///
/// Defaults match the tuned values shipped in `data/boss.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossConfig {
    // === GATES ===
    /// A hand may only attack when the player is strictly closer than this
    /// (world units)
    pub detection_range: f32,

    /// A hand never evades when the player is farther than this
    ///
    /// Must be small relative to the distance terms of the evasion rules,
    /// otherwise the rule base sees inputs it was not tuned for.
    pub avoidance_detection_range: f32,

    // === ATTACK TIMING ===
    /// Wind-up between committing to an attack and the strike
    pub attack_delay_secs: f32,

    /// Cooldown after the strike before any hand may attack again
    pub attack_cooldown_secs: f32,

    // === AVOIDANCE TIMING ===
    /// Time an evading hand spends raised and returning
    pub avoidance_duration_secs: f32,

    /// Per-hand cooldown after an avoidance finishes
    ///
    /// While any hand is avoiding or cooling down from avoidance, neither
    /// hand starts a new avoidance.
    pub avoidance_cooldown_secs: f32,

    // === DIFFICULTY ===
    /// Multiplier applied to the attack probability before sampling
    pub attack_probability_scale: f32,

    /// Multiplier applied to the evasion probability before sampling
    pub avoidance_probability_scale: f32,

    // === HEALTH ===
    pub max_hp: u32,

    // === READINESS ===
    /// Readiness reported before the first attack (0.0 to 1.0)
    pub initial_readiness: f32,

    /// Time for readiness to climb from 0.0 back to 1.0 once an attack
    /// cooldown ends
    pub readiness_recovery_secs: f32,

    // === SCHEDULER ===
    /// Fixed ticks per second
    pub tick_rate: u32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            detection_range: 5.0,
            avoidance_detection_range: 2.0,
            attack_delay_secs: 2.0,
            attack_cooldown_secs: 4.0,
            avoidance_duration_secs: 2.0,
            avoidance_cooldown_secs: 6.0,
            attack_probability_scale: 1.0,
            avoidance_probability_scale: 1.0,
            max_hp: 300,
            initial_readiness: 0.5,
            readiness_recovery_secs: 4.0,
            tick_rate: 60,
        }
    }
}

impl BossConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    ///
    /// Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: BossConfig = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded boss config from {:?}", path);
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.detection_range > 0.0) || !(self.avoidance_detection_range > 0.0) {
            return Err(FuzzyError::InvalidConfig(
                "detection ranges must be positive".into(),
            ));
        }

        let durations = [
            ("attack_delay_secs", self.attack_delay_secs),
            ("attack_cooldown_secs", self.attack_cooldown_secs),
            ("avoidance_duration_secs", self.avoidance_duration_secs),
            ("avoidance_cooldown_secs", self.avoidance_cooldown_secs),
            ("readiness_recovery_secs", self.readiness_recovery_secs),
        ];
        for (name, secs) in durations {
            if !(secs >= 0.0) {
                return Err(FuzzyError::InvalidConfig(format!(
                    "{} ({}) must not be negative",
                    name, secs
                )));
            }
        }

        if !(self.attack_probability_scale >= 0.0) || !(self.avoidance_probability_scale >= 0.0) {
            return Err(FuzzyError::InvalidConfig(
                "probability scales must not be negative".into(),
            ));
        }

        if self.max_hp == 0 {
            return Err(FuzzyError::InvalidConfig("max_hp must be positive".into()));
        }

        if !(0.0..=1.0).contains(&self.initial_readiness) {
            return Err(FuzzyError::InvalidConfig(format!(
                "initial_readiness ({}) must be within [0, 1]",
                self.initial_readiness
            )));
        }

        if self.tick_rate == 0 {
            return Err(FuzzyError::InvalidConfig("tick_rate must be positive".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BossConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let config = BossConfig::new();
        assert_eq!(config.detection_range, 5.0);
        assert_eq!(config.avoidance_detection_range, 2.0);
        assert_eq!(config.max_hp, 300);
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let config = BossConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FuzzyError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_negative_cooldown() {
        let config = BossConfig {
            attack_cooldown_secs: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_range() {
        let config = BossConfig {
            detection_range: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BossConfig = toml::from_str("attack_probability_scale = 1.5\n").unwrap();
        assert_eq!(config.attack_probability_scale, 1.5);
        assert_eq!(config.attack_cooldown_secs, 4.0);
    }

    #[test]
    fn test_load_shipped_config() {
        let config = BossConfig::load(Path::new("data/boss.toml")).expect("Should load boss config");
        assert!(config.detection_range > config.avoidance_detection_range);
    }
}
