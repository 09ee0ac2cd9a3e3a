//! Boss decision layer integration tests
//!
//! Drives the controller through the fixed-tick scheduler with both
//! deterministic and seeded random sources.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use fuzzy_boss::boss::{
    standard_engine, BossController, BossEvent, HandState, Observation, RandomSource, RngSource,
    SequenceSource,
};
use fuzzy_boss::core::types::{Hand, Vec3};
use fuzzy_boss::core::BossConfig;
use fuzzy_boss::fuzzy::load_rulebook;
use fuzzy_boss::simulation::FixedTickScheduler;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn player_near_left_hand(aggression: f32) -> Observation {
    Observation {
        left_hand: Vec3::new(-3.0, 0.0, 0.0),
        right_hand: Vec3::new(3.0, 0.0, 0.0),
        player: Vec3::new(-2.0, 0.0, 1.0),
        player_aggression: aggression,
    }
}

fn run(
    boss: &mut BossController,
    observation: &Observation,
    rng: &mut dyn RandomSource,
    ticks: u64,
) -> Vec<(u64, BossEvent)> {
    let mut timeline = Vec::new();
    for _ in 0..ticks {
        for event in boss.tick(observation, rng).unwrap() {
            timeline.push((boss.current_tick(), event));
        }
    }
    timeline
}

#[test]
fn test_shipped_config_and_rule_book_drive_a_boss() {
    let config = BossConfig::load(Path::new("data/boss.toml")).unwrap();
    let engine = load_rulebook(Path::new("data/rulebooks/standard.toml")).unwrap();
    let mut boss = BossController::new(config, Arc::new(engine)).unwrap();

    let mut rng = RngSource::new(ChaCha8Rng::seed_from_u64(42));
    let timeline = run(&mut boss, &player_near_left_hand(0.9), &mut rng, 1800);

    assert!(timeline
        .iter()
        .any(|(_, e)| matches!(e, BossEvent::AttackStarted { .. })));
}

#[test]
fn test_same_seed_same_timeline() {
    let observation = player_near_left_hand(0.7);
    let timeline = |seed: u64| {
        let engine = Arc::new(standard_engine().unwrap());
        let mut boss = BossController::new(BossConfig::default(), engine).unwrap();
        boss.take_damage(200);
        let mut rng = RngSource::new(ChaCha8Rng::seed_from_u64(seed));
        run(&mut boss, &observation, &mut rng, 1200)
    };

    assert_eq!(timeline(7), timeline(7));
}

#[test]
fn test_attack_timeline_follows_configured_durations() {
    let config = BossConfig {
        tick_rate: 10,
        attack_delay_secs: 2.0,
        attack_cooldown_secs: 4.0,
        ..Default::default()
    };
    let mut boss = BossController::new(config, Arc::new(standard_engine().unwrap())).unwrap();

    // Pick the left hand, then always commit
    let mut rng = SequenceSource::new(vec![0.0]);
    let timeline = run(&mut boss, &player_near_left_hand(0.5), &mut rng, 70);

    let started = timeline
        .iter()
        .find(|(_, e)| matches!(e, BossEvent::AttackStarted { hand: Hand::Left, .. }))
        .map(|(t, _)| *t)
        .unwrap();
    let strike = timeline
        .iter()
        .find(|(_, e)| matches!(e, BossEvent::Strike { .. }))
        .map(|(t, _)| *t)
        .unwrap();
    let ready = timeline
        .iter()
        .find(|(_, e)| matches!(e, BossEvent::AttackReady { .. }))
        .map(|(t, _)| *t)
        .unwrap();

    assert_eq!(started, 1);
    assert_eq!(strike - started, 20);
    assert_eq!(ready - strike, 40);
}

#[test]
fn test_strike_targets_player_position_at_commit_time() {
    let config = BossConfig {
        tick_rate: 10,
        ..Default::default()
    };
    let mut boss = BossController::new(config, Arc::new(standard_engine().unwrap())).unwrap();
    let mut rng = SequenceSource::new(vec![0.0]);

    let first = player_near_left_hand(0.5);
    boss.tick(&first, &mut rng).unwrap();
    assert!(matches!(
        boss.hand_state(Hand::Left),
        HandState::Attacking { target, .. } if target == first.player
    ));

    // Player dodges away; the strike still lands where they were
    let moved = Observation {
        player: Vec3::new(-2.0, 0.0, 4.0),
        ..first
    };
    let timeline = run(&mut boss, &moved, &mut rng, 30);
    assert!(timeline
        .iter()
        .any(|(_, e)| matches!(e, BossEvent::Strike { target, .. } if *target == first.player)));
}

#[test]
fn test_scheduler_drives_controller_at_fixed_rate() {
    let config = BossConfig::default();
    let mut scheduler = FixedTickScheduler::new(config.tick_rate);
    let mut boss = BossController::new(config, Arc::new(standard_engine().unwrap())).unwrap();
    let mut rng = SequenceSource::new(vec![0.99]);
    let observation = player_near_left_hand(0.0);

    // Two seconds of uneven frames
    let frames = [16u64, 17, 33, 8, 50, 100, 276, 500, 1000];
    for ms in frames {
        for _ in 0..scheduler.advance(Duration::from_millis(ms)) {
            boss.tick(&observation, &mut rng).unwrap();
        }
    }

    assert_eq!(boss.current_tick(), scheduler.current_tick());
    assert_eq!(boss.current_tick(), 120);
}

#[test]
fn test_avoidance_only_within_range() {
    let config = BossConfig {
        attack_probability_scale: 0.0,
        ..Default::default()
    };
    let mut boss = BossController::new(config, Arc::new(standard_engine().unwrap())).unwrap();
    boss.take_damage(250);
    let mut rng = SequenceSource::new(vec![0.0]);

    // Left hand 1.41 away from the player, right hand over 5 away
    let timeline = run(&mut boss, &player_near_left_hand(0.0), &mut rng, 10);
    let avoiding: Vec<_> = timeline
        .iter()
        .filter_map(|(_, e)| match e {
            BossEvent::AvoidanceStarted { hand, .. } => Some(*hand),
            _ => None,
        })
        .collect();

    assert_eq!(avoiding, vec![Hand::Left]);
    assert!(boss.hand_state(Hand::Right).is_idle());
}
