//! Probability-to-action sampling

use crate::boss::random::RandomSource;

/// Commits to an action when a uniform sample falls below the scaled
/// probability
///
/// Scales above 1 make the boss more eager; a probability of 0 never
/// commits regardless of scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionPolicy;

impl DecisionPolicy {
    pub fn commit(&self, probability: f32, scale: f32, rng: &mut dyn RandomSource) -> bool {
        let threshold = probability * scale;
        let sample = rng.sample();
        tracing::trace!("sample {:.3} vs threshold {:.3}", sample, threshold);
        sample < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boss::random::SequenceSource;

    #[test]
    fn test_commits_below_threshold() {
        let mut rng = SequenceSource::new(vec![0.3, 0.6]);
        let policy = DecisionPolicy;
        assert!(policy.commit(0.5, 1.0, &mut rng));
        assert!(!policy.commit(0.5, 1.0, &mut rng));
    }

    #[test]
    fn test_scale_raises_threshold() {
        let mut rng = SequenceSource::new(vec![0.6]);
        assert!(DecisionPolicy.commit(0.5, 1.5, &mut rng));
    }

    #[test]
    fn test_zero_probability_never_commits() {
        let mut rng = SequenceSource::new(vec![0.0]);
        assert!(!DecisionPolicy.commit(0.0, 10.0, &mut rng));
    }
}
