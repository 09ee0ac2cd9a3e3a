//! Fuzzy inference: triangular terms, two-input rules, centroid defuzzification

pub mod engine;
pub mod loader;
pub mod membership;
pub mod rule;

pub use engine::{Evaluation, InferenceEngine};
pub use loader::{load_rulebook, parse_rulebook};
pub use membership::MembershipFunction;
pub use rule::{Rule, RuleActivation, RuleSetId, Term};
