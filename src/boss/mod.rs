//! Boss decision layer
//!
//! Two hands, two rule sets. The fuzzy engine answers "how likely"; the
//! controller decides when to ask and what the answer commits the boss to.

pub mod controller;
pub mod health;
pub mod policy;
pub mod random;
pub mod rulebook;
pub mod state;

pub use controller::{BossController, BossEvent, Observation};
pub use health::Health;
pub use policy::DecisionPolicy;
pub use random::{RandomSource, RngSource, SequenceSource};
pub use rulebook::{standard_engine, StandardTerms};
pub use state::{HandState, HandTimings, HandTransition};
