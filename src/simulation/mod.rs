//! Fixed-tick driving of the decision layer

pub mod scheduler;

pub use scheduler::{secs_to_ticks, FixedTickScheduler};
