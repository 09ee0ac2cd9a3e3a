pub mod config;
pub mod error;
pub mod types;

pub use config::BossConfig;
pub use error::{FuzzyError, Result};
pub use types::{Hand, Tick, Vec3};
