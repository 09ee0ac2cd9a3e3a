//! Fuzzy Boss - fuzzy-inference decision engine for a two-handed boss

pub mod boss;
pub mod core;
pub mod fuzzy;
pub mod simulation;
