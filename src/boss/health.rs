//! Hit points, reduced to the health ratio the evasion rules read

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// Full health. A zero maximum is raised to 1.
    pub fn new(max: u32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.current = self.current.saturating_sub(damage);
    }

    /// Remaining health as a fraction of maximum (0.0 to 1.0)
    pub fn ratio(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}
