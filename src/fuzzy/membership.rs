//! Triangular membership functions
//!
//! A term such as "close" or "high readiness" is a triangle over a scalar
//! axis: zero at the left foot `a`, one at the peak `b`, zero again at the
//! right foot `c`. What the axis means is up to the caller.

use serde::{Deserialize, Serialize};

use crate::core::error::{FuzzyError, Result};

/// Triangular fuzzy set with breakpoints `a <= b <= c`
///
/// Immutable once built. Rules share terms through `Arc`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 3]", into = "[f32; 3]")]
pub struct MembershipFunction {
    a: f32,
    b: f32,
    c: f32,
}

impl MembershipFunction {
    /// Build a triangle from left foot, peak and right foot
    ///
    /// Fails with `InvalidShape` when the breakpoints are out of order or
    /// any of them is NaN or infinite. Degenerate triangles (`a == b`, `b == c`, or a
    /// single point) are accepted.
    pub fn new(a: f32, b: f32, c: f32) -> Result<Self> {
        // NaN fails both comparisons
        if !(a <= b && b <= c) || !(a.is_finite() && c.is_finite()) {
            return Err(FuzzyError::InvalidShape { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    pub fn breakpoints(&self) -> (f32, f32, f32) {
        (self.a, self.b, self.c)
    }

    /// Degree of membership of `value`, in [0, 1]
    ///
    /// The peak always has membership 1, including when it coincides with a
    /// foot; zero-width segments are never divided by.
    pub fn membership(&self, value: f32) -> f32 {
        if value == self.b {
            1.0
        } else if value <= self.a {
            0.0
        } else if value < self.b {
            (value - self.a) / (self.b - self.a)
        } else if value < self.c {
            (self.c - value) / (self.c - self.b)
        } else {
            0.0
        }
    }

    /// Representative value of the term used for defuzzification
    ///
    /// Mean of the three breakpoints. This is not the geometric centroid of
    /// an asymmetric triangle and is not meant to be.
    pub fn centroid(&self) -> f32 {
        (self.a + self.b + self.c) / 3.0
    }
}

impl TryFrom<[f32; 3]> for MembershipFunction {
    type Error = FuzzyError;

    fn try_from([a, b, c]: [f32; 3]) -> Result<Self> {
        Self::new(a, b, c)
    }
}

impl From<MembershipFunction> for [f32; 3] {
    fn from(mf: MembershipFunction) -> Self {
        [mf.a, mf.b, mf.c]
    }
}
