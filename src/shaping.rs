//! Utility shaping policies
//!
//! A shaping policy rescales a base win/lose/tie payoff by the ply at which
//! the outcome is realised, letting players prefer quick or drawn-out
//! outcomes among otherwise equal ones.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Deepest ply reachable on a 3x3 board
pub const MAX_DEPTH: usize = 9;

/// Named strategy mapping `(base payoff, depth)` to a shaped payoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapingPolicy {
    /// Payoffs are used unchanged.
    #[default]
    Default,
    /// Later outcomes weigh more: factor `depth / (MAX_DEPTH + 1)`.
    Longest,
    /// Earlier outcomes weigh more: factor `1 - depth / (MAX_DEPTH + 1)`.
    Shortest,
}

impl ShapingPolicy {
    pub const ALL: [ShapingPolicy; 3] = [
        ShapingPolicy::Default,
        ShapingPolicy::Longest,
        ShapingPolicy::Shortest,
    ];

    /// Multiplier applied to a base payoff realised at `depth` (1-based ply).
    ///
    /// For `Longest` and `Shortest` the factor stays within `[0.1, 0.9]`
    /// for depths `1..=9`, so a payoff is never zeroed out nor left as is.
    pub fn factor(self, depth: usize) -> f64 {
        match self {
            ShapingPolicy::Default => 1.0,
            ShapingPolicy::Longest => longest_factor(depth),
            ShapingPolicy::Shortest => 1.0 - longest_factor(depth),
        }
    }

    /// Shape `base` for an outcome reached at `depth`.
    ///
    /// ```
    /// use spne::ShapingPolicy;
    ///
    /// assert_eq!(ShapingPolicy::Default.shape(1.0, 3), 1.0);
    /// assert_eq!(ShapingPolicy::Longest.shape(1.0, 5), 0.5);
    /// ```
    pub fn shape(self, base: f64, depth: usize) -> f64 {
        base * self.factor(depth)
    }
}

fn longest_factor(depth: usize) -> f64 {
    depth as f64 / (MAX_DEPTH + 1) as f64
}

impl fmt::Display for ShapingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShapingPolicy::Default => "default",
            ShapingPolicy::Longest => "longest",
            ShapingPolicy::Shortest => "shortest",
        };
        f.write_str(label)
    }
}

impl FromStr for ShapingPolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "none" => Ok(ShapingPolicy::Default),
            "longest" => Ok(ShapingPolicy::Longest),
            "shortest" => Ok(ShapingPolicy::Shortest),
            _ => Err(crate::Error::UnknownShapingPolicy {
                input: s.to_string(),
                expected: "default, longest, shortest".to_string(),
            }),
        }
    }
}
