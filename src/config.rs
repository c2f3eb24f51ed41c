//! Game configuration: base payoffs and the shaping policy.
//!
//! The configuration is built once, validated, and passed by reference into
//! tree construction. Nothing deeper in the recursion reads global settings.

use serde::{Deserialize, Serialize};

use crate::shaping::ShapingPolicy;

/// Base payoffs for each outcome, before shaping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payoffs {
    pub win: f64,
    pub lose: f64,
    pub tie: f64,
}

impl Payoffs {
    /// Create a payoff triple.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPayoff`] if any value is NaN or infinite.
    pub fn new(win: f64, lose: f64, tie: f64) -> crate::Result<Self> {
        for (outcome, value) in [("win", win), ("lose", lose), ("tie", tie)] {
            if !value.is_finite() {
                return Err(crate::Error::InvalidPayoff { outcome, value });
            }
        }
        Ok(Self { win, lose, tie })
    }
}

impl Default for Payoffs {
    fn default() -> Self {
        Self {
            win: 1.0,
            lose: -1.0,
            tie: 0.0,
        }
    }
}

/// Everything tree construction needs to assign payoffs.
///
/// # Examples
///
/// ```
/// use spne::{GameConfig, Payoffs, ShapingPolicy};
///
/// let config = GameConfig::new(Payoffs::new(10.0, -10.0, 0.0).unwrap())
///     .with_policy(ShapingPolicy::Shortest);
/// assert!(config.shaped_win(1) > config.shaped_win(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub payoffs: Payoffs,
    pub policy: ShapingPolicy,
}

impl GameConfig {
    /// Create a configuration with the given payoffs and the default policy.
    pub fn new(payoffs: Payoffs) -> Self {
        Self {
            payoffs,
            policy: ShapingPolicy::default(),
        }
    }

    /// Set the shaping policy.
    pub fn with_policy(mut self, policy: ShapingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn shaped_win(&self, depth: usize) -> f64 {
        self.policy.shape(self.payoffs.win, depth)
    }

    pub fn shaped_lose(&self, depth: usize) -> f64 {
        self.policy.shape(self.payoffs.lose, depth)
    }

    pub fn shaped_tie(&self, depth: usize) -> f64 {
        self.policy.shape(self.payoffs.tie, depth)
    }
}
