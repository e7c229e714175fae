//! Scoring configuration.
//!
//! The defaults reproduce the bundled games: 1000 points for matching the
//! reference, 50 points off per hint and 25 per mistake. Overrides can be
//! parsed from TOML:
//!
//! ```
//! use u_puzzle::scoring::ScoringConfig;
//!
//! let config = ScoringConfig::from_toml_str(r#"
//!     hint_penalty = 100
//! "#).unwrap();
//!
//! assert_eq!(config.hint_penalty, 100);
//! assert_eq!(config.mistake_penalty, 25);
//! assert_eq!(config.max_score, 1000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Point values used by the score engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points awarded at efficiency 1.0.
    pub max_score: u32,

    /// Points deducted per hint used.
    pub hint_penalty: u32,

    /// Points deducted per mistake made.
    pub mistake_penalty: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_score: 1000,
            hint_penalty: 50,
            mistake_penalty: 25,
        }
    }
}

impl ScoringConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from a TOML string; missing keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] on malformed TOML, unknown keys, or a
    /// zero `max_score`.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can produce meaningful scores.
    pub fn validate(&self) -> Result<()> {
        if self.max_score == 0 {
            return Err(GameError::Config("max_score must be positive".into()));
        }
        Ok(())
    }

    /// Sets the points deducted per hint.
    pub fn with_hint_penalty(mut self, penalty: u32) -> Self {
        self.hint_penalty = penalty;
        self
    }

    /// Sets the points deducted per mistake.
    pub fn with_mistake_penalty(mut self, penalty: u32) -> Self {
        self.mistake_penalty = penalty;
        self
    }

    /// Total deduction for the given counters.
    pub fn penalty(&self, hints_used: u32, mistakes: u32) -> i64 {
        i64::from(self.hint_penalty) * i64::from(hints_used)
            + i64::from(self.mistake_penalty) * i64::from(mistakes)
    }
}
