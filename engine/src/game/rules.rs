use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

/// Difficulty-ramp and food-placement constants. These are configuration,
/// not behavior: the simulation reads them but never changes them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    /// Delay between ticks at the start of a game, in milliseconds.
    pub initial_delay_ms: u64,
    /// How much the delay shrinks per food item eaten.
    pub delay_step_ms: u64,
    /// Lower bound the delay never drops below.
    pub min_delay_ms: u64,
    /// Rejection-sampling budget for food placement before falling back to
    /// a row-major scan for the first free cell.
    pub food_spawn_attempts: u32,
}

impl GameRules {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            initial_delay_ms: 300,
            delay_step_ms: 15,
            min_delay_ms: 120,
            food_spawn_attempts: 500,
        }
    }
}

impl Validate for GameRules {
    fn validate(&self) -> Result<(), String> {
        if self.min_delay_ms == 0 {
            return Err("min_delay_ms must be greater than 0".to_string());
        }
        if self.initial_delay_ms < self.min_delay_ms {
            return Err("initial_delay_ms must not be below min_delay_ms".to_string());
        }
        if self.initial_delay_ms > 5000 {
            return Err("initial_delay_ms must not exceed 5000".to_string());
        }
        if self.food_spawn_attempts == 0 {
            return Err("food_spawn_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        assert!(GameRules::default().validate().is_ok());
    }

    #[test]
    fn test_zero_floor_rejected() {
        let rules = GameRules {
            min_delay_ms: 0,
            ..GameRules::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_initial_below_floor_rejected() {
        let rules = GameRules {
            initial_delay_ms: 100,
            min_delay_ms: 120,
            ..GameRules::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let rules = GameRules {
            food_spawn_attempts: 0,
            ..GameRules::default()
        };
        assert!(rules.validate().is_err());
    }
}
