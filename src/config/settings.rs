use crate::core::monetary::{MINING_DIFFICULTY, MINING_REWARD};
use crate::error::{BlockchainError, Result};
use std::env;

const MINING_DIFFICULTY_KEY: &str = "MINING_DIFFICULTY";
const MINING_REWARD_KEY: &str = "MINING_REWARD";

/// Node settings consumed by `Blockchain::with_settings`.
///
/// Held explicitly by the caller; there is no process-wide settings
/// singleton. Defaults come from the mining constants and can be raised or
/// lowered per instance, or read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    difficulty: usize,
    mining_reward: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Settings {
        Settings {
            difficulty: MINING_DIFFICULTY,
            mining_reward: MINING_REWARD,
        }
    }

    /// Defaults overridden by `MINING_DIFFICULTY` / `MINING_REWARD`
    /// environment variables. A variable that is present but malformed is
    /// a configuration error, not a silent fallback.
    pub fn from_env() -> Result<Settings> {
        let mut settings = Settings::new();

        if let Ok(raw) = env::var(MINING_DIFFICULTY_KEY) {
            settings.difficulty = raw.parse().map_err(|_| {
                BlockchainError::Config(format!("{MINING_DIFFICULTY_KEY} is not an integer: {raw}"))
            })?;
        }

        if let Ok(raw) = env::var(MINING_REWARD_KEY) {
            settings.mining_reward = raw.parse().map_err(|_| {
                BlockchainError::Config(format!("{MINING_REWARD_KEY} is not a number: {raw}"))
            })?;
        }

        Ok(settings)
    }

    pub fn with_difficulty(mut self, difficulty: usize) -> Settings {
        self.difficulty = difficulty;
        self
    }

    pub fn with_mining_reward(mut self, mining_reward: f64) -> Settings {
        self.mining_reward = mining_reward;
        self
    }

    pub fn get_difficulty(&self) -> usize {
        self.difficulty
    }

    pub fn get_mining_reward(&self) -> f64 {
        self.mining_reward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_mining_constants() {
        let settings = Settings::new();
        assert_eq!(settings.get_difficulty(), MINING_DIFFICULTY);
        assert_eq!(settings.get_mining_reward(), MINING_REWARD);
    }

    #[test]
    fn test_builder_overrides() {
        let settings = Settings::new().with_difficulty(1).with_mining_reward(5.0);
        assert_eq!(settings.get_difficulty(), 1);
        assert_eq!(settings.get_mining_reward(), 5.0);
    }
}
