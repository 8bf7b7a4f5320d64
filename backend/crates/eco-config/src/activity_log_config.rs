use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACTIVITY_LOG_CAPACITY, MAX_ACTIVITY_LOG_CAPACITY,
    MIN_ACTIVITY_LOG_CAPACITY,
};

use serde::Deserialize;

// Recent collection activity shown on the collection-point dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityLogConfig {
    /// Number of most recent entries kept (default: 10)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_ACTIVITY_LOG_CAPACITY
}

impl Default for ActivityLogConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl ActivityLogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_ACTIVITY_LOG_CAPACITY..=MAX_ACTIVITY_LOG_CAPACITY).contains(&self.capacity) {
            return Err(ConfigError::config(format!(
                "activity_log.capacity must be {}-{}, got {}",
                MIN_ACTIVITY_LOG_CAPACITY, MAX_ACTIVITY_LOG_CAPACITY, self.capacity
            )));
        }

        Ok(())
    }
}
