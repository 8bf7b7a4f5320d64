use crate::{ConfigError, ConfigErrorResult, DEFAULT_SCAN_DELAY_MS, MAX_SCAN_DELAY_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Simulated scan latency before an intake is applied (0 = immediate)
    pub delay_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SCAN_DELAY_MS,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.delay_ms > MAX_SCAN_DELAY_MS {
            return Err(ConfigError::config(format!(
                "scan.delay_ms must be 0-{}, got {}",
                MAX_SCAN_DELAY_MS, self.delay_ms
            )));
        }

        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
