use crate::{
    ActivityLogConfig, ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, LoggingConfig, PricingConfig, ScanConfig,
    SessionConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub pricing: PricingConfig,
    pub activity_log: ActivityLogConfig,
    pub scan: ScanConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ECO_CONFIG_DIR env var, else use ./.eco/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ECO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Same as [`Config::load`] with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ECO_CONFIG_DIR env var > ./.eco/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.pricing.validate()?;
        self.activity_log.validate()?;
        self.scan.validate()?;
        self.storage.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the local storage directory.
    pub fn storage_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.storage.dir)
    }

    /// Absolute path of the log file, if logging to a file.
    pub fn log_file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.logging.file.as_ref().map(|file| config_dir.join(file))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout: {})",
            self.api.base_url,
            match self.api.timeout_secs {
                0 => String::from("none"),
                secs => format!("{secs}s"),
            }
        );
        info!(
            "  session: user={}, collection-point={}, factory={}",
            self.session.end_user_balance,
            self.session.collection_point_balance,
            self.session.factory_balance
        );
        info!(
            "  pricing: {}/kg, {}/unit",
            self.pricing.per_kg, self.pricing.per_unit
        );
        info!("  activity_log: capacity={}", self.activity_log.capacity);
        info!("  scan: delay={}ms", self.scan.delay_ms);
        info!("  storage: {}", self.storage.dir);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("ECO_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("ECO_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_parse(
            "ECO_SESSION_END_USER_BALANCE",
            &mut self.session.end_user_balance,
        );
        Self::apply_env_parse(
            "ECO_SESSION_COLLECTION_POINT_BALANCE",
            &mut self.session.collection_point_balance,
        );
        Self::apply_env_parse(
            "ECO_SESSION_FACTORY_BALANCE",
            &mut self.session.factory_balance,
        );
        Self::apply_env_string("ECO_SESSION_LOCATION", &mut self.session.location);

        // Pricing
        Self::apply_env_parse("ECO_PRICING_PER_KG", &mut self.pricing.per_kg);
        Self::apply_env_parse("ECO_PRICING_PER_UNIT", &mut self.pricing.per_unit);

        // Activity log
        Self::apply_env_parse(
            "ECO_ACTIVITY_LOG_CAPACITY",
            &mut self.activity_log.capacity,
        );

        // Scan
        Self::apply_env_parse("ECO_SCAN_DELAY_MS", &mut self.scan.delay_ms);

        // Storage
        Self::apply_env_string("ECO_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("ECO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ECO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ECO_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
