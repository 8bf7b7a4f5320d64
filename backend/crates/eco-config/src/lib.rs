mod activity_log_config;
mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod pricing_config;
mod scan_config;
mod session_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use activity_log_config::ActivityLogConfig;
pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use pricing_config::PricingConfig;
pub use scan_config::ScanConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "ECO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".eco";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://192.168.137.1:3000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 0;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_END_USER_BALANCE: i64 = 50_000;
const DEFAULT_COLLECTION_POINT_BALANCE: i64 = 150_000;
const DEFAULT_FACTORY_BALANCE: i64 = 53_546_000;
const DEFAULT_LOCATION: &str = "Toshkent, O'zbekiston";

const DEFAULT_PRICE_PER_KG: i64 = 2000;
const DEFAULT_PRICE_PER_UNIT: i64 = 500;

const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 10;
const MIN_ACTIVITY_LOG_CAPACITY: usize = 1;
const MAX_ACTIVITY_LOG_CAPACITY: usize = 1000;

const DEFAULT_SCAN_DELAY_MS: u64 = 2000;
const MAX_SCAN_DELAY_MS: u64 = 60_000;

const DEFAULT_STORAGE_DIR: &str = "storage";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
