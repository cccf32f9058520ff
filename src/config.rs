//! Runtime configuration read from `DEVICE_MANAGER_*` environment variables.

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::store::StoreOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceManagerConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Synthetic records the store creates on construction
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,

    /// Whether name/brand search matches case-sensitively
    #[serde(default = "default_case_sensitive_search")]
    pub case_sensitive_search: bool,

    /// Page size for listings that don't name one
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed_count() -> usize {
    100
}

fn default_case_sensitive_search() -> bool {
    true
}

fn default_page_size() -> i64 {
    crate::usecases::DEFAULT_PAGE_SIZE
}

impl Default for DeviceManagerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            seed_count: default_seed_count(),
            case_sensitive_search: default_case_sensitive_search(),
            default_page_size: default_page_size(),
        }
    }
}

impl DeviceManagerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("DEVICE_MANAGER").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            seed_count: self.seed_count,
            case_sensitive_search: self.case_sensitive_search,
        }
    }
}
