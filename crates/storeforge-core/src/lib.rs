mod app_config;
mod config;
mod product;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use product::{
    derived_profit, CanonicalProduct, SearchResult, ShippingInfo, SupplierCategory,
    DEFAULT_CATEGORY, UNKNOWN_DELIVERY_TIME,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
