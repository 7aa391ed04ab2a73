pub mod app_config;
pub mod config;
pub mod generator;
mod names;
pub mod pricing;
pub mod products;
pub mod slug;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use generator::{ProductGenerator, RngSource};
pub use products::{Category, CategorySelection, Product};
pub use slug::slugify;
