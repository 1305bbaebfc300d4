//! Configuration file parsing for appdesk
//!
//! Supports `<config_dir>/appdesk/config.toml` with the `APPDESK_API_URL`
//! environment override.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_dir, default_config_path, init_config_dir, load_settings, resolve_base_url,
    save_settings, API_URL_ENV,
};
pub use types::*;
