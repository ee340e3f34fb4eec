//! Optional TOML config file filling in flags not given on the command line.
mod apply;
mod loader;
pub mod types;


pub use apply::apply_config;
pub use loader::{load_config, load_config_file};
