mod app;
mod config;
mod engine;
mod request;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult, ErrorKind};
pub use config::ConfigError;
pub use engine::EngineError;
pub use request::RequestError;
pub use validation::ValidationError;
