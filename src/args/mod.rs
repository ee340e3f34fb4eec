//! CLI argument types, parsing helpers and validation.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;
mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::HeyArgs;
pub use defaults::{TOOL_USER_AGENT, UNBOUNDED_REQUESTS, default_cpus};
pub use types::{BasicAuth, OutputMode, Params, PositiveUsize};
pub use validate::validate;

pub(crate) use parsers::{parse_duration_arg, parse_header};
