//! Canonical request template construction.
mod body;
mod builder;

#[cfg(test)]
mod tests;

pub use body::resolve_body;
pub use builder::{RequestDescriptor, build_request, compose_user_agent};
