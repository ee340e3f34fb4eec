//! Control layer of the `hey` HTTP load generator.
//!
//! Raw flags are validated into [`args::Params`], turned into one
//! [`request::RequestDescriptor`], and handed to an [`engine::Engine`] by the
//! [`lifecycle`] coordinator, which also owns the interrupt and duration
//! triggers that cancel a running load test.
pub mod args;
pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod lifecycle;
pub mod logger;
pub mod request;

#[cfg(test)]
pub(crate) mod test_support;
