//! Run-mode selection, cancellation triggers and engine dispatch.
mod coordinator;
mod mode;
mod triggers;


pub use coordinator::dispatch;
pub use mode::RunMode;
pub use triggers::{arm_duration_trigger, arm_interrupt_trigger};
