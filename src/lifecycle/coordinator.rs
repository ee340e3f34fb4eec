use std::io::Write;
use std::time::Duration;

use tracing::debug;

use super::mode::RunMode;
use super::triggers::{arm_duration_trigger, arm_interrupt_trigger};
use crate::engine::{CancelToken, Engine};
use crate::error::AppResult;

/// Runs `engine` in the given mode and writes its textual result to `out`.
///
/// In load-test mode an interrupt trigger, and a duration trigger when
/// `duration` is non-zero, are armed for the lifetime of the run. Both feed
/// the same [`CancelToken`], so either may fire first and the other becomes
/// a no-op.
///
/// # Errors
///
/// Returns engine failures and errors writing to `out`.
pub async fn dispatch<E, W>(
    engine: &E,
    mode: RunMode,
    duration: Duration,
    out: &mut W,
) -> AppResult<()>
where
    E: Engine + ?Sized,
    W: Write + Send,
{
    match mode {
        RunMode::SingleShot => {
            debug!("Single-shot mode; concurrency, qps and duration are ignored");
            let text = engine.run_simple().await?;
            writeln!(out, "{}", text)?;
        }
        RunMode::LoadTest(load) => {
            let cancel = CancelToken::new();
            let mut triggers = vec![arm_interrupt_trigger(&cancel)];
            if !duration.is_zero() {
                triggers.push(arm_duration_trigger(&cancel, duration));
            }

            let outcome = engine.run(load, cancel.clone()).await;
            for trigger in &triggers {
                trigger.abort();
            }
            write!(out, "{}", outcome?)?;
        }
    }
    out.flush()?;
    Ok(())
}
