use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::engine::CancelToken;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Cancels `cancel` on the first Ctrl+C (or SIGTERM on unix).
///
/// The task also ends quietly if the token is cancelled by someone else.
pub fn arm_interrupt_trigger(cancel: &CancelToken) -> JoinHandle<()> {
    let cancel = cancel.clone();
    tokio::spawn(async move {
        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                warn!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                () = cancel.cancelled() => return,
                result = tokio::signal::ctrl_c() => {
                    if let Err(err) = result {
                        warn!("Failed to listen for Ctrl+C: {}", err);
                        return;
                    }
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {}
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                () = cancel.cancelled() => return,
                result = tokio::signal::ctrl_c() => {
                    if let Err(err) = result {
                        warn!("Failed to listen for Ctrl+C: {}", err);
                        return;
                    }
                }
            }
        }

        if cancel.cancel() {
            info!("Interrupted; stopping the run");
        }
    })
}

/// Cancels `cancel` once `limit` has elapsed.
pub fn arm_duration_trigger(cancel: &CancelToken, limit: Duration) -> JoinHandle<()> {
    let cancel = cancel.clone();
    tokio::spawn(async move {
        tokio::select! {
            () = cancel.cancelled() => {}
            () = tokio::time::sleep(limit) => {
                if cancel.cancel() {
                    info!(?limit, "Duration limit reached; stopping the run");
                }
            }
        }
    })
}
