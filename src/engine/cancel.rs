use std::sync::Arc;

use tokio::sync::watch;

/// Cancellation signal shared by the run and every trigger that may stop it.
///
/// The transition to cancelled happens at most once. Later calls to
/// [`CancelToken::cancel`], including calls made after the run has finished,
/// are no-ops.
#[derive(Debug, Clone)]
pub struct CancelToken {
    state: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
        }
    }

    /// Requests cancellation. Returns `true` only for the call that performed
    /// the transition.
    pub fn cancel(&self) -> bool {
        self.state.send_if_modified(|cancelled| {
            if *cancelled {
                false
            } else {
                *cancelled = true;
                true
            }
        })
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.state.borrow()
    }

    /// Resolves once the token is cancelled; immediately if it already is.
    pub async fn cancelled(&self) {
        let mut receiver = self.state.subscribe();
        drop(receiver.wait_for(|cancelled| *cancelled).await);
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
