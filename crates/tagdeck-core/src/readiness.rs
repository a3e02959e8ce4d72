//! One-shot readiness gate for the external player script.
//!
//! The player script is loaded once per page. The first caller of
//! [`ReadinessGate::begin_loading`] is responsible for injecting it; every
//! other caller simply waits. [`ReadinessGate::mark_ready`] releases all
//! current and future waiters exactly once.

use tokio::sync::watch;
use tracing::debug;

/// Load state of the external script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nobody has asked for the script yet.
    #[default]
    Uninitialized,
    /// The script has been requested but has not signalled readiness.
    Loading,
    /// The script is loaded and its API can be used.
    Ready,
}

/// Broadcast-once initialization state shared by every player instance.
#[derive(Debug)]
pub struct ReadinessGate {
    state: watch::Sender<LoadState>,
}

impl ReadinessGate {
    /// Create a gate in [`LoadState::Uninitialized`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: watch::Sender::new(LoadState::Uninitialized),
        }
    }

    /// Current load state.
    #[must_use]
    pub fn state(&self) -> LoadState {
        *self.state.borrow()
    }

    /// Whether the script has signalled readiness.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state() == LoadState::Ready
    }

    /// Claim the one-time loading step.
    ///
    /// Returns `true` only for the caller that moved the gate out of
    /// [`LoadState::Uninitialized`]; that caller must start the load.
    pub fn begin_loading(&self) -> bool {
        let claimed = self.state.send_if_modified(|state| {
            if *state == LoadState::Uninitialized {
                *state = LoadState::Loading;
                true
            } else {
                false
            }
        });
        if claimed {
            debug!("Player script load started");
        }
        claimed
    }

    /// Signal readiness, releasing every waiter.
    ///
    /// Returns `true` only for the first call.
    pub fn mark_ready(&self) -> bool {
        let first = self.state.send_if_modified(|state| {
            if *state == LoadState::Ready {
                false
            } else {
                *state = LoadState::Ready;
                true
            }
        });
        if first {
            debug!("Player script ready");
        }
        first
    }

    /// Wait until the gate is ready. Returns immediately if it already is.
    pub async fn wait_ready(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|state| *state == LoadState::Ready).await;
    }
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new()
    }
}
