//! The resolution cycle: local first, remote fallback second.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::command::resolver::resolve_locally;
use crate::core::config::RouterConfig;
use crate::core::types::Outcome;
use crate::providers::{ClassifierTransport, Collaborators};
use crate::remote::resolver::resolve_remotely;

/// Drives one resolution cycle per finalized utterance.
///
/// Cycles are independent: nothing is queued or merged, and overlapping
/// in-flight cycles share no mutable state. The remote network call is the
/// only suspension point; each cycle snapshots a token before suspending,
/// and an answer that comes back after a newer cycle has started is
/// discarded rather than applied over newer UI state.
pub struct VoiceRouter {
    collab: Collaborators,
    transport: Option<Box<dyn ClassifierTransport>>,
    config: RouterConfig,
    cycle: AtomicU64,
}

impl VoiceRouter {
    pub fn new(collab: Collaborators, config: RouterConfig) -> Self {
        Self {
            collab,
            transport: None,
            config,
            cycle: AtomicU64::new(0),
        }
    }

    /// Attach a remote classifier transport. Without one the router is
    /// local-only and a failed local pass simply ends the cycle.
    pub fn with_transport(mut self, transport: Box<dyn ClassifierTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn collaborators(&self) -> &Collaborators {
        &self.collab
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Resolve one utterance end to end.
    pub async fn route(&self, utterance: &str) -> Outcome {
        let token = self.cycle.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(utterance, token, "resolution cycle started");

        let local = resolve_locally(utterance, &self.collab, &self.config).await;
        if !local.escalates() {
            tracing::debug!(outcome = ?local, "cycle settled locally");
            return local;
        }

        let Some(transport) = self.transport.as_deref() else {
            tracing::warn!("local resolution failed and no remote transport is configured");
            return local;
        };

        let still_current = || self.cycle.load(Ordering::SeqCst) == token;
        let remote = resolve_remotely(
            utterance,
            &self.collab,
            transport,
            &self.config,
            &still_current,
        )
        .await;
        tracing::debug!(outcome = ?remote, "cycle settled remotely");
        remote
    }
}
