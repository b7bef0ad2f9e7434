//! pontoon-remote-manager: resolves named remote exports for pontoon apps.
//!
//! A remote application installs its exports into a [`RemoteRegistry`] under
//! a scope name; a consuming application issues [`resolve_as`] requests
//! against `"scope/Export"` references and receives the typed export (or a
//! [`LoadError`]) back as an application event.

mod registry;
mod requests;
mod slot;

pub use registry::{LoadError, RemoteRegistry, RemoteScope, SharedExport};
pub use requests::{resolve, resolve_as, RemoteRequest};
pub use slot::RemoteSlot;

use std::sync::Arc;
use std::time::Duration;

use pontoon_core::Emitter;

/// Outstanding resolve tasks. Retained so a cancellation request would have
/// something to abort; finished handles are pruned on the next dispatch.
#[derive(Default)]
pub struct LoadState {
    tasks: Vec<tokio::task::JoinHandle<()>>,
}

/// Effect manager that resolves remote exports off the update loop.
pub struct RemoteManager {
    registry: Arc<RemoteRegistry>,
    fetch_delay: Duration,
}

impl RemoteManager {
    pub fn new(registry: Arc<RemoteRegistry>) -> Self {
        Self {
            registry,
            fetch_delay: Duration::ZERO,
        }
    }

    /// Simulated transfer latency before each lookup, so consumers exercise
    /// their fallback frames even against an in-process registry.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn init() -> LoadState {
        LoadState::default()
    }

    pub fn on_effects<Msg: Send + 'static>(
        &self,
        emitter: &Emitter<Msg, ()>,
        mut state: LoadState,
        effects: Vec<RemoteRequest<Msg>>,
    ) -> LoadState {
        state.tasks.retain(|task| !task.is_finished());
        for req in effects {
            match req {
                RemoteRequest::Resolve { remote, returns } => {
                    tracing::debug!(target: "pontoon-remote", remote = %remote, "resolving remote export");
                    let event_tx = emitter.event_sender();
                    let registry = Arc::clone(&self.registry);
                    let delay = self.fetch_delay;
                    let task = tokio::spawn(async move {
                        if !delay.is_zero() {
                            tokio::time::sleep(delay).await;
                        }
                        let result = registry.lookup(&remote);
                        if let Err(err) = &result {
                            tracing::warn!(target: "pontoon-remote", remote = %remote, error = %err, "remote export failed to resolve");
                        }
                        let _ = event_tx.send(returns(result));
                    });
                    state.tasks.push(task);
                }
            }
        }
        state
    }
}
