use std::sync::Arc;

use quill_model::GenerationProvider;
use tokio::sync::{mpsc, watch};
use tracing::Instrument;

use super::state::SessionState;
use super::{GenerationSession, Stage};
use crate::generation_client::GenerationClient;
use crate::store::{ItemStore, MemoryStore};

/// [`GenerationSession`] builder.
pub struct GenerationSessionBuilder {
    client: GenerationClient,
    store: Arc<dyn ItemStore>,
}

impl GenerationSessionBuilder {
    /// Creates a new builder with the specified provider. Results are
    /// saved in memory unless [`Self::with_store`] is called.
    #[inline]
    pub fn with_provider<P: GenerationProvider + 'static>(provider: P) -> Self {
        Self {
            client: GenerationClient::new(provider),
            store: Arc::new(MemoryStore::default()),
        }
    }

    /// Saves successful results into `store`.
    #[inline]
    pub fn with_store(mut self, store: Arc<dyn ItemStore>) -> Self {
        self.store = store;
        self
    }

    /// Builds the session and starts its task on the current runtime.
    pub fn build(self) -> GenerationSession {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (stage_tx, stage_rx) = watch::channel(Stage::Idle);

        let state = SessionState::new(self.client, self.store, stage_tx);
        tokio::spawn(
            state
                .run(cmd_rx, cmd_tx.downgrade())
                .instrument(trace_span!("generation session")),
        );
        GenerationSession { cmd_tx, stage_rx }
    }
}
