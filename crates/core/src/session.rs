mod builder;
mod state;
#[cfg(test)]
mod tests;

use tokio::sync::{mpsc, oneshot, watch};

pub use builder::GenerationSessionBuilder;
use state::Command;

use crate::item::GeneratedItem;
use crate::store::StoreError;

/// Title of the transient record shown for a failed attempt.
pub const ERROR_TITLE: &str = "Error Generating Blog";

/// Where a generation session currently is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    /// Nothing in flight, nothing on screen.
    #[default]
    Idle,
    /// A request for `topic` is in flight.
    Submitting {
        /// The trimmed topic being generated.
        topic: String,
    },
    /// The article was generated and saved.
    Success(GeneratedItem),
    /// The attempt failed. `record` is for display only and was not saved.
    Failed {
        /// User-facing reason.
        message: String,
        /// Error record titled [`ERROR_TITLE`].
        record: GeneratedItem,
    },
}

impl Stage {
    /// Returns whether a request is in flight.
    #[inline]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Stage::Submitting { .. })
    }
}

/// A generation session, driving one input box and its result view.
///
/// The session runs as a background task owning the state; this handle
/// only sends commands to it. Commands are handled in the order they were
/// sent. Only one request can be in flight at a time, and it always runs
/// to completion.
#[derive(Clone)]
pub struct GenerationSession {
    cmd_tx: mpsc::UnboundedSender<Command>,
    stage_rx: watch::Receiver<Stage>,
}

impl GenerationSession {
    /// Submits a topic. Empty topics are ignored, and so is anything
    /// submitted while a request is in flight.
    pub fn submit<S: Into<String>>(&self, topic: S) {
        self.send(Command::Submit(topic.into()));
    }

    /// Dismisses the result on screen. Saved items are kept.
    pub fn clear(&self) {
        self.send(Command::Clear);
    }

    /// Deletes the article on screen from the saved list.
    ///
    /// Returns `Ok(false)` when no saved article is on screen. On a store
    /// failure the article stays on screen and saved.
    pub async fn delete_saved(&self) -> Result<bool, StoreError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::DeleteSaved(tx));
        rx.await.unwrap_or_else(|_| {
            Err(StoreError::new("generation session is no longer running"))
        })
    }

    /// Returns the last published stage.
    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage_rx.borrow().clone()
    }

    /// Returns the stage once every command sent before this call has
    /// been handled.
    pub async fn snapshot(&self) -> Stage {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx));
        match rx.await {
            Ok(stage) => stage,
            Err(_) => self.stage(),
        }
    }

    /// Waits until no request is in flight and returns the stage.
    pub async fn settled(&self) -> Stage {
        let stage = self.snapshot().await;
        if !stage.is_submitting() {
            return stage;
        }
        let mut stage_rx = self.stage_rx.clone();
        match stage_rx.wait_for(|stage| !stage.is_submitting()).await {
            Ok(stage) => stage.clone(),
            Err(_) => self.stage(),
        }
    }

    /// Returns a receiver notified on every stage change.
    #[inline]
    pub fn watch(&self) -> watch::Receiver<Stage> {
        self.stage_rx.clone()
    }

    #[inline]
    fn send(&self, cmd: Command) {
        if self.cmd_tx.send(cmd).is_err() {
            error!("generation session task has been dropped too early");
        }
    }
}
