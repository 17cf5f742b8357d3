use std::fmt::{self, Debug};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use super::{ERROR_TITLE, Stage};
use crate::error::GenerationError;
use crate::generation_client::{Article, GenerationClient};
use crate::item::GeneratedItem;
use crate::store::{ItemStore, StoreError};

pub(super) enum Command {
    Submit(String),
    Clear,
    DeleteSaved(oneshot::Sender<Result<bool, StoreError>>),
    Snapshot(oneshot::Sender<Stage>),
    RequestFinished {
        client: GenerationClient,
        topic: String,
        result: Result<Article, GenerationError>,
    },
}

impl Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Submit(topic) => {
                f.debug_tuple("Submit").field(topic).finish()
            }
            Command::Clear => f.write_str("Clear"),
            Command::DeleteSaved(_) => f.write_str("DeleteSaved"),
            Command::Snapshot(_) => f.write_str("Snapshot"),
            Command::RequestFinished { topic, result, .. } => f
                .debug_struct("RequestFinished")
                .field("topic", topic)
                .field("result", result)
                .finish_non_exhaustive(),
        }
    }
}

pub(super) struct SessionState {
    // Taken while a request is in flight.
    client: Option<GenerationClient>,
    store: Arc<dyn ItemStore>,
    stage_tx: watch::Sender<Stage>,
}

impl SessionState {
    #[inline]
    pub(super) fn new(
        client: GenerationClient,
        store: Arc<dyn ItemStore>,
        stage_tx: watch::Sender<Stage>,
    ) -> Self {
        Self {
            client: Some(client),
            store,
            stage_tx,
        }
    }

    pub(super) async fn run(
        mut self,
        mut cmd_rx: mpsc::UnboundedReceiver<Command>,
        cmd_tx: mpsc::WeakUnboundedSender<Command>,
    ) {
        debug!("started");
        while let Some(cmd) = cmd_rx.recv().await {
            trace!("received command: {cmd:?}");
            self.handle(cmd, &cmd_tx);
        }
        debug!("will terminate");
    }

    fn handle(
        &mut self,
        cmd: Command,
        cmd_tx: &mpsc::WeakUnboundedSender<Command>,
    ) {
        match cmd {
            Command::Submit(topic) => self.submit(topic, cmd_tx),
            Command::Clear => self.clear(),
            Command::DeleteSaved(tx) => {
                tx.send(self.delete_saved()).ok();
            }
            Command::Snapshot(tx) => {
                tx.send(self.stage()).ok();
            }
            Command::RequestFinished {
                client,
                topic,
                result,
            } => {
                self.client = Some(client);
                self.finish_request(topic, result);
            }
        }
    }

    #[inline]
    fn stage(&self) -> Stage {
        self.stage_tx.borrow().clone()
    }

    #[inline]
    fn set_stage(&self, stage: Stage) {
        self.stage_tx.send_replace(stage);
    }

    fn submit(
        &mut self,
        topic: String,
        cmd_tx: &mpsc::WeakUnboundedSender<Command>,
    ) {
        let topic = topic.trim().to_owned();
        if topic.is_empty() {
            debug!("ignoring an empty topic");
            return;
        }
        if self.stage().is_submitting() {
            warn!("a request is already in flight, ignoring {topic:?}");
            return;
        }
        let Some(cmd_tx) = cmd_tx.upgrade() else {
            // Every handle is gone, nobody would see the result.
            return;
        };
        let Some(client) = self.client.take() else {
            warn!("generation client is already in use");
            return;
        };

        info!("generating an article about {topic:?}");
        self.set_stage(Stage::Submitting {
            topic: topic.clone(),
        });
        tokio::spawn(async move {
            let result = client.generate(&topic).await;
            cmd_tx
                .send(Command::RequestFinished {
                    client,
                    topic,
                    result,
                })
                .ok();
        });
    }

    fn finish_request(
        &mut self,
        topic: String,
        result: Result<Article, GenerationError>,
    ) {
        let article = match result {
            Ok(article) => article,
            Err(err) => return self.fail(topic, err.message()),
        };
        match self.save_new_item(article, topic.clone()) {
            Ok(item) => {
                info!("saved article {} about {topic:?}", item.id);
                self.set_stage(Stage::Success(item));
            }
            Err(err) => {
                error!("failed to save the generated article: {err}");
                self.fail(topic, err.message());
            }
        }
    }

    /// Shows a failure. Failed attempts are never saved.
    fn fail(&mut self, topic: String, message: &str) {
        let record = GeneratedItem::new(
            &[],
            ERROR_TITLE.to_owned(),
            message.to_owned(),
            topic,
        );
        self.set_stage(Stage::Failed {
            message: message.to_owned(),
            record,
        });
    }

    fn save_new_item(
        &self,
        article: Article,
        topic: String,
    ) -> Result<GeneratedItem, StoreError> {
        let mut items = self.store.load_all();
        let item =
            GeneratedItem::new(&items, article.title, article.content, topic);
        items.insert(0, item.clone());
        self.store.save_all(&items)?;
        Ok(item)
    }

    fn clear(&mut self) {
        match self.stage() {
            Stage::Success(_) | Stage::Failed { .. } => {
                self.set_stage(Stage::Idle);
            }
            stage => debug!("nothing to clear in {stage:?}"),
        }
    }

    fn delete_saved(&mut self) -> Result<bool, StoreError> {
        let Stage::Success(item) = self.stage() else {
            debug!("no saved article on screen");
            return Ok(false);
        };
        let removed = self.store.remove(&item.id).inspect_err(|err| {
            error!("failed to delete article {}: {err}", item.id);
        })?;
        if !removed {
            warn!("article {} was already gone", item.id);
        }
        self.set_stage(Stage::Idle);
        Ok(true)
    }
}
