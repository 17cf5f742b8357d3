use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use quill_test_provider::{PresetOutcome, TestProvider};
use tokio::time::timeout;

use crate::normalize::NO_CONTENT;
use crate::item::GeneratedItem;
use crate::store::{ItemStore, MemoryStore, StoreError};
use crate::{ERROR_TITLE, GenerationSession, GenerationSessionBuilder, Stage};

/// A memory store whose writes can be switched off.
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
    read_only: AtomicBool,
}

impl ReadOnlyStore {
    fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::new("disk full"));
        }
        Ok(())
    }
}

impl ItemStore for ReadOnlyStore {
    fn load_all(&self) -> Vec<GeneratedItem> {
        self.inner.load_all()
    }

    fn save_all(&self, items: &[GeneratedItem]) -> Result<(), StoreError> {
        self.check()?;
        self.inner.save_all(items)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.check()?;
        self.inner.clear()
    }
}

fn build_read_only(
    provider: TestProvider,
) -> (GenerationSession, Arc<ReadOnlyStore>) {
    let store = Arc::new(ReadOnlyStore::default());
    let session = GenerationSessionBuilder::with_provider(provider)
        .with_store(store.clone())
        .build();
    (session, store)
}

fn build(provider: TestProvider) -> (GenerationSession, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let session = GenerationSessionBuilder::with_provider(provider)
        .with_store(store.clone())
        .build();
    (session, store)
}

async fn settled(session: &GenerationSession) -> Stage {
    timeout(Duration::from_millis(500), session.settled())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_successful_generation() {
    let mut provider = TestProvider::default();
    provider.add_article(
        "## Coffee Basics **Guide**",
        "Intro paragraph.\n\nSecond paragraph.",
    );
    let (session, store) = build(provider);

    session.submit("coffee");
    let Stage::Success(item) = settled(&session).await else {
        panic!("unexpected stage: {:?}", session.stage());
    };
    assert_eq!(item.title, "Coffee Basics Guide");
    assert_eq!(item.content, "Intro paragraph.\n\nSecond paragraph.");
    assert_eq!(item.topic, "coffee");
    assert_eq!(store.load_all(), vec![item]);
}

#[tokio::test]
async fn test_newest_first() {
    let mut provider = TestProvider::default();
    provider.add_article("First", "One.");
    provider.add_article("Second", "Two.");
    let (session, store) = build(provider);

    session.submit("one");
    settled(&session).await;
    session.submit("  two  ");
    let Stage::Success(second) = settled(&session).await else {
        panic!("unexpected stage: {:?}", session.stage());
    };
    assert_eq!(second.topic, "two");

    let items = store.load_all();
    let titles: Vec<_> = items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, ["Second", "First"]);
    assert_ne!(items[0].id, items[1].id);
}

#[tokio::test]
async fn test_empty_topic() {
    let provider = TestProvider::default();
    let log = provider.clone();
    let (session, store) = build(provider);

    session.submit("");
    session.submit("   \t");
    assert_eq!(session.snapshot().await, Stage::Idle);
    assert_eq!(log.request_count(), 0);
    assert_eq!(store.raw(), None);
}

#[tokio::test]
async fn test_upstream_failure() {
    let mut provider = TestProvider::default();
    provider.add_upstream_failure("service unavailable");
    let (session, store) = build(provider);

    session.submit("coffee");
    let Stage::Failed { message, record } = settled(&session).await else {
        panic!("unexpected stage: {:?}", session.stage());
    };
    assert_eq!(message, "service unavailable");
    assert_eq!(record.title, ERROR_TITLE);
    assert_eq!(record.content, "service unavailable");
    assert_eq!(record.topic, "coffee");
    assert!(store.load_all().is_empty());
}

#[tokio::test]
async fn test_missing_fields() {
    let mut provider = TestProvider::default();
    provider.add_outcome(PresetOutcome::Reply(Default::default()));
    let (session, _store) = build(provider);

    session.submit("coffee");
    let Stage::Success(item) = settled(&session).await else {
        panic!("unexpected stage: {:?}", session.stage());
    };
    assert_eq!(item.title, "Insightful Article on coffee");
    assert_eq!(item.content, NO_CONTENT);
}

#[tokio::test]
async fn test_submit_while_in_flight() {
    let mut provider = TestProvider::default();
    provider.set_delay(Duration::from_millis(50));
    provider.add_article("First", "One.");
    provider.add_article("Second", "Two.");
    let log = provider.clone();
    let (session, store) = build(provider);

    session.submit("first");
    session.submit("second");
    assert_eq!(
        session.snapshot().await,
        Stage::Submitting {
            topic: "first".to_owned()
        }
    );

    // Clearing has no effect on a request in flight either.
    session.clear();
    assert!(session.snapshot().await.is_submitting());

    let Stage::Success(item) = settled(&session).await else {
        panic!("unexpected stage: {:?}", session.stage());
    };
    assert_eq!(item.topic, "first");
    assert_eq!(log.request_count(), 1);
    assert_eq!(store.load_all().len(), 1);
}

#[tokio::test]
async fn test_clear_keeps_saved_items() {
    let mut provider = TestProvider::default();
    provider.add_article("Coffee", "Body.");
    let (session, store) = build(provider);

    session.submit("coffee");
    settled(&session).await;
    session.clear();
    assert_eq!(session.snapshot().await, Stage::Idle);
    assert_eq!(store.load_all().len(), 1);
}

#[tokio::test]
async fn test_clear_after_failure() {
    let mut provider = TestProvider::default();
    provider.add_upstream_failure("nope");
    let (session, _store) = build(provider);

    session.submit("coffee");
    settled(&session).await;
    session.clear();
    assert_eq!(session.snapshot().await, Stage::Idle);
}

#[tokio::test]
async fn test_delete_saved() {
    let mut provider = TestProvider::default();
    provider.add_article("Old", "Old body.");
    provider.add_article("New", "New body.");
    let (session, store) = build(provider);

    session.submit("old");
    settled(&session).await;
    session.submit("new");
    settled(&session).await;

    assert!(session.delete_saved().await.unwrap());
    assert_eq!(session.snapshot().await, Stage::Idle);
    let items = store.load_all();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Old");

    // Nothing on screen, nothing to delete.
    assert!(!session.delete_saved().await.unwrap());
    assert_eq!(session.snapshot().await, Stage::Idle);
    assert_eq!(store.load_all().len(), 1);
}

#[tokio::test]
async fn test_delete_saved_ignored_after_failure() {
    let mut provider = TestProvider::default();
    provider.add_article("Kept", "Body.");
    provider.add_upstream_failure("nope");
    let (session, store) = build(provider);

    session.submit("kept");
    settled(&session).await;
    session.submit("broken");
    assert!(matches!(settled(&session).await, Stage::Failed { .. }));

    assert!(!session.delete_saved().await.unwrap());
    assert!(matches!(session.snapshot().await, Stage::Failed { .. }));
    assert_eq!(store.load_all().len(), 1);
}

#[tokio::test]
async fn test_watch_stages() {
    let mut provider = TestProvider::default();
    provider.set_delay(Duration::from_millis(20));
    provider.add_article("Coffee", "Body.");
    let (session, _store) = build(provider);

    let mut stage_rx = session.watch();
    session.submit("coffee");

    timeout(Duration::from_millis(500), stage_rx.wait_for(Stage::is_submitting))
        .await
        .unwrap()
        .unwrap();
    timeout(
        Duration::from_millis(500),
        stage_rx.wait_for(|stage| matches!(stage, Stage::Success(_))),
    )
    .await
    .unwrap()
    .unwrap();
}

#[tokio::test]
async fn test_save_failure() {
    let mut provider = TestProvider::default();
    provider.add_article("Kept", "Body.");
    provider.add_article("Lost", "Body.");
    let (session, store) = build_read_only(provider);

    session.submit("kept");
    assert!(matches!(settled(&session).await, Stage::Success(_)));
    let before = store.load_all();

    store.set_read_only(true);
    session.submit("lost");
    let Stage::Failed { message, record } = settled(&session).await else {
        panic!("unexpected stage: {:?}", session.stage());
    };
    assert_eq!(message, "disk full");
    assert_eq!(record.title, ERROR_TITLE);
    assert_eq!(record.content, "disk full");
    assert_eq!(record.topic, "lost");
    assert_eq!(store.load_all(), before);
}

#[tokio::test]
async fn test_delete_saved_failure() {
    let mut provider = TestProvider::default();
    provider.add_article("Coffee", "Body.");
    let (session, store) = build_read_only(provider);

    session.submit("coffee");
    let Stage::Success(item) = settled(&session).await else {
        panic!("unexpected stage: {:?}", session.stage());
    };

    store.set_read_only(true);
    let err = session.delete_saved().await.unwrap_err();
    assert_eq!(err.message(), "disk full");
    assert_eq!(session.snapshot().await, Stage::Success(item.clone()));
    assert_eq!(store.load_all(), vec![item]);

    // Retrying once the store is writable again succeeds.
    store.set_read_only(false);
    assert!(session.delete_saved().await.unwrap());
    assert_eq!(session.snapshot().await, Stage::Idle);
    assert!(store.load_all().is_empty());
}
