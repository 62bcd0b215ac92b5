use std::sync::Arc;

use nk_core::{Draft, DraftField, EditTarget, NoteService, RemoteError};
use sync::{StateStore, SyncController, SyncError};
use testing::InMemoryNoteService;
use tokio::sync::RwLock;

fn setup() -> (
    Arc<RwLock<StateStore>>,
    Arc<InMemoryNoteService>,
    Arc<SyncController>,
) {
    let store = Arc::new(RwLock::new(StateStore::new()));
    let service = Arc::new(InMemoryNoteService::new());
    let controller = Arc::new(SyncController::new(
        Arc::clone(&store),
        Arc::clone(&service) as Arc<dyn NoteService>,
    ));
    (store, service, controller)
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let (store, service, controller) = setup();
    service.create_note(&Draft::new("Groceries", "Milk")).await.unwrap();
    service.create_note(&Draft::new("Ideas", "Sync notes")).await.unwrap();

    controller.refresh().await.unwrap();
    let first = store.read().await.notes().to_vec();

    controller.refresh().await.unwrap();
    let second = store.read().await.notes().to_vec();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test]
async fn test_create_round_trip() {
    let (store, _service, controller) = setup();
    controller.refresh().await.unwrap();
    assert!(store.read().await.notes().is_empty());

    {
        let mut store = store.write().await;
        store.set_draft_field(DraftField::Title, "Groceries");
        store.set_draft_field(DraftField::Content, "Milk, eggs");
    }
    controller.submit().await.unwrap();

    let store = store.read().await;
    assert_eq!(store.notes().len(), 1);
    let created = &store.notes()[0];
    assert_eq!(created.title, "Groceries");
    assert_eq!(created.content, "Milk, eggs");
    assert!(!created.id.as_str().is_empty());

    // Successful submission resets the draft and the edit target.
    assert_eq!(store.draft(), &Draft::default());
    assert_eq!(store.edit_target(), &EditTarget::Composing);
}

#[tokio::test]
async fn test_update_replaces_content_and_keeps_title() {
    let (store, service, controller) = setup();
    let original = service.create_note(&Draft::new("A", "B")).await.unwrap();
    controller.refresh().await.unwrap();

    {
        let mut store = store.write().await;
        let note = store.find_note(&original.id).unwrap().clone();
        store.begin_edit(&note);
        store.set_draft_field(DraftField::Content, "C");
    }
    controller.submit().await.unwrap();

    let store = store.read().await;
    let updated = store.find_note(&original.id).unwrap();
    assert_eq!(updated.title, "A");
    assert_eq!(updated.content, "C");
    assert_eq!(store.edit_target(), &EditTarget::Composing);
}

#[tokio::test]
async fn test_remove_deletes_exactly_one() {
    let (store, service, controller) = setup();
    let doomed = service.create_note(&Draft::new("Doomed", "x")).await.unwrap();
    let kept = service.create_note(&Draft::new("Kept", "y")).await.unwrap();
    controller.refresh().await.unwrap();

    controller.remove(&doomed.id).await.unwrap();

    let store = store.read().await;
    assert_eq!(store.notes().len(), 1);
    assert!(store.find_note(&doomed.id).is_none());
    let survivor = store.find_note(&kept.id).unwrap();
    assert_eq!(survivor.title, "Kept");
    assert_eq!(survivor.content, "y");
}

#[tokio::test]
async fn test_failed_update_leaves_state_resumable() {
    let (store, service, controller) = setup();
    let original = service.create_note(&Draft::new("A", "B")).await.unwrap();
    controller.refresh().await.unwrap();

    {
        let mut store = store.write().await;
        let note = store.find_note(&original.id).unwrap().clone();
        store.begin_edit(&note);
        store.set_draft_field(DraftField::Content, "C");
    }

    service.fail_next(RemoteError::transport("connection reset"));
    let err = controller.submit().await.unwrap_err();
    assert!(matches!(err, SyncError::Remote(_)));

    {
        let mut store = store.write().await;
        // Draft and edit target are exactly as they were before the failed
        // submit, and the failure was recorded for rendering.
        assert_eq!(store.draft(), &Draft::new("A", "C"));
        assert_eq!(store.edit_target(), &EditTarget::Editing(original.id.clone()));
        assert_eq!(
            store.take_error().as_deref(),
            Some("Transport failure: connection reset")
        );
        // The stored note is untouched.
        assert_eq!(store.find_note(&original.id).unwrap().content, "B");
    }

    // An unmodified resubmission now goes through.
    controller.submit().await.unwrap();
    let store = store.read().await;
    assert_eq!(store.find_note(&original.id).unwrap().content, "C");
    assert_eq!(store.edit_target(), &EditTarget::Composing);
}

#[tokio::test]
async fn test_failed_create_keeps_draft() {
    let (store, service, controller) = setup();
    {
        let mut store = store.write().await;
        store.set_draft_field(DraftField::Title, "Groceries");
        store.set_draft_field(DraftField::Content, "Milk");
    }

    service.fail_next(RemoteError::Service {
        status: 503,
        body: "unavailable".to_string(),
    });
    controller.submit().await.unwrap_err();

    let store = store.read().await;
    assert_eq!(store.draft(), &Draft::new("Groceries", "Milk"));
    assert!(store.notes().is_empty());
}

#[tokio::test]
async fn test_failed_refresh_keeps_stale_collection() {
    let (store, service, controller) = setup();
    service.create_note(&Draft::new("A", "B")).await.unwrap();
    controller.refresh().await.unwrap();

    service.create_note(&Draft::new("C", "D")).await.unwrap();
    service.fail_next(RemoteError::transport("connection refused"));
    let err = controller.refresh().await.unwrap_err();
    assert!(matches!(err, SyncError::Remote(_)));

    // The collection is stale but intact, and the failure is recorded.
    let mut store = store.write().await;
    assert_eq!(store.notes().len(), 1);
    assert!(store.take_error().is_some());
}

#[tokio::test]
async fn test_failed_remove_changes_nothing() {
    let (store, service, controller) = setup();
    let note = service.create_note(&Draft::new("A", "B")).await.unwrap();
    controller.refresh().await.unwrap();

    service.fail_next(RemoteError::transport("connection reset"));
    controller.remove(&note.id).await.unwrap_err();

    let store = store.read().await;
    assert_eq!(store.notes().len(), 1);
    // No retry happened.
    assert_eq!(service.delete_calls(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_overlapping_submit_is_rejected() {
    let (store, service, controller) = setup();
    {
        let mut store = store.write().await;
        store.set_draft_field(DraftField::Title, "Groceries");
        store.set_draft_field(DraftField::Content, "Milk");
    }

    // Hold the service so the first submit stays in flight.
    let gate = service.hold().await;

    let first = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.submit().await })
    };
    tokio::task::yield_now().await;
    while service.create_calls() == 0 {
        tokio::task::yield_now().await;
    }

    let err = controller.submit().await.unwrap_err();
    assert!(matches!(
        err,
        SyncError::AlreadyInFlight {
            action: sync::ActionClass::Submit
        }
    ));
    // The rejected submit never reached the service.
    assert_eq!(service.create_calls(), 1);

    drop(gate);
    first.await.unwrap().unwrap();
    assert_eq!(store.read().await.notes().len(), 1);
}

#[tokio::test]
async fn test_submit_dispatches_on_edit_target() {
    let (store, service, controller) = setup();
    let note = service.create_note(&Draft::new("A", "B")).await.unwrap();
    controller.refresh().await.unwrap();

    // Composing submits a create.
    {
        let mut store = store.write().await;
        store.set_draft_field(DraftField::Title, "New");
        store.set_draft_field(DraftField::Content, "note");
    }
    controller.submit().await.unwrap();
    assert_eq!(service.create_calls(), 2);
    assert_eq!(service.update_calls(), 0);

    // Editing submits an update for that id.
    {
        let mut store = store.write().await;
        let n = store.find_note(&note.id).unwrap().clone();
        store.begin_edit(&n);
        store.set_draft_field(DraftField::Title, "A2");
    }
    controller.submit().await.unwrap();
    assert_eq!(service.create_calls(), 2);
    assert_eq!(service.update_calls(), 1);
    assert_eq!(
        store.read().await.find_note(&note.id).unwrap().title,
        "A2"
    );
}
