use crate::*;
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;
use taskdeck_identity::{IdentityDirectory, IdentityService, NewIdentity};
use taskdeck_storage::RocksDbStorage;

fn create_test_storage() -> (Arc<RocksDbStorage>, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = RocksDbStorage::open(temp_dir.path()).unwrap();
    (Arc::new(db), temp_dir)
}

fn create_task_service(storage: Arc<RocksDbStorage>) -> Arc<TaskService<RocksDbStorage>> {
    Arc::new(TaskService::new(storage))
}

async fn register_caller(storage: Arc<RocksDbStorage>, username: &str) -> Uuid {
    let identities = IdentityService::new(storage);
    identities
        .register(NewIdentity {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "secret".to_string(),
        })
        .await
        .unwrap()
        .identity
        .identity_id
}

fn draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        ..TaskDraft::default()
    }
}

#[tokio::test]
async fn create_assigns_server_fields_and_lists_back() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);
    let caller = Uuid::new_v4();

    let created = service
        .create_task(
            caller,
            TaskDraft {
                title: "write report".to_string(),
                description: Some("quarterly numbers".to_string()),
                due_date: Some("2026-09-01".to_string()),
                category: Some("work".to_string()),
                priority: Some(Priority::High),
            },
        )
        .await
        .unwrap();

    assert_eq!(created.owner_id, caller);
    assert!(!created.completed);
    assert!(created.created_at > 1_600_000_000);

    let listed = service.list_tasks(caller).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].task_id, created.task_id);
    assert_eq!(listed[0].title, "write report");
    assert_eq!(listed[0].priority, Some(Priority::High));
}

#[tokio::test]
async fn create_without_title_persists_nothing() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);
    let caller = Uuid::new_v4();

    let result = service.create_task(caller, draft("   ")).await;
    assert!(matches!(result, Err(TaskError::Validation(_))));

    assert!(service.list_tasks(caller).await.unwrap().is_empty());
}

#[tokio::test]
async fn tasks_are_invisible_across_owners() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let task = service.create_task(owner, draft("private")).await.unwrap();

    assert!(service.list_tasks(stranger).await.unwrap().is_empty());

    let update = service
        .update_task(
            stranger,
            task.task_id,
            TaskPatch {
                title: Some("hijacked".to_string()),
                ..TaskPatch::default()
            },
        )
        .await;
    assert!(matches!(update, Err(TaskError::NotFound(_))));

    let delete = service.delete_task(stranger, task.task_id).await;
    assert!(matches!(delete, Err(TaskError::NotFound(_))));

    let toggle = service.toggle_complete(stranger, task.task_id).await;
    assert!(matches!(toggle, Err(TaskError::NotFound(_))));

    // The owner's record is untouched.
    let listed = service.list_tasks(owner).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "private");
    assert!(!listed[0].completed);
}

#[tokio::test]
async fn update_changes_mutable_fields_only() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);
    let caller = Uuid::new_v4();

    let created = service.create_task(caller, draft("before")).await.unwrap();

    let updated = service
        .update_task(
            caller,
            created.task_id,
            TaskPatch {
                title: Some("after".to_string()),
                completed: Some(true),
                priority: Some(Some(Priority::Low)),
                ..TaskPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "after");
    assert!(updated.completed);
    assert_eq!(updated.priority, Some(Priority::Low));
    assert_eq!(updated.owner_id, created.owner_id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.task_id, created.task_id);
}

#[tokio::test]
async fn update_distinguishes_clearing_from_leaving_unchanged() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);
    let caller = Uuid::new_v4();

    let created = service
        .create_task(
            caller,
            TaskDraft {
                title: "errands".to_string(),
                description: Some("buy milk".to_string()),
                category: Some("home".to_string()),
                ..TaskDraft::default()
            },
        )
        .await
        .unwrap();

    // Outer None: description untouched.
    let updated = service
        .update_task(
            caller,
            created.task_id,
            TaskPatch {
                title: Some("errands (weekend)".to_string()),
                ..TaskPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.description.as_deref(), Some("buy milk"));
    assert_eq!(updated.category.as_deref(), Some("home"));

    // Some(None): description cleared back to null.
    let cleared = service
        .update_task(
            caller,
            created.task_id,
            TaskPatch {
                description: Some(None),
                ..TaskPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.description, None);
    assert_eq!(cleared.category.as_deref(), Some("home"));
}

#[tokio::test]
async fn update_rejects_blank_title() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);
    let caller = Uuid::new_v4();

    let created = service.create_task(caller, draft("keep me")).await.unwrap();

    let result = service
        .update_task(
            caller,
            created.task_id,
            TaskPatch {
                title: Some("  ".to_string()),
                ..TaskPatch::default()
            },
        )
        .await;
    assert!(matches!(result, Err(TaskError::Validation(_))));

    let listed = service.list_tasks(caller).await.unwrap();
    assert_eq!(listed[0].title, "keep me");
}

#[tokio::test]
async fn update_unknown_task_returns_not_found() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);

    let result = service
        .update_task(Uuid::new_v4(), Uuid::new_v4(), TaskPatch::default())
        .await;
    assert!(matches!(result, Err(TaskError::NotFound(_))));
}

#[tokio::test]
async fn second_delete_returns_not_found() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);
    let caller = Uuid::new_v4();

    let created = service.create_task(caller, draft("ephemeral")).await.unwrap();

    service.delete_task(caller, created.task_id).await.unwrap();
    assert!(service.list_tasks(caller).await.unwrap().is_empty());

    let again = service.delete_task(caller, created.task_id).await;
    assert!(matches!(again, Err(TaskError::NotFound(_))));
}

#[tokio::test]
async fn double_toggle_restores_original_state() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);
    let caller = Uuid::new_v4();

    let created = service.create_task(caller, draft("flip me")).await.unwrap();
    assert!(!created.completed);

    let once = service.toggle_complete(caller, created.task_id).await.unwrap();
    assert!(once.completed);

    let twice = service.toggle_complete(caller, created.task_id).await.unwrap();
    assert!(!twice.completed);
}

#[tokio::test]
async fn concurrent_toggles_cancel_out() {
    let (storage, _dir) = create_test_storage();
    let service = create_task_service(storage);
    let caller = Uuid::new_v4();

    let created = service.create_task(caller, draft("contended")).await.unwrap();

    let (a, b) = tokio::join!(
        service.toggle_complete(caller, created.task_id),
        service.toggle_complete(caller, created.task_id),
    );
    a.unwrap();
    b.unwrap();

    // Serialized read-modify-writes: an even number of toggles leaves the
    // flag where it started.
    let listed = service.list_tasks(caller).await.unwrap();
    assert!(!listed[0].completed);
}

#[tokio::test]
async fn profile_rate_is_zero_with_no_tasks() {
    let (storage, _dir) = create_test_storage();
    let caller = register_caller(storage.clone(), "carol").await;

    let identities = Arc::new(IdentityService::new(storage.clone()));
    let tasks = create_task_service(storage);
    let profiles = ProfileService::new(identities, tasks);

    let summary = profiles.get_profile(caller).await.unwrap();
    assert_eq!(summary.username, "carol");
    assert_eq!(summary.email, "carol@example.com");
    assert_eq!(summary.task_count, 0);
    assert_eq!(summary.completed_tasks, 0);
    assert_eq!(summary.completion_rate, 0.0);
}

#[tokio::test]
async fn profile_rate_reflects_live_counts() {
    let (storage, _dir) = create_test_storage();
    let caller = register_caller(storage.clone(), "dave").await;

    let identities = Arc::new(IdentityService::new(storage.clone()));
    let tasks = create_task_service(storage);

    let first = tasks.create_task(caller, draft("one")).await.unwrap();
    tasks.create_task(caller, draft("two")).await.unwrap();
    tasks.create_task(caller, draft("three")).await.unwrap();
    tasks.toggle_complete(caller, first.task_id).await.unwrap();

    let profiles = ProfileService::new(identities, tasks.clone());

    let summary = profiles.get_profile(caller).await.unwrap();
    assert_eq!(summary.task_count, 3);
    assert_eq!(summary.completed_tasks, 1);
    assert!((summary.completion_rate - 100.0 / 3.0).abs() < 1e-9);

    // No caching: the next toggle shows up immediately.
    tasks.toggle_complete(caller, first.task_id).await.unwrap();
    let summary = profiles.get_profile(caller).await.unwrap();
    assert_eq!(summary.completed_tasks, 0);
    assert_eq!(summary.completion_rate, 0.0);
}

#[test]
fn priority_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
    assert_eq!(parsed, Priority::Medium);
}
