//! `PgTaskStatusRepository` against PostgreSQL.

use pretty_assertions::assert_eq;

use task_manager::domain::{NewTask, NewTaskStatus, TaskRepository, TaskStatusRepository};
use task_manager::infrastructure::repositories::{PgTaskRepository, PgTaskStatusRepository};
use task_manager::shared::error::AppError;

use super::{insert_status, pg_pool, unique, MISSING_ID};

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn task_status_round_trip() {
    let pool = pg_pool().await;
    let repo = PgTaskStatusRepository::new(pool.clone());

    let created = insert_status(&pool).await;
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));
    assert_eq!(
        repo.find_by_slug(&created.slug).await.unwrap(),
        Some(created.clone())
    );

    let mut changed = created.clone();
    changed.name = "Renamed".into();
    changed.slug = unique("renamed");
    let updated = repo.update(&changed).await.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.slug, changed.slug);
    assert_eq!(repo.find_by_slug(&created.slug).await.unwrap(), None);

    repo.delete(created.id).await.unwrap();
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
    assert!(matches!(
        repo.delete(created.id).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_slug_conflicts() {
    let pool = pg_pool().await;
    let repo = PgTaskStatusRepository::new(pool.clone());
    let existing = insert_status(&pool).await;

    let err = repo
        .create(&NewTaskStatus {
            name: "Copy".into(),
            slug: existing.slug.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn update_missing_status_is_not_found() {
    let pool = pg_pool().await;
    let mut ghost = insert_status(&pool).await;
    ghost.id = MISSING_ID;
    ghost.slug = unique("ghost");

    let err = PgTaskStatusRepository::new(pool.clone())
        .update(&ghost)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "{err:?}");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn status_in_use_cannot_be_deleted() {
    let pool = pg_pool().await;
    let status = insert_status(&pool).await;
    PgTaskRepository::new(pool.clone())
        .create(&NewTask {
            index: None,
            name: unique("task"),
            description: None,
            task_status_id: status.id,
            assignee_id: None,
            label_ids: vec![],
        })
        .await
        .unwrap();

    let err = PgTaskStatusRepository::new(pool.clone())
        .delete(status.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
}
