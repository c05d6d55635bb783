//! `PgLabelRepository` against PostgreSQL.

use pretty_assertions::assert_eq;

use task_manager::domain::{LabelRepository, NewLabel, NewTask, TaskRepository};
use task_manager::infrastructure::repositories::{PgLabelRepository, PgTaskRepository};
use task_manager::shared::error::AppError;

use super::{insert_label, insert_status, pg_pool, unique, MISSING_ID};

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn label_round_trip() {
    let pool = pg_pool().await;
    let repo = PgLabelRepository::new(pool.clone());

    let created = insert_label(&pool).await;
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));
    assert_eq!(
        repo.find_by_name(&created.name).await.unwrap(),
        Some(created.clone())
    );

    let mut changed = created.clone();
    changed.name = unique("renamed");
    let updated = repo.update(&changed).await.unwrap();
    assert_eq!(updated.name, changed.name);

    repo.delete(created.id).await.unwrap();
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
    assert!(matches!(
        repo.delete(created.id).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn find_by_ids_returns_existing_labels_in_id_order() {
    let pool = pg_pool().await;
    let repo = PgLabelRepository::new(pool.clone());
    let first = insert_label(&pool).await;
    let second = insert_label(&pool).await;

    let found = repo
        .find_by_ids(&[second.id, MISSING_ID, first.id])
        .await
        .unwrap();

    assert_eq!(found, vec![first, second]);
    assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_name_conflicts() {
    let pool = pg_pool().await;
    let repo = PgLabelRepository::new(pool.clone());
    let existing = insert_label(&pool).await;
    let other = insert_label(&pool).await;

    let err = repo
        .create(&NewLabel {
            name: existing.name.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");

    let mut renamed = other;
    renamed.name = existing.name.clone();
    let err = repo.update(&renamed).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn attached_label_cannot_be_deleted() {
    let pool = pg_pool().await;
    let label = insert_label(&pool).await;
    let status = insert_status(&pool).await;
    PgTaskRepository::new(pool.clone())
        .create(&NewTask {
            index: None,
            name: unique("task"),
            description: None,
            task_status_id: status.id,
            assignee_id: None,
            label_ids: vec![label.id],
        })
        .await
        .unwrap();

    let err = PgLabelRepository::new(pool.clone())
        .delete(label.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
}
