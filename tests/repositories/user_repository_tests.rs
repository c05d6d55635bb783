//! `PgUserRepository` against PostgreSQL.

use pretty_assertions::assert_eq;

use task_manager::domain::{NewTask, NewUser, TaskRepository, UserRepository};
use task_manager::infrastructure::repositories::{PgTaskRepository, PgUserRepository};
use task_manager::shared::error::AppError;

use super::{insert_status, insert_user, pg_pool, unique, MISSING_ID};

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn user_round_trip() {
    let pool = pg_pool().await;
    let repo = PgUserRepository::new(pool.clone());

    let created = insert_user(&pool).await;
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));
    assert_eq!(
        repo.find_by_email(&created.email).await.unwrap(),
        Some(created.clone())
    );
    assert!(repo
        .find_all()
        .await
        .unwrap()
        .iter()
        .any(|u| u.id == created.id));

    let mut changed = created.clone();
    changed.first_name = None;
    changed.last_name = Some("Lovelace".into());
    let updated = repo.update(&changed).await.unwrap();
    assert_eq!(updated.first_name, None);
    assert_eq!(updated.last_name.as_deref(), Some("Lovelace"));
    assert!(updated.updated_at >= created.updated_at);

    repo.delete(created.id).await.unwrap();
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_email_conflicts() {
    let pool = pg_pool().await;
    let repo = PgUserRepository::new(pool.clone());
    let existing = insert_user(&pool).await;
    let other = insert_user(&pool).await;

    let err = repo
        .create(&NewUser {
            first_name: None,
            last_name: None,
            email: existing.email.clone(),
            password_digest: "digest".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");

    let mut renamed = other.clone();
    renamed.email = existing.email.clone();
    let err = repo.update(&renamed).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn missing_user_is_not_found() {
    let pool = pg_pool().await;
    let repo = PgUserRepository::new(pool.clone());
    let mut ghost = insert_user(&pool).await;
    ghost.id = MISSING_ID;
    ghost.email = format!("{}@example.com", unique("ghost"));

    assert!(matches!(
        repo.update(&ghost).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        repo.delete(MISSING_ID).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn assigned_user_cannot_be_deleted() {
    let pool = pg_pool().await;
    let user = insert_user(&pool).await;
    let status = insert_status(&pool).await;
    PgTaskRepository::new(pool.clone())
        .create(&NewTask {
            index: None,
            name: unique("task"),
            description: None,
            task_status_id: status.id,
            assignee_id: Some(user.id),
            label_ids: vec![],
        })
        .await
        .unwrap();

    let err = PgUserRepository::new(pool.clone())
        .delete(user.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
}
