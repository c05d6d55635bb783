//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::error::AppError;

/// Represents a user account.
///
/// The email doubles as the login name and as the `sub` claim of issued
/// tokens.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - first_name: TEXT NULL
/// - last_name: TEXT NULL
/// - email: TEXT NOT NULL UNIQUE
/// - password_digest: TEXT NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// Email address (unique)
    pub email: String,

    /// Argon2 PHC string
    #[serde(skip_serializing)]
    pub password_digest: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the authenticated principal `email` is this user.
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.email == email
    }
}

/// Values for inserting a user; id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_digest: String,
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by their internal ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Create a new user.
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;

    /// Update an existing user's mutable fields.
    async fn update(&self, user: &User) -> Result<User, AppError>;

    /// Delete a user; `NotFound` if absent, `Conflict` if still assigned to tasks.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
