//! User Service
//!
//! Handles user management operations. Users may only modify or delete
//! their own account.

use std::sync::Arc;

use async_trait::async_trait;

use super::auth_service::hash_password;
use crate::application::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::application::mapping;
use crate::domain::{User, UserRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list(&self) -> Result<Vec<UserResponse>, AppError>;

    async fn get(&self, id: i64) -> Result<UserResponse, AppError>;

    async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, AppError>;

    /// Update user `id` on behalf of the principal with email `principal`.
    async fn update(
        &self,
        id: i64,
        request: UpdateUserRequest,
        principal: &str,
    ) -> Result<UserResponse, AppError>;

    async fn delete(&self, id: i64, principal: &str) -> Result<(), AppError>;
}

/// UserService implementation
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    async fn ensure_email_free(&self, email: &str, except: Option<i64>) -> Result<(), AppError> {
        match self.user_repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != except => Err(AppError::invalid_field(
                "email",
                "user with this email already exists",
            )),
            _ => Ok(()),
        }
    }

    async fn find_owned(&self, id: i64, principal: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

        if !user.is_owned_by(principal) {
            return Err(AppError::Forbidden(
                "You can only modify your own account".into(),
            ));
        }

        Ok(user)
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get(&self, id: i64) -> Result<UserResponse, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        self.ensure_email_free(&request.email, None).await?;

        let digest = hash_password(&request.password)?;
        let user = self
            .user_repo
            .create(&mapping::new_user(request, digest))
            .await?;

        tracing::info!(user_id = user.id, "User created");
        metrics::record_mutation("user", "create");
        Ok(user.into())
    }

    async fn update(
        &self,
        id: i64,
        request: UpdateUserRequest,
        principal: &str,
    ) -> Result<UserResponse, AppError> {
        let mut user = self.find_owned(id, principal).await?;

        if let Some(Some(email)) = &request.email {
            self.ensure_email_free(email, Some(id)).await?;
        }
        let digest = match &request.password {
            Some(Some(password)) => Some(hash_password(password)?),
            _ => None,
        };

        mapping::apply_user_update(&mut user, request, digest);
        let user = self.user_repo.update(&user).await?;

        tracing::info!(user_id = user.id, "User updated");
        metrics::record_mutation("user", "update");
        Ok(user.into())
    }

    async fn delete(&self, id: i64, principal: &str) -> Result<(), AppError> {
        self.find_owned(id, principal).await?;
        self.user_repo.delete(id).await?;

        tracing::info!(user_id = id, "User deleted");
        metrics::record_mutation("user", "delete");
        Ok(())
    }
}
