//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - User accounts
//! - **PgTaskStatusRepository** - Task statuses keyed by slug
//! - **PgLabelRepository** - Labels
//! - **PgTaskRepository** - Tasks with their label links
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgTaskRepository, PgUserRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let task_repo = PgTaskRepository::new(pool);
//! }
//! ```

pub mod label_repository;
pub mod task_repository;
pub mod task_status_repository;
pub mod user_repository;

pub use label_repository::PgLabelRepository;
pub use task_repository::PgTaskRepository;
pub use task_status_repository::PgTaskStatusRepository;
pub use user_repository::PgUserRepository;
