//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Login, password hashing, JWT issuance and verification
//! - **UserService**: Account management with owner-only writes
//! - **TaskStatusService**: Task statuses keyed by slug
//! - **LabelService**: Labels
//! - **TaskService**: Tasks, their filters and references
//! - **SeedService**: Default rows created on startup

pub mod auth_service;
pub mod label_service;
pub mod seed_service;
pub mod task_service;
pub mod task_status_service;
pub mod user_service;

pub use auth_service::{AuthError, AuthService, AuthServiceImpl, Claims, JwtService};
pub use label_service::{LabelService, LabelServiceImpl};
pub use seed_service::SeedService;
pub use task_service::{TaskService, TaskServiceImpl};
pub use task_status_service::{TaskStatusService, TaskStatusServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
