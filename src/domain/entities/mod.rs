//! # Domain Entities
//!
//! Core domain entities representing the business objects of the task tracker.
//! All entities map directly to their corresponding database tables.
//!
//! - **User**: account; the email is the login identity
//! - **TaskStatus**: workflow state, addressed by a unique slug
//! - **Label**: tag with a unique name
//! - **Task**: work item referencing a status, an assignee and labels
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod label;
mod task;
mod task_status;
mod user;

pub use label::{Label, LabelRepository, NewLabel, DEFAULT_LABELS};
pub use task::{NewTask, Task, TaskFilter, TaskRepository};
pub use task_status::{NewTaskStatus, TaskStatus, TaskStatusRepository, DEFAULT_TASK_STATUSES};
pub use user::{NewUser, User, UserRepository};

#[cfg(test)]
pub use label::MockLabelRepository;
#[cfg(test)]
pub use task::MockTaskRepository;
#[cfg(test)]
pub use task_status::MockTaskStatusRepository;
#[cfg(test)]
pub use user::MockUserRepository;
