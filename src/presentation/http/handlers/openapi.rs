//! OpenAPI document
//!
//! Generated from the handler annotations and DTO schemas.

use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::{auth, label, task, task_status, user};
use crate::application::dto::{
    CreateLabelRequest, CreateTaskRequest, CreateTaskStatusRequest, CreateUserRequest,
    LabelResponse, LoginRequest, TaskResponse, TaskStatusResponse, UpdateLabelRequest,
    UpdateTaskRequest, UpdateTaskStatusRequest, UpdateUserRequest, UserResponse,
};
use crate::shared::error::{ErrorResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    info(title = "Task Manager API"),
    paths(
        auth::login,
        user::list_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
        task_status::list_task_statuses,
        task_status::get_task_status,
        task_status::create_task_status,
        task_status::update_task_status,
        task_status::delete_task_status,
        label::list_labels,
        label::get_label,
        label::create_label,
        label::update_label,
        label::delete_label,
        task::list_tasks,
        task::get_task,
        task::create_task,
        task::update_task,
        task::delete_task,
    ),
    components(schemas(
        LoginRequest,
        CreateUserRequest,
        UpdateUserRequest,
        UserResponse,
        CreateTaskStatusRequest,
        UpdateTaskStatusRequest,
        TaskStatusResponse,
        CreateLabelRequest,
        UpdateLabelRequest,
        LabelResponse,
        CreateTaskRequest,
        UpdateTaskRequest,
        TaskResponse,
        ErrorResponse,
        FieldError,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login"),
        (name = "users", description = "User accounts"),
        (name = "task_statuses", description = "Task workflow states"),
        (name = "labels", description = "Task labels"),
        (name = "tasks", description = "Tasks")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
