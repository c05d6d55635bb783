//! Request DTOs
//!
//! Data structures for API request bodies and query strings.
//!
//! Create payloads use plain fields validated through `#[derive(Validate)]`;
//! a missing or `null` required string arrives empty and fails its rule. Update payloads are
//! tri-state (an absent field is `None`, an explicit `null` is `Some(None)`)
//! and implement `Validate` by hand.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::TaskFilter;
use crate::shared::validation::{
    all_of, double_option, email, empty_as_none, length_between, not_blank, null_as_empty,
    FieldChecks,
};

fn password(value: &str) -> Result<(), ValidationError> {
    length_between(value, 3, 100)
}

fn label_length(value: &str) -> Result<(), ValidationError> {
    length_between(value, 3, 1000)
}

fn label_name(value: &str) -> Result<(), ValidationError> {
    all_of(value, &[not_blank, label_length])
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Account email
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    #[schema(required = true, example = "hexlet@example.com")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    #[schema(required = true)]
    pub password: String,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(email(message = "must be a well-formed email address"))]
    #[schema(required = true, example = "jack@google.com")]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 3, max = 100, message = "size must be between 3 and 100"))]
    #[schema(required = true)]
    pub password: String,
}

/// Update user request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, nullable = true)]
    pub first_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, nullable = true)]
    pub last_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub password: Option<Option<String>>,
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = FieldChecks::new();
        checks
            .check_present("email", &self.email, |v| email(v))
            .check_present("password", &self.password, |v| password(v));
        checks.finish()
    }
}

/// Create task status request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTaskStatusRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    #[schema(required = true, example = "Draft")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    #[schema(required = true, example = "draft")]
    pub slug: String,
}

/// Update task status request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTaskStatusRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub slug: Option<Option<String>>,
}

impl Validate for UpdateTaskStatusRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = FieldChecks::new();
        checks
            .check_present("name", &self.name, |v| not_blank(v))
            .check_present("slug", &self.slug, |v| not_blank(v));
        checks.finish()
    }
}

/// Create label request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLabelRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "label_name"))]
    #[schema(required = true, example = "bug", min_length = 3, max_length = 1000)]
    pub name: String,
}

/// Update label request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLabelRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
}

impl Validate for UpdateLabelRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = FieldChecks::new();
        checks.check_present("name", &self.name, |v| label_name(v));
        checks.finish()
    }
}

/// Create task request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTaskRequest {
    pub index: Option<i32>,
    pub assignee_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    #[schema(required = true, example = "Fix login page")]
    pub title: String,
    pub content: Option<String>,
    /// Status slug
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    #[schema(required = true, example = "draft")]
    pub status: String,
    #[serde(rename = "taskLabelIds")]
    pub task_label_ids: Option<Vec<i64>>,
}

/// Update task request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>, nullable = true)]
    pub index: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>, nullable = true)]
    pub assignee_id: Option<Option<i64>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, nullable = true)]
    pub content: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub status: Option<Option<String>>,

    #[serde(
        default,
        rename = "taskLabelIds",
        deserialize_with = "double_option"
    )]
    #[schema(value_type = Option<Vec<i64>>, nullable = true)]
    pub task_label_ids: Option<Option<Vec<i64>>>,
}

impl Validate for UpdateTaskRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = FieldChecks::new();
        checks
            .check_present("title", &self.title, |v| not_blank(v))
            .check_present("status", &self.status, |v| not_blank(v));
        checks.finish()
    }
}

/// Task list filters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct TaskFilterParams {
    /// Case-insensitive substring of the title
    #[serde(default, deserialize_with = "empty_as_none")]
    pub title_cont: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub assignee_id: Option<i64>,
    /// Status slug
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub label_id: Option<i64>,
}

impl From<TaskFilterParams> for TaskFilter {
    fn from(params: TaskFilterParams) -> Self {
        Self {
            title_cont: params.title_cont,
            assignee_id: params.assignee_id,
            status: params.status,
            label_id: params.label_id,
        }
    }
}
