use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

pub const EMPTY_BATCH_MESSAGE: &str = "Please provide a non-empty array of tasks.";
pub const INVALID_TASK_NAME_MESSAGE: &str = "Invalid or missing task name in one of the tasks";
pub const MISSING_NEW_NAME_MESSAGE: &str = "Please provide a new task name";

/// Represents a task entity as held by the task store and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Decimal string identifier, unique within the store.
    pub id: String,
    /// The task's name.
    pub task: String,
    /// Whether the task has been completed. New tasks always start as `false`.
    pub completed: bool,
}

impl Task {
    /// Creates a not-yet-completed task.
    pub fn new(id: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            completed: false,
        }
    }
}

/// A single entry of a batch creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskInput {
    /// The name of the task to create. Must be non-empty.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub task: String,
}

/// Body of `POST /tasks`.
///
/// `tasks` is kept as raw JSON so that an absent field, a non-array value and an
/// empty array all produce the same client error instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTasksRequest {
    #[serde(default)]
    pub tasks: Option<Value>,
}

impl CreateTasksRequest {
    /// Validates the whole batch and returns the task names in request order.
    ///
    /// Nothing is returned unless every element is valid, so a rejected batch
    /// never leaves a partial insertion behind.
    pub fn into_task_names(self) -> Result<Vec<String>, AppError> {
        let entries = match self.tasks {
            Some(Value::Array(entries)) if !entries.is_empty() => entries,
            _ => return Err(AppError::BadRequest(EMPTY_BATCH_MESSAGE.into())),
        };

        entries
            .into_iter()
            .map(|entry| -> Result<String, AppError> {
                let input: TaskInput = serde_json::from_value(entry)
                    .map_err(|_| AppError::BadRequest(INVALID_TASK_NAME_MESSAGE.into()))?;
                input
                    .validate()
                    .map_err(|_| AppError::BadRequest(INVALID_TASK_NAME_MESSAGE.into()))?;
                Ok(input.task)
            })
            .collect()
    }
}

/// Body of `PATCH /tasks/{id}`.
///
/// A missing or `null` name stays `None` here; the task store rejects it only
/// once the target task is known to exist.
#[derive(Debug, Default, Deserialize)]
pub struct RenameTaskRequest {
    #[serde(rename = "newName", default)]
    pub new_name: Option<String>,
}
