use crate::{
    error::AppError,
    models::{CreateTasksRequest, DeletedTask, Envelope, RenameTaskRequest, TaskList, UpdatedTask},
    store::TaskStore,
};
use actix_web::{delete, get, http::StatusCode, patch, post, web, Responder};

/// Lists every task.
///
/// ## Responses:
/// - `200 OK`: `{code, message: "OK", tasks}` with tasks in insertion order.
#[get("")]
pub async fn get_tasks(store: web::Data<TaskStore>) -> Result<impl Responder, AppError> {
    let tasks = store.list()?;
    Ok(Envelope::respond(StatusCode::OK, "OK", TaskList { tasks }))
}

/// Creates a batch of tasks.
///
/// ## Request Body:
/// `{"tasks": [{"task": "<name>"}, ...]}` with at least one entry and a non-empty
/// name on every entry. Ids are assigned in request order.
///
/// ## Responses:
/// - `201 Created`: `{code, message: "Created task(s)", tasks}` with the new records.
/// - `400 Bad Request`: If the batch is missing, empty, not an array, or any entry lacks a name.
#[post("")]
pub async fn create_tasks(
    store: web::Data<TaskStore>,
    body: web::Json<CreateTasksRequest>,
) -> Result<impl Responder, AppError> {
    let names = body.into_inner().into_task_names()?;
    let tasks = store.create_batch(names)?;
    Ok(Envelope::respond(
        StatusCode::CREATED,
        "Created task(s)",
        TaskList { tasks },
    ))
}

/// Renames a task.
///
/// ## Path Parameters:
/// - `id`: The id of the task to rename.
///
/// ## Request Body:
/// `{"newName": "<name>"}`. The name may be empty but must be present. An absent
/// or unparsable body counts as a missing name, so the id lookup always runs first.
///
/// ## Responses:
/// - `200 OK`: `{code, message: "Task updated", updated}`.
/// - `400 Bad Request`: If the task exists but `newName` is missing.
/// - `404 Not Found`: If no task has the given id, whatever the body.
#[patch("/{id}")]
pub async fn rename_task(
    store: web::Data<TaskStore>,
    task_id: web::Path<String>,
    body: Option<web::Json<RenameTaskRequest>>,
) -> Result<impl Responder, AppError> {
    let new_name = body.and_then(|body| body.into_inner().new_name);
    let updated = store.rename(&task_id, new_name)?;
    Ok(Envelope::respond(
        StatusCode::OK,
        "Task updated",
        UpdatedTask { updated },
    ))
}

/// Deletes a task.
///
/// ## Responses:
/// - `200 OK`: `{code, message: "Task deleted", task}` with the removed record.
/// - `404 Not Found`: If no task has the given id.
#[delete("/{id}")]
pub async fn delete_task(
    store: web::Data<TaskStore>,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let task = store.delete(&task_id)?;
    Ok(Envelope::respond(
        StatusCode::OK,
        "Task deleted",
        DeletedTask { task },
    ))
}
