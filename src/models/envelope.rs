//! The uniform response body shared by every JSON endpoint.
//!
//! A successful response is `{"code": <status>, "message": <text>, ...}` where the
//! remaining fields come from a payload struct flattened into the envelope.

use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

use super::{Task, UserProfile};

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: String,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, body: T) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            body,
        }
    }

    /// Builds an `HttpResponse` whose status matches the envelope's `code`.
    pub fn respond(status: StatusCode, message: impl Into<String>, body: T) -> HttpResponse {
        HttpResponse::build(status).json(Self::new(status, message, body))
    }
}

/// Payload of `GET /tasks` and `POST /tasks`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

/// Payload of `PATCH /tasks/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedTask {
    pub updated: Task,
}

/// Payload of `DELETE /tasks/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedTask {
    pub task: Task,
}

/// Payload of `POST /register`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub user: UserProfile,
}

/// Payload of `POST /login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginToken {
    pub token: String,
}
