use std::sync::{Mutex, MutexGuard};

use log::{debug, info};

use super::IdSequence;
use crate::error::AppError;
use crate::models::task::MISSING_NEW_NAME_MESSAGE;
use crate::models::Task;

pub const TASK_NOT_FOUND_MESSAGE: &str = "Task not found";
pub const MISSING_TASK_ID_MESSAGE: &str = "Task ID is missing";

#[derive(Debug)]
struct TaskState {
    tasks: Vec<Task>,
    ids: IdSequence,
}

/// Ordered collection of tasks, kept in insertion order.
#[derive(Debug)]
pub struct TaskStore {
    state: Mutex<TaskState>,
}

impl TaskStore {
    /// Creates a store holding `seed`, in the given order.
    pub fn new(seed: Vec<Task>) -> Self {
        let ids = IdSequence::after(seed.iter().map(|task| task.id.as_str()));
        Self {
            state: Mutex::new(TaskState { tasks: seed, ids }),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn lock(&self) -> Result<MutexGuard<'_, TaskState>, AppError> {
        self.state
            .lock()
            .map_err(|_| AppError::InternalServerError("Task store lock poisoned".into()))
    }

    /// Returns a snapshot of every task in store order.
    pub fn list(&self) -> Result<Vec<Task>, AppError> {
        Ok(self.lock()?.tasks.clone())
    }

    /// Appends one not-completed task per name, in order, and returns the new records.
    ///
    /// Names are expected to be validated already; an empty slice creates nothing.
    pub fn create_batch(&self, names: Vec<String>) -> Result<Vec<Task>, AppError> {
        let mut state = self.lock()?;
        let created: Vec<Task> = names
            .into_iter()
            .map(|name| Task::new(state.ids.next_id(), name))
            .collect();
        state.tasks.extend(created.iter().cloned());

        info!("Created {} task(s), store now holds {}", created.len(), state.tasks.len());
        Ok(created)
    }

    /// Replaces the name of the task with `id` and returns the updated record.
    ///
    /// An unknown id is `NotFound` whatever the name. A missing name is only
    /// rejected for a task that exists; an empty name is accepted.
    pub fn rename(&self, id: &str, new_name: Option<String>) -> Result<Task, AppError> {
        let mut state = self.lock()?;
        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND_MESSAGE.into()))?;
        let new_name =
            new_name.ok_or_else(|| AppError::BadRequest(MISSING_NEW_NAME_MESSAGE.into()))?;

        debug!("Renaming task {} from {:?} to {:?}", id, task.task, new_name);
        task.task = new_name;
        Ok(task.clone())
    }

    /// Removes the first task with `id` and returns it.
    pub fn delete(&self, id: &str) -> Result<Task, AppError> {
        if id.trim().is_empty() {
            return Err(AppError::BadRequest(MISSING_TASK_ID_MESSAGE.into()));
        }

        let mut state = self.lock()?;
        let index = state
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND_MESSAGE.into()))?;

        let removed = state.tasks.remove(index);
        info!("Deleted task {}", removed.id);
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.tasks.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }
}
