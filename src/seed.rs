//! Default records loaded into the stores at startup.
//!
//! The fixtures are compiled into the binary so the server has no runtime file
//! dependencies.

use crate::error::AppError;
use crate::models::{Task, User};

const DEFAULT_TASKS: &str = include_str!("../data/default_tasks.json");
const DEFAULT_USERS: &str = include_str!("../data/default_users.json");

pub fn default_tasks() -> Result<Vec<Task>, AppError> {
    Ok(serde_json::from_str(DEFAULT_TASKS)?)
}

pub fn default_users() -> Result<Vec<User>, AppError> {
    Ok(serde_json::from_str(DEFAULT_USERS)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_tasks_parse_with_unique_ids() {
        let tasks = default_tasks().unwrap();
        assert!(!tasks.is_empty());

        let ids: HashSet<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tasks.len());
        assert!(tasks.iter().all(|t| !t.id.is_empty() && !t.task.is_empty()));
    }

    #[test]
    fn test_default_users_have_unique_emails() {
        let users = default_users().unwrap();
        assert!(!users.is_empty());

        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), users.len());
    }
}
