pub mod envelope;
pub mod task;
pub mod user;

pub use envelope::{DeletedTask, Envelope, LoginToken, RegisteredUser, TaskList, UpdatedTask};
pub use task::{CreateTasksRequest, RenameTaskRequest, Task, TaskInput};
pub use user::{User, UserProfile};
