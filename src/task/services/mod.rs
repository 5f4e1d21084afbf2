//! Application services for task orchestration.

mod tasks;

pub use tasks::{
    CompletionToggle, CreateTaskRequest, DeletedTask, TaskPage, TaskService, TaskServiceError,
    TaskServiceResult, TaskStatistics, UpdateTaskRequest,
};
