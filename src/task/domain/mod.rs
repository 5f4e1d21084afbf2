//! Domain model for task records.
//!
//! The task domain models validated record construction, partial updates,
//! completion toggling, and the query values used for listing and search,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod query;
mod task;

pub use error::TaskValidationError;
pub use fields::{TaskDescription, TaskTitle};
pub use ids::TaskId;
pub use query::{PageRequest, SearchQuery};
pub use task::{PersistedTaskData, Task, TaskPatch};
