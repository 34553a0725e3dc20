//! Typed GraphQL operations.

pub mod documents;
mod error;
mod inputs;
mod operations;
mod types;

pub use error::ApiError;
pub use inputs::{CommentInput, ProjectInput, TaskInput};
pub use operations::{
    add_task_comment, create_organization, create_project, create_task, list_organizations,
    list_projects, list_tasks, project_stats, set_task_status, update_project, update_task,
};
pub use types::{
    Comment, Organization, ParseStatusError, Project, ProjectState, ProjectStats, ProjectStatsRow,
    ProjectStatus, Task, TaskState, TaskStatus,
};
