use crate::api::{ApiError, TaskStatus};
use crate::tenant::TenantError;
use crate::utils::DueDateError;
use thiserror::Error;

/// Failure of a view action. The `Display` text is the user-visible message.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Name required")]
    NameRequired,

    #[error("Title required")]
    TitleRequired,

    #[error(transparent)]
    DueDate(#[from] DueDateError),

    #[error("Task is already {0}")]
    SameStatus(TaskStatus),

    #[error("Task has unknown status and cannot be moved from the board")]
    UnknownStatus,

    #[error("Project has unknown status '{0}' and cannot be edited")]
    UnknownProjectStatus(String),

    #[error("Project not found: {0}")]
    UnknownProject(String),

    #[error("Task not found: {0}")]
    UnknownTask(String),

    #[error("Select a project to view tasks.")]
    NoProjectSelected,

    #[error(transparent)]
    Tenant(#[from] TenantError),

    #[error("{0}")]
    Api(#[from] ApiError),
}

impl ViewError {
    /// Whether the action was rejected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NameRequired
                | Self::TitleRequired
                | Self::DueDate(_)
                | Self::SameStatus(_)
                | Self::UnknownStatus
                | Self::UnknownProjectStatus(_)
                | Self::UnknownProject(_)
                | Self::UnknownTask(_)
                | Self::NoProjectSelected
        ) || matches!(self, Self::Tenant(TenantError::EmptySlug))
    }
}
