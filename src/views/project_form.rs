use super::ViewError;
use crate::api::{Project, ProjectInput, ProjectStatus};
use crate::utils::{date_portion, parse_due_date};
use chrono::NaiveDate;

/// Editable mirror of a project.
///
/// `id` is set only while editing an existing project. The due date is kept
/// as typed text until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: String,
}

impl ProjectForm {
    /// Form pre-filled from `project`, with its due date reduced to the date.
    ///
    /// An unrecognized status pre-fills as the default status.
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: Some(project.id.clone()),
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            status: project.status.known().unwrap_or_default(),
            due_date: project.due_date.as_deref().map(date_portion).unwrap_or_default(),
        }
    }

    /// Validate and convert into mutation input. No network call is made here.
    pub fn to_input(&self, today: NaiveDate) -> Result<ProjectInput, ViewError> {
        if self.name.trim().is_empty() {
            return Err(ViewError::NameRequired);
        }
        Ok(ProjectInput {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            due_date: parse_due_date(&self.due_date, today)?,
        })
    }
}
