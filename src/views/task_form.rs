use super::ViewError;
use crate::api::{Task, TaskInput};
use crate::utils::{date_portion, parse_due_date};
use chrono::NaiveDate;

/// Editable mirror of a task. Status is changed through lane moves, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub assignee_email: String,
    pub due_date: String,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            assignee_email: task.assignee_email.clone().unwrap_or_default(),
            due_date: task.due_date.as_deref().map(date_portion).unwrap_or_default(),
        }
    }

    pub fn to_input(&self, today: NaiveDate) -> Result<TaskInput, ViewError> {
        if self.title.trim().is_empty() {
            return Err(ViewError::TitleRequired);
        }
        Ok(TaskInput {
            title: self.title.clone(),
            description: self.description.clone(),
            assignee_email: self.assignee_email.clone(),
            status: None,
            due_date: parse_due_date(&self.due_date, today)?,
        })
    }
}
