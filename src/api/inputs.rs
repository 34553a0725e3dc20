use super::types::{ProjectStatus, TaskStatus};
use crate::utils::midnight;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Fields submitted by the project form.
///
/// An absent due date is sent as `null`, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: Option<NaiveDate>,
}

/// Fields submitted by the task form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub assignee_email: String,
    /// Omitted when `None`, so the server keeps (or defaults) the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(serialize_with = "serialize_start_of_day")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentInput {
    pub task_id: String,
    pub content: String,
    pub author_email: String,
}

// Task due dates are date-time typed on the server.
#[allow(clippy::ref_option)]
fn serialize_start_of_day<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&midnight(*date).format("%Y-%m-%dT%H:%M:%S").to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;
