use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Deserialize an optional text field, treating `""` as absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub slug: String,
    pub name: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid status '{0}'")]
pub struct ParseStatusError(String);

fn status_key(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace(['-', ' '], "_")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Completed, Self::OnHold];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::OnHold => "ON_HOLD",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = status_key(s);
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == key)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Status of a fetched project as reported by the server.
///
/// Unknown values are kept so one odd row does not blank the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectState {
    Known(ProjectStatus),
    Unrecognized(String),
}

impl ProjectState {
    pub fn known(&self) -> Option<ProjectStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }

    /// Wire text, verbatim for unrecognized values.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<ProjectStatus> for ProjectState {
    fn from(status: ProjectStatus) -> Self {
        Self::Known(status)
    }
}

/// Task workflow state.
///
/// Transitions are unrestricted: any state may move to either other state,
/// and `Done` can be reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Board lane order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Label of the action that moves a task into this state.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// States a task in `self` can move to.
    pub fn others(self) -> [Self; 2] {
        match self {
            Self::Todo => [Self::InProgress, Self::Done],
            Self::InProgress => [Self::Todo, Self::Done],
            Self::Done => [Self::Todo, Self::InProgress],
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = status_key(s);
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == key)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Status of a fetched task as reported by the server.
///
/// The server does not validate task statuses, so values outside
/// [`TaskStatus`] are kept verbatim instead of failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskState {
    Known(TaskStatus),
    Unrecognized(String),
}

impl TaskState {
    pub fn known(&self) -> Option<TaskStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<TaskStatus> for TaskState {
    fn from(status: TaskStatus) -> Self {
        Self::Known(status)
    }
}

/// Server-computed task aggregate of a project. Read-only for the client.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    #[serde(default)]
    pub task_count: u32,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    pub status: ProjectState,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub stats: Option<ProjectStats>,
}

impl Project {
    /// Stats with missing values read as zero.
    pub fn stats_or_default(&self) -> ProjectStats {
        self.stats.unwrap_or_default()
    }
}

/// Row of the stats refresh query: a project id and its current stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStatsRow {
    pub id: String,
    #[serde(default)]
    pub stats: Option<ProjectStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author_email: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    pub status: TaskState,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub assignee_email: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
