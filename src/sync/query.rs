use crate::api::{Organization, Project, ProjectStatsRow, Task};

/// Read queries the views depend on, without their variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Organizations,
    Projects,
    ProjectStats,
    Tasks,
}

/// A read query with its variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Organizations,
    Projects { search: String },
    ProjectStats,
    Tasks { project_id: String },
}

impl Query {
    pub fn kind(&self) -> QueryKind {
        match self {
            Self::Organizations => QueryKind::Organizations,
            Self::Projects { .. } => QueryKind::Projects,
            Self::ProjectStats => QueryKind::ProjectStats,
            Self::Tasks { .. } => QueryKind::Tasks,
        }
    }

    /// The query for kinds that take no variables.
    pub fn without_variables(kind: QueryKind) -> Option<Self> {
        match kind {
            QueryKind::Organizations => Some(Self::Organizations),
            QueryKind::ProjectStats => Some(Self::ProjectStats),
            QueryKind::Projects | QueryKind::Tasks => None,
        }
    }
}

/// Result of running a [`Query`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Organizations(Vec<Organization>),
    Projects(Vec<Project>),
    ProjectStats(Vec<ProjectStatsRow>),
    Tasks(Vec<Task>),
}

impl QueryData {
    pub fn kind(&self) -> QueryKind {
        match self {
            Self::Organizations(_) => QueryKind::Organizations,
            Self::Projects(_) => QueryKind::Projects,
            Self::ProjectStats(_) => QueryKind::ProjectStats,
            Self::Tasks(_) => QueryKind::Tasks,
        }
    }
}
