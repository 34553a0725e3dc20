use super::invalidation::{invalidated_by, MutationKind};
use super::query::{Query, QueryData, QueryKind};
use crate::api::{
    self, ApiError, Comment, CommentInput, Organization, Project, ProjectInput, ProjectStatsRow,
    Task, TaskInput, TaskStatus,
};
use crate::tenant::TenantContext;
use crate::transport::Transport;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Outcome of a mutation once its invalidated queries have been re-run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled<T> {
    /// The server's view of the mutated entity.
    pub value: T,
    /// Fresh results of the re-run queries, in table order.
    pub refetched: Vec<QueryData>,
    /// Invalidated queries whose re-run failed; their previous results are stale.
    pub failed: Vec<QueryKind>,
}

impl<T> Settled<T> {
    pub fn projects(&self) -> Option<&[Project]> {
        self.refetched.iter().find_map(|data| match data {
            QueryData::Projects(projects) => Some(projects.as_slice()),
            _ => None,
        })
    }

    pub fn tasks(&self) -> Option<&[Task]> {
        self.refetched.iter().find_map(|data| match data {
            QueryData::Tasks(tasks) => Some(tasks.as_slice()),
            _ => None,
        })
    }

    pub fn stats(&self) -> Option<&[ProjectStatsRow]> {
        self.refetched.iter().find_map(|data| match data {
            QueryData::ProjectStats(rows) => Some(rows.as_slice()),
            _ => None,
        })
    }
}

/// Data access for the views.
///
/// Queries are always sent to the server. The variables of the last fetch of
/// each query kind are remembered so that a mutation can re-run exactly the
/// queries it invalidates before it is reported as settled.
pub struct SyncClient {
    transport: Arc<dyn Transport>,
    watched: Mutex<HashMap<QueryKind, Query>>,
}

impl SyncClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            watched: Mutex::new(HashMap::new()),
        }
    }

    fn watch(&self, query: Query) {
        let mut watched = self.watched.lock().unwrap_or_else(PoisonError::into_inner);
        watched.insert(query.kind(), query);
    }

    /// Stop re-running `kind` after mutations, e.g. when its view is closed.
    pub fn forget(&self, kind: QueryKind) {
        let mut watched = self.watched.lock().unwrap_or_else(PoisonError::into_inner);
        watched.remove(&kind);
    }

    /// The query that would be re-run for `kind`, if any.
    pub fn watched(&self, kind: QueryKind) -> Option<Query> {
        let watched = self.watched.lock().unwrap_or_else(PoisonError::into_inner);
        watched
            .get(&kind)
            .cloned()
            .or_else(|| Query::without_variables(kind))
    }

    /// Run `query` and remember its variables.
    pub async fn fetch(&self, tenant: &TenantContext, query: Query) -> Result<QueryData, ApiError> {
        self.watch(query.clone());
        self.run(tenant, &query).await
    }

    async fn run(&self, tenant: &TenantContext, query: &Query) -> Result<QueryData, ApiError> {
        let transport = self.transport.as_ref();
        let data = match query {
            Query::Organizations => {
                QueryData::Organizations(api::list_organizations(transport, tenant).await?)
            }
            Query::Projects { search } => {
                QueryData::Projects(api::list_projects(transport, tenant, search).await?)
            }
            Query::ProjectStats => QueryData::ProjectStats(api::project_stats(transport, tenant).await?),
            Query::Tasks { project_id } => {
                QueryData::Tasks(api::list_tasks(transport, tenant, project_id).await?)
            }
        };
        Ok(data)
    }

    pub async fn organizations(&self, tenant: &TenantContext) -> Result<Vec<Organization>, ApiError> {
        self.watch(Query::Organizations);
        api::list_organizations(self.transport.as_ref(), tenant).await
    }

    pub async fn projects(&self, tenant: &TenantContext, search: &str) -> Result<Vec<Project>, ApiError> {
        self.watch(Query::Projects {
            search: search.to_string(),
        });
        api::list_projects(self.transport.as_ref(), tenant, search).await
    }

    pub async fn tasks(&self, tenant: &TenantContext, project_id: &str) -> Result<Vec<Task>, ApiError> {
        self.watch(Query::Tasks {
            project_id: project_id.to_string(),
        });
        api::list_tasks(self.transport.as_ref(), tenant, project_id).await
    }

    async fn settle<T>(&self, tenant: &TenantContext, mutation: MutationKind, value: T) -> Settled<T> {
        let mut refetched = Vec::new();
        let mut failed = Vec::new();
        for kind in invalidated_by(mutation) {
            let Some(query) = self.watched(*kind) else {
                debug!(?mutation, query = ?kind, "Invalidated query has no watcher; skipping");
                continue;
            };
            match self.run(tenant, &query).await {
                Ok(data) => refetched.push(data),
                Err(e) => {
                    warn!(?mutation, query = ?kind, "Refetch after mutation failed: {e}");
                    failed.push(*kind);
                }
            }
        }
        info!(
            ?mutation,
            refetched = refetched.len(),
            failed = failed.len(),
            "Mutation settled"
        );
        Settled {
            value,
            refetched,
            failed,
        }
    }

    pub async fn create_organization(
        &self,
        tenant: &TenantContext,
        slug: &str,
        name: &str,
    ) -> Result<Settled<Organization>, ApiError> {
        let org = api::create_organization(self.transport.as_ref(), tenant, slug, name).await?;
        Ok(self.settle(tenant, MutationKind::CreateOrganization, org).await)
    }

    pub async fn create_project(
        &self,
        tenant: &TenantContext,
        input: &ProjectInput,
    ) -> Result<Settled<Project>, ApiError> {
        let project = api::create_project(self.transport.as_ref(), tenant, input).await?;
        Ok(self.settle(tenant, MutationKind::CreateProject, project).await)
    }

    pub async fn update_project(
        &self,
        tenant: &TenantContext,
        id: &str,
        input: &ProjectInput,
    ) -> Result<Settled<Project>, ApiError> {
        let project = api::update_project(self.transport.as_ref(), tenant, id, input).await?;
        Ok(self.settle(tenant, MutationKind::UpdateProject, project).await)
    }

    pub async fn create_task(
        &self,
        tenant: &TenantContext,
        project_id: &str,
        input: &TaskInput,
    ) -> Result<Settled<Task>, ApiError> {
        let task = api::create_task(self.transport.as_ref(), tenant, project_id, input).await?;
        Ok(self.settle(tenant, MutationKind::CreateTask, task).await)
    }

    pub async fn update_task(
        &self,
        tenant: &TenantContext,
        id: &str,
        input: &TaskInput,
    ) -> Result<Settled<Task>, ApiError> {
        let task = api::update_task(self.transport.as_ref(), tenant, id, input).await?;
        Ok(self.settle(tenant, MutationKind::UpdateTask, task).await)
    }

    pub async fn move_task(
        &self,
        tenant: &TenantContext,
        id: &str,
        status: TaskStatus,
    ) -> Result<Settled<Task>, ApiError> {
        let task = api::set_task_status(self.transport.as_ref(), tenant, id, status).await?;
        Ok(self.settle(tenant, MutationKind::UpdateTask, task).await)
    }

    pub async fn add_comment(
        &self,
        tenant: &TenantContext,
        input: &CommentInput,
    ) -> Result<Settled<Comment>, ApiError> {
        let comment = api::add_task_comment(self.transport.as_ref(), tenant, input).await?;
        Ok(self.settle(tenant, MutationKind::AddTaskComment, comment).await)
    }
}
