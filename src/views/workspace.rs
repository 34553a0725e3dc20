use super::{Prompter, ProjectListView, TaskBoardView, ViewError};
use crate::api::{Comment, Organization, Project, Task, TaskStatus};
use crate::sync::{QueryKind, Settled, SyncClient};
use crate::tenant::{TenantContext, TenantSelector, TenantStore};
use crate::transport::Transport;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

/// Everything a session works with: the active tenant, the project list and
/// the task board of the selected project.
pub struct Workspace {
    client: Arc<SyncClient>,
    tenant: TenantContext,
    selector: TenantSelector,
    projects: ProjectListView,
    board: Option<TaskBoardView>,
    clock: Option<fn() -> NaiveDate>,
}

impl Workspace {
    /// Load the persisted tenant without fetching anything.
    pub async fn open(transport: Arc<dyn Transport>, store: TenantStore, default_slug: &str) -> Self {
        let tenant = store.load(default_slug).await;
        info!(tenant = %tenant.slug(), "Opened workspace");
        let client = Arc::new(SyncClient::new(transport));
        Self {
            selector: TenantSelector::new(Arc::clone(&client), store),
            projects: ProjectListView::new(Arc::clone(&client)),
            client,
            tenant,
            board: None,
            clock: None,
        }
    }

    /// [`open`](Self::open) and fetch the project list.
    pub async fn bootstrap(
        transport: Arc<dyn Transport>,
        store: TenantStore,
        default_slug: &str,
    ) -> Result<Self, ViewError> {
        let mut workspace = Self::open(transport, store, default_slug).await;
        workspace.refresh_projects().await?;
        Ok(workspace)
    }

    /// Replace the date source of both forms.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.projects = self.projects.with_clock(clock);
        self.board = self.board.map(|board| board.with_clock(clock));
        self.clock = Some(clock);
        self
    }

    pub fn tenant(&self) -> &TenantContext {
        &self.tenant
    }

    pub fn client(&self) -> &Arc<SyncClient> {
        &self.client
    }

    pub fn store(&self) -> &TenantStore {
        self.selector.store()
    }

    pub fn projects(&self) -> &ProjectListView {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut ProjectListView {
        &mut self.projects
    }

    pub fn board(&self) -> Option<&TaskBoardView> {
        self.board.as_ref()
    }

    pub fn board_mut(&mut self) -> Option<&mut TaskBoardView> {
        self.board.as_mut()
    }

    pub async fn refresh_projects(&mut self) -> Result<(), ViewError> {
        self.projects.refresh(&self.tenant).await
    }

    pub async fn search_projects(&mut self, term: &str) -> Result<(), ViewError> {
        self.projects.set_search(&self.tenant, term).await
    }

    /// Create an organization and make it the active tenant.
    ///
    /// The open board, if any, stays open and is reloaded under the new tenant.
    pub async fn create_org(&mut self, input: &str) -> Result<Organization, ViewError> {
        let org = self.selector.create(&mut self.tenant, input).await?;
        self.reload_after_tenant_change().await;
        Ok(org)
    }

    /// Switch to an existing organization. The task board is closed.
    pub async fn switch_org(&mut self, input: &str) -> Result<Organization, ViewError> {
        let org = self.selector.switch(&mut self.tenant, input).await?;
        self.board = None;
        self.client.forget(QueryKind::Tasks);
        self.reload_after_tenant_change().await;
        Ok(org)
    }

    // Fetch failures are kept in the views' state; the tenant change itself succeeded.
    async fn reload_after_tenant_change(&mut self) {
        if let Err(e) = self.projects.on_tenant_changed(&self.tenant).await {
            warn!(tenant = %self.tenant.slug(), "Project list not reloaded: {e}");
        }
        if let Some(board) = self.board.as_mut() {
            if let Err(e) = board.on_tenant_changed(&self.tenant).await {
                warn!(tenant = %self.tenant.slug(), "Task board not reloaded: {e}");
            }
        }
    }

    /// Select a listed project and open its task board.
    pub async fn select_project(&mut self, id: &str) -> Result<(), ViewError> {
        let selection = self.projects.select(id)?;
        match self.board.as_mut() {
            Some(board) => board.set_project(&self.tenant, selection).await,
            None => {
                let mut board = TaskBoardView::new(Arc::clone(&self.client), selection);
                if let Some(clock) = self.clock {
                    board = board.with_clock(clock);
                }
                let board = self.board.insert(board);
                board.refresh(&self.tenant).await
            }
        }
    }

    pub async fn submit_project(&mut self) -> Result<Settled<Project>, ViewError> {
        self.projects.submit(&self.tenant).await
    }

    pub async fn submit_task(&mut self) -> Result<Settled<Task>, ViewError> {
        let board = self.board.as_mut().ok_or(ViewError::NoProjectSelected)?;
        let settled = board.submit(&self.tenant).await?;
        self.forward_stats(&settled);
        Ok(settled)
    }

    pub async fn move_task(&mut self, id: &str, status: TaskStatus) -> Result<Settled<Task>, ViewError> {
        let board = self.board.as_mut().ok_or(ViewError::NoProjectSelected)?;
        let settled = board.move_task(&self.tenant, id, status).await?;
        self.forward_stats(&settled);
        Ok(settled)
    }

    pub async fn comment(
        &mut self,
        id: &str,
        prompter: &mut dyn Prompter,
    ) -> Result<Option<Settled<Comment>>, ViewError> {
        let board = self.board.as_mut().ok_or(ViewError::NoProjectSelected)?;
        board.comment(&self.tenant, id, prompter).await
    }

    fn forward_stats<T>(&mut self, settled: &Settled<T>) {
        if let Some(rows) = settled.stats() {
            self.projects.apply_stats(rows);
        }
    }
}
