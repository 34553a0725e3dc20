use super::{Pager, ProjectForm, ViewError};
use crate::api::{Project, ProjectStatsRow};
use crate::sync::{Settled, SyncClient};
use crate::tenant::TenantContext;
use crate::utils::today;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A project picked in the list, handed to the task board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSelection {
    pub id: String,
    pub name: String,
}

/// Searchable, paginated project list with an inline create/edit form.
pub struct ProjectListView {
    client: Arc<SyncClient>,
    search: String,
    pager: Pager,
    projects: Vec<Project>,
    form: ProjectForm,
    editing: bool,
    selected: Option<String>,
    load_error: Option<String>,
    clock: fn() -> NaiveDate,
}

impl ProjectListView {
    pub fn new(client: Arc<SyncClient>) -> Self {
        Self {
            client,
            search: String::new(),
            pager: Pager::default(),
            projects: Vec::new(),
            form: ProjectForm::default(),
            editing: false,
            selected: None,
            load_error: None,
            clock: today,
        }
    }

    /// Replace the date source used to reject past due dates.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Message of the last failed fetch, cleared by the next successful one.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Fetch the list for the current search term from the server.
    pub async fn refresh(&mut self, tenant: &TenantContext) -> Result<(), ViewError> {
        match self.client.projects(tenant, &self.search).await {
            Ok(projects) => {
                debug!(count = projects.len(), search = %self.search, "Loaded projects");
                self.set_projects(projects);
                self.load_error = None;
                Ok(())
            }
            Err(e) => {
                error!(tenant = %tenant.slug(), "Failed to load projects: {e}");
                self.load_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Drop the selection and reload under the new tenant.
    pub async fn on_tenant_changed(&mut self, tenant: &TenantContext) -> Result<(), ViewError> {
        self.selected = None;
        self.pager = Pager::default();
        self.refresh(tenant).await
    }

    /// Change the search term and reload. The previous term is kept if the fetch fails.
    pub async fn set_search(&mut self, tenant: &TenantContext, term: &str) -> Result<(), ViewError> {
        let previous = std::mem::replace(&mut self.search, term.to_string());
        let previous_page = self.pager;
        self.pager = Pager::default();
        if let Err(e) = self.refresh(tenant).await {
            self.search = previous;
            self.pager = previous_page;
            return Err(e);
        }
        Ok(())
    }

    fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.pager.clamp(self.projects.len());
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.projects.len())
    }

    /// Whether Prev/Next controls are worth showing.
    pub fn has_pages(&self) -> bool {
        self.page_count() > 1
    }

    pub fn visible(&self) -> &[Project] {
        self.pager.visible(&self.projects)
    }

    pub fn next_page(&mut self) {
        self.pager.next(self.projects.len());
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, self.projects.len());
    }

    /// Load the project with `id` into the form and enter editing mode.
    pub fn start_edit(&mut self, id: &str) -> Result<(), ViewError> {
        let project = self
            .find(id)
            .ok_or_else(|| ViewError::UnknownProject(id.to_string()))?;
        if project.status.known().is_none() {
            let status = project.status.as_str().to_string();
            warn!(project = %id, %status, "Refusing to edit project with unknown status");
            return Err(ViewError::UnknownProjectStatus(status));
        }
        self.form = ProjectForm::from_project(project);
        self.editing = true;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.form = ProjectForm::default();
        self.editing = false;
    }

    /// Create or update from the form.
    ///
    /// On success the list is replaced by the refetched one and the form is
    /// reset. On failure the form and editing mode are left untouched.
    pub async fn submit(&mut self, tenant: &TenantContext) -> Result<Settled<Project>, ViewError> {
        let input = self.form.to_input((self.clock)())?;

        let settled = match self.form.id.as_deref().filter(|_| self.editing) {
            Some(id) => self.client.update_project(tenant, id, &input).await,
            None => self.client.create_project(tenant, &input).await,
        }
        .inspect_err(|e| error!(tenant = %tenant.slug(), "Failed to save project: {e}"))?;

        if let Some(projects) = settled.projects() {
            self.set_projects(projects.to_vec());
            self.load_error = None;
        }
        info!(id = %settled.value.id, name = %settled.value.name, "Saved project");
        self.cancel_edit();
        Ok(settled)
    }

    /// Highlight the project with `id` and return it for the task board.
    pub fn select(&mut self, id: &str) -> Result<ProjectSelection, ViewError> {
        let project = self
            .find(id)
            .ok_or_else(|| ViewError::UnknownProject(id.to_string()))?;
        let selection = ProjectSelection {
            id: project.id.clone(),
            name: project.name.clone(),
        };
        self.selected = Some(selection.id.clone());
        Ok(selection)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Merge refreshed stats into the listed projects, matching by id.
    pub fn apply_stats(&mut self, rows: &[ProjectStatsRow]) {
        for row in rows {
            if let Some(project) = self.projects.iter_mut().find(|p| p.id == row.id) {
                project.stats.clone_from(&row.stats);
            }
        }
    }

    fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
