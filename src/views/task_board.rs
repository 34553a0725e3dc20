use super::prompt::{comment_draft, Prompter};
use super::{Lanes, ProjectSelection, TaskForm, ViewError};
use crate::api::{Comment, Task, TaskStatus};
use crate::sync::{Settled, SyncClient};
use crate::tenant::TenantContext;
use crate::utils::today;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Three-lane board for the tasks of one project.
pub struct TaskBoardView {
    client: Arc<SyncClient>,
    project: ProjectSelection,
    tasks: Vec<Task>,
    form: TaskForm,
    /// Id of the task being edited.
    editing: Option<String>,
    clock: fn() -> NaiveDate,
}

impl TaskBoardView {
    /// Board bound to `project`. Nothing is fetched until [`refresh`](Self::refresh).
    pub fn new(client: Arc<SyncClient>, project: ProjectSelection) -> Self {
        Self {
            client,
            project,
            tasks: Vec::new(),
            form: TaskForm::default(),
            editing: None,
            clock: today,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn project(&self) -> &ProjectSelection {
        &self.project
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn lanes(&self) -> Lanes {
        Lanes::partition(&self.tasks)
    }

    pub async fn refresh(&mut self, tenant: &TenantContext) -> Result<(), ViewError> {
        match self.client.tasks(tenant, &self.project.id).await {
            Ok(tasks) => {
                debug!(project = %self.project.id, count = tasks.len(), "Loaded tasks");
                self.tasks = tasks;
                Ok(())
            }
            Err(e) => {
                error!(project = %self.project.id, "Failed to load tasks: {e}");
                Err(e.into())
            }
        }
    }

    /// Rebind to another project, dropping any pending edit, and reload.
    pub async fn set_project(
        &mut self,
        tenant: &TenantContext,
        project: ProjectSelection,
    ) -> Result<(), ViewError> {
        self.project = project;
        self.tasks.clear();
        self.cancel_edit();
        self.refresh(tenant).await
    }

    pub async fn on_tenant_changed(&mut self, tenant: &TenantContext) -> Result<(), ViewError> {
        self.tasks.clear();
        self.cancel_edit();
        self.refresh(tenant).await
    }

    pub fn start_edit(&mut self, id: &str) -> Result<(), ViewError> {
        let task = self.find(id)?;
        let (form, id) = (TaskForm::from_task(task), task.id.clone());
        self.form = form;
        self.editing = Some(id);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.form = TaskForm::default();
        self.editing = None;
    }

    /// Move a task to another lane.
    ///
    /// Only the status is sent. Tasks and project stats are refetched and any
    /// pending edit is dropped once the move has settled.
    pub async fn move_task(
        &mut self,
        tenant: &TenantContext,
        id: &str,
        status: TaskStatus,
    ) -> Result<Settled<Task>, ViewError> {
        let current = self.find(id)?.status.known().ok_or(ViewError::UnknownStatus)?;
        if current == status {
            warn!(task = %id, %status, "Ignoring move to the current status");
            return Err(ViewError::SameStatus(status));
        }

        let settled = self
            .client
            .move_task(tenant, id, status)
            .await
            .inspect_err(|e| error!(task = %id, %status, "Failed to move task: {e}"))?;
        self.apply(&settled);
        info!(task = %id, from = %current, to = %status, "Moved task");
        self.cancel_edit();
        Ok(settled)
    }

    /// Create a task (status defaults to TODO on the server) or update the
    /// one being edited.
    pub async fn submit(&mut self, tenant: &TenantContext) -> Result<Settled<Task>, ViewError> {
        let input = self.form.to_input((self.clock)())?;

        let settled = match self.editing.as_deref() {
            Some(id) => self.client.update_task(tenant, id, &input).await,
            None => self.client.create_task(tenant, &self.project.id, &input).await,
        }
        .inspect_err(|e| error!(project = %self.project.id, "Failed to save task: {e}"))?;

        self.apply(&settled);
        info!(task = %settled.value.id, title = %settled.value.title, "Saved task");
        self.cancel_edit();
        Ok(settled)
    }

    /// Prompt for a comment on task `id` and add it.
    ///
    /// Returns `None` when the content was left blank; nothing is sent then.
    pub async fn comment(
        &mut self,
        tenant: &TenantContext,
        id: &str,
        prompter: &mut dyn Prompter,
    ) -> Result<Option<Settled<Comment>>, ViewError> {
        let task_id = self.find(id)?.id.clone();
        let Some(draft) = comment_draft(prompter, &task_id) else {
            debug!(task = %task_id, "Comment left blank; nothing sent");
            return Ok(None);
        };
        let settled = self
            .client
            .add_comment(tenant, &draft)
            .await
            .inspect_err(|e| error!(task = %task_id, "Failed to add comment: {e}"))?;
        Ok(Some(settled))
    }

    fn apply<T>(&mut self, settled: &Settled<T>) {
        if let Some(tasks) = settled.tasks() {
            self.tasks = tasks.to_vec();
        }
    }

    fn find(&self, id: &str) -> Result<&Task, ViewError> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ViewError::UnknownTask(id.to_string()))
    }
}
