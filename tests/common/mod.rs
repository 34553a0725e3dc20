//! Common test utilities

#![allow(dead_code)] // Not every integration test uses every helper

use async_trait::async_trait;
use chrono::NaiveDate;
use minipm::tenant::{TenantContext, TenantStore, STATE_FILE};
use minipm::transport::{GraphqlRequest, Transport, TransportError};
use minipm::views::Prompter;
use serde_json::{json, Value};
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Fixed "today" so due date validation is deterministic.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date")
}

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Tenant store inside `dir`
pub fn store_in(dir: &TempDir) -> TenantStore {
    TenantStore::new(dir.path().join(STATE_FILE))
}

/// A request as received by the fake backend.
#[derive(Debug, Clone)]
pub struct Call {
    pub operation: String,
    pub tenant: String,
    pub variables: Value,
}

#[derive(Debug, Clone)]
struct OrgRow {
    id: String,
    slug: String,
    name: String,
}

#[derive(Debug, Clone)]
struct ProjectRow {
    id: String,
    org: String,
    name: String,
    description: String,
    status: String,
    due_date: Value,
}

#[derive(Debug, Clone)]
struct TaskRow {
    id: String,
    project_id: String,
    title: String,
    description: String,
    status: String,
    assignee_email: String,
    due_date: Value,
    comments: Vec<Value>,
}

#[derive(Default)]
struct State {
    orgs: Vec<OrgRow>,
    projects: Vec<ProjectRow>,
    tasks: Vec<TaskRow>,
    next_id: u32,
    calls: Vec<Call>,
    failing: HashSet<String>,
}

impl State {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    fn org(&self, tenant: &str) -> Result<String, TransportError> {
        self.orgs
            .iter()
            .find(|o| o.slug == tenant)
            .map(|o| o.slug.clone())
            .ok_or_else(|| graphql_error("Invalid organization slug"))
    }

    fn stats(&self, project_id: &str) -> Value {
        let total = self.tasks.iter().filter(|t| t.project_id == project_id).count();
        let done = self
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id && t.status == "DONE")
            .count();
        let rate = if total == 0 { 0.0 } else { done as f64 / total as f64 };
        json!({ "taskCount": total, "completedTasks": done, "completionRate": rate })
    }

    fn project_json(&self, p: &ProjectRow) -> Value {
        json!({
            "id": p.id,
            "name": p.name,
            "description": p.description,
            "status": p.status,
            "dueDate": p.due_date,
            "stats": self.stats(&p.id),
        })
    }

    fn project_ids_in(&self, org: &str) -> Vec<String> {
        self.projects
            .iter()
            .filter(|p| p.org == org)
            .map(|p| p.id.clone())
            .collect()
    }
}

fn task_json(t: &TaskRow) -> Value {
    json!({
        "id": t.id,
        "title": t.title,
        "description": t.description,
        "status": t.status,
        "assigneeEmail": t.assignee_email,
        "dueDate": t.due_date,
        "comments": t.comments,
    })
}

fn graphql_error(message: &str) -> TransportError {
    TransportError::Graphql(vec![message.to_string()])
}

fn str_var(vars: &Value, key: &str) -> Option<String> {
    vars.get(key).and_then(Value::as_str).map(str::to_string)
}

/// In-memory GraphQL backend with the server's tenant scoping rules:
/// every operation except the organization ones requires an existing
/// organization in the tenant header, lists come back newest first and
/// update mutations ignore `null` arguments.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend with the given organizations already present.
    pub fn with_orgs(slugs: &[&str]) -> Self {
        let backend = Self::new();
        for slug in slugs {
            backend.add_org(slug);
        }
        backend
    }

    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }

    pub fn add_org(&self, slug: &str) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.orgs.push(OrgRow {
            id,
            slug: slug.to_string(),
            name: slug.to_string(),
        });
    }

    /// Insert an `ACTIVE` project directly, returning its id.
    pub fn add_project(&self, org: &str, name: &str) -> String {
        self.add_project_with_status(org, name, "ACTIVE")
    }

    /// Insert a project with any status string, returning its id.
    pub fn add_project_with_status(&self, org: &str, name: &str, status: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.projects.push(ProjectRow {
            id: id.clone(),
            org: org.to_string(),
            name: name.to_string(),
            description: String::new(),
            status: status.to_string(),
            due_date: Value::Null,
        });
        id
    }

    /// Insert a task directly with any status string, returning its id.
    pub fn add_task(&self, project_id: &str, title: &str, status: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.tasks.push(TaskRow {
            id: id.clone(),
            project_id: project_id.to_string(),
            title: title.to_string(),
            description: String::new(),
            status: status.to_string(),
            assignee_email: String::new(),
            due_date: Value::Null,
            comments: Vec::new(),
        });
        id
    }

    /// Make every request for `operation` fail with a GraphQL error.
    pub fn fail(&self, operation: &str) {
        self.state.lock().unwrap().failing.insert(operation.to_string());
    }

    pub fn recover(&self, operation: &str) {
        self.state.lock().unwrap().failing.remove(operation);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Names of the operations received, in order.
    pub fn operations(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.operation).collect()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls().iter().filter(|c| c.operation == operation).count()
    }

    pub fn last_call(&self, operation: &str) -> Option<Call> {
        self.calls().into_iter().rev().find(|c| c.operation == operation)
    }

    pub fn org_slugs(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.orgs.iter().map(|o| o.slug.clone()).collect()
    }

    fn handle(&self, tenant: &str, request: &GraphqlRequest) -> Result<Value, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call {
            operation: request.operation_name.to_string(),
            tenant: tenant.to_string(),
            variables: request.variables.clone(),
        });
        if state.failing.contains(request.operation_name) {
            return Err(graphql_error("Injected failure"));
        }
        let vars = &request.variables;

        match request.operation_name {
            "AllOrganizations" => {
                let orgs: Vec<Value> = state
                    .orgs
                    .iter()
                    .map(|o| json!({ "id": o.id, "slug": o.slug, "name": o.name }))
                    .collect();
                Ok(json!({ "allOrganizations": orgs }))
            }
            "CreateOrganization" => {
                let slug = str_var(vars, "slug").unwrap_or_default();
                if state.orgs.iter().any(|o| o.slug == slug) {
                    return Err(graphql_error("Organization with this slug already exists"));
                }
                let id = state.next_id();
                let name = str_var(vars, "name").unwrap_or_default();
                state.orgs.push(OrgRow {
                    id: id.clone(),
                    slug: slug.clone(),
                    name: name.clone(),
                });
                Ok(json!({ "createOrganization": { "organization": { "id": id, "slug": slug, "name": name } } }))
            }
            "Projects" | "ProjectStats" => {
                let org = state.org(tenant)?;
                let search = str_var(vars, "search").unwrap_or_default().to_lowercase();
                let projects: Vec<Value> = state
                    .projects
                    .iter()
                    .rev()
                    .filter(|p| p.org == org)
                    .filter(|p| {
                        search.is_empty()
                            || p.name.to_lowercase().contains(&search)
                            || p.description.to_lowercase().contains(&search)
                    })
                    .map(|p| {
                        if request.operation_name == "ProjectStats" {
                            json!({ "id": p.id, "stats": state.stats(&p.id) })
                        } else {
                            state.project_json(p)
                        }
                    })
                    .collect();
                Ok(json!({ "projects": projects }))
            }
            "CreateProject" => {
                let org = state.org(tenant)?;
                let id = state.next_id();
                let project = ProjectRow {
                    id,
                    org,
                    name: str_var(vars, "name").unwrap_or_default(),
                    description: str_var(vars, "description").unwrap_or_default(),
                    status: str_var(vars, "status").unwrap_or_else(|| "ACTIVE".to_string()),
                    due_date: vars.get("dueDate").cloned().unwrap_or(Value::Null),
                };
                let value = state.project_json(&project);
                state.projects.push(project);
                Ok(json!({ "createProject": { "project": value } }))
            }
            "UpdateProject" => {
                let org = state.org(tenant)?;
                let id = str_var(vars, "id").unwrap_or_default();
                let project = state
                    .projects
                    .iter_mut()
                    .find(|p| p.id == id && p.org == org)
                    .ok_or_else(|| graphql_error("Project matching query does not exist."))?;
                if let Some(name) = str_var(vars, "name") {
                    project.name = name;
                }
                if let Some(description) = str_var(vars, "description") {
                    project.description = description;
                }
                if let Some(status) = str_var(vars, "status") {
                    project.status = status;
                }
                if let Some(due) = vars.get("dueDate").filter(|v| !v.is_null()) {
                    project.due_date = due.clone();
                }
                let project = project.clone();
                Ok(json!({ "updateProject": { "project": state.project_json(&project) } }))
            }
            "Tasks" => {
                let org = state.org(tenant)?;
                let in_org = state.project_ids_in(&org);
                let project_id = str_var(vars, "projectId");
                let tasks: Vec<Value> = state
                    .tasks
                    .iter()
                    .rev()
                    .filter(|t| in_org.contains(&t.project_id))
                    .filter(|t| project_id.as_ref().is_none_or(|id| &t.project_id == id))
                    .map(task_json)
                    .collect();
                Ok(json!({ "tasks": tasks }))
            }
            "CreateTask" => {
                let org = state.org(tenant)?;
                let project_id = str_var(vars, "projectId").unwrap_or_default();
                if !state.project_ids_in(&org).contains(&project_id) {
                    return Err(graphql_error("Project matching query does not exist."));
                }
                let id = state.next_id();
                let task = TaskRow {
                    id,
                    project_id,
                    title: str_var(vars, "title").unwrap_or_default(),
                    description: str_var(vars, "description").unwrap_or_default(),
                    status: str_var(vars, "status").unwrap_or_else(|| "TODO".to_string()),
                    assignee_email: str_var(vars, "assigneeEmail").unwrap_or_default(),
                    due_date: vars.get("dueDate").cloned().unwrap_or(Value::Null),
                    comments: Vec::new(),
                };
                let value = task_json(&task);
                state.tasks.push(task);
                Ok(json!({ "createTask": { "task": value } }))
            }
            "UpdateTask" => {
                let org = state.org(tenant)?;
                let in_org = state.project_ids_in(&org);
                let id = str_var(vars, "id").unwrap_or_default();
                let task = state
                    .tasks
                    .iter_mut()
                    .find(|t| t.id == id && in_org.contains(&t.project_id))
                    .ok_or_else(|| graphql_error("Task matching query does not exist."))?;
                if let Some(title) = str_var(vars, "title") {
                    task.title = title;
                }
                if let Some(description) = str_var(vars, "description") {
                    task.description = description;
                }
                if let Some(status) = str_var(vars, "status") {
                    task.status = status;
                }
                if let Some(assignee) = str_var(vars, "assigneeEmail") {
                    task.assignee_email = assignee;
                }
                if let Some(due) = vars.get("dueDate").filter(|v| !v.is_null()) {
                    task.due_date = due.clone();
                }
                Ok(json!({ "updateTask": { "task": task_json(task) } }))
            }
            "AddTaskComment" => {
                let org = state.org(tenant)?;
                let in_org = state.project_ids_in(&org);
                let task_id = str_var(vars, "taskId").unwrap_or_default();
                let id = state.next_id();
                let task = state
                    .tasks
                    .iter_mut()
                    .find(|t| t.id == task_id && in_org.contains(&t.project_id))
                    .ok_or_else(|| graphql_error("Task matching query does not exist."))?;
                let comment = json!({
                    "id": id,
                    "content": str_var(vars, "content").unwrap_or_default(),
                    "authorEmail": str_var(vars, "authorEmail").unwrap_or_default(),
                    "timestamp": "2026-10-15T12:00:00+00:00",
                });
                task.comments.push(comment.clone());
                Ok(json!({ "addTaskComment": { "comment": comment } }))
            }
            other => Err(graphql_error(&format!("Unknown operation {other}"))),
        }
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn execute(
        &self,
        tenant: &TenantContext,
        request: &GraphqlRequest,
    ) -> Result<Value, TransportError> {
        self.handle(tenant.slug(), request)
    }
}

/// Prompter answering from a fixed script; `None` entries dismiss the prompt.
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[Option<&str>]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, label: &str) -> Option<String> {
        self.asked.push(label.to_string());
        self.answers.pop_front().flatten()
    }
}
