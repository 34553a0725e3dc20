use super::documents;
use super::error::ApiError;
use super::inputs::{CommentInput, ProjectInput, TaskInput};
use super::types::{Comment, Organization, Project, ProjectStatsRow, Task, TaskStatus};
use crate::tenant::TenantContext;
use crate::transport::{GraphqlRequest, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WithId<'a, T> {
    id: &'a str,
    #[serde(flatten)]
    input: &'a T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WithProjectId<'a> {
    project_id: &'a str,
    #[serde(flatten)]
    input: &'a TaskInput,
}

#[derive(Serialize)]
struct StatusChange<'a> {
    id: &'a str,
    status: TaskStatus,
}

/// One operation: its name, document and the JSON pointer of its payload.
struct Operation {
    name: &'static str,
    document: &'static str,
    payload: &'static str,
}

const ALL_ORGANIZATIONS: Operation = Operation {
    name: "AllOrganizations",
    document: documents::ALL_ORGANIZATIONS,
    payload: "/allOrganizations",
};
const CREATE_ORGANIZATION: Operation = Operation {
    name: "CreateOrganization",
    document: documents::CREATE_ORGANIZATION,
    payload: "/createOrganization/organization",
};
const PROJECTS: Operation = Operation {
    name: "Projects",
    document: documents::PROJECTS,
    payload: "/projects",
};
const PROJECT_STATS: Operation = Operation {
    name: "ProjectStats",
    document: documents::PROJECT_STATS,
    payload: "/projects",
};
const CREATE_PROJECT: Operation = Operation {
    name: "CreateProject",
    document: documents::CREATE_PROJECT,
    payload: "/createProject/project",
};
const UPDATE_PROJECT: Operation = Operation {
    name: "UpdateProject",
    document: documents::UPDATE_PROJECT,
    payload: "/updateProject/project",
};
const TASKS: Operation = Operation {
    name: "Tasks",
    document: documents::TASKS,
    payload: "/tasks",
};
const CREATE_TASK: Operation = Operation {
    name: "CreateTask",
    document: documents::CREATE_TASK,
    payload: "/createTask/task",
};
const UPDATE_TASK: Operation = Operation {
    name: "UpdateTask",
    document: documents::UPDATE_TASK,
    payload: "/updateTask/task",
};
const ADD_TASK_COMMENT: Operation = Operation {
    name: "AddTaskComment",
    document: documents::ADD_TASK_COMMENT,
    payload: "/addTaskComment/comment",
};

fn encode<T: Serialize>(op: &Operation, variables: &T) -> Result<Value, ApiError> {
    serde_json::to_value(variables).map_err(|source| ApiError::Encode {
        operation: op.name,
        source,
    })
}

async fn execute(
    transport: &dyn Transport,
    tenant: &TenantContext,
    op: &Operation,
    variables: Value,
) -> Result<Value, ApiError> {
    let request = GraphqlRequest {
        operation_name: op.name,
        query: op.document,
        variables,
    };
    let mut data = transport.execute(tenant, &request).await?;
    data.pointer_mut(op.payload)
        .map(Value::take)
        .ok_or(ApiError::MissingField {
            operation: op.name,
            path: op.payload,
        })
}

async fn fetch_one<T: DeserializeOwned>(
    transport: &dyn Transport,
    tenant: &TenantContext,
    op: &Operation,
    variables: Value,
) -> Result<T, ApiError> {
    let payload = execute(transport, tenant, op, variables).await?;
    serde_json::from_value(payload).map_err(|source| ApiError::Decode {
        operation: op.name,
        source,
    })
}

/// List payloads may come back as `null`; that reads as an empty list.
async fn fetch_list<T: DeserializeOwned>(
    transport: &dyn Transport,
    tenant: &TenantContext,
    op: &Operation,
    variables: Value,
) -> Result<Vec<T>, ApiError> {
    let payload = execute(transport, tenant, op, variables).await?;
    if payload.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(payload).map_err(|source| ApiError::Decode {
        operation: op.name,
        source,
    })
}

/// List every organization known to the server, regardless of tenant.
pub async fn list_organizations(
    transport: &dyn Transport,
    tenant: &TenantContext,
) -> Result<Vec<Organization>, ApiError> {
    fetch_list(transport, tenant, &ALL_ORGANIZATIONS, json!({})).await
}

pub async fn create_organization(
    transport: &dyn Transport,
    tenant: &TenantContext,
    slug: &str,
    name: &str,
) -> Result<Organization, ApiError> {
    let variables = json!({ "slug": slug, "name": name });
    fetch_one(transport, tenant, &CREATE_ORGANIZATION, variables).await
}

/// Projects of the tenant matching `search` (server-side, name or description).
pub async fn list_projects(
    transport: &dyn Transport,
    tenant: &TenantContext,
    search: &str,
) -> Result<Vec<Project>, ApiError> {
    fetch_list(transport, tenant, &PROJECTS, json!({ "search": search })).await
}

/// Current stats of every project of the tenant.
pub async fn project_stats(
    transport: &dyn Transport,
    tenant: &TenantContext,
) -> Result<Vec<ProjectStatsRow>, ApiError> {
    fetch_list(transport, tenant, &PROJECT_STATS, json!({ "search": "" })).await
}

pub async fn create_project(
    transport: &dyn Transport,
    tenant: &TenantContext,
    input: &ProjectInput,
) -> Result<Project, ApiError> {
    let variables = encode(&CREATE_PROJECT, input)?;
    fetch_one(transport, tenant, &CREATE_PROJECT, variables).await
}

pub async fn update_project(
    transport: &dyn Transport,
    tenant: &TenantContext,
    id: &str,
    input: &ProjectInput,
) -> Result<Project, ApiError> {
    let variables = encode(&UPDATE_PROJECT, &WithId { id, input })?;
    fetch_one(transport, tenant, &UPDATE_PROJECT, variables).await
}

pub async fn list_tasks(
    transport: &dyn Transport,
    tenant: &TenantContext,
    project_id: &str,
) -> Result<Vec<Task>, ApiError> {
    let variables = json!({ "projectId": project_id });
    fetch_list(transport, tenant, &TASKS, variables).await
}

pub async fn create_task(
    transport: &dyn Transport,
    tenant: &TenantContext,
    project_id: &str,
    input: &TaskInput,
) -> Result<Task, ApiError> {
    let variables = encode(&CREATE_TASK, &WithProjectId { project_id, input })?;
    fetch_one(transport, tenant, &CREATE_TASK, variables).await
}

pub async fn update_task(
    transport: &dyn Transport,
    tenant: &TenantContext,
    id: &str,
    input: &TaskInput,
) -> Result<Task, ApiError> {
    let variables = encode(&UPDATE_TASK, &WithId { id, input })?;
    fetch_one(transport, tenant, &UPDATE_TASK, variables).await
}

/// Update only the status of a task.
pub async fn set_task_status(
    transport: &dyn Transport,
    tenant: &TenantContext,
    id: &str,
    status: TaskStatus,
) -> Result<Task, ApiError> {
    let variables = encode(&UPDATE_TASK, &StatusChange { id, status })?;
    fetch_one(transport, tenant, &UPDATE_TASK, variables).await
}

pub async fn add_task_comment(
    transport: &dyn Transport,
    tenant: &TenantContext,
    input: &CommentInput,
) -> Result<Comment, ApiError> {
    let variables = encode(&ADD_TASK_COMMENT, input)?;
    fetch_one(transport, tenant, &ADD_TASK_COMMENT, variables).await
}
