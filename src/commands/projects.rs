use super::render;
use crate::app::{ProjectCommand, ProjectFields};
use color_eyre::eyre::Result;
use minipm::views::{ProjectForm, Workspace};

pub async fn list(workspace: &mut Workspace, search: &str, page: usize) -> Result<()> {
    workspace.search_projects(search).await?;
    workspace.projects_mut().go_to_page(page);
    render::project_list(workspace.tenant(), workspace.projects());
    Ok(())
}

pub async fn run(workspace: &mut Workspace, command: ProjectCommand) -> Result<()> {
    workspace.refresh_projects().await?;
    match command {
        ProjectCommand::Create { fields } => {
            workspace.projects_mut().cancel_edit();
            fill(workspace.projects_mut().form_mut(), fields);
        }
        ProjectCommand::Update { id, fields } => {
            workspace.projects_mut().start_edit(&id)?;
            fill(workspace.projects_mut().form_mut(), fields);
        }
    }
    let settled = workspace.submit_project().await?;
    println!("Saved project {} ({})", settled.value.name, settled.value.id);
    render::project_list(workspace.tenant(), workspace.projects());
    Ok(())
}

fn fill(form: &mut ProjectForm, fields: ProjectFields) {
    if let Some(name) = fields.name {
        form.name = name;
    }
    if let Some(description) = fields.description {
        form.description = description;
    }
    if let Some(status) = fields.status {
        form.status = status;
    }
    if let Some(due_date) = fields.due_date {
        form.due_date = due_date;
    }
}
