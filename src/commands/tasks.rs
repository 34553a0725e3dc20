use super::prompt::FlagsThenStdin;
use super::render;
use crate::app::{TaskCommand, TaskFields};
use color_eyre::eyre::Result;
use minipm::views::{TaskForm, Workspace};

/// Open the board of `project_id`. The project must be in the unfiltered list.
async fn open(workspace: &mut Workspace, project_id: &str) -> Result<()> {
    workspace.refresh_projects().await?;
    workspace.select_project(project_id).await?;
    Ok(())
}

pub async fn board(workspace: &mut Workspace, project_id: &str) -> Result<()> {
    open(workspace, project_id).await?;
    if let Some(board) = workspace.board() {
        render::task_board(board);
    }
    Ok(())
}

pub async fn run(workspace: &mut Workspace, command: TaskCommand) -> Result<()> {
    match command {
        TaskCommand::Create { project_id, fields } => {
            open(workspace, &project_id).await?;
            if let Some(board) = workspace.board_mut() {
                fill(board.form_mut(), fields);
            }
            let settled = workspace.submit_task().await?;
            println!("Created task {} ({})", settled.value.title, settled.value.id);
        }
        TaskCommand::Update {
            project_id,
            id,
            fields,
        } => {
            open(workspace, &project_id).await?;
            if let Some(board) = workspace.board_mut() {
                board.start_edit(&id)?;
                fill(board.form_mut(), fields);
            }
            let settled = workspace.submit_task().await?;
            println!("Updated task {} ({})", settled.value.title, settled.value.id);
        }
        TaskCommand::Move {
            project_id,
            id,
            status,
        } => {
            open(workspace, &project_id).await?;
            workspace.move_task(&id, status).await?;
            println!("Moved task {id} to {}", status.action_label());
        }
        TaskCommand::Comment {
            project_id,
            id,
            content,
            author,
        } => {
            open(workspace, &project_id).await?;
            let mut prompter = FlagsThenStdin::new(content, author);
            match workspace.comment(&id, &mut prompter).await? {
                Some(settled) => println!(
                    "Comment added by {} at {}",
                    settled.value.author_email, settled.value.timestamp
                ),
                None => println!("Empty comment; nothing added"),
            }
        }
    }
    if let Some(board) = workspace.board() {
        render::task_board(board);
    }
    Ok(())
}

fn fill(form: &mut TaskForm, fields: TaskFields) {
    if let Some(title) = fields.title {
        form.title = title;
    }
    if let Some(description) = fields.description {
        form.description = description;
    }
    if let Some(assignee) = fields.assignee {
        form.assignee_email = assignee;
    }
    if let Some(due_date) = fields.due_date {
        form.due_date = due_date;
    }
}
