//! One-shot CLI commands: each performs a single action on the workspace
//! and prints the resulting view.

mod org;
mod projects;
mod prompt;
mod render;
mod tasks;

use crate::app::Command;
use color_eyre::eyre::Result;
use minipm::views::Workspace;

pub async fn run(workspace: &mut Workspace, command: Command) -> Result<()> {
    match command {
        Command::Org(command) => org::run(workspace, command).await,
        Command::Projects { search, page } => projects::list(workspace, &search, page).await,
        Command::Project(command) => projects::run(workspace, command).await,
        Command::Tasks { project_id } => tasks::board(workspace, &project_id).await,
        Command::Task(command) => tasks::run(workspace, command).await,
    }
}
