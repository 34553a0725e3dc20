use super::render;
use crate::app::OrgCommand;
use color_eyre::eyre::Result;
use minipm::views::Workspace;

pub async fn run(workspace: &mut Workspace, command: OrgCommand) -> Result<()> {
    match command {
        OrgCommand::Show => {
            let orgs = workspace.client().organizations(workspace.tenant()).await?;
            render::organizations(workspace.tenant(), &orgs);
        }
        OrgCommand::Create { slug } => {
            let org = workspace.create_org(&slug).await?;
            println!("Created organization {} ({})", org.name, org.slug);
            render::project_list(workspace.tenant(), workspace.projects());
        }
        OrgCommand::Switch { slug } => {
            let org = workspace.switch_org(&slug).await?;
            println!("Switched to {} ({})", org.name, org.slug);
            render::project_list(workspace.tenant(), workspace.projects());
        }
    }
    Ok(())
}
