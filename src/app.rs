use clap::{Args as ClapArgs, Parser, Subcommand};
use minipm::api::{ProjectStatus, TaskStatus};
use tracing::Level;

/// minipm - multi-tenant project and task management client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// GraphQL endpoint (default: config file, then http://localhost:8000/graphql)
    #[arg(long, env = "MINIPM_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "MINIPM_LOG_LEVEL", default_value = "warn")]
    pub log_level: Level,

    /// Enable JSON log format
    #[arg(long, env = "MINIPM_LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "MINIPM_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,

    /// Custom log directory (default: ~/.minipm/logs)
    #[arg(long, env = "MINIPM_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or change the active organization
    #[command(subcommand)]
    Org(OrgCommand),

    /// List projects of the active organization
    Projects {
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        search: String,
        /// Page to show (4 projects per page)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Create or update a project
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Show the task board of a project
    Tasks { project_id: String },

    /// Create, update, move or comment on a task
    #[command(subcommand)]
    Task(TaskCommand),
}

#[derive(Subcommand, Debug)]
pub enum OrgCommand {
    /// Print the active organization and all known ones
    Show,
    /// Create an organization and make it active
    Create { slug: String },
    /// Make an existing organization active
    Switch { slug: String },
}

#[derive(ClapArgs, Debug, Default)]
pub struct ProjectFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// ACTIVE, COMPLETED or ON_HOLD
    #[arg(long)]
    pub status: Option<ProjectStatus>,
    /// YYYY-MM-DD, or an empty string to clear
    #[arg(long)]
    pub due_date: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    Create {
        #[command(flatten)]
        fields: ProjectFields,
    },
    /// Update a project; omitted fields keep their current value
    Update {
        id: String,
        #[command(flatten)]
        fields: ProjectFields,
    },
}

#[derive(ClapArgs, Debug, Default)]
pub struct TaskFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub assignee: Option<String>,
    /// YYYY-MM-DD, or an empty string to clear
    #[arg(long)]
    pub due_date: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Create a task in the TODO lane
    Create {
        project_id: String,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Update a task; omitted fields keep their current value
    Update {
        project_id: String,
        id: String,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Move a task to another lane
    Move {
        project_id: String,
        id: String,
        /// TODO, IN_PROGRESS or DONE
        status: TaskStatus,
    },
    /// Add a comment; prompts for whatever is not given
    Comment {
        project_id: String,
        id: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
}
