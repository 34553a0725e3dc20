// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod api;
pub mod logging;
pub mod sync;
pub mod tenant;
pub mod transport;
pub mod user_config;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use api::{
    ApiError, Comment, Organization, Project, ProjectState, ProjectStats, ProjectStatus, Task,
    TaskState, TaskStatus,
};
pub use sync::{Settled, SyncClient};
pub use tenant::{TenantContext, TenantSelector, TenantStore, DEFAULT_ORG_SLUG};
pub use transport::{HttpTransport, Transport, TransportError, TENANT_HEADER};
pub use user_config::{load_user_config, UserConfig, DEFAULT_ENDPOINT};
pub use views::{
    Lanes, Pager, ProjectForm, ProjectListView, ProjectSelection, Prompter, TaskBoardView,
    TaskForm, ViewError, Workspace,
};
