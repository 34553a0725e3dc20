//! Headless view models: the project list, the task board and the
//! workspace tying them to the active tenant.

mod error;
mod lanes;
mod pagination;
mod project_form;
mod project_list;
mod prompt;
mod task_board;
mod task_form;
mod workspace;

pub use error::ViewError;
pub use lanes::Lanes;
pub use pagination::{Pager, PAGE_SIZE};
pub use project_form::ProjectForm;
pub use project_list::{ProjectListView, ProjectSelection};
pub use prompt::{comment_draft, Prompter, DEFAULT_AUTHOR_EMAIL};
pub use task_board::TaskBoardView;
pub use task_form::TaskForm;
pub use workspace::Workspace;
