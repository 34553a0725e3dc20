use minipm::api::{Organization, Task};
use minipm::tenant::{slugs_match, TenantContext};
use minipm::views::{ProjectListView, TaskBoardView};

pub fn organizations(tenant: &TenantContext, orgs: &[Organization]) {
    println!("Active organization: {}", tenant.slug());
    for org in orgs {
        let marker = if slugs_match(&org.slug, tenant.slug()) { "*" } else { " " };
        println!("{marker} {:<20} {}", org.slug, org.name);
    }
}

pub fn project_list(tenant: &TenantContext, view: &ProjectListView) {
    println!("Projects in {}", tenant.slug());
    if !view.search().is_empty() {
        println!("Search: {}", view.search());
    }
    if let Some(error) = view.load_error() {
        println!("Error loading projects: {error}");
        return;
    }
    if view.projects().is_empty() {
        println!("No projects found.");
        return;
    }
    for project in view.visible() {
        let stats = project.stats_or_default();
        let due = project.due_date.as_deref().map_or("-".to_string(), minipm::utils::date_portion);
        println!(
            "{:<10} {:<24} {:<10} due {:<10} {}/{} tasks ({:.0}%)",
            project.id,
            project.name,
            project.status.as_str(),
            due,
            stats.completed_tasks,
            stats.task_count,
            stats.completion_rate * 100.0,
        );
    }
    if view.has_pages() {
        println!("Page {} of {}", view.page(), view.page_count());
    }
}

pub fn task_board(board: &TaskBoardView) {
    println!("Tasks for {}", board.project().name);
    let lanes = board.lanes();
    for (status, tasks) in lanes.iter() {
        println!();
        println!("{} ({})", status.action_label(), tasks.len());
        for task in tasks {
            task_line(task);
        }
    }
    if lanes.unplaced > 0 {
        println!();
        println!("{} task(s) with an unknown status are not shown", lanes.unplaced);
    }
}

fn task_line(task: &Task) {
    let assignee = task.assignee_email.as_deref().unwrap_or("unassigned");
    let due = task.due_date.as_deref().map_or("-".to_string(), minipm::utils::date_portion);
    println!("  {:<10} {:<30} {:<24} due {}", task.id, task.title, assignee, due);
    if let Some(description) = task.description.as_deref() {
        println!("             {description}");
    }
}
