use crate::api::{Task, TaskStatus};
use tracing::warn;

/// Tasks split into the three status lanes of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lanes {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
    /// Tasks whose status is none of the lane statuses.
    pub unplaced: usize,
}

impl Lanes {
    /// Partition `tasks` by status, keeping fetch order within a lane.
    ///
    /// Tasks with an unrecognized status land in no lane.
    pub fn partition(tasks: &[Task]) -> Self {
        let mut lanes = Self::default();
        for task in tasks {
            match task.status.known() {
                Some(TaskStatus::Todo) => lanes.todo.push(task.clone()),
                Some(TaskStatus::InProgress) => lanes.in_progress.push(task.clone()),
                Some(TaskStatus::Done) => lanes.done.push(task.clone()),
                None => lanes.unplaced = lanes.unplaced.saturating_add(1),
            }
        }
        if lanes.unplaced > 0 {
            warn!(
                count = lanes.unplaced,
                "Tasks with unrecognized status are not shown on the board"
            );
        }
        lanes
    }

    pub fn lane(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Lanes in board order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        TaskStatus::ALL.into_iter().map(|status| (status, self.lane(status)))
    }

    pub fn placed(&self) -> usize {
        self.iter().map(|(_, tasks)| tasks.len()).sum()
    }
}

#[cfg(test)]
#[path = "lanes_tests.rs"]
mod tests;
