use super::task::{Task, TaskId, TaskStatus};
use crate::constants::{DATE_PLACEHOLDER, LABEL_DELETE};

/// One painted table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    /// Due date or the placeholder dash
    pub date: String,
    pub status: TaskStatus,
    pub status_label: &'static str,
    pub toggle_label: &'static str,
    pub delete_label: &'static str,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            date: task.date.clone().unwrap_or_else(|| DATE_PLACEHOLDER.to_string()),
            status: task.status,
            status_label: task.status.label(),
            toggle_label: task.status.toggle_label(),
            delete_label: LABEL_DELETE,
        }
    }
}

/// What the task table shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableView {
    /// Nothing visible; painted as a single "No task found" row
    #[default]
    Empty,
    Rows(Vec<TaskRow>),
}

impl TableView {
    /// Rows for the given tasks, in order; no tasks gives the placeholder
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let rows: Vec<TaskRow> = tasks.into_iter().map(TaskRow::from).collect();

        if rows.is_empty() {
            TableView::Empty
        } else {
            TableView::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[TaskRow] {
        match self {
            TableView::Empty => &[],
            TableView::Rows(rows) => rows,
        }
    }

    pub fn row(&self, index: usize) -> Option<&TaskRow> {
        self.rows().get(index)
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TableView::Empty)
    }
}
