use super::task::{Task, TaskId, TaskStatus};
use super::view::TableView;
use chrono::Utc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("task text cannot be empty")]
    EmptyText,
}

/// Time-based id source that never hands out the same id twice.
///
/// Ids are Unix milliseconds; when two tasks land in the same millisecond the
/// second one gets `last + 1`.
#[derive(Debug, Default)]
pub struct TaskIdGenerator {
    last: TaskId,
}

impl TaskIdGenerator {
    pub fn next_id(&mut self) -> TaskId {
        let now = TaskId::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last + 1);
        self.last = id;
        id
    }
}

/// In-memory task list plus the active filter.
#[derive(Debug, Default)]
pub struct TodoStore {
    tasks: Vec<Task>,
    filter: String,
    ids: TaskIdGenerator,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending task. `text` is trimmed; an empty `date` is stored as `None`.
    pub fn add(&mut self, text: &str, date: &str) -> Result<TaskId, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }

        let id = self.ids.next_id();
        let date = (!date.is_empty()).then(|| date.to_string());
        self.tasks.push(Task::new(id, text.to_string(), date));
        Ok(id)
    }

    /// Remove the task with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip the status of the task with `id`, returning the new status
    pub fn toggle(&mut self, id: TaskId) -> Option<TaskStatus> {
        self.tasks.iter_mut().find(|task| task.id == id).map(Task::toggle)
    }

    /// Drop every task and reset the filter
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.filter.clear();
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_lowercase();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks matching the filter, in list order
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.matches(&self.filter)).collect()
    }

    /// Table rows for the tasks the filter lets through
    pub fn table_view(&self) -> TableView {
        TableView::from_tasks(self.visible())
    }
}
