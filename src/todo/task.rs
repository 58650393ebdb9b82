use crate::constants::{LABEL_DONE, LABEL_PENDING};

/// Unique task key, assigned at creation
pub type TaskId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Pending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => LABEL_PENDING,
            TaskStatus::Done => LABEL_DONE,
        }
    }

    /// Label of the toggle action: the status a toggle would switch to
    pub fn toggle_label(self) -> &'static str {
        self.toggled().label()
    }

    pub fn is_done(self) -> bool {
        self == TaskStatus::Done
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    /// Raw due date as typed; `None` when the field was left empty
    pub date: Option<String>,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: TaskId, text: String, date: Option<String>) -> Self {
        Self {
            id,
            text,
            date,
            status: TaskStatus::Pending,
        }
    }

    pub fn toggle(&mut self) -> TaskStatus {
        self.status = self.status.toggled();
        self.status
    }

    /// Case-insensitive text match or raw date match against a lowercase filter
    pub fn matches(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        self.text.to_lowercase().contains(filter) || self.date.as_deref().is_some_and(|date| date.contains(filter))
    }
}
