use super::form::{FormValues, TaskForm};
use super::store::{TodoError, TodoStore};
use super::task::{Task, TaskId, TaskStatus};
use super::view::TableView;
use crate::constants::{
    MSG_DELETE_ALL, MSG_DELETE_TASK, MSG_FILTER, MSG_INPUT_REQUIRED, MSG_NO_TASKS, TITLE_DELETE_ALL,
    TITLE_DELETE_TASK, TITLE_FILTER, TITLE_INPUT_REQUIRED, TITLE_NO_TASKS,
};
use crate::dialog::Dialogs;
use crate::ui::core::actions::Action;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// To-do operations on top of the store, the entry form and the dialogs.
///
/// Cheap to clone: clones share the same store and form, so an operation can
/// be spawned while the UI keeps reading state. Locks are never held across
/// a dialog await.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<Mutex<TodoStore>>,
    form: Arc<Mutex<TaskForm>>,
    dialogs: Arc<dyn Dialogs>,
    action_sender: Option<mpsc::UnboundedSender<Action>>,
}

impl TodoService {
    pub fn new(dialogs: Arc<dyn Dialogs>) -> Self {
        Self {
            store: Arc::new(Mutex::new(TodoStore::new())),
            form: Arc::new(Mutex::new(TaskForm::new())),
            dialogs,
            action_sender: None,
        }
    }

    /// Send `Action::Render` after every mutation
    pub fn with_action_sender(mut self, sender: mpsc::UnboundedSender<Action>) -> Self {
        self.action_sender = Some(sender);
        self
    }

    fn store(&self) -> MutexGuard<'_, TodoStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn form(&self) -> MutexGuard<'_, TaskForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the entry form
    pub fn with_form<R>(&self, f: impl FnOnce(&mut TaskForm) -> R) -> R {
        f(&mut self.form())
    }

    pub fn form_values(&self) -> FormValues {
        self.form().values()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store().tasks().to_vec()
    }

    pub fn task_count(&self) -> usize {
        self.store().len()
    }

    pub fn filter(&self) -> String {
        self.store().filter().to_string()
    }

    /// Add a task from the entry form.
    ///
    /// Empty text raises the input-required alert and changes nothing. On
    /// success both form fields are cleared.
    pub async fn add_todo(&self) -> Option<TaskId> {
        let values = self.form_values();

        let added = self.store().add(&values.text, &values.date);
        match added {
            Ok(id) => {
                self.form().clear();
                log::info!("Added task {} ({})", id, values.text.trim());
                self.render_todos();
                Some(id)
            }
            Err(TodoError::EmptyText) => {
                log::debug!("Add rejected: empty task text");
                self.dialogs.alert(MSG_INPUT_REQUIRED, Some(TITLE_INPUT_REQUIRED)).await;
                None
            }
        }
    }

    /// Delete a task after confirmation. Returns whether it was removed.
    pub async fn delete_todo(&self, id: TaskId) -> bool {
        if !self.dialogs.confirm(MSG_DELETE_TASK, Some(TITLE_DELETE_TASK)).await {
            log::debug!("Delete of task {} cancelled", id);
            return false;
        }

        let removed = self.store().remove(id);
        if removed {
            log::info!("Deleted task {}", id);
            self.render_todos();
        } else {
            log::debug!("Delete confirmed for unknown task {}", id);
        }
        removed
    }

    /// Flip a task between pending and done. Unknown ids are ignored.
    pub fn toggle_status(&self, id: TaskId) -> Option<TaskStatus> {
        let status = self.store().toggle(id);
        if let Some(status) = status {
            log::info!("Task {} is now {}", id, status.label());
            self.render_todos();
        }
        status
    }

    /// Clear the list and the filter after confirmation.
    /// An empty list raises the no-tasks alert without asking.
    pub async fn delete_all_todos(&self) -> bool {
        let is_empty = self.store().is_empty();
        if is_empty {
            self.dialogs.alert(MSG_NO_TASKS, Some(TITLE_NO_TASKS)).await;
            return false;
        }

        if !self.dialogs.confirm(MSG_DELETE_ALL, Some(TITLE_DELETE_ALL)).await {
            log::debug!("Delete all cancelled");
            return false;
        }

        let count = {
            let mut store = self.store();
            let count = store.len();
            store.clear();
            count
        };
        log::info!("Deleted all {} task(s)", count);
        self.render_todos();
        true
    }

    /// Ask for a filter keyword, seeded with the current one. Cancelling
    /// keeps the current filter; an empty keyword clears it.
    pub async fn filter_todos(&self) -> bool {
        let current = self.filter();
        let Some(keyword) = self.dialogs.prompt(MSG_FILTER, Some(TITLE_FILTER), &current).await else {
            log::debug!("Filter prompt cancelled");
            return false;
        };

        self.store().set_filter(&keyword);
        log::info!("Filter set to '{}'", keyword.to_lowercase());
        self.render_todos();
        true
    }

    /// Current table view; also asks the UI to repaint it
    pub fn render_todos(&self) -> TableView {
        let view = self.table_view();
        if let Some(sender) = &self.action_sender {
            let _ = sender.send(Action::Render);
        }
        view
    }

    /// Table view without a repaint request
    pub fn table_view(&self) -> TableView {
        self.store().table_view()
    }
}
