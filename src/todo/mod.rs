//! To-do list state and operations.
//!
//! - [`task`] - the task entity and its two-state status
//! - [`store`] - the in-memory list and filter
//! - [`view`] - projection of the store into table rows
//! - [`form`] - the task entry form
//! - [`service`] - operations that combine the above with dialogs

pub mod form;
pub mod service;
pub mod store;
pub mod task;
pub mod view;

pub use form::{FormField, FormValues, TaskForm};
pub use service::TodoService;
pub use store::{TaskIdGenerator, TodoError, TodoStore};
pub use task::{Task, TaskId, TaskStatus};
pub use view::{TableView, TaskRow};
