//! Constants used throughout the application
//!
//! This module centralizes user-facing text, key hints and layout values
//! so the rest of the code never embeds literal strings.

// Dialog default titles
pub const DEFAULT_ALERT_TITLE: &str = "Alert";
pub const DEFAULT_CONFIRM_TITLE: &str = "Confirm";
pub const DEFAULT_PROMPT_TITLE: &str = "Input";

// Todo operation messages
pub const MSG_INPUT_REQUIRED: &str = "Please enter a task first!";
pub const TITLE_INPUT_REQUIRED: &str = "Input Required";
pub const MSG_DELETE_TASK: &str = "Are you sure you want to delete this task?";
pub const TITLE_DELETE_TASK: &str = "Delete Task";
pub const MSG_NO_TASKS: &str = "There are no tasks to delete!";
pub const TITLE_NO_TASKS: &str = "No Tasks";
pub const MSG_DELETE_ALL: &str = "Are you sure you want to delete all tasks?";
pub const TITLE_DELETE_ALL: &str = "Delete All Tasks";
pub const MSG_FILTER: &str = "Enter a keyword to filter:";
pub const TITLE_FILTER: &str = "Filter Tasks";

// Table text
pub const NO_TASK_FOUND: &str = "No task found";
pub const DATE_PLACEHOLDER: &str = "-";
pub const LABEL_PENDING: &str = "Pending";
pub const LABEL_DONE: &str = "Done";
pub const LABEL_DELETE: &str = "Delete";
pub const TABLE_HEADERS: [&str; 4] = ["Task", "Due Date", "Status", "Actions"];

// Buttons
pub const BUTTON_OK: &str = "OK";
pub const BUTTON_CANCEL: &str = "Cancel";
pub const BUTTON_ADD: &str = "Add";
pub const BUTTON_FILTER: &str = "Filter";
pub const BUTTON_DELETE_ALL: &str = "Delete All";

// Form
pub const FIELD_TASK: &str = "Task";
pub const FIELD_DATE: &str = "Due date (YYYY-MM-DD)";
/// Maximum number of characters accepted by the date field
pub const DATE_FIELD_MAX_LEN: usize = 10;

// Status bar hints
pub const HINT_FORM: &str = "Enter: add • Tab: next field • Ctrl+F: filter • Ctrl+D: delete all • Esc: quit";
pub const HINT_TABLE: &str = "Space: toggle • d: delete • j/k: move • Tab: next field • Ctrl+F: filter • Esc: quit";
pub const HINT_DIALOG: &str = "Enter: confirm • Esc: cancel";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const APP_TITLE: &str = "📝 To-Do List";

// Config bounds
/// Minimum event poll interval in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 10;
/// Maximum event poll interval in milliseconds
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default event poll interval in milliseconds
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
