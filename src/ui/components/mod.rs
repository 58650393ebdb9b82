//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod input_form_component;
pub mod status_bar;
pub mod task_table_component;
pub mod toolbar_component;

pub use dialog_component::DialogComponent;
pub use input_form_component::InputFormComponent;
pub use status_bar::StatusBar;
pub use task_table_component::TaskTableComponent;
pub use toolbar_component::ToolbarComponent;
