
#[path = "components/input_form_component.rs"]
mod input_form_component;

#[path = "components/task_table_component.rs"]
mod task_table_component;
