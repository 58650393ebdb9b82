use crate::todo::TaskId;

/// Which part of the screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    #[default]
    TaskInput,
    DateInput,
    Table,
}

impl FocusArea {
    pub fn next(self) -> Self {
        match self {
            FocusArea::TaskInput => FocusArea::DateInput,
            FocusArea::DateInput => FocusArea::Table,
            FocusArea::Table => FocusArea::TaskInput,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusArea::TaskInput => FocusArea::Table,
            FocusArea::DateInput => FocusArea::TaskInput,
            FocusArea::Table => FocusArea::DateInput,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Todo operations
    AddTodo,
    DeleteTodo(TaskId),
    ToggleStatus(TaskId),
    DeleteAllTodos,
    FilterTodos,

    // Navigation
    Focus(FocusArea),
    FocusNext,
    FocusPrevious,
    SelectRow(usize),

    // Repaint request from background operations and dialogs
    Render,

    // App control
    Quit,
    None,
}
