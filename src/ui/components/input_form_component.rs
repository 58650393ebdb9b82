use crate::constants::{FIELD_DATE, FIELD_TASK};
use crate::todo::{FormField, TodoService};
use crate::ui::components::dialogs::common::{create_input_paragraph, input_scroll};
use crate::ui::core::{
    actions::{Action, FocusArea},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

/// Task and due-date fields above the table.
///
/// The field values live in the shared form so `add_todo` can read and
/// clear them from a background operation.
pub struct InputFormComponent {
    todo: TodoService,
    /// Focused field, `None` while the table has focus
    pub focused: Option<FormField>,
    task_area: Rect,
    date_area: Rect,
}

impl InputFormComponent {
    pub fn new(todo: TodoService) -> Self {
        Self {
            todo,
            focused: Some(FormField::Task),
            task_area: Rect::default(),
            date_area: Rect::default(),
        }
    }

    pub fn set_focus(&mut self, focus: FocusArea) {
        self.focused = match focus {
            FocusArea::TaskInput => Some(FormField::Task),
            FocusArea::DateInput => Some(FormField::Date),
            FocusArea::Table => None,
        };
    }

    fn render_field(&self, f: &mut Frame, area: Rect, field: FormField) {
        let focused = self.focused == Some(field);
        let (value, cursor) = self.todo.with_form(|form| {
            let input = form.field(field);
            (input.value().to_string(), input.cursor())
        });
        let title = match field {
            FormField::Task => FIELD_TASK,
            FormField::Date => FIELD_DATE,
        };

        let scroll = input_scroll(cursor, area.width);
        f.render_widget(create_input_paragraph(&value, title, focused, scroll), area);

        if focused {
            let cursor_x = area.x + 1 + u16::try_from(cursor).unwrap_or(u16::MAX).saturating_sub(scroll);
            f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

impl Component for InputFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(field) = self.focused else {
            return Action::None;
        };

        match key.code {
            KeyCode::Enter => Action::AddTodo,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.todo.with_form(|form| form.insert_char(field, c));
                Action::None
            }
            KeyCode::Backspace => {
                self.todo.with_form(|form| form.field_mut(field).backspace());
                Action::None
            }
            KeyCode::Delete => {
                self.todo.with_form(|form| form.field_mut(field).delete());
                Action::None
            }
            KeyCode::Left => {
                self.todo.with_form(|form| form.field_mut(field).move_left());
                Action::None
            }
            KeyCode::Right => {
                self.todo.with_form(|form| form.field_mut(field).move_right());
                Action::None
            }
            KeyCode::Home => {
                self.todo.with_form(|form| form.field_mut(field).move_home());
                Action::None
            }
            KeyCode::End => {
                self.todo.with_form(|form| form.field_mut(field).move_end());
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        if LayoutManager::contains(self.task_area, mouse.column, mouse.row) {
            Action::Focus(FocusArea::TaskInput)
        } else if LayoutManager::contains(self.date_area, mouse.column, mouse.row) {
            Action::Focus(FocusArea::DateInput)
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (task_area, date_area) = LayoutManager::form_layout(rect);
        self.task_area = task_area;
        self.date_area = date_area;

        self.render_field(f, task_area, FormField::Task);
        self.render_field(f, date_area, FormField::Date);
    }
}
