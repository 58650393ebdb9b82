use crate::constants::{BUTTON_ADD, BUTTON_DELETE_ALL, BUTTON_FILTER};
use crate::ui::components::dialogs::common::{button_width, create_button};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::Color,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BUTTON_GAP: u16 = 1;

/// Clickable row of Add / Filter / Delete All buttons
#[derive(Default)]
pub struct ToolbarComponent {
    buttons: Vec<(Rect, Action)>,
}

impl ToolbarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn button_specs() -> [(&'static str, Color, Action); 3] {
        [
            (BUTTON_ADD, Color::Green, Action::AddTodo),
            (BUTTON_FILTER, Color::Cyan, Action::FilterTodos),
            (BUTTON_DELETE_ALL, Color::Red, Action::DeleteAllTodos),
        ]
    }
}

impl Component for ToolbarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        self.buttons
            .iter()
            .find(|(area, _)| LayoutManager::contains(*area, mouse.column, mouse.row))
            .map(|(_, action)| action.clone())
            .unwrap_or(Action::None)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.buttons.clear();
        let mut spans = Vec::new();
        let mut x = rect.x + 1;
        spans.push(Span::raw(" "));

        for (label, color, action) in Self::button_specs() {
            let width = button_width(label);
            self.buttons
                .push((Rect::new(x, rect.y, width, 1).intersection(rect), action));
            spans.push(create_button(label, color, false));
            spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
            x += width + BUTTON_GAP;
        }

        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
