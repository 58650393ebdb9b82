//! Modal dialog component.
//!
//! Paints whichever dialog sits on top of the [`DialogService`] and turns
//! keys and mouse presses into dialog responses. While a dialog is open the
//! app routes all input here.

use crate::constants::{BUTTON_CANCEL, BUTTON_OK};
use crate::dialog::{DialogKind, DialogResponse, DialogService, DialogSnapshot};
use crate::ui::components::dialogs::common::{
    button_width, create_button, create_dialog_block, create_input_paragraph, create_instructions_paragraph,
    input_scroll, shortcuts, InstructionShortcut,
};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    #[default]
    Ok,
    Cancel,
}

impl DialogButton {
    fn toggled(self) -> Self {
        match self {
            DialogButton::Ok => DialogButton::Cancel,
            DialogButton::Cancel => DialogButton::Ok,
        }
    }

    fn response(self) -> DialogResponse {
        match self {
            DialogButton::Ok => DialogResponse::Affirmative,
            DialogButton::Cancel => DialogResponse::Negative,
        }
    }
}

/// Screen positions from the last paint, used for mouse hit testing
#[derive(Debug, Clone, Copy, Default)]
struct DialogHitAreas {
    dialog: Rect,
    ok: Rect,
    cancel: Option<Rect>,
}

pub struct DialogComponent {
    dialogs: DialogService,
    focused_button: DialogButton,
    /// Id of the dialog `focused_button` belongs to
    focused_dialog: Option<u64>,
    hit_areas: Option<DialogHitAreas>,
}

impl DialogComponent {
    pub fn new(dialogs: DialogService) -> Self {
        Self {
            dialogs,
            focused_button: DialogButton::Ok,
            focused_dialog: None,
            hit_areas: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialogs.has_open()
    }

    /// Reset button focus whenever a different dialog comes on top
    fn sync_focus(&mut self, top: &DialogSnapshot) {
        if self.focused_dialog != Some(top.id) {
            self.focused_dialog = Some(top.id);
            self.focused_button = DialogButton::Ok;
        }
    }

    fn respond(&mut self, response: DialogResponse) -> Action {
        if self.dialogs.respond(response) {
            self.hit_areas = None;
            Action::Render
        } else {
            Action::None
        }
    }

    fn handle_alert_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.respond(DialogResponse::Affirmative),
            KeyCode::Esc => self.respond(DialogResponse::Outside),
            _ => Action::None,
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.respond(self.focused_button.response()),
            KeyCode::Char('y') | KeyCode::Char('Y') => self.respond(DialogResponse::Affirmative),
            KeyCode::Char('n') | KeyCode::Char('N') => self.respond(DialogResponse::Negative),
            KeyCode::Esc => self.respond(DialogResponse::Outside),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.focused_button = self.focused_button.toggled();
                Action::Render
            }
            _ => Action::None,
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Action {
        let edited = match key.code {
            KeyCode::Enter => return self.respond(DialogResponse::Affirmative),
            KeyCode::Esc => return self.respond(DialogResponse::Outside),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dialogs.edit_input(|field| field.insert_char(c))
            }
            KeyCode::Backspace => self.dialogs.edit_input(|field| field.backspace()),
            KeyCode::Delete => self.dialogs.edit_input(|field| field.delete()),
            KeyCode::Left => self.dialogs.edit_input(|field| field.move_left()),
            KeyCode::Right => self.dialogs.edit_input(|field| field.move_right()),
            KeyCode::Home => self.dialogs.edit_input(|field| field.move_home()),
            KeyCode::End => self.dialogs.edit_input(|field| field.move_end()),
            _ => false,
        };

        if edited {
            Action::Render
        } else {
            Action::None
        }
    }

    fn instructions(kind: DialogKind) -> Vec<InstructionShortcut> {
        match kind {
            DialogKind::Alert => vec![shortcuts::ENTER_OK, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE],
            DialogKind::Confirm => vec![
                shortcuts::ENTER_OK,
                shortcuts::SEPARATOR,
                shortcuts::YES_NO,
                shortcuts::SEPARATOR,
                shortcuts::TAB_SWITCH,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ],
            DialogKind::Prompt => vec![shortcuts::ENTER_OK, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL],
        }
    }

    fn theme_color(kind: DialogKind) -> Color {
        match kind {
            DialogKind::Alert => Color::Yellow,
            DialogKind::Confirm => Color::Red,
            DialogKind::Prompt => Color::Cyan,
        }
    }

    fn render_dialog(&mut self, f: &mut Frame, area: Rect, top: &DialogSnapshot) {
        let input_height = if top.input.is_some() { 3 } else { 0 };
        // border + message + gap + input + buttons + instructions + border
        let height = 2 + 2 + 1 + input_height + 1 + 1;
        let dialog_area = LayoutManager::centered_rect_lines(50, height, area);
        f.render_widget(Clear, dialog_area);

        let color = Self::theme_color(top.kind);
        let block = create_dialog_block(&top.title, color);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2),
                Constraint::Length(input_height),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let message = Paragraph::new(top.message.as_str())
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(message, chunks[0]);

        if let Some(input) = &top.input {
            let scroll = input_scroll(top.cursor, chunks[1].width);
            f.render_widget(create_input_paragraph(input, "", true, scroll), chunks[1]);
            let cursor_x = chunks[1].x + 1 + u16::try_from(top.cursor).unwrap_or(u16::MAX).saturating_sub(scroll);
            f.set_cursor_position((cursor_x.min(chunks[1].right().saturating_sub(2)), chunks[1].y + 1));
        }

        let hit_areas = self.render_buttons(f, chunks[2], top.kind, color);
        f.render_widget(create_instructions_paragraph(&Self::instructions(top.kind)), chunks[3]);

        self.hit_areas = Some(DialogHitAreas {
            dialog: dialog_area,
            ..hit_areas
        });
    }

    fn render_buttons(&self, f: &mut Frame, area: Rect, kind: DialogKind, color: Color) -> DialogHitAreas {
        let ok_width = button_width(BUTTON_OK);
        let gap = 2;

        if kind == DialogKind::Alert {
            let x = area.x + area.width.saturating_sub(ok_width) / 2;
            let ok = Rect::new(x, area.y, ok_width.min(area.width), 1);
            f.render_widget(Paragraph::new(create_button(BUTTON_OK, color, true)), ok);
            return DialogHitAreas {
                dialog: area,
                ok,
                cancel: None,
            };
        }

        let cancel_width = button_width(BUTTON_CANCEL);
        let total = ok_width + gap + cancel_width;
        let x = area.x + area.width.saturating_sub(total) / 2;
        let ok = Rect::new(x, area.y, ok_width, 1).intersection(area);
        let cancel = Rect::new(x + ok_width + gap, area.y, cancel_width, 1).intersection(area);

        // Prompt has no button focus; Enter always means OK there
        let ok_focused = kind == DialogKind::Prompt || self.focused_button == DialogButton::Ok;
        let line = Line::from(vec![
            create_button(BUTTON_OK, Color::Green, ok_focused),
            Span::raw(" ".repeat(gap as usize)),
            create_button(BUTTON_CANCEL, Color::Red, !ok_focused),
        ]);
        f.render_widget(Paragraph::new(line), Rect::new(x, area.y, total.min(area.width), 1));

        DialogHitAreas {
            dialog: area,
            ok,
            cancel: Some(cancel),
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(top) = self.dialogs.top() else {
            return Action::None;
        };
        self.sync_focus(&top);

        match top.kind {
            DialogKind::Alert => self.handle_alert_key(key),
            DialogKind::Confirm => self.handle_confirm_key(key),
            DialogKind::Prompt => self.handle_prompt_key(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let Some(areas) = self.hit_areas else {
            return Action::None;
        };

        let (column, row) = (mouse.column, mouse.row);
        if LayoutManager::contains(areas.ok, column, row) {
            self.respond(DialogResponse::Affirmative)
        } else if areas.cancel.is_some_and(|cancel| LayoutManager::contains(cancel, column, row)) {
            self.respond(DialogResponse::Negative)
        } else if LayoutManager::contains(areas.dialog, column, row) {
            Action::None
        } else {
            self.respond(DialogResponse::Outside)
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialogs.top() {
            Some(top) => {
                self.sync_focus(&top);
                self.render_dialog(f, rect, &top);
            }
            None => self.hit_areas = None,
        }
    }
}
