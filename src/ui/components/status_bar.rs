//! Status bar component

use crate::constants::{HINT_DIALOG, HINT_FORM, HINT_TABLE};
use crate::ui::core::FocusArea;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render key hints for whatever has input, plus background activity
    pub fn render(f: &mut Frame, area: Rect, focus: FocusArea, dialog_open: bool, running_operations: usize) {
        let hint = if dialog_open {
            HINT_DIALOG
        } else if focus == FocusArea::Table {
            HINT_TABLE
        } else {
            HINT_FORM
        };

        let status_text = if running_operations > 0 && !dialog_open {
            format!("⏳ {} • {}", running_operations, hint)
        } else {
            hint.to_string()
        };

        let status_color = if dialog_open { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
