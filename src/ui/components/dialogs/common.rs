use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block.
///
/// `scroll` is the number of leading characters hidden so the cursor stays
/// inside the field.
pub fn create_input_paragraph<'a>(input: &'a str, field_title: &str, focused: bool, scroll: u16) -> Paragraph<'a> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(input)
        .block(input_block)
        .style(Style::default().fg(Color::White))
        .scroll((0, scroll))
}

/// Horizontal scroll that keeps `cursor` visible in a bordered field of `width` columns
pub fn input_scroll(cursor: usize, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1) as usize;
    u16::try_from(cursor.saturating_sub(inner - 1)).unwrap_or(u16::MAX)
}

/// Creates a button label, highlighted when focused
pub fn create_button<'a>(label: &str, color: Color, focused: bool) -> Span<'a> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[ {} ]", label), style)
}

/// Width a button takes on screen
pub fn button_width(label: &str) -> u16 {
    u16::try_from(label.chars().count() + 4).unwrap_or(u16::MAX)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_OK: InstructionShortcut = ("Enter", Color::Green, " OK");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const YES_NO: InstructionShortcut = ("y/n", Color::Cyan, " Yes/No");
    pub const TAB_SWITCH: InstructionShortcut = ("Tab", Color::Cyan, " Switch");
}
