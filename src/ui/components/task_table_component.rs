use crate::constants::{NO_TASK_FOUND, TABLE_HEADERS};
use crate::todo::{TableView, TaskRow, TaskStatus};
use crate::ui::core::{
    actions::{Action, FocusArea},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, HighlightSpacing, Row, Table, TableState},
    Frame,
};

/// Header line plus top border
const ROWS_TOP_OFFSET: u16 = 2;
const COLUMN_SPACING: u16 = 1;
const HIGHLIGHT_SYMBOL: &str = "▶ ";
const ACTIONS_COLUMN: usize = 3;

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(45),
    Constraint::Length(12),
    Constraint::Length(9),
    Constraint::Min(20),
];

pub struct TaskTableComponent {
    pub view: TableView,
    pub filter: String,
    pub selected_index: usize,
    pub table_state: TableState,
    pub focused: bool,
    area: Rect,
}

impl Default for TaskTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskTableComponent {
    pub fn new() -> Self {
        Self {
            view: TableView::Empty,
            filter: String::new(),
            selected_index: 0,
            table_state: TableState::default(),
            focused: false,
            area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, view: TableView, filter: String) {
        self.view = view;
        self.filter = filter;
        self.update_table_state();
    }

    fn update_table_state(&mut self) {
        if self.view.is_empty() {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= self.view.len() {
                self.selected_index = self.view.len().saturating_sub(1);
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.view.row(self.selected_index)
    }

    pub fn select(&mut self, index: usize) {
        self.selected_index = index;
        self.update_table_state();
    }

    pub fn select_next(&mut self) {
        if !self.view.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.view.len();
            self.update_table_state();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.view.is_empty() {
            self.selected_index = self.selected_index.checked_sub(1).unwrap_or(self.view.len() - 1);
            self.update_table_state();
        }
    }

    /// Visible row under a terminal cell, if any
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner_bottom = self.area.bottom().saturating_sub(1);
        if column <= self.area.x
            || column >= self.area.right().saturating_sub(1)
            || row < self.area.y + ROWS_TOP_OFFSET
            || row >= inner_bottom
        {
            return None;
        }

        let index = self.table_state.offset() + usize::from(row - self.area.y - ROWS_TOP_OFFSET);
        (index < self.view.len()).then_some(index)
    }

    /// Screen columns of the Actions cell, laid out the same way the table
    /// lays out its columns
    fn actions_column(&self) -> (u16, u16) {
        let inner = Rect::new(self.area.x + 1, self.area.y, self.area.width.saturating_sub(2), 1);
        let selection_width = u16::try_from(Line::from(HIGHLIGHT_SYMBOL).width()).unwrap_or(0);
        let [_, columns_area] = Layout::horizontal([Constraint::Length(selection_width), Constraint::Fill(0)])
            .areas(Rect::new(0, 0, inner.width, 1));
        let columns = Layout::horizontal(COLUMN_WIDTHS)
            .flex(Flex::Start)
            .spacing(COLUMN_SPACING)
            .split(columns_area);

        let actions = columns[ACTIONS_COLUMN];
        (inner.x + actions.x, actions.width)
    }

    /// Action for a click on row `index` at terminal column `column`
    fn row_click_action(&self, index: usize, column: u16) -> Action {
        let Some(row) = self.view.row(index) else {
            return Action::None;
        };

        let (actions_x, actions_width) = self.actions_column();
        let toggle_width = action_label_width(row.toggle_label);
        let delete_x = actions_x + toggle_width + 1;
        let delete_width = action_label_width(row.delete_label);
        let actions_end = actions_x + actions_width;

        if column >= actions_x && column < (actions_x + toggle_width).min(actions_end) {
            Action::ToggleStatus(row.id)
        } else if column >= delete_x && column < (delete_x + delete_width).min(actions_end) {
            Action::DeleteTodo(row.id)
        } else {
            Action::SelectRow(index)
        }
    }

    fn status_style(status: TaskStatus) -> Style {
        match status {
            TaskStatus::Done => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            TaskStatus::Pending => Style::default().fg(Color::Yellow),
        }
    }

    fn create_row(task: &TaskRow) -> Row<'_> {
        let text_style = if task.status.is_done() {
            Style::default().fg(Color::Gray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };

        let actions = Line::from(vec![
            Span::styled(format!("[{}]", task.toggle_label), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(format!("[{}]", task.delete_label), Style::default().fg(Color::Red)),
        ]);

        Row::new(vec![
            Cell::from(Span::styled(task.text.as_str(), text_style)),
            Cell::from(task.date.as_str()),
            Cell::from(Span::styled(task.status_label, Self::status_style(task.status))),
            Cell::from(actions),
        ])
    }

    fn title(&self) -> String {
        if self.filter.is_empty() {
            format!(" Tasks ({}) ", self.view.len())
        } else {
            format!(" Tasks ({}) • filter: '{}' ", self.view.len(), self.filter)
        }
    }
}

impl Component for TaskTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected_row() {
                Some(row) => Action::ToggleStatus(row.id),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_row() {
                Some(row) => Action::DeleteTodo(row.id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        match self.row_at(mouse.column, mouse.row) {
            Some(index) => self.row_click_action(index, mouse.column),
            None if LayoutManager::contains(self.area, mouse.column, mouse.row) => Action::Focus(FocusArea::Table),
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title())
            .style(Style::default().fg(border_color));

        let header = Row::new(TABLE_HEADERS.iter().map(|title| Cell::from(*title)))
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = match &self.view {
            TableView::Empty => vec![Row::new(vec![Cell::from(Span::styled(
                NO_TASK_FOUND,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))])],
            TableView::Rows(rows) => rows.iter().map(Self::create_row).collect(),
        };

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let table = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .row_highlight_style(highlight)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always);

        f.render_stateful_widget(table, rect, &mut self.table_state);
    }
}

/// Width of a bracketed action label such as `[Done]`
fn action_label_width(label: &str) -> u16 {
    u16::try_from(label.chars().count() + 2).unwrap_or(u16::MAX)
}
