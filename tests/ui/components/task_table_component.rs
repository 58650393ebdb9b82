use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use todotable::constants::NO_TASK_FOUND;
use todotable::todo::{TableView, TodoStore};
use todotable::ui::components::TaskTableComponent;
use todotable::ui::core::{Action, Component, FocusArea};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn table_with(texts: &[&str]) -> (TaskTableComponent, TodoStore) {
    let mut store = TodoStore::new();
    for text in texts {
        store.add(text, "").unwrap();
    }
    let mut table = TaskTableComponent::new();
    table.update_data(store.table_view(), String::new());
    (table, store)
}

#[test]
fn test_selection_wraps_around() {
    let (mut table, _) = table_with(&["one", "two", "three"]);
    assert_eq!(table.selected_index, 0);

    table.handle_key_events(key(KeyCode::Up));
    assert_eq!(table.selected_index, 2);
    table.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(table.selected_index, 0);
}

#[test]
fn test_selection_clamped_when_rows_shrink() {
    let (mut table, mut store) = table_with(&["one", "two", "three"]);
    table.select(2);

    let last = store.tasks()[2].id;
    store.remove(last);
    table.update_data(store.table_view(), String::new());
    assert_eq!(table.selected_index, 1);
}

#[test]
fn test_keys_target_selected_row() {
    let (mut table, store) = table_with(&["one", "two"]);
    let second = store.tasks()[1].id;
    table.select(1);

    assert_eq!(table.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleStatus(second));
    assert_eq!(table.handle_key_events(key(KeyCode::Enter)), Action::ToggleStatus(second));
    assert_eq!(table.handle_key_events(key(KeyCode::Char('d'))), Action::DeleteTodo(second));
    assert_eq!(table.handle_key_events(key(KeyCode::Delete)), Action::DeleteTodo(second));
}

#[test]
fn test_keys_on_empty_table_do_nothing() {
    let mut table = TaskTableComponent::new();
    table.update_data(TableView::Empty, String::new());

    assert_eq!(table.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(table.handle_key_events(key(KeyCode::Char('d'))), Action::None);
    assert!(table.selected_row().is_none());
}

#[test]
fn test_empty_table_renders_placeholder_row() {
    let mut table = TaskTableComponent::new();
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal.draw(|f| table.render(f, f.area())).unwrap();

    let text = crate::buffer_text(terminal.backend().buffer());
    assert!(text.contains("Task"));
    assert!(text.contains("Due Date"));
    assert!(text.contains(NO_TASK_FOUND));
}

#[test]
fn test_rows_render_labels_and_filter_title() {
    let mut store = TodoStore::new();
    let id = store.add("Buy milk", "2025-01-01").unwrap();
    store.toggle(id);
    let mut table = TaskTableComponent::new();
    table.update_data(store.table_view(), "milk".to_string());

    let mut terminal = Terminal::new(TestBackend::new(100, 8)).unwrap();
    terminal.draw(|f| table.render(f, f.area())).unwrap();

    let text = crate::buffer_text(terminal.backend().buffer());
    assert!(text.contains("Buy milk"));
    assert!(text.contains("2025-01-01"));
    assert!(text.contains("Done"));
    assert!(text.contains("[Pending]"));
    assert!(text.contains("[Delete]"));
    assert!(text.contains("filter: 'milk'"));
    assert!(!text.contains(NO_TASK_FOUND));
}

#[test]
fn test_click_selects_row() {
    let (mut table, _) = table_with(&["one", "two"]);
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal.draw(|f| table.render(f, f.area())).unwrap();

    // Border and header take the first two lines
    assert_eq!(table.handle_mouse_events(click(5, 3)), Action::SelectRow(1));
    assert_eq!(table.handle_mouse_events(click(5, 1)), Action::Focus(FocusArea::Table));
    assert_eq!(table.handle_mouse_events(click(5, 5)), Action::Focus(FocusArea::Table));
    assert_eq!(table.handle_mouse_events(click(70, 3)), Action::None);
}

#[test]
fn test_click_on_row_action_labels() {
    let (mut table, store) = table_with(&["one", "two"]);
    let first = store.tasks()[0].id;
    let second = store.tasks()[1].id;
    let mut terminal = Terminal::new(TestBackend::new(100, 8)).unwrap();
    terminal.draw(|f| table.render(f, f.area())).unwrap();
    let buffer = terminal.backend().buffer().clone();

    let (x, y) = crate::find_text(&buffer, "[Done]").unwrap();
    assert_eq!(y, 2, "first task row sits below the header");
    assert_eq!(table.handle_mouse_events(click(x, y)), Action::ToggleStatus(first));
    assert_eq!(table.handle_mouse_events(click(x + 5, y + 1)), Action::ToggleStatus(second));

    let (x, y) = crate::find_text(&buffer, "[Delete]").unwrap();
    assert_eq!(table.handle_mouse_events(click(x + 3, y + 1)), Action::DeleteTodo(second));

    // The gap between the two labels only selects the row
    assert_eq!(table.handle_mouse_events(click(x - 1, y)), Action::SelectRow(0));
}
