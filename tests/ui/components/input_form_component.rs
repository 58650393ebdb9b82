use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use todotable::dialog::DialogService;
use todotable::todo::TodoService;
use todotable::ui::components::InputFormComponent;
use todotable::ui::core::{Action, Component, FocusArea};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn form() -> (InputFormComponent, TodoService) {
    let todo = TodoService::new(Arc::new(DialogService::new()));
    (InputFormComponent::new(todo.clone()), todo)
}

#[test]
fn test_typing_goes_to_focused_field() {
    let (mut component, todo) = form();

    for c in "Buy".chars() {
        assert_eq!(component.handle_key_events(key(KeyCode::Char(c))), Action::None);
    }
    component.set_focus(FocusArea::DateInput);
    for c in "2025-0x1".chars() {
        component.handle_key_events(key(KeyCode::Char(c)));
    }
    component.handle_key_events(key(KeyCode::Backspace));

    let values = todo.form_values();
    assert_eq!(values.text, "Buy");
    assert_eq!(values.date, "2025-0");
}

#[test]
fn test_enter_submits_from_either_field() {
    let (mut component, _) = form();
    assert_eq!(component.handle_key_events(key(KeyCode::Enter)), Action::AddTodo);

    component.set_focus(FocusArea::DateInput);
    assert_eq!(component.handle_key_events(key(KeyCode::Enter)), Action::AddTodo);
}

#[test]
fn test_ignores_keys_while_table_has_focus() {
    let (mut component, todo) = form();
    component.set_focus(FocusArea::Table);

    assert_eq!(component.handle_key_events(key(KeyCode::Enter)), Action::None);
    component.handle_key_events(key(KeyCode::Char('x')));
    assert!(todo.form_values().text.is_empty());
}

#[test]
fn test_control_chords_are_not_typed() {
    let (mut component, todo) = form();
    component.handle_key_events(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));
    assert!(todo.form_values().text.is_empty());
}
