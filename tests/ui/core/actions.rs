use todotable::ui::core::actions::{Action, FocusArea};

#[test]
fn test_focus_cycles_forward() {
    let mut focus = FocusArea::default();
    assert_eq!(focus, FocusArea::TaskInput);

    focus = focus.next();
    assert_eq!(focus, FocusArea::DateInput);
    focus = focus.next();
    assert_eq!(focus, FocusArea::Table);
    focus = focus.next();
    assert_eq!(focus, FocusArea::TaskInput);
}

#[test]
fn test_previous_undoes_next() {
    for focus in [FocusArea::TaskInput, FocusArea::DateInput, FocusArea::Table] {
        assert_eq!(focus.next().previous(), focus);
    }
}

#[test]
fn test_actions_compare_by_payload() {
    assert_eq!(Action::DeleteTodo(1), Action::DeleteTodo(1));
    assert_ne!(Action::DeleteTodo(1), Action::ToggleStatus(1));
    assert_ne!(Action::Focus(FocusArea::Table), Action::Focus(FocusArea::DateInput));
}
