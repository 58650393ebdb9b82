use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use todotable::config::UiConfig;
use todotable::constants::{MSG_INPUT_REQUIRED, NO_TASK_FOUND};
use todotable::dialog::DialogKind;
use todotable::todo::TaskStatus;
use todotable::ui::core::{Component, EventType, FocusArea};
use todotable::ui::AppComponent;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn click(column: u16, row: u16) -> EventType {
    EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).await.unwrap();
    }
}

/// Give spawned operations a chance to run
async fn settle(app: &mut AppComponent) {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    for action in app.process_background_actions() {
        let action = app.update(action);
        app.handle_app_action(action).await;
    }
}

async fn wait_for_dialog(app: &AppComponent, kind: DialogKind) {
    for _ in 0..100 {
        if app.dialogs().is_open(kind) {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("{:?} dialog never opened", kind);
}

fn draw(app: &mut AppComponent) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
}

#[tokio::test]
async fn test_app_starts_focused_on_task_input() {
    let app = AppComponent::new(&UiConfig::default());
    assert!(!app.should_quit());
    assert_eq!(app.focus(), FocusArea::TaskInput);
    assert_eq!(app.todo().task_count(), 0);
}

#[tokio::test]
async fn test_empty_app_renders_placeholder() {
    let mut app = AppComponent::new(&UiConfig::default());
    let terminal = draw(&mut app);

    let text = crate::buffer_text(terminal.backend().buffer());
    assert!(text.contains(NO_TASK_FOUND));
    assert!(text.contains("[ Add ]"));
    assert!(text.contains("[ Delete All ]"));
}

#[tokio::test]
async fn test_type_and_enter_adds_task() {
    let mut app = AppComponent::new(&UiConfig::default());
    type_text(&mut app, "Buy milk").await;
    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    type_text(&mut app, "2025-01-01").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    settle(&mut app).await;

    let tasks = app.todo().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Buy milk");
    assert_eq!(tasks[0].date.as_deref(), Some("2025-01-01"));
    assert!(app.todo().form_values().text.is_empty());

    let text = crate::buffer_text(draw(&mut app).backend().buffer());
    assert!(text.contains("Buy milk"));
    assert!(!text.contains(NO_TASK_FOUND));
}

#[tokio::test]
async fn test_empty_submit_shows_alert_that_takes_all_keys() {
    let mut app = AppComponent::new(&UiConfig::default());
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    wait_for_dialog(&app, DialogKind::Alert).await;

    let text = crate::buffer_text(draw(&mut app).backend().buffer());
    assert!(text.contains(MSG_INPUT_REQUIRED));

    // Typing goes to the dialog, not the form; Esc closes it instead of quitting
    type_text(&mut app, "x").await;
    assert!(app.todo().form_values().text.is_empty());
    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    settle(&mut app).await;

    assert!(!app.should_quit());
    assert!(!app.dialogs().has_open());
    assert_eq!(app.todo().task_count(), 0);
}

#[tokio::test]
async fn test_toggle_and_delete_from_table() {
    let mut app = AppComponent::new(&UiConfig::default());
    type_text(&mut app, "Buy milk").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    settle(&mut app).await;

    app.handle_event(key(KeyCode::BackTab)).await.unwrap();
    assert_eq!(app.focus(), FocusArea::Table);

    app.handle_event(key(KeyCode::Char(' '))).await.unwrap();
    assert_eq!(app.todo().tasks()[0].status, TaskStatus::Done);

    app.handle_event(key(KeyCode::Char('d'))).await.unwrap();
    wait_for_dialog(&app, DialogKind::Confirm).await;
    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    settle(&mut app).await;
    assert_eq!(app.todo().task_count(), 1);

    app.handle_event(key(KeyCode::Char('d'))).await.unwrap();
    wait_for_dialog(&app, DialogKind::Confirm).await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    settle(&mut app).await;
    assert_eq!(app.todo().task_count(), 0);
}

#[tokio::test]
async fn test_filter_shortcut_opens_prompt() {
    let mut app = AppComponent::new(&UiConfig::default());
    type_text(&mut app, "Buy milk").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    settle(&mut app).await;
    type_text(&mut app, "Call mom").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    settle(&mut app).await;

    app.handle_event(ctrl('f')).await.unwrap();
    wait_for_dialog(&app, DialogKind::Prompt).await;
    type_text(&mut app, "MOM").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    settle(&mut app).await;

    assert_eq!(app.todo().filter(), "mom");
    let text = crate::buffer_text(draw(&mut app).backend().buffer());
    assert!(text.contains("Call mom"));
    assert!(!text.contains("Buy milk"));
}

#[tokio::test]
async fn test_delete_all_on_empty_list_alerts() {
    let mut app = AppComponent::new(&UiConfig::default());
    app.handle_event(ctrl('d')).await.unwrap();
    wait_for_dialog(&app, DialogKind::Alert).await;
    assert!(!app.dialogs().is_open(DialogKind::Confirm));

    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    settle(&mut app).await;
    assert!(!app.dialogs().has_open());
}

#[tokio::test]
async fn test_toolbar_click_opens_filter() {
    let mut app = AppComponent::new(&UiConfig::default());
    let terminal = draw(&mut app);
    let (x, y) = crate::find_text(terminal.backend().buffer(), "[ Filter ]").unwrap();

    app.handle_event(click(x + 2, y)).await.unwrap();
    wait_for_dialog(&app, DialogKind::Prompt).await;

    // Outside click cancels and keeps the (empty) filter
    draw(&mut app);
    app.handle_event(click(0, 23)).await.unwrap();
    settle(&mut app).await;
    assert!(!app.dialogs().has_open());
    assert_eq!(app.todo().filter(), "");
}

#[tokio::test]
async fn test_mouse_ignored_when_disabled() {
    let config = UiConfig {
        mouse_enabled: false,
        ..UiConfig::default()
    };
    let mut app = AppComponent::new(&config);
    let terminal = draw(&mut app);
    let (x, y) = crate::find_text(terminal.backend().buffer(), "[ Filter ]").unwrap();

    app.handle_event(click(x + 2, y)).await.unwrap();
    settle(&mut app).await;
    assert!(!app.dialogs().has_open());
}

#[tokio::test]
async fn test_escape_and_ctrl_c_quit() {
    let mut app = AppComponent::new(&UiConfig::default());
    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    assert!(app.should_quit());

    let mut app = AppComponent::new(&UiConfig::default());
    app.handle_event(ctrl('c')).await.unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_quit_cancels_pending_dialogs() {
    let mut app = AppComponent::new(&UiConfig::default());
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    wait_for_dialog(&app, DialogKind::Alert).await;

    app.handle_event(ctrl('c')).await.unwrap();
    assert!(app.dialogs().has_open(), "dialogs take Ctrl+C like any other key");

    app.handle_app_action(todotable::ui::core::Action::Quit).await;
    assert!(app.should_quit());
    assert!(!app.dialogs().has_open());
    assert_eq!(app.active_operation_count(), 0);
}

#[tokio::test]
async fn test_clicking_row_actions() {
    let mut app = AppComponent::new(&UiConfig::default());
    type_text(&mut app, "Buy milk").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    settle(&mut app).await;

    let terminal = draw(&mut app);
    let (x, y) = crate::find_text(terminal.backend().buffer(), "[Done]").unwrap();
    app.handle_event(click(x + 1, y)).await.unwrap();
    assert_eq!(app.todo().tasks()[0].status, TaskStatus::Done);

    let terminal = draw(&mut app);
    let (x, y) = crate::find_text(terminal.backend().buffer(), "[Delete]").unwrap();
    app.handle_event(click(x + 1, y)).await.unwrap();
    wait_for_dialog(&app, DialogKind::Confirm).await;
    app.handle_event(key(KeyCode::Char('y'))).await.unwrap();
    settle(&mut app).await;
    assert_eq!(app.todo().task_count(), 0);
}
