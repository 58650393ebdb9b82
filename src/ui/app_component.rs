use crate::config::UiConfig;
use crate::constants::APP_TITLE;
use crate::dialog::DialogService;
use crate::todo::TodoService;
use crate::ui::components::{DialogComponent, InputFormComponent, StatusBar, TaskTableComponent, ToolbarComponent};
use crate::ui::core::{
    actions::{Action, FocusArea},
    event_handler::EventType,
    operation_manager::OperationManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    form: InputFormComponent,
    toolbar: ToolbarComponent,
    table: TaskTableComponent,
    dialog: DialogComponent,

    // Services
    todo: TodoService,
    dialogs: DialogService,
    operations: OperationManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Simple UI state
    focus: FocusArea,
    mouse_enabled: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(ui_config: &UiConfig) -> Self {
        let (operations, background_action_rx) = OperationManager::new();
        let dialogs = DialogService::new().with_action_sender(operations.action_sender());
        let todo = TodoService::new(Arc::new(dialogs.clone())).with_action_sender(operations.action_sender());

        Self {
            form: InputFormComponent::new(todo.clone()),
            toolbar: ToolbarComponent::new(),
            table: TaskTableComponent::new(),
            dialog: DialogComponent::new(dialogs.clone()),
            todo,
            dialogs,
            operations,
            background_action_rx,
            focus: FocusArea::TaskInput,
            mouse_enabled: ui_config.mouse_enabled,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> FocusArea {
        self.focus
    }

    pub fn todo(&self) -> &TodoService {
        &self.todo
    }

    pub fn dialogs(&self) -> &DialogService {
        &self.dialogs
    }

    /// Number of operations still running, typically waiting on a dialog
    pub fn active_operation_count(&self) -> usize {
        self.operations.operation_count()
    }

    /// Drain repaint requests and other actions sent by background operations
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        self.operations.cleanup_finished_operations();
        actions
    }

    /// Pull the latest table view into the table component
    fn sync_component_data(&mut self) {
        self.table.update_data(self.todo.table_view(), self.todo.filter());
        self.table.focused = self.focus == FocusArea::Table;
        self.form.set_focus(self.focus);
        if self.dialog.is_visible() {
            self.form.focused = None;
        }
    }

    fn set_focus(&mut self, focus: FocusArea) {
        self.focus = focus;
        self.sync_component_data();
    }

    /// Shortcuts that work regardless of focus, as long as no dialog is open
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                log::info!("Global key: Ctrl+C - quitting application");
                Some(Action::Quit)
            }
            KeyCode::Esc => {
                log::info!("Global key: Esc - quitting application");
                Some(Action::Quit)
            }
            KeyCode::Char('f') if ctrl => Some(Action::FilterTodos),
            KeyCode::Char('d') if ctrl => Some(Action::DeleteAllTodos),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrevious),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled {
            return Action::None;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_mouse_events(mouse);
        }

        [
            self.toolbar.handle_mouse_events(mouse),
            self.form.handle_mouse_events(mouse),
            self.table.handle_mouse_events(mouse),
        ]
        .into_iter()
        .find(|action| *action != Action::None)
        .unwrap_or(Action::None)
    }

    /// Handle a terminal event
    pub async fn handle_event(&mut self, event: EventType) -> anyhow::Result<()> {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) => Action::Render,
            EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action).await;
        Ok(())
    }

    /// Execute an action. Operations that may open a dialog are spawned so
    /// the event loop keeps feeding input to that dialog.
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::AddTodo => {
                let todo = self.todo.clone();
                self.operations.spawn_operation(
                    async move {
                        todo.add_todo().await;
                    },
                    "Add task".to_string(),
                );
            }
            Action::DeleteTodo(id) => {
                let todo = self.todo.clone();
                self.operations.spawn_operation(
                    async move {
                        todo.delete_todo(id).await;
                    },
                    format!("Delete task {}", id),
                );
            }
            Action::ToggleStatus(id) => {
                self.todo.toggle_status(id);
                self.sync_component_data();
            }
            Action::DeleteAllTodos => {
                let todo = self.todo.clone();
                self.operations.spawn_operation(
                    async move {
                        todo.delete_all_todos().await;
                    },
                    "Delete all tasks".to_string(),
                );
            }
            Action::FilterTodos => {
                let todo = self.todo.clone();
                self.operations.spawn_operation(
                    async move {
                        todo.filter_todos().await;
                    },
                    "Filter tasks".to_string(),
                );
            }
            Action::Focus(focus) => self.set_focus(focus),
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrevious => self.set_focus(self.focus.previous()),
            Action::SelectRow(index) => {
                self.table.select(index);
                self.set_focus(FocusArea::Table);
            }
            Action::Render => self.sync_component_data(),
            Action::Quit => {
                self.should_quit = true;
                self.dialogs.close_all();
                self.operations.cancel_all_operations();
            }
            Action::None => {}
        }
        Action::None
    }

    fn render_frame(&self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title(APP_TITLE)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(block, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Modal: an open dialog takes every key
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if let Some(action) = self.handle_global_key(key) {
            return action;
        }

        match self.focus {
            FocusArea::TaskInput | FocusArea::DateInput => self.form.handle_key_events(key),
            FocusArea::Table => self.table.handle_key_events(key),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.sync_component_data();

        self.render_frame(f, rect);
        let inner = Rect::new(rect.x, rect.y + 1, rect.width, rect.height.saturating_sub(1));
        let layout = LayoutManager::main_layout(inner);

        self.form.render(f, layout.form);
        self.toolbar.render(f, layout.toolbar);
        self.table.render(f, layout.table);
        StatusBar::render(
            f,
            layout.status,
            self.focus,
            self.dialog.is_visible(),
            self.operations.operation_count(),
        );

        // Dialogs draw last, over everything else
        self.dialog.render(f, rect);
    }
}
