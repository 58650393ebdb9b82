use super::{DialogKind, DialogOutcome, DialogResponse, Dialogs};
use crate::input::InputField;
use crate::ui::core::actions::Action;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

/// One suspended interaction. Owns the only sender for its caller.
struct PendingDialog {
    id: u64,
    kind: DialogKind,
    title: String,
    message: String,
    input: Option<InputField>,
    responder: oneshot::Sender<DialogOutcome>,
}

#[derive(Default)]
struct DialogState {
    /// Open dialogs, oldest first. At most one per kind.
    open: Vec<PendingDialog>,
    next_id: u64,
}

/// Read-only copy of an open dialog for painting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSnapshot {
    pub id: u64,
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    /// Prompt input value; `None` for alert and confirm
    pub input: Option<String>,
    pub cursor: usize,
}

/// Dialog service driven by the terminal UI.
///
/// Callers await [`Dialogs`] methods from spawned operations; the event loop
/// paints [`DialogService::top`] and feeds user actions to
/// [`DialogService::respond`].
#[derive(Clone, Default)]
pub struct DialogService {
    state: Arc<Mutex<DialogState>>,
    action_sender: Option<mpsc::UnboundedSender<Action>>,
}

impl DialogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a redraw through the app's action channel whenever a dialog
    /// opens or closes
    pub fn with_action_sender(mut self, sender: mpsc::UnboundedSender<Action>) -> Self {
        self.action_sender = Some(sender);
        self
    }

    fn state(&self) -> MutexGuard<'_, DialogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn request_render(&self) {
        if let Some(sender) = &self.action_sender {
            let _ = sender.send(Action::Render);
        }
    }

    /// Register a dialog and return the receiver its caller awaits.
    ///
    /// A kind that is already open rejects the new call: the returned receiver
    /// resolves to `Cancelled` immediately and the open dialog is untouched.
    fn open(&self, kind: DialogKind, title: Option<&str>, message: &str, default_value: &str) -> oneshot::Receiver<DialogOutcome> {
        let (tx, rx) = oneshot::channel();
        let title = title.unwrap_or(kind.default_title()).to_string();

        {
            let mut state = self.state();
            if state.open.iter().any(|dialog| dialog.kind == kind) {
                log::warn!("{:?} dialog '{}' rejected: another {:?} dialog is already open", kind, title, kind);
                let _ = tx.send(DialogOutcome::Cancelled);
                return rx;
            }

            let id = state.next_id;
            state.next_id += 1;
            log::debug!("Opening {:?} dialog #{} '{}'", kind, id, title);

            let input = match kind {
                DialogKind::Prompt => Some(InputField::with_value(default_value)),
                DialogKind::Alert | DialogKind::Confirm => None,
            };

            state.open.push(PendingDialog {
                id,
                kind,
                title,
                message: message.to_string(),
                input,
                responder: tx,
            });
        }

        self.request_render();
        rx
    }

    /// Show a dialog and wait for its outcome. A dropped dialog counts as cancelled.
    pub async fn request(&self, kind: DialogKind, title: Option<&str>, message: &str, default_value: &str) -> DialogOutcome {
        let rx = self.open(kind, title, message, default_value);
        rx.await.unwrap_or(DialogOutcome::Cancelled)
    }

    /// Snapshot of the most recently opened dialog, the one receiving input
    pub fn top(&self) -> Option<DialogSnapshot> {
        self.state().open.last().map(|dialog| DialogSnapshot {
            id: dialog.id,
            kind: dialog.kind,
            title: dialog.title.clone(),
            message: dialog.message.clone(),
            input: dialog.input.as_ref().map(|field| field.value().to_string()),
            cursor: dialog.input.as_ref().map(InputField::cursor).unwrap_or(0),
        })
    }

    pub fn is_open(&self, kind: DialogKind) -> bool {
        self.state().open.iter().any(|dialog| dialog.kind == kind)
    }

    pub fn has_open(&self) -> bool {
        !self.state().open.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.state().open.len()
    }

    /// Resolve the top dialog. Returns `false` when nothing is open.
    pub fn respond(&self, response: DialogResponse) -> bool {
        let pending = self.state().open.pop();
        self.resolve(pending, response)
    }

    /// Resolve the open dialog of `kind`, wherever it sits in the stack
    pub fn respond_to(&self, kind: DialogKind, response: DialogResponse) -> bool {
        let pending = {
            let mut state = self.state();
            state
                .open
                .iter()
                .position(|dialog| dialog.kind == kind)
                .map(|index| state.open.remove(index))
        };
        self.resolve(pending, response)
    }

    /// The dialog is already out of the open list when this runs, so a
    /// second response can never reach the same caller.
    fn resolve(&self, pending: Option<PendingDialog>, response: DialogResponse) -> bool {
        let Some(dialog) = pending else {
            return false;
        };

        let input = dialog.input.as_ref().map(InputField::value).unwrap_or_default();
        let outcome = DialogOutcome::resolve(dialog.kind, response, input);
        log::debug!(
            "Resolving {:?} dialog #{} '{}' with {:?} -> {:?}",
            dialog.kind,
            dialog.id,
            dialog.title,
            response,
            outcome
        );

        if dialog.responder.send(outcome).is_err() {
            log::debug!("Dialog #{} caller went away before it was answered", dialog.id);
        }
        self.request_render();
        true
    }

    /// Edit the input of the top dialog if it is a prompt.
    /// Returns `false` when the top dialog has no input.
    pub fn edit_input<F>(&self, edit: F) -> bool
    where
        F: FnOnce(&mut InputField),
    {
        let mut state = self.state();
        match state.open.last_mut().and_then(|dialog| dialog.input.as_mut()) {
            Some(field) => {
                edit(field);
                true
            }
            None => false,
        }
    }

    /// Drop every open dialog; their callers resolve as cancelled
    pub fn close_all(&self) {
        let closed: Vec<PendingDialog> = std::mem::take(&mut self.state().open);
        if !closed.is_empty() {
            log::debug!("Closing {} open dialog(s)", closed.len());
        }
    }
}

#[async_trait]
impl Dialogs for DialogService {
    async fn alert(&self, message: &str, title: Option<&str>) {
        self.request(DialogKind::Alert, title, message, "").await;
    }

    async fn confirm(&self, message: &str, title: Option<&str>) -> bool {
        self.request(DialogKind::Confirm, title, message, "").await.is_accepted()
    }

    async fn prompt(&self, message: &str, title: Option<&str>, default_value: &str) -> Option<String> {
        self.request(DialogKind::Prompt, title, message, default_value)
            .await
            .into_input()
    }
}
