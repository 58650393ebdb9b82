//! Modal dialogs: alert, confirm and prompt.
//!
//! Each call suspends the caller until the user answers, then resolves
//! exactly once. The [`Dialogs`] trait is the seam the to-do operations talk
//! to; [`DialogService`] is the implementation the terminal UI drives.

mod service;

pub use service::{DialogService, DialogSnapshot};

use async_trait::async_trait;

/// The three interaction shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Alert,
    Confirm,
    Prompt,
}

impl DialogKind {
    pub fn default_title(&self) -> &'static str {
        match self {
            DialogKind::Alert => crate::constants::DEFAULT_ALERT_TITLE,
            DialogKind::Confirm => crate::constants::DEFAULT_CONFIRM_TITLE,
            DialogKind::Prompt => crate::constants::DEFAULT_PROMPT_TITLE,
        }
    }
}

/// User action that resolves an open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    /// OK button, Enter
    Affirmative,
    /// Cancel button
    Negative,
    /// Click outside the dialog, Esc
    Outside,
}

/// Result delivered to the suspended caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Alert acknowledged or confirm accepted
    Accepted,
    /// Prompt submitted with the input value
    Submitted(String),
    Cancelled,
}

impl DialogOutcome {
    /// Map a user action onto the outcome for a dialog of `kind`.
    ///
    /// Alerts are acknowledged by anything, including an outside click.
    pub fn resolve(kind: DialogKind, response: DialogResponse, input: &str) -> Self {
        match (kind, response) {
            (DialogKind::Alert, _) => DialogOutcome::Accepted,
            (DialogKind::Confirm, DialogResponse::Affirmative) => DialogOutcome::Accepted,
            (DialogKind::Prompt, DialogResponse::Affirmative) => DialogOutcome::Submitted(input.to_string()),
            (_, DialogResponse::Negative | DialogResponse::Outside) => DialogOutcome::Cancelled,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, DialogOutcome::Accepted | DialogOutcome::Submitted(_))
    }

    pub fn into_input(self) -> Option<String> {
        match self {
            DialogOutcome::Submitted(value) => Some(value),
            _ => None,
        }
    }
}

/// Promise-style dialogs. `None` titles fall back to the kind's default title.
#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Completes once the message is acknowledged
    async fn alert(&self, message: &str, title: Option<&str>);

    /// `true` on OK, `false` on Cancel or dismissal
    async fn confirm(&self, message: &str, title: Option<&str>) -> bool;

    /// Input value on OK or Enter, `None` on Cancel or dismissal
    async fn prompt(&self, message: &str, title: Option<&str>, default_value: &str) -> Option<String>;
}
