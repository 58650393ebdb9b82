//! Core UI functionality for todotable.
//!
//! - [`actions`] - Action definitions and focus areas
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`operation_manager`] - Background execution of to-do operations
//!
//! Components turn input into [`Action`]s; the app component executes them,
//! spawning anything that may wait on a dialog through the
//! [`OperationManager`].

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod operation_manager;

pub use actions::{Action, FocusArea};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use operation_manager::{OperationId, OperationManager};
