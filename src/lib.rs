//! todotable - a to-do list for the terminal
//!
//! Tasks live in memory for the lifetime of the process. They are shown in a
//! table, and every question the app asks goes through its own modal dialogs
//! (alert, confirm, prompt) drawn with Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`dialog`] - Async alert/confirm/prompt dialogs
//! * [`todo`] - Task list, filter and the operations on them
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - File logging setup

/// Configuration module for managing application settings
pub mod config;

/// Application constants and user-facing text
pub mod constants;

/// Modal dialogs that suspend the caller until the user answers
pub mod dialog;

/// Single-line text input shared by the form and the prompt dialog
pub mod input;

/// Logging setup
pub mod logger;

/// Task list state, table projection and operations
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;
