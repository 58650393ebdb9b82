//! Terminal setup and the main event loop

use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Write};
use tokio::time::Duration;

/// Run the TUI until the user quits. The terminal is restored whatever
/// happens after raw mode is on.
pub async fn run_app(config: &Config) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let session = run_session(config).await;
    let restored = restore_terminal(&mut io::stdout());
    log::info!("UI stopped");

    finish_session(session, restored)
}

async fn run_session(config: &Config) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture).context("failed to enable mouse capture")?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;

    let mut app = AppComponent::new(&config.ui);
    let mut event_handler = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));
    log::info!("UI started");

    run_app_loop(&mut terminal, &mut app, &mut event_handler).await
}

/// Undo every terminal mode change. All steps run even when an earlier one
/// fails; the first failure is returned.
pub fn restore_terminal<W: Write>(out: &mut W) -> Result<()> {
    let raw_mode = disable_raw_mode().context("failed to disable raw mode");
    let screen =
        execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show).context("failed to leave alternate screen");
    raw_mode.and(screen)
}

/// A session error takes precedence over a restore error, which is logged
pub fn finish_session(session: Result<()>, restored: Result<()>) -> Result<()> {
    match (session, restored) {
        (Err(e), Err(restore_err)) => {
            log::error!("Terminal restore failed: {:#}", restore_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event).await?;
                needs_render = true;
            }
            EventType::Tick => {
                // Repaint requests from operations and dialogs arrive here
                for action in app.process_background_actions() {
                    let processed_action = app.update(action);
                    app.handle_app_action(processed_action).await;
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
