use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;

use carepoint_core::catalog::Catalog;
use carepoint_core::AppConfig;
use carepoint_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    App,
};

pub async fn run(mut config: AppConfig, config_path: PathBuf, no_tab_bar: bool) -> Result<()> {
    if no_tab_bar {
        config.ui.tab_bar.enabled = false;
    }

    let catalog = Catalog::load(&config.catalog_path())?;
    let event_handler = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_fps,
    );
    let mut app = App::with_catalog(config, catalog).with_config_path(config_path);
    info!(
        "Starting TUI with {} hospitals, tab bar {}",
        app.catalog.hospitals().len(),
        if app.tab_bar.is_attached() { "mounted" } else { "unmounted" }
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("CarePoint"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| carepoint_tui::draw(frame, app, Instant::now()))?;

        // Poll at frame rate while scroll or tab bar animations run
        let event = if app.needs_animation() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            let action = match event {
                AppEvent::Key(key) => Some(handle_key_event(key, app, &app.keymap)),
                AppEvent::Mouse(mouse) => Some(handle_mouse_event(mouse, app)),
                AppEvent::Resize(_, _) | AppEvent::Tick => None,
            };
            if let Some(action) = action {
                app.handle_action(action, Instant::now());
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
