//! Todo TUI - Terminal User Interface for browsing a remote to-do list.
//!
//! Main entry point and event loop for the application.

mod api;
mod app;
mod config;
mod error;
mod events;
mod filter;
mod logging;
mod mailer;
mod tasks;
mod ui;

use api::TodoClient;
use app::App;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use events::Command;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tasks::Tasks;

/// Main application entry point.
///
/// # Details
/// Loads configuration, sets up logging and the terminal, starts the
/// to-do fetch and runs the event loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = Config::default_config_path()?;
    let config = Config::load(Some(&config_path))?;
    logging::init_tracing(&config.log_file_path()?, &config.log_level)?;

    if !config_path.exists() {
        match config.save(Some(&config_path)) {
            Ok(()) => tracing::info!(path = %config_path.display(), "wrote default config"),
            Err(e) => tracing::warn!(error = %e, "could not write default config"),
        }
    }

    let client = TodoClient::new(&config)?;
    let mut tasks = Tasks::new(client);
    let mut app = App::new(config.default_filter);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut tasks).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "exiting with error");
    }
    result
}

/// Main event loop.
///
/// # Details
/// Redraws, collects finished fetches and dispatches input. The loop polls
/// input with a short timeout so spinners animate and results show up
/// without a key press.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tasks: &mut Tasks,
) -> anyhow::Result<()> {
    let mut list_area = Rect::default();

    if app.todos.is_empty() {
        tasks.spawn_todos(app);
    }

    loop {
        tasks.poll(app).await;
        app.on_tick();

        terminal.draw(|f| {
            list_area = ui::render_ui(f, app);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => events::handle_key(app, key),
            Event::Mouse(mouse) => events::handle_mouse(app, mouse, list_area),
            _ => Command::None,
        };

        match command {
            Command::None => {}
            Command::Quit => break,
            Command::LoadTodos => tasks.spawn_todos(app),
            Command::LoadUser(request) => tasks.spawn_user(request),
            Command::OpenMail(email) => match mailer::open_mailto(&email) {
                Ok(()) => app.set_status(format!("Opening mail to {}", email)),
                Err(e) => {
                    tracing::warn!(error = %e, "could not open mail client");
                    app.set_status(format!("Failed to open mail client: {}", e));
                }
            },
        }
    }

    Ok(())
}
