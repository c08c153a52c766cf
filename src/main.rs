//! Entry point: environment, config, terminal setup and the event loop

use anyhow::{bail, Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use starter_tui::api::ApiClient;
use starter_tui::app::App;
use starter_tui::config::TuiConfig;
use starter_tui::env::{ClientEnv, ServerEnv};
use starter_tui::platform::{self, ClipboardCopier};
use starter_tui::state::{FileStore, KeyValueStore, MemoryStore};
use starter_tui::ui;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starter_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let server_env = ServerEnv::from_env()?;
    let client_env = ClientEnv::from_env()?;
    tracing::debug!("Running in {:?} mode", server_env.app_env);

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Using default config: {err:#}");
        TuiConfig::default()
    });
    let api = ApiClient::with_reqwest(config.api_client_config(&client_env))
        .context("Failed to create API client")?;
    let store: Arc<dyn KeyValueStore> = match FileStore::open_default() {
        Ok(store) => Arc::new(store),
        Err(err) => {
            tracing::warn!("Falling back to in-memory storage: {err}");
            Arc::new(MemoryStore::new())
        }
    };

    if !platform::is_interactive() {
        bail!("starter-tui needs an interactive terminal");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config, api, store, ClipboardCopier::system());
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.handle_resize(size.width, size.height);

        // Timers and finished submissions
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Let spawned requests make progress between polls
        tokio::task::yield_now().await;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
