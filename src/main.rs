//! Signin TUI - terminal sign-in form for the session daemon
//!
//! A Ratatui-based login form: two validated inputs, a debounced
//! form-validity flag, and a submit that forwards credentials to the
//! session daemon over gRPC.

mod app;
mod auth;
mod config;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use auth::AuthClientTrait;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signin_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new().await?;
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend, C: AuthClientTrait>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll tightly while the quiet timer is pending (16ms) so the
        // validity recompute lands close to its 500ms deadline; relaxed
        // polling (100ms) otherwise
        let poll_duration = app.poll_interval();

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key).await?;
                }
                Event::Resize(_width, _height) => {
                    // Card is re-centered on the next draw
                }
                _ => {}
            }
        }

        // Fire the debounced validity recompute once its deadline passes
        app.tick();

        if app.should_quit() {
            return Ok(());
        }
    }
}
