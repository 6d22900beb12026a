//! Application wiring: key events, submit flow, quiet-timer driving

use crate::auth::{AuthClient, AuthClientTrait};
use crate::config::SigninConfig;
use crate::state::{LoginForm, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Main application struct, generic over the daemon client so tests can
/// drive it with a mock
pub struct App<C: AuthClientTrait> {
    /// Sign-in form state
    pub form: LoginForm,
    /// Session daemon client
    pub auth: C,
    /// Whether the daemon was reachable at startup
    pub daemon_connected: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App<AuthClient> {
    /// Create a new App instance
    pub async fn new() -> Result<Self> {
        let config = SigninConfig::load().unwrap_or_default();
        let auth = AuthClient::new(config.daemon_address).await?;
        let daemon_connected = auth.check_connection().await;

        Ok(Self {
            form: LoginForm::new(),
            auth,
            daemon_connected,
            quit: false,
        })
    }
}

impl<C: AuthClientTrait> App<C> {
    /// Build an app around an existing client
    pub fn with_client(auth: C) -> Self {
        Self {
            form: LoginForm::new(),
            auth,
            daemon_connected: false,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Drive the quiet timer from the event loop
    pub fn tick(&mut self) {
        if self.form.tick(Instant::now()) {
            tracing::debug!(form_valid = self.form.form_valid, "form validity recomputed");
        }
    }

    /// Event-loop poll interval: sleep until the pending recompute deadline
    /// (bounded), relaxed polling when the form has settled
    pub fn poll_interval(&self) -> Duration {
        match self.form.debounce_remaining(Instant::now()) {
            Some(remaining) => {
                remaining.clamp(Duration::from_millis(1), Duration::from_millis(100))
            }
            None => Duration::from_millis(100),
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let now = Instant::now();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit_and_cancel();
            }
            KeyCode::Esc => self.quit_and_cancel(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(now),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(now),
            KeyCode::Enter => self.submit().await?,
            KeyCode::Char(c) => self.form.input_char(c, now),
            KeyCode::Backspace => self.form.backspace(now),
            _ => {}
        }
        Ok(())
    }

    /// Quit, dropping any pending validity recompute with the form
    fn quit_and_cancel(&mut self) {
        self.form.cancel_pending();
        self.quit = true;
    }

    /// Submit the form: forward credentials when the debounced validity
    /// flag is set, otherwise move focus to the first invalid field
    pub async fn submit(&mut self) -> Result<()> {
        match self.form.submit_outcome() {
            SubmitOutcome::Submit { email, password } => {
                tracing::info!("submitting credentials to session daemon");
                self.auth.login(&email, &password).await?;
                self.quit = true;
            }
            SubmitOutcome::RedirectFocus(target) => {
                self.form.set_focus(target, Instant::now());
            }
        }
        Ok(())
    }
}
