//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod login;

use crate::app::App;
use crate::auth::AuthClientTrait;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw<C: AuthClientTrait>(frame: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sign-in card
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    login::draw(frame, chunks[0], app);
    draw_status_bar(frame, chunks[1], app);
}

/// Status bar showing daemon reachability
fn draw_status_bar<C: AuthClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let (marker, text, color) = if app.daemon_connected {
        ("●", "session daemon connected", Color::Green)
    } else {
        ("○", "session daemon offline", Color::Red)
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {marker} "), Style::default().fg(color)),
        Span::styled(text, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(status, area);
}
