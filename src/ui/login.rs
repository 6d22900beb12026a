//! Sign-in card rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::auth::AuthClientTrait;
use crate::state::FocusTarget;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 44;
// borders + margin + 2 fields + button + help line
const CARD_HEIGHT: u16 = 14;

/// Draw the centered sign-in card
pub fn draw<C: AuthClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let card_area = centered_card(area);

    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // E-mail
            Constraint::Length(3),             // Password
            Constraint::Length(BUTTON_HEIGHT), // Login button
            Constraint::Length(1),             // Help line
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    draw_field(
        frame,
        chunks[0],
        &app.form.email,
        app.form.focus == FocusTarget::Email,
        false,
    );
    draw_field(
        frame,
        chunks[1],
        &app.form.password,
        app.form.focus == FocusTarget::Password,
        true,
    );

    render_button(
        frame,
        chunks[2],
        "Login",
        app.form.focus == FocusTarget::Submit,
        app.form.form_valid,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": sign in  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

/// Center the card in the available area, clamped to the terminal size
fn centered_card(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
