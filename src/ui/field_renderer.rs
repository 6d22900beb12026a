//! Input field rendering for the sign-in card

use crate::state::LoginField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border color for a field. A known-invalid field stays red even while
/// focused.
fn border_color(field: &LoginField, is_active: bool) -> Color {
    match field.is_valid {
        Some(false) => Color::Red,
        _ if is_active => Color::Cyan,
        _ => Color::DarkGray,
    }
}

/// Draw a single-line input field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &LoginField, is_active: bool, mask: bool) {
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display_value = if mask {
        "•".repeat(field.value.chars().count())
    } else {
        field.value.clone()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field, is_active)));

    frame.render_widget(content.block(block), area);
}
