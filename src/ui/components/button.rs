//! Button components for TUI

use crate::ui::{BRAND, BRAND_LIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(BRAND_LIGHT)
    } else {
        Style::default().fg(Color::Gray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(BRAND_LIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a single-row button; `filled` draws it on the brand color
pub fn render_inline_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    filled: bool,
) {
    let mut style = match (filled, is_selected) {
        (true, true) => Style::default().fg(Color::White).bg(BRAND_LIGHT),
        (true, false) => Style::default().fg(Color::White).bg(BRAND),
        (false, true) => Style::default().fg(Color::Black).bg(Color::White),
        (false, false) => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    style = style.add_modifier(Modifier::BOLD);
    if is_selected {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    frame.render_widget(Paragraph::new(format!(" {label} ")).style(style), area);
}
