//! Layout components (nav area, body, status bar)

use crate::app::App;
use crate::platform::SUBMIT_HINT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows taken by the navigation bar
pub const NAV_HEIGHT: u16 = 3;

/// Split the screen into nav bar and body, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT), // Navigation
            Constraint::Min(0),             // Body
            Constraint::Length(1),          // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];
    spans.push(Span::styled(hints(app), Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::White)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current context
fn hints(app: &App) -> String {
    if app.state.demo_dialog_open {
        if app.workflow.is_in_flight() {
            "Submitting...".to_string()
        } else {
            format!("Tab:next  {SUBMIT_HINT}  Esc:cancel")
        }
    } else if app.is_compact() {
        "j/k:nav  Enter:open  m:menu  d:book demo  q:quit".to_string()
    } else {
        "h/l:nav  Enter:open  d:book demo  q:quit".to_string()
    }
}
