//! Toast overlay in the top-right corner

use super::BRAND;
use crate::app::App;
use crate::state::ToastKind;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);

    for (index, toast) in app.toasts.visible().iter().enumerate() {
        let y = area.y + 1 + index as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.height {
            break;
        }
        let toast_area = Rect {
            x,
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let (title, color) = match toast.kind {
            ToastKind::Success => (" ✓ Success ", BRAND),
            ToastKind::Failure => (" ✗ Error ", Color::Red),
        };

        frame.render_widget(Clear, toast_area);
        let widget = Paragraph::new(toast.message.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(Color::Black)),
            );
        frame.render_widget(widget, toast_area);
    }
}
