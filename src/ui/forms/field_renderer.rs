//! Field rendering utilities for forms

use crate::state::DemoField;
use crate::ui::{BRAND_LIGHT, MUTED};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows for the message box, borders included
const MULTILINE_HEIGHT: u16 = 5;
const SINGLE_LINE_HEIGHT: u16 = 3;

/// Everything needed to draw one field
pub struct FieldView<'a> {
    pub field: DemoField,
    pub value: &'a str,
    pub is_active: bool,
    /// Flagged by a blocked submit
    pub is_missing: bool,
    /// Input locked while a request is in flight
    pub is_disabled: bool,
}

pub fn field_height(field: DemoField) -> u16 {
    if field.is_multiline() {
        MULTILINE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    }
}

/// Draw a bordered input for a demo request field
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let border_style = if view.is_missing {
        Style::default().fg(Color::Red)
    } else if view.is_active && !view.is_disabled {
        Style::default().fg(BRAND_LIGHT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if view.is_disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let cursor = if view.is_active && !view.is_disabled {
        "▌"
    } else {
        ""
    };
    let cursor_span = Span::styled(cursor, Style::default().fg(BRAND_LIGHT));

    let mut lines: Vec<Line> = if view.value.is_empty() {
        vec![Line::from(vec![
            cursor_span.clone(),
            Span::styled(
                view.field.placeholder(),
                Style::default().fg(MUTED).add_modifier(Modifier::DIM),
            ),
        ])]
    } else {
        view.value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect()
    };

    if !view.value.is_empty() {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
    }

    let marker = if view.field.is_required() {
        Span::styled(" *", Style::default().fg(Color::Red))
    } else {
        Span::styled(" (optional)", Style::default().fg(MUTED))
    };
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(view.field.label(), border_style),
        marker,
        Span::raw(" "),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}
