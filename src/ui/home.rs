//! Landing body: hero text and footer columns

use super::{BRAND, MUTED};
use crate::state::FOOTER_SECTIONS;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FOOTER_HEIGHT: u16 = 7;

pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
        .split(area);

    draw_hero(frame, chunks[0]);
    draw_footer(frame, chunks[1]);
}

fn draw_hero(frame: &mut Frame, area: Rect) {
    let top_padding = area.height.saturating_sub(5) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();

    lines.push(Line::from(vec![
        Span::styled(
            "Lore",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(".", Style::default().fg(BRAND).add_modifier(Modifier::BOLD)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "The memory layer for your organization",
        Style::default().fg(MUTED),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("d", Style::default().fg(BRAND).add_modifier(Modifier::BOLD)),
        Span::styled(" to book a demo", Style::default().fg(Color::DarkGray)),
    ]));

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            FOOTER_SECTIONS
                .iter()
                .map(|_| Constraint::Ratio(1, FOOTER_SECTIONS.len() as u32)),
        )
        .split(rows[0]);

    for ((title, links), column) in FOOTER_SECTIONS.iter().zip(columns.iter()) {
        let mut lines = vec![Line::from(Span::styled(
            *title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(
            links
                .iter()
                .map(|link| Line::from(Span::styled(link.name, Style::default().fg(MUTED)))),
        );
        frame.render_widget(Paragraph::new(lines), *column);
    }

    let copyright = Paragraph::new("© 2025 Lore. All rights reserved.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(copyright, rows[1]);
}
