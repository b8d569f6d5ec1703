//! Top navigation bar and the compact dropdown menu

use super::components::render_inline_button;
use super::{BRAND, BRAND_LIGHT, MUTED};
use crate::app::App;
use crate::state::{NavTarget, NAV_LINKS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const BRAND_WIDTH: u16 = 8;
const BOOK_DEMO_WIDTH: u16 = 13;
const WAITLIST_WIDTH: u16 = 17;

/// Draw the navigation bar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let brand_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: BRAND_WIDTH.min(area.width),
        height: 1,
    };
    let brand = Paragraph::new(Line::from(vec![
        Span::styled(
            "Lore",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(".", Style::default().fg(BRAND).add_modifier(Modifier::BOLD)),
    ]));
    frame.render_widget(brand, brand_area);

    if app.is_compact() {
        draw_menu_toggle(frame, area, app);
    } else {
        draw_links(frame, area, app);
        draw_actions(frame, area, app);
    }
}

fn draw_links(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected_nav();
    let mut spans = Vec::new();

    for (index, link) in NAV_LINKS.iter().enumerate() {
        let style = if selected == NavTarget::Link(index) {
            Style::default()
                .fg(BRAND_LIGHT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(link.name, style));
        spans.push(Span::raw("   "));
    }

    let links_area = Rect {
        x: area.x + BRAND_WIDTH + 3,
        y: area.y,
        width: area.width.saturating_sub(BRAND_WIDTH + 3),
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), links_area);
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected_nav();
    let total = BOOK_DEMO_WIDTH + WAITLIST_WIDTH + 1;
    if area.width < total + 1 {
        return;
    }
    let x = area.x + area.width - total - 1;

    render_inline_button(
        frame,
        Rect {
            x,
            y: area.y,
            width: BOOK_DEMO_WIDTH,
            height: 1,
        },
        NavTarget::BookDemo.label(),
        selected == NavTarget::BookDemo,
        false,
    );
    render_inline_button(
        frame,
        Rect {
            x: x + BOOK_DEMO_WIDTH + 1,
            y: area.y,
            width: WAITLIST_WIDTH,
            height: 1,
        },
        NavTarget::JoinWaitlist.label(),
        selected == NavTarget::JoinWaitlist,
        true,
    );
}

fn draw_menu_toggle(frame: &mut Frame, area: Rect, app: &App) {
    let label = if app.state.menu_open {
        "✕ Close"
    } else {
        "☰ Menu"
    };
    let width = 9u16.min(area.width);
    let toggle_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y,
        width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(label).style(Style::default().fg(Color::White)),
        toggle_area,
    );
}

/// Dropdown with every nav target, shown below the bar in compact mode
pub fn draw_menu(frame: &mut Frame, body: Rect, app: &App) {
    let selected = app.state.selected_nav();
    let items: Vec<ListItem> = (0..NavTarget::count())
        .map(NavTarget::from_index)
        .map(|target| {
            let is_selected = target == selected;
            let style = match (target, is_selected) {
                (_, true) => Style::default()
                    .fg(Color::Black)
                    .bg(BRAND_LIGHT)
                    .add_modifier(Modifier::BOLD),
                (NavTarget::JoinWaitlist, false) => Style::default().fg(BRAND),
                _ => Style::default().fg(Color::White),
            };
            let marker = if is_selected { "▸ " } else { "  " };
            ListItem::new(format!("{marker}{}", target.label())).style(style)
        })
        .collect();

    let height = (NavTarget::count() as u16 + 2).min(body.height);
    let menu_area = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height,
    };

    frame.render_widget(Clear, menu_area);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, menu_area);
}
