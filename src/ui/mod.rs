//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod nav;
mod toasts;

use crate::app::App;
use ratatui::{
    style::{Color, Style},
    widgets::Block,
    Frame,
};

/// Lore brand green
pub const BRAND: Color = Color::Rgb(46, 174, 99);
/// Lighter green used for the focused primary button
pub const BRAND_LIGHT: Color = Color::Rgb(79, 203, 125);
/// Page background
pub const BACKGROUND: Color = Color::Rgb(13, 15, 20);
/// Muted text
pub const MUTED: Color = Color::Rgb(156, 163, 175);

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let (nav_area, body_area) = layout::create_layout(area);

    nav::draw(frame, nav_area, app);
    home::draw(frame, body_area);

    if app.is_compact() && app.state.menu_open {
        nav::draw_menu(frame, body_area, app);
    }

    if app.state.demo_dialog_open {
        components::render_demo_dialog(frame, app);
    }

    toasts::draw(frame, app);
    layout::draw_status_bar(frame, app);
}
