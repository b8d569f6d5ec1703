//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_inline_button, BUTTON_HEIGHT};
pub use dialog::render_demo_dialog;
