//! Dialog components for TUI

mod base;
mod demo_dialog;

pub use demo_dialog::render_demo_dialog;
