//! Application state module

mod app_state;
mod forms;
mod submission;
mod toasts;

pub use app_state::*;
pub use forms::*;
pub use submission::*;
pub use toasts::*;
