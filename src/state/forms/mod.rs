//! Form domain layer
//!
//! Field metadata and the value record for the demo request dialog.

mod field;
mod form_state;

pub use field::DemoField;
pub use form_state::DemoForm;
