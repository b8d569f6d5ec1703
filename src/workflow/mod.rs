//! Demo request workflow
//!
//! Owns the form values and submission status of one open dialog and drives
//! the Editing → Submitting → Succeeded / Failed cycle.

mod demo_request;
mod notifier;

pub use demo_request::{BlockReason, DemoWorkflow, DialogCommand, SubmitAttempt, WorkflowEvent};
pub use notifier::Notifier;

#[cfg(test)]
pub use demo_request::messages;
#[cfg(test)]
pub use notifier::MockNotifier;
