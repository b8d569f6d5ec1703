//! Client for the remote demo request intake endpoint

mod client;
mod error;
mod traits;

pub use client::{DemoRequest, IntakeClient, IntakeOutcome};
pub use error::IntakeError;
pub use traits::IntakeClientTrait;

#[cfg(test)]
pub use traits::MockIntakeClientTrait;
