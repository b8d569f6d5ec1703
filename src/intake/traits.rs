//! Trait abstraction for the intake client to enable mocking in tests

use super::client::{DemoRequest, IntakeOutcome};
use super::error::IntakeError;
use async_trait::async_trait;

/// Submits demo requests to the remote intake endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntakeClientTrait: Send + Sync {
    /// Send one demo request. Exactly one network request per call, no retries.
    async fn submit_demo_request(
        &self,
        request: &DemoRequest,
    ) -> Result<IntakeOutcome, IntakeError>;
}
