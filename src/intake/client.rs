//! HTTP client for the demo request intake endpoint
//!
//! Posts a JSON payload and classifies the reply into an [`IntakeOutcome`].
//! Anything that prevents reading a well-formed reply is an [`IntakeError`].

use super::error::IntakeError;
use super::traits::IntakeClientTrait;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Payload sent to the intake endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    /// `null` on the wire when the field was left empty
    pub company: Option<String>,
    pub timezone: String,
    pub message: String,
}

/// How the endpoint judged a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Accepted,
    /// HTTP 400, with the endpoint's reason when it gave one
    Rejected { reason: Option<String> },
    /// Any other non-2xx status
    ServerFailure { status: u16 },
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    error: Option<String>,
}

/// Classify a raw reply from the intake endpoint.
///
/// Success and 400 replies must carry a JSON body; other failures are
/// classified by status alone.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<IntakeOutcome, IntakeError> {
    let malformed = |source| IntakeError::MalformedBody {
        status: status.as_u16(),
        source,
    };

    if status.is_success() {
        serde_json::from_slice::<serde_json::Value>(body).map_err(malformed)?;
        return Ok(IntakeOutcome::Accepted);
    }

    if status == StatusCode::BAD_REQUEST {
        let rejection: RejectionBody = serde_json::from_slice(body).map_err(malformed)?;
        return Ok(IntakeOutcome::Rejected {
            reason: rejection.error.filter(|e| !e.is_empty()),
        });
    }

    Ok(IntakeOutcome::ServerFailure {
        status: status.as_u16(),
    })
}

/// Client for the intake endpoint
pub struct IntakeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IntakeClient {
    /// Create a client posting to `endpoint`, giving up after `timeout`
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, IntakeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IntakeClientTrait for IntakeClient {
    async fn submit_demo_request(
        &self,
        request: &DemoRequest,
    ) -> Result<IntakeOutcome, IntakeError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), "intake endpoint replied");

        interpret_response(status, &body)
    }
}
