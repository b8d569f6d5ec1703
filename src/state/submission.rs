//! Submission status of the demo request dialog

/// Why a submission ended in the failed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The endpoint rejected the payload as incomplete or invalid
    Validation,
    /// The request could not be completed or the reply could not be read
    Network,
    /// The endpoint failed for a reason unrelated to the input
    Server,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Network => "network",
            Self::Server => "server",
        }
    }
}

/// Where the dialog is in its submit cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed { kind: FailureKind, message: String },
}

impl SubmissionStatus {
    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failed {
            kind,
            message: message.into(),
        }
    }

    /// A request is awaiting its result
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Inline error text, if the last submission failed
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failed { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
