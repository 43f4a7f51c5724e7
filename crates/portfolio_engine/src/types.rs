use std::fmt;

pub type SubmissionId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ContactCompleted {
        submission: SubmissionId,
        result: Result<(), ContactError>,
    },
}

/// Why a submission did not reach the backend, plus the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactError {
    pub kind: FailureKind,
    pub message: String,
}

impl ContactError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Failure without a server-provided explanation.
    pub(crate) fn generic(kind: FailureKind) -> Self {
        let message = format!("Request failed ({kind})");
        Self { kind, message }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ContactError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Rejected before sending, with the same rules the backend applies.
    InvalidPayload,
    HttpStatus(u16),
    Timeout,
    Network,
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidPayload => write!(f, "invalid payload"),
            FailureKind::HttpStatus(code) => write!(f, "{code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Cancelled => write!(f, "cancelled"),
        }
    }
}
