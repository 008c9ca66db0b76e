use inventory_core::{StoreError, ValidationError};
use thiserror::Error;

/// Why a single candidate base address did not produce a usable reply.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AttemptError {
    #[error("transport: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("server returned non-JSON response ({status}, content-type {content_type:?})")]
    NonJson {
        status: u16,
        content_type: Option<String>,
    },

    #[error("malformed JSON body: {0}")]
    MalformedJson(String),

    #[error("no candidate base addresses configured")]
    NoCandidates,
}

/// Coarse failure classes a widget can react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Host unreachable.
    Transport,
    /// Non-JSON or malformed body.
    Protocol,
    /// Non-2xx status with an error payload.
    Application,
    /// Rejected locally before any request was made.
    Input,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("all candidates failed, last: {last}")]
    Exhausted {
        last: Box<AttemptError>,
        attempts: Vec<(String, AttemptError)>,
    },

    #[error("decode: {0}")]
    Decode(String),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

/// The mock store only refuses input that fails validation.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(v) => ApiError::Validation(v),
        }
    }
}

impl AttemptError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AttemptError::Transport(_) | AttemptError::NoCandidates => FailureKind::Transport,
            AttemptError::NonJson { .. } | AttemptError::MalformedJson(_) => FailureKind::Protocol,
            AttemptError::Status { .. } => FailureKind::Application,
        }
    }
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Exhausted { last, .. } => last.kind(),
            ApiError::Decode(_) => FailureKind::Protocol,
            ApiError::Validation(_) => FailureKind::Input,
        }
    }

    /// The last candidate's failure, when the error came from the network.
    pub fn last_attempt(&self) -> Option<&AttemptError> {
        match self {
            ApiError::Exhausted { last, .. } => Some(last),
            _ => None,
        }
    }

    /// Single generic message shown by a widget, whatever the cause.
    /// Input errors keep their detail so the form can point at the field.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(v) => v.to_string(),
            _ => "Something went wrong while loading data. Please try again.".to_string(),
        }
    }
}
