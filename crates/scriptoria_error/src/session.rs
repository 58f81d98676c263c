//! Session phase guard errors.

/// Conditions under which the session refuses to start a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// An upload is already in flight
    #[display("An upload is already in progress")]
    UploadInFlight,
    /// A generation is already in flight
    #[display("A generation is already in progress")]
    GenerationInFlight,
    /// Operation requires a Ready session
    #[display("Session is not ready (current phase: {})", _0)]
    NotReady(String),
    /// The session was reset while the job was in flight
    #[display("Session was reset before the job completed")]
    Abandoned,
}

/// Session error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific error condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
