//! Local HTTP client failures.

/// The gateway's HTTP client could not be built or a request could not be
/// assembled (bad multipart type, TLS setup). Failures reported by the
/// screenplay service itself are [`crate::RemoteError`]s instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// What went wrong while preparing the request
    pub message: String,
    /// Line that raised it
    pub line: u32,
    /// Source file that raised it
    pub file: &'static str,
}

impl HttpError {
    /// Record a client-side request failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptoria_error::HttpError;
    ///
    /// let err = HttpError::new("Invalid upload content type text/");
    /// assert!(err.to_string().starts_with("HTTP Error: Invalid upload content type"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
