//! Failures reported by the remote operation gateway.

/// A remote call that did not yield a usable result.
///
/// Carries everything the job controllers need to pick the most specific
/// message: the HTTP status (if a response arrived), a structured detail field
/// from the response body (if one parsed), and the raw body bytes.
///
/// # Examples
///
/// ```
/// use scriptoria_error::RemoteError;
///
/// let err = RemoteError::new("Server returned: 500")
///     .with_status(500)
///     .with_detail("GROQ_API_KEY not found");
/// assert_eq!(err.best_message(), "GROQ_API_KEY not found");
///
/// let bare = RemoteError::new("connection refused");
/// assert_eq!(bare.best_message(), "connection refused");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Remote Error: {} at line {} in {}", message, line, file)]
pub struct RemoteError {
    /// Transport-level message
    pub message: String,
    /// HTTP status, if a response was received
    pub status: Option<u16>,
    /// Structured detail extracted from the response body
    pub detail: Option<String>,
    /// Raw response body, if any was received
    pub body: Option<Vec<u8>>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RemoteError {
    /// Create a new RemoteError with the given transport message.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            detail: None,
            body: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach a structured detail message.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the raw response body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// The structured detail if present, otherwise the transport message.
    pub fn best_message(&self) -> &str {
        self.detail
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.message)
    }

    /// Response body, if a non-empty one was received.
    pub fn usable_body(&self) -> Option<&[u8]> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}
