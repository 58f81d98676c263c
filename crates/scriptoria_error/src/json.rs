//! Saved document (de)serialization failures.

/// A screenplay document file could not be read as, or written to, JSON.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Parser message, usually prefixed with the offending file
    pub message: String,
    /// Line that raised it
    pub line: u32,
    /// Source file that raised it
    pub file: &'static str,
}

impl JsonError {
    /// Record a document JSON failure at the caller's location.
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
