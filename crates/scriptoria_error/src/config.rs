//! `scriptoria.toml` loading failures.

/// Layered settings could not be read or did not match the expected
/// `[gateway]`, `[session]` and `[export]` sections.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Which source failed and why
    pub message: String,
    /// Line that raised it
    pub line: u32,
    /// Source file that raised it
    pub file: &'static str,
}

impl ConfigError {
    /// Record a settings failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptoria_error::ConfigError;
    ///
    /// let err = ConfigError::new("session.max_idea_chars: invalid type");
    /// assert!(err.message.contains("max_idea_chars"));
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
