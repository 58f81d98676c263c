//! Request and response types exchanged with the service.

use scriptoria_core::clean_extracted_text;
use scriptoria_error::RemoteError;
use serde::{Deserialize, Serialize};

/// Body of a generation request.
///
/// # Examples
///
/// ```
/// use scriptoria_interface::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .story_idea("A lighthouse keeper hears voices in the fog.")
///     .genre("Thriller")
///     .build()
///     .unwrap();
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["storyIdea"], "A lighthouse keeper hears voices in the fog.");
/// assert_eq!(json["genre"], "Thriller");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Validated, trimmed story idea
    story_idea: String,
    /// Authoritative genre
    genre: String,
}

impl GenerateRequest {
    /// Request for an already validated idea and genre.
    pub fn new(story_idea: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            story_idea: story_idea.into(),
            genre: genre.into(),
        }
    }

    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Text pulled out of an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Extraction {
    text: String,
    source_length: usize,
}

impl Extraction {
    /// Wrap extracted text. `source_length` is the raw length reported by the
    /// service before cleanup.
    pub fn new(text: impl Into<String>, source_length: usize) -> Self {
        Self {
            text: text.into(),
            source_length,
        }
    }

    /// Consume into the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Wire form of an extraction response.
///
/// `{ success, extractedText, sourceLength }` on success,
/// `{ success: false, errorMessage }` on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractResponse {
    /// Whether extraction succeeded
    pub success: bool,
    /// Extracted text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    /// Raw text length before cleanup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_length: Option<usize>,
    /// Failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ExtractResponse {
    /// Interpret the envelope.
    ///
    /// # Errors
    ///
    /// A [`RemoteError`] carrying `errorMessage` as its detail when the
    /// service reports failure or returns no text.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptoria_interface::ExtractResponse;
    ///
    /// let ok: ExtractResponse = serde_json::from_str(
    ///     r#"{"success": true, "extractedText": " FADE IN: \n\n INT. HOUSE ", "sourceLength": 27}"#,
    /// ).unwrap();
    /// let extraction = ok.into_extraction().unwrap();
    /// assert_eq!(extraction.text(), "FADE IN:\nINT. HOUSE");
    ///
    /// let failed: ExtractResponse =
    ///     serde_json::from_str(r#"{"success": false, "errorMessage": "Encrypted PDF"}"#).unwrap();
    /// assert_eq!(failed.into_extraction().unwrap_err().best_message(), "Encrypted PDF");
    /// ```
    pub fn into_extraction(self) -> Result<Extraction, RemoteError> {
        match (self.success, self.extracted_text) {
            (true, Some(text)) => {
                let source_length = self.source_length.unwrap_or_else(|| text.chars().count());
                Ok(Extraction::new(clean_extracted_text(&text), source_length))
            }
            (true, None) => Err(RemoteError::new("Extraction returned no text")),
            (false, _) => {
                let err = RemoteError::new("Text extraction failed");
                Err(match self.error_message {
                    Some(message) => err.with_detail(message),
                    None => err,
                })
            }
        }
    }
}

/// Service health report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthStatus {
    /// "healthy" when up
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Whether the service has generation credentials
    #[serde(alias = "ai_configured")]
    pub ai_configured: bool,
}

impl HealthStatus {
    /// Whether the service reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
