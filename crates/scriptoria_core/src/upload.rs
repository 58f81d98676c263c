//! Upload payloads and the accepted document types.

use scriptoria_error::{ValidationError, ValidationErrorKind};

/// Document formats the extraction service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum UploadKind {
    /// PDF
    #[strum(serialize = "pdf")]
    Pdf,
    /// Office Open XML word document
    #[strum(serialize = "docx")]
    Docx,
    /// Legacy word document
    #[strum(serialize = "doc")]
    Doc,
}

impl UploadKind {
    /// MIME type sent with the upload.
    pub fn mime(self) -> &'static str {
        match self {
            UploadKind::Pdf => "application/pdf",
            UploadKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            UploadKind::Doc => "application/msword",
        }
    }

    /// Detect from a declared MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        [UploadKind::Pdf, UploadKind::Docx, UploadKind::Doc]
            .into_iter()
            .find(|kind| kind.mime().eq_ignore_ascii_case(essence))
    }

    /// Detect from the file name suffix.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(UploadKind::Pdf),
            "docx" => Some(UploadKind::Docx),
            "doc" => Some(UploadKind::Doc),
            _ => None,
        }
    }
}

/// A file chosen for text extraction.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct UploadFile {
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl UploadFile {
    /// Wrap a file payload.
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Total payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Determine the upload kind by declared type, then by suffix.
    ///
    /// # Errors
    ///
    /// [`ValidationErrorKind::UnsupportedFileType`] if neither identifies a
    /// PDF or Word document, [`ValidationErrorKind::EmptyFile`] for an empty
    /// payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptoria_core::{UploadFile, UploadKind};
    ///
    /// let pdf = UploadFile::new("treatment.PDF", None, vec![1, 2, 3]);
    /// assert_eq!(pdf.validate().unwrap(), UploadKind::Pdf);
    ///
    /// let image = UploadFile::new("poster.png", Some("image/png".into()), vec![1]);
    /// assert!(image.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<UploadKind, ValidationError> {
        let kind = self
            .content_type
            .as_deref()
            .and_then(UploadKind::from_mime)
            .or_else(|| UploadKind::from_file_name(&self.file_name))
            .ok_or_else(|| {
                ValidationError::new(ValidationErrorKind::UnsupportedFileType(
                    self.file_name.clone(),
                ))
            })?;
        if self.bytes.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyFile(
                self.file_name.clone(),
            )));
        }
        Ok(kind)
    }
}
