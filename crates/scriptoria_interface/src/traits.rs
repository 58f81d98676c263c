//! Trait definitions for the remote generation service.

use crate::{Extraction, GenerateRequest, HealthStatus, UploadProgress};
use async_trait::async_trait;
use scriptoria_core::{Document, UploadFile};
use scriptoria_error::ScriptoriaResult;

/// Typed access to the three remote capabilities. Owns no session state.
///
/// Failures of a call that reached the service are reported as
/// [`scriptoria_error::RemoteError`] so callers can see the status, any
/// structured detail and the raw body.
#[async_trait]
pub trait ScriptoriaGateway: Send + Sync {
    /// Extract plain text from an uploaded PDF or Word document.
    ///
    /// Implementations report transferred bytes through `progress`.
    async fn extract(
        &self,
        file: &UploadFile,
        progress: &UploadProgress,
    ) -> ScriptoriaResult<Extraction>;

    /// Generate a screenplay breakdown from a story idea and genre.
    async fn generate(&self, request: &GenerateRequest) -> ScriptoriaResult<Document>;

    /// Render a document as a PDF and return the bytes.
    async fn export_pdf(&self, document: &Document) -> ScriptoriaResult<Vec<u8>>;

    /// Check that the service is reachable and configured.
    async fn health(&self) -> ScriptoriaResult<HealthStatus>;

    /// Gateway name for logging (e.g. "http", "mock").
    fn gateway_name(&self) -> &'static str;
}
