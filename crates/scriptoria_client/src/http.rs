//! reqwest-backed gateway.

use crate::GatewayConfig;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Response, multipart};
use scriptoria_core::{Document, UploadFile};
use scriptoria_error::{HttpError, RemoteError, ScriptoriaResult};
use scriptoria_interface::{
    ExtractResponse, Extraction, GenerateRequest, HealthStatus, ScriptoriaGateway,
    UploadProgress, error_detail, parse_generate_body,
};
use tracing::instrument;

/// Gateway to the generation service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the TLS backend cannot be initialised.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: GatewayConfig) -> ScriptoriaResult<Self> {
        tracing::debug!("Creating HTTP gateway");
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    /// Get the gateway configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Read a response, turning non-success statuses into [`RemoteError`]
    /// with the status, any structured detail and the raw body attached.
    async fn read_body(response: Response) -> Result<Vec<u8>, RemoteError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                RemoteError::new(format!("Failed to read response body: {}", e))
                    .with_status(status.as_u16())
            })?
            .to_vec();

        if status.is_success() {
            return Ok(body);
        }

        tracing::error!(status = %status, bytes = body.len(), "Service returned error status");
        let mut err = RemoteError::new(format!("Server returned: {}", status))
            .with_status(status.as_u16());
        if let Some(detail) = serde_json::from_slice(&body)
            .ok()
            .and_then(|value| error_detail(&value))
        {
            err = err.with_detail(detail);
        }
        Err(err.with_body(body))
    }

    fn transport_error(action: &str, e: reqwest::Error) -> RemoteError {
        tracing::error!("{} failed: {}", action, e);
        let err = RemoteError::new(format!("{} failed: {}", action, e));
        match e.status() {
            Some(status) => err.with_status(status.as_u16()),
            None => err,
        }
    }
}

#[async_trait]
impl ScriptoriaGateway for HttpGateway {
    #[instrument(skip(self, file, progress), fields(file = %file.file_name(), bytes = file.len()))]
    async fn extract(
        &self,
        file: &UploadFile,
        progress: &UploadProgress,
    ) -> ScriptoriaResult<Extraction> {
        let url = self.config.url(self.config.extract_path());
        tracing::debug!("Uploading document to {}", url);

        let mime = match file.validate() {
            Ok(kind) => kind.mime().to_string(),
            Err(_) => file
                .content_type()
                .clone()
                .unwrap_or_else(|| "application/octet-stream".to_string()),
        };

        let chunk_size = (*self.config.upload_chunk_bytes()).max(1);
        let chunks: Vec<Vec<u8>> = file
            .bytes()
            .chunks(chunk_size)
            .map(<[u8]>::to_vec)
            .collect();
        let sink = progress.clone();
        let stream = futures::stream::iter(chunks).map(move |chunk| {
            sink.advance(chunk.len() as u64);
            Ok::<_, std::io::Error>(chunk)
        });

        let part = multipart::Part::stream_with_length(
            reqwest::Body::wrap_stream(stream),
            file.len() as u64,
        )
        .file_name(file.file_name().clone())
        .mime_str(&mime)
        .map_err(|e| HttpError::new(format!("Invalid upload content type {}: {}", mime, e)))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Self::transport_error("Upload", e))?;
        let body = Self::read_body(response).await?;
        progress.finish();

        let envelope: ExtractResponse = serde_json::from_slice(&body).map_err(|e| {
            RemoteError::new(format!("Failed to parse extraction response: {}", e)).with_body(body)
        })?;
        let extraction = envelope.into_extraction()?;
        tracing::debug!(
            chars = extraction.text().chars().count(),
            source_length = extraction.source_length(),
            "Extraction complete"
        );
        Ok(extraction)
    }

    #[instrument(skip(self, request), fields(genre = %request.genre(), idea_chars = request.story_idea().chars().count()))]
    async fn generate(&self, request: &GenerateRequest) -> ScriptoriaResult<Document> {
        let url = self.config.url(self.config.generate_path());
        tracing::debug!("Sending generation request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| Self::transport_error("Generation request", e))?;
        let body = Self::read_body(response).await?;
        Ok(parse_generate_body(&body)?)
    }

    #[instrument(skip(self, document), fields(title = %document.title()))]
    async fn export_pdf(&self, document: &Document) -> ScriptoriaResult<Vec<u8>> {
        let url = self.config.url(self.config.export_path());
        tracing::debug!("Sending export request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(document)
            .send()
            .await
            .map_err(|e| Self::transport_error("Export request", e))?;
        let body = Self::read_body(response).await?;
        tracing::debug!(bytes = body.len(), "Received export payload");
        Ok(body)
    }

    #[instrument(skip(self))]
    async fn health(&self) -> ScriptoriaResult<HealthStatus> {
        let url = self.config.url(self.config.health_path());
        tracing::debug!("Checking service health at {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_error("Health check", e))?;
        let body = Self::read_body(response).await?;
        let status: HealthStatus = serde_json::from_slice(&body).map_err(|e| {
            RemoteError::new(format!("Failed to parse health response: {}", e)).with_body(body)
        })?;
        tracing::debug!(status = %status.status, "Service health");
        Ok(status)
    }

    fn gateway_name(&self) -> &'static str {
        "http"
    }
}
