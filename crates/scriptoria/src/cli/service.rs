//! Service check and text extraction handlers.

use super::CliResult;
use scriptoria::{HttpGateway, ScriptoriaConfig, ScriptoriaGateway, UploadFile, Workspace};
use std::path::Path;
use tracing::{info, warn};

/// Query the health endpoint and print the reply.
pub async fn check_health(config: &ScriptoriaConfig) -> CliResult<()> {
    let gateway = HttpGateway::new(config.gateway().clone())?;
    let status = gateway.health().await?;

    println!("Service: {}", config.gateway().base_url());
    println!("Status: {}", status.status);
    if !status.message.is_empty() {
        println!("Message: {}", status.message);
    }
    println!("AI configured: {}", status.ai_configured);

    if !status.is_healthy() {
        warn!(status = %status.status, "Service reported unhealthy");
    }
    Ok(())
}

/// Read a file from disk as an upload payload.
pub(crate) async fn read_upload(path: &Path) -> CliResult<UploadFile> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(UploadFile::new(file_name, None, bytes))
}

/// Upload a document, reporting progress on stderr. Returns the extracted text.
pub(crate) async fn upload_with_progress(
    workspace: &Workspace,
    file: UploadFile,
) -> CliResult<String> {
    let mut progress = workspace.subscribe_progress();
    let job = workspace.upload(file);
    tokio::pin!(job);

    let result = loop {
        tokio::select! {
            result = &mut job => break result,
            changed = progress.changed() => {
                if changed.is_err() {
                    break (&mut job).await;
                }
                eprint!("\rUploading... {:>3}%", *progress.borrow_and_update());
            }
        }
    };
    eprintln!();
    Ok(result?)
}

/// Upload a document and print the cleaned text.
pub async fn extract_file(workspace: &Workspace, path: &Path) -> CliResult<()> {
    let file = read_upload(path).await?;
    let text = upload_with_progress(workspace, file).await?;
    info!(chars = text.chars().count(), "Extraction finished");
    println!("{}", text);
    Ok(())
}
