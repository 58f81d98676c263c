//! Handlers for saved documents: show, edit and export.

use super::CliResult;
use scriptoria::{Document, JsonError, StoredStory, Tab, Workspace, render_view, select_view};
use std::path::Path;
use tracing::{debug, info};

/// Read a document JSON file. Full generation responses are accepted too.
pub(crate) async fn read_document(path: &Path) -> CliResult<Document> {
    let raw = tokio::fs::read_to_string(path).await?;
    let document = serde_json::from_str(&raw).map_err(|e| {
        JsonError::new(format!("Failed to parse {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "Document loaded");
    Ok(document)
}

/// Write a document as pretty JSON.
pub(crate) async fn write_document(path: &Path, document: &Document) -> CliResult<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| JsonError::new(e.to_string()))?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

pub(crate) fn print_view(document: &Document, tab: Tab) {
    println!("{}", render_view(&select_view(document, tab)));
}

/// Split `path=value` at the first `=`.
fn parse_edit(edit: &str) -> CliResult<(&str, &str)> {
    edit.split_once('=')
        .ok_or_else(|| format!("Expected path=value, got '{}'", edit).into())
}

/// Print one tab of a saved document.
pub async fn show_document(path: &Path, tab: Tab) -> CliResult<()> {
    let document = read_document(path).await?;
    print_view(&document, tab);
    Ok(())
}

/// Apply every edit inside one transaction and commit it.
///
/// Any failing edit aborts the run before commit, leaving the file untouched.
pub async fn edit_document(
    workspace: &Workspace,
    path: &Path,
    edits: &[String],
    out: Option<&Path>,
) -> CliResult<()> {
    let document = read_document(path).await?;
    workspace.load_story(StoredStory::new("", "", document))?;

    workspace.begin_edit()?;
    for edit in edits {
        let (field, value) = parse_edit(edit)?;
        let previous = workspace.set_field_at(field, value)?;
        info!(field, %previous, value, "Field updated");
    }
    let committed = workspace.commit_edit()?;

    match out {
        Some(out) => {
            write_document(out, &committed).await?;
            eprintln!("Wrote {}", out.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&committed)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Export a saved document as a PDF.
pub async fn export_document(workspace: &Workspace, path: &Path) -> CliResult<()> {
    let document = read_document(path).await?;
    workspace.load_story(StoredStory::new("", "", document))?;

    let artifact = workspace.export().await?;
    if *artifact.recovered() {
        eprintln!("Export reported an error; the returned PDF was kept anyway");
    }
    println!(
        "Exported {} ({} bytes)",
        artifact.path().display(),
        artifact.size()
    );
    Ok(())
}
