//! Generation command handler.

use super::CliResult;
use super::document::{print_view, write_document};
use super::service::{read_upload, upload_with_progress};
use scriptoria::{Document, ScriptoriaResult, Tab, Workspace};
use std::path::PathBuf;
use tracing::info;

/// Options for a `generate` run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Story idea given inline
    pub idea: Option<String>,
    /// File holding the story idea
    pub idea_file: Option<PathBuf>,
    /// Genre tags in selection order
    pub genres: Vec<String>,
    /// Document to extract the idea from
    pub upload: Option<PathBuf>,
    /// Tab printed afterwards
    pub tab: Tab,
    /// Export the result as a PDF
    pub export: bool,
    /// Where to save the document JSON
    pub save: Option<PathBuf>,
}

/// Fill in the idea, generate, then print, save and export as requested.
pub async fn run_generate(workspace: &Workspace, options: GenerateOptions) -> CliResult<()> {
    if let Some(path) = &options.upload {
        let file = read_upload(path).await?;
        upload_with_progress(workspace, file).await?;
    }
    if let Some(path) = &options.idea_file {
        workspace.set_story_idea(tokio::fs::read_to_string(path).await?);
    }
    if let Some(idea) = options.idea {
        workspace.set_story_idea(idea);
    }
    for genre in &options.genres {
        workspace.add_genre(genre)?;
    }
    eprintln!(
        "Idea {} chars, genre {}",
        workspace.idea_counter(),
        workspace.primary_genre()
    );

    let document = generate_with_ticker(workspace).await?;
    info!(
        title = %document.title(),
        seconds = workspace.elapsed_seconds(),
        "Screenplay ready"
    );

    workspace.set_tab(options.tab);
    print_view(&document, options.tab);

    if let Some(path) = &options.save {
        write_document(path, &document).await?;
        eprintln!("Saved {}", path.display());
    }

    if options.export {
        let artifact = workspace.export().await?;
        if *artifact.recovered() {
            eprintln!("Export reported an error; the returned PDF was kept anyway");
        }
        println!(
            "Exported {} ({} bytes)",
            artifact.path().display(),
            artifact.size()
        );
    }
    Ok(())
}

/// Run the generation job while printing the elapsed seconds on stderr.
async fn generate_with_ticker(workspace: &Workspace) -> ScriptoriaResult<Document> {
    let mut elapsed = workspace.subscribe_elapsed();
    let job = workspace.generate();
    tokio::pin!(job);

    let result = loop {
        tokio::select! {
            result = &mut job => break result,
            changed = elapsed.changed() => {
                if changed.is_err() {
                    break (&mut job).await;
                }
                eprint!("\rGenerating... {}s", *elapsed.borrow_and_update());
            }
        }
    };
    eprintln!();
    result
}
