//! Scriptoria CLI binary.
//!
//! This binary provides command-line access to Scriptoria's functionality:
//! - Generate a screenplay breakdown from a story idea or an uploaded document
//! - Inspect and edit saved breakdowns tab by tab
//! - Export breakdowns as PDF

use clap::Parser;
use scriptoria::{ObservabilityConfig, init_observability_with_config, open_workspace};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, GenerateOptions, check_health, edit_document, export_document,
        extract_file, load_config, run_generate, show_document,
    };

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability_with_config(
        ObservabilityConfig::new("scriptoria")
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    let config = load_config(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Health => {
            check_health(&config).await?;
        }

        Commands::Extract { file } => {
            let workspace = open_workspace(&config)?;
            extract_file(&workspace, &file).await?;
        }

        Commands::Generate {
            idea,
            idea_file,
            genres,
            upload,
            tab,
            export,
            save,
        } => {
            let workspace = open_workspace(&config)?;
            let options = GenerateOptions {
                idea,
                idea_file,
                genres,
                upload,
                tab,
                export,
                save,
            };
            run_generate(&workspace, options).await?;
        }

        Commands::Show { document, tab } => {
            show_document(&document, tab).await?;
        }

        Commands::Edit {
            document,
            edits,
            out,
        } => {
            let workspace = open_workspace(&config)?;
            edit_document(&workspace, &document, &edits, out.as_deref()).await?;
        }

        Commands::Export { document } => {
            let workspace = open_workspace(&config)?;
            export_document(&workspace, &document).await?;
        }
    }

    Ok(())
}
