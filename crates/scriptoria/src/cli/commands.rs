//! CLI command definitions.

use clap::{Parser, Subcommand};
use scriptoria::Tab;
use std::path::PathBuf;

/// Scriptoria - turn a story idea into a screenplay breakdown
#[derive(Parser, Debug)]
#[command(name = "scriptoria")]
#[command(about = "Turn a story idea into a screenplay breakdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file (skips the layered lookup)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the screenplay service is reachable
    Health,

    /// Extract the text of a PDF or Word document
    Extract {
        /// Document to upload
        file: PathBuf,
    },

    /// Generate a screenplay breakdown from a story idea
    Generate {
        /// Story idea
        #[arg(long, conflicts_with = "idea_file")]
        idea: Option<String>,

        /// Read the story idea from a text file
        #[arg(long)]
        idea_file: Option<PathBuf>,

        /// Genre tag (repeatable; the first one is sent)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Extract the story idea from a PDF or Word document first
        #[arg(long)]
        upload: Option<PathBuf>,

        /// Tab to print once generated
        #[arg(long, default_value = "outline")]
        tab: Tab,

        /// Export the result as a PDF
        #[arg(long)]
        export: bool,

        /// Save the document as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print one tab of a saved document
    Show {
        /// Document JSON file
        document: PathBuf,

        /// Tab to print
        #[arg(long, default_value = "outline")]
        tab: Tab,
    },

    /// Apply field edits to a saved document
    Edit {
        /// Document JSON file
        document: PathBuf,

        /// Edit as `path=value`, e.g. `scenes.0.location=INT. BARN`
        #[arg(long = "set", required = true)]
        edits: Vec<String>,

        /// Write the edited document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Export a saved document as a PDF
    Export {
        /// Document JSON file
        document: PathBuf,
    },
}
