//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scriptoria binary.

mod commands;
mod document;
mod generate;
mod service;

pub use commands::{Cli, Commands};
pub use document::{edit_document, export_document, show_document};
pub use generate::{GenerateOptions, run_generate};
pub use service::{check_health, extract_file};

use scriptoria::ScriptoriaConfig;
use std::path::Path;

/// Result type for command handlers.
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Load the explicit configuration file, or the layered configuration.
pub fn load_config(path: Option<&Path>) -> CliResult<ScriptoriaConfig> {
    let config = match path {
        Some(path) => ScriptoriaConfig::from_file(path)?,
        None => ScriptoriaConfig::load()?,
    };
    Ok(config)
}
