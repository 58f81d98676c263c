//! Configuration for the gateway, the session and exports.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from scriptoria.toml)
//! - `~/.config/scriptoria/scriptoria.toml`
//! - `./scriptoria.toml`
//! - `SCRIPTORIA__<SECTION>__<KEY>` environment variables

use config::{Config, Environment, File, FileFormat};
use scriptoria_core::IdeaBounds;
use scriptoria_error::{ConfigError, ScriptoriaError, ScriptoriaResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Where and how to reach the generation service.
///
/// ```toml
/// [gateway]
/// base_url = "http://localhost:5000"
/// timeout_secs = 180
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
#[serde(default)]
pub struct GatewayConfig {
    /// Service root, without trailing slash
    base_url: String,
    /// Whole-request timeout in seconds
    timeout_secs: u64,
    /// Size of upload body chunks; progress is reported per chunk
    upload_chunk_bytes: usize,
    /// Text extraction endpoint
    extract_path: String,
    /// Breakdown generation endpoint
    generate_path: String,
    /// PDF export endpoint
    export_path: String,
    /// Health endpoint
    health_path: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 180,
            upload_chunk_bytes: 64 * 1024,
            extract_path: "/extract-text".to_string(),
            generate_path: "/generate".to_string(),
            export_path: "/export-pdf".to_string(),
            health_path: "/health".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Defaults pointed at another service root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL for an endpoint path.
    ///
    /// ```
    /// use scriptoria_client::GatewayConfig;
    ///
    /// let config = GatewayConfig::with_base_url("http://api.local/");
    /// assert_eq!(config.url(config.generate_path()), "http://api.local/generate");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Session behaviour knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
#[serde(default)]
pub struct SessionConfig {
    /// Shortest accepted story idea, in characters
    min_idea_chars: usize,
    /// Longest accepted story idea, in characters
    max_idea_chars: usize,
    /// Genre used when no tag is selected
    default_genre: String,
    /// Runtime ticker period in milliseconds
    tick_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_idea_chars: 20,
            max_idea_chars: 500,
            default_genre: "Drama".to_string(),
            tick_interval_ms: 1000,
        }
    }
}

impl SessionConfig {
    /// Story idea length bounds.
    pub fn idea_bounds(&self) -> IdeaBounds {
        IdeaBounds::new(self.min_idea_chars, self.max_idea_chars)
    }

    /// Runtime ticker period.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

/// Where exported artifacts land.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
#[serde(default)]
pub struct ExportConfig {
    /// Output directory for PDF artifacts
    output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    /// Export into a specific directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

/// Top-level Scriptoria configuration.
///
/// # Example
///
/// ```no_run
/// use scriptoria_client::ScriptoriaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScriptoriaConfig::load()?;
/// println!("Generating against {}", config.gateway().base_url());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters,
)]
#[serde(default)]
pub struct ScriptoriaConfig {
    /// Remote service settings
    gateway: GatewayConfig,
    /// Session settings
    session: SessionConfig,
    /// Export settings
    export: ExportConfig,
}

impl ScriptoriaConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ScriptoriaResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ScriptoriaError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScriptoriaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: env > current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> ScriptoriaResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../scriptoria.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scriptoria/scriptoria.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("scriptoria").required(false))
            .add_source(
                Environment::with_prefix("SCRIPTORIA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder
            .build()
            .map_err(|e| {
                ScriptoriaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScriptoriaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
