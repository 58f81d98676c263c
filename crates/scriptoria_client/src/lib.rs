//! HTTP implementation of the Scriptoria gateway, plus layered configuration.
//!
//! [`HttpGateway`] talks to the generation service over JSON and multipart
//! requests. [`ScriptoriaConfig`] collects the gateway, session and export
//! settings from bundled defaults, user files and the environment.
//!
//! # Example
//!
//! ```no_run
//! use scriptoria_client::{HttpGateway, ScriptoriaConfig};
//! use scriptoria_interface::ScriptoriaGateway;
//!
//! # async fn run() -> scriptoria_error::ScriptoriaResult<()> {
//! let config = ScriptoriaConfig::load()?;
//! let gateway = HttpGateway::new(config.gateway().clone())?;
//! let health = gateway.health().await?;
//! println!("{}: {}", health.status, health.message);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod http;

pub use config::{ExportConfig, GatewayConfig, ScriptoriaConfig, SessionConfig};
pub use http::HttpGateway;
