//! Remote operation gateway for Scriptoria.
//!
//! The session core never talks to the network directly; it calls a
//! [`ScriptoriaGateway`]. This crate defines that trait, the request and
//! response shapes exchanged with the service, and the [`UploadProgress`]
//! sink extraction reports byte progress through.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod progress;
mod traits;
mod types;
mod wire;

pub use progress::UploadProgress;
pub use traits::ScriptoriaGateway;
pub use types::{
    ExtractResponse, Extraction, GenerateRequest, GenerateRequestBuilder, HealthStatus,
};
pub use wire::{error_detail, parse_generate_body};
