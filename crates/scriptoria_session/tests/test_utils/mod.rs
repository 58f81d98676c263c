//! Test utilities for Scriptoria session tests.
//!
//! This module provides a scripted gateway and sample documents.

pub mod mock_gateway;

#[allow(unused_imports)]
pub use mock_gateway::{
    Call, ExportBehavior, ExtractBehavior, GenerateBehavior, MockGateway, RecordingListener,
    sample_document,
};
