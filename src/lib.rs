//! Encodeforge - adapters between a job orchestrator and remote
//! transcoding services.
//!
//! This library crate exposes the providers for the CLI and for
//! integration testing.

pub mod config;
pub mod transcode;
