//! Application layer for Groundwork.
//!
//! This layer contains:
//! - **Services**: the pipeline orchestrator and its sub-components
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: pipeline-specific error types
//!
//! The application layer sequences the pipeline but performs no validation
//! itself. All validation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod request;
pub mod services;

// Re-export main services
pub use services::{AgentSetup, FinalizeService, LicenseInstaller, RemoteSetup, ensure_installed};

// Re-export port types (for adapter implementation)
pub use ports::{CommandResult, ExternalCommand, Filesystem, OutputMode, ProcessRunner};

pub use error::PipelineError;
pub use request::FinalizeRequest;
