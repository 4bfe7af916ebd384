//! Groundwork Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Groundwork
//! project finalization tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         groundwork-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (FinalizeService, LicenseInstaller,    │
//! │      AgentSetup, RemoteSetup)           │
//! │       Orchestrates the Pipeline         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (ProcessRunner, Filesystem)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    groundwork-adapters (Infrastructure) │
//! │  (SystemProcessRunner, LocalFilesystem) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (AgentChoice, Visibility, Licenses,    │
//! │   Dependencies, Placeholders, Names)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use groundwork_core::{
//!     application::{FinalizeRequest, FinalizeService},
//!     domain::{AgentChoice, LicenseRequest, Protocol, RemoteSettings, RemoteTarget},
//! };
//!
//! // 1. Build the resolved request (values come from the outer generator)
//! let request = FinalizeRequest {
//!     language_version: "3.12".into(),
//!     license: LicenseRequest::Named("MIT".into()),
//!     dependencies: "pytest".into(),
//!     dev_dependencies: String::new(),
//!     agent: AgentChoice::Skip,
//!     package_name: "my_package".into(),
//!     remote: RemoteSettings {
//!         name: "origin".into(),
//!         default_branch: "master".into(),
//!         target: RemoteTarget::Url {
//!             url: "https://github.com/user/my_package.git".into(),
//!             protocol: Protocol::Git,
//!         },
//!     },
//! };
//!
//! // 2. Use the pipeline service (with injected adapters)
//! let service = FinalizeService::new(runner, filesystem);
//! service.run(&request).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FinalizeRequest, FinalizeService,
        ports::{
            CommandResult, ExternalCommand, Filesystem, OutputMode, ProcessRunner,
        },
    };
    pub use crate::domain::{
        AgentChoice, CodingAgent, LicenseRequest, PlaceholderSet, Protocol, RemoteSettings,
        RemoteTarget, Visibility, validate_module_name,
    };
    pub use crate::error::{GroundworkError, GroundworkResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
