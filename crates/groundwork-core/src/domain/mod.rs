//! Core domain layer for Groundwork.
//!
//! This module contains pure finalization logic with ZERO external
//! dependencies. All I/O and process execution is handled via ports (traits)
//! defined in the application layer.
//!
//! ## Boundaries
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Parse, don't validate twice**: free-form strings from the generator
//!   (agent identity, visibility, protocol, license) become closed enums at
//!   exactly one `FromStr` boundary and never circulate raw past it

// Public API - what the world sees
pub mod agent;
pub mod dependencies;
pub mod error;
pub mod license;
pub mod module_name;
pub mod placeholders;
pub mod remote;

// Re-exports for convenience
pub use agent::{AgentChoice, CodingAgent};
pub use error::DomainError;
pub use license::{LicenseRequest, Resolution};
pub use module_name::validate_module_name;
pub use placeholders::PlaceholderSet;
pub use remote::{
    Protocol, RemoteSettings, RemoteTarget, VISIBILITY_OPTIONS, Visibility, rewrite_remote_url,
};
