//! Core domain logic (protocol-agnostic)
//!
//! This module contains everything that is independent of the HTTP
//! transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Request and response payloads
//! - **variant**: The two service flavours
//! - **fortune**: Omikuji, diagnosis and present text

pub mod config;
pub mod error;
pub mod fortune;
pub mod types;
pub mod variant;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, ServiceError};
pub use variant::Variant;
