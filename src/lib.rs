//! omikuji - a small HTTP service for greetings, fortunes and presents
//!
//! Serves a greeting, a static test page, an item echo, an omikuji
//! draw, a present acknowledgment and a personality diagnosis over
//! JSON/HTML.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, variant, fortune
//!
//! - **http**: REST adapter (depends on core)
//!   - handlers, extractors, middleware, router
//!
//! - **cli**: Server binary flags (depends on core)
//!
//! Two flavours of the service exist, selected by [`Variant`]. They
//! differ in the greeting and in whether `/present` needs a sender.

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line flags
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, ServiceError};
pub use crate::core::types::*;
pub use crate::core::variant::Variant;
pub use crate::http::{build_router, AppState};
