//! HTTP adapter
//!
//! Depends only on core/. Serves the omikuji endpoints through the
//! Axum web framework.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod page;
pub mod router;
pub mod state;

pub use handlers::*;
pub use router::build_router;
pub use state::AppState;
