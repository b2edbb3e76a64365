//! Mixtape Server Library
//!
//! HTTP front end for Mixtape playlists: routing, request extraction,
//! response modes and rendering.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod response;
pub mod router;
pub mod state;
pub mod views;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use response::ActionResponse;
pub use router::create_router;
pub use state::AppState;
