//! Core module - server configuration, state and errors
//!
//! # Structure
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared state injected into handlers
//! - [`Server`] - HTTP server
//! - [`ServerError`] - process-level errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::{Server, app, build_app};
pub use state::ServerState;
