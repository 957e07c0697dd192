//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`menu`] - menu item CRUD

pub mod health;
pub mod menu;
