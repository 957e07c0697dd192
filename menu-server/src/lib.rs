//! Menu Server - restaurant menu HTTP CRUD service
//!
//! # Architecture overview
//!
//! A single-binary axum service exposing menu item CRUD over
//! `/api/menu`, backed by an in-memory store:
//!
//! - **Store** (`store`): the menu collection and its models
//! - **HTTP API** (`api`): routers and handlers
//! - **Middleware** (`middleware`): request/body logging
//! - **Core** (`core`): config, shared state, server lifecycle
//!
//! # Module structure
//!
//! ```text
//! menu-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! ├── store/         # in-memory menu store + models
//! └── utils/         # errors, validation, logging setup
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod store;
pub mod utils;

// Re-export public types
pub use self::core::{Config, Server, ServerState, app, build_app};
pub use store::{Category, MenuItem, MenuItemCreate, MenuItemUpdate, MenuStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   __  ___
  /  |/  /__ ___  __ __
 / /|_/ / -_) _ \/ // /
/_/  /_/\__/_//_/\_,_/
      server
    "#
    );
}
