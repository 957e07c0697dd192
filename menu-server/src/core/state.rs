//! Shared server state
//!
//! [`ServerState`] holds the configuration and the menu store behind an
//! `Arc`, so cloning it into every handler is cheap. Handlers receive it
//! through axum's `State` extractor instead of reaching for globals.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::Config;
use crate::store::MenuStore;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    /// The menu collection; one lock acquisition per store operation
    pub menu: Arc<RwLock<MenuStore>>,
}

impl ServerState {
    pub fn new(config: Config, store: MenuStore) -> Self {
        Self {
            config,
            menu: Arc::new(RwLock::new(store)),
        }
    }

    /// Build the state a fresh server starts with: the seeded house menu
    pub fn initialize(config: &Config) -> Self {
        Self::new(config.clone(), MenuStore::seeded())
    }

    /// Number of items currently in the store
    pub async fn menu_len(&self) -> usize {
        self.menu.read().await.len()
    }
}
