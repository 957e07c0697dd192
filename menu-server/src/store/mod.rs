//! Store layer - in-memory menu collection and its models

pub mod menu;
pub mod models;

pub use menu::MenuStore;
pub use models::{Category, MenuItem, MenuItemCreate, MenuItemPatch, MenuItemUpdate, NewMenuItem};
