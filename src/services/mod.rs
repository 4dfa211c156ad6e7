//! Domain services layered over the persistent store.
//!
//! Service objects own business logic and persistence so the consuming
//! view layer stays focused on rendering and input handling.

pub mod auth;
pub mod menu;
pub mod prefs;
