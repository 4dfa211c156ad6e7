//! Bilingual menu board data core.
//!
//! DESIGN
//! ======
//! A cafe menu (categories + items, English/Persian text) persisted as
//! JSON key-value entries, fronted by an in-memory data service with
//! simulated latency. There is no network surface: the store is local,
//! the service is the sole authority over the collections, and a view
//! layer (out of scope here) renders snapshots and awaits mutations.
//!
//! The composition root constructs the store and services explicitly and
//! injects them; nothing in this crate reaches for ambient global state.

pub mod config;
pub mod format;
pub mod model;
pub mod reorder;
pub mod seed;
pub mod services;
pub mod store;
pub mod theme;
