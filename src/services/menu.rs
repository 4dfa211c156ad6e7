//! Menu data service — sole authority over categories and menu items.
//!
//! DESIGN
//! ======
//! Collections live in memory behind a single `RwLock`; every mutation is
//! a whole read-modify-write under the write lock followed by a full
//! re-serialization of the affected collection(s) to the store. There is
//! no diffing or batching: after any operation completes, the store is
//! consistent with memory. Acceptable at menu scale.
//!
//! Mutations sleep their configured simulated delay *before* taking the
//! lock, so overlapping delayed calls serialize against fresh state
//! instead of racing on a stale snapshot: two concurrent adds always
//! produce two entries with distinct ids and display orders. Reorders run
//! with zero delay by default so drag-and-drop feels instantaneous.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never surface here (the store absorbs them); the only
//! caller-visible errors are explicit not-found and reorder-membership
//! outcomes, which callers may choose to ignore.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::DelayConfig;
use crate::model::{BilingualString, Category, MenuItem, NewMenuItem, Ordered};
use crate::seed;
use crate::store::{Store, StoreKey};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("category not found: {0}")]
    CategoryNotFound(String),
    #[error("menu item not found: {0}")]
    MenuItemNotFound(String),
    #[error("reorder list does not match the stored collection: expected {expected} members, got {got}")]
    ReorderMismatch { expected: usize, got: usize },
}

/// Collection lifecycle. `load` drives the only transitions:
/// `Uninitialized -> Loading -> Ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
}

struct MenuState {
    categories: Vec<Category>,
    menu_items: Vec<MenuItem>,
    load_state: LoadState,
}

/// Point-in-time view for the consuming UI. Collections come sorted by
/// display order.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuSnapshot {
    pub categories: Vec<Category>,
    pub menu_items: Vec<MenuItem>,
    pub is_loading: bool,
}

/// The menu data service. Cheap to clone; clones share state and store.
#[derive(Clone)]
pub struct MenuService {
    store: Store,
    state: Arc<RwLock<MenuState>>,
    delays: DelayConfig,
}

// =============================================================================
// LOADING
// =============================================================================

impl MenuService {
    #[must_use]
    pub fn new(store: Store, delays: DelayConfig) -> Self {
        let state =
            MenuState { categories: Vec::new(), menu_items: Vec::new(), load_state: LoadState::Uninitialized };
        Self { store, state: Arc::new(RwLock::new(state)), delays }
    }

    /// Load both collections from the store, seeding the built-in dataset
    /// on first run. Corrupt stored data falls back to the seed for this
    /// session without touching the stored bytes. The configured load
    /// delay elapses before the service reports ready.
    pub async fn load(&self) {
        self.state.write().await.load_state = LoadState::Loading;

        let have_both = self.store.exists(StoreKey::Categories) && self.store.exists(StoreKey::MenuItems);
        let (categories, menu_items) = if have_both {
            match (self.store.read(StoreKey::Categories), self.store.read(StoreKey::MenuItems)) {
                (Some(categories), Some(menu_items)) => (categories, menu_items),
                _ => {
                    info!("stored menu data unreadable, serving built-in dataset for this session");
                    (seed::categories(), seed::menu_items())
                }
            }
        } else {
            let categories = seed::categories();
            let menu_items = seed::menu_items();
            self.store.write(StoreKey::Categories, &categories);
            self.store.write(StoreKey::MenuItems, &menu_items);
            info!(
                categories = categories.len(),
                menu_items = menu_items.len(),
                "seeded store with built-in dataset"
            );
            (categories, menu_items)
        };

        {
            let mut state = self.state.write().await;
            state.categories = categories;
            state.menu_items = menu_items;
        }

        sleep(self.delays.load).await;
        self.state.write().await.load_state = LoadState::Ready;
    }

    /// Current collections, sorted by display order, plus the loading flag.
    pub async fn snapshot(&self) -> MenuSnapshot {
        let state = self.state.read().await;
        let mut categories = state.categories.clone();
        categories.sort_by_key(|c| c.display_order);
        let mut menu_items = state.menu_items.clone();
        menu_items.sort_by_key(|i| i.display_order);
        MenuSnapshot { categories, menu_items, is_loading: state.load_state != LoadState::Ready }
    }
}

// =============================================================================
// CATEGORY OPERATIONS
// =============================================================================

impl MenuService {
    /// Append a category. The service assigns the id (timestamp-derived,
    /// bumped until unique) and the next display order.
    pub async fn add_category(&self, name: BilingualString, is_special: bool) -> Category {
        sleep(self.delays.mutate).await;
        let mut state = self.state.write().await;

        let category = Category {
            id: unique_timestamp_id(&state.categories),
            name,
            display_order: next_display_order(&state.categories),
            is_special,
        };
        state.categories.push(category.clone());
        self.store.write(StoreKey::Categories, &state.categories);
        debug!(id = %category.id, order = category.display_order, "category added");
        category
    }

    /// Replace the category with the matching id.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if no category has that id.
    pub async fn update_category(&self, category: Category) -> Result<Category, MenuError> {
        sleep(self.delays.mutate).await;
        let mut state = self.state.write().await;

        let slot = state
            .categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| MenuError::CategoryNotFound(category.id.clone()))?;
        *slot = category.clone();
        self.store.write(StoreKey::Categories, &state.categories);
        debug!(id = %category.id, "category updated");
        Ok(category)
    }

    /// Delete a category and cascade-delete every item referencing it.
    /// Both collections persist in the same logical operation.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if no category has that id.
    pub async fn delete_category(&self, id: &str) -> Result<(), MenuError> {
        sleep(self.delays.mutate).await;
        let mut state = self.state.write().await;

        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Err(MenuError::CategoryNotFound(id.to_string()));
        }

        let items_before = state.menu_items.len();
        state.menu_items.retain(|item| item.category_id != id);
        let removed_items = items_before - state.menu_items.len();

        self.store.write(StoreKey::Categories, &state.categories);
        self.store.write(StoreKey::MenuItems, &state.menu_items);
        debug!(%id, removed_items, "category deleted with cascade");
        Ok(())
    }

    /// Replace the category collection with `ordered`, renormalizing
    /// display order to `0..N-1` in list position.
    ///
    /// # Errors
    ///
    /// Returns `ReorderMismatch` unless `ordered` is exactly the current
    /// member set; partial lists are rejected rather than silently
    /// dropping the missing members.
    pub async fn reorder_categories(&self, ordered: Vec<Category>) -> Result<Vec<Category>, MenuError> {
        sleep(self.delays.reorder).await;
        let mut state = self.state.write().await;

        check_membership(&state.categories, &ordered)?;
        let mut ordered = ordered;
        renormalize(&mut ordered);
        state.categories = ordered.clone();
        self.store.write(StoreKey::Categories, &state.categories);
        debug!(count = ordered.len(), "categories reordered");
        Ok(ordered)
    }
}

// =============================================================================
// MENU ITEM OPERATIONS
// =============================================================================

impl MenuService {
    /// Append a menu item; id and display order assigned by the service.
    /// Display order counts over the entire item collection, not per
    /// category.
    pub async fn add_menu_item(&self, new_item: NewMenuItem) -> MenuItem {
        sleep(self.delays.mutate).await;
        let mut state = self.state.write().await;

        let item = MenuItem {
            id: unique_timestamp_id(&state.menu_items),
            name: new_item.name,
            description: new_item.description,
            price: new_item.price,
            image_url: new_item.image_url,
            category_id: new_item.category_id,
            display_order: next_display_order(&state.menu_items),
        };
        state.menu_items.push(item.clone());
        self.store.write(StoreKey::MenuItems, &state.menu_items);
        debug!(id = %item.id, order = item.display_order, "menu item added");
        item
    }

    /// Replace the menu item with the matching id.
    ///
    /// # Errors
    ///
    /// Returns `MenuItemNotFound` if no item has that id.
    pub async fn update_menu_item(&self, item: MenuItem) -> Result<MenuItem, MenuError> {
        sleep(self.delays.mutate).await;
        let mut state = self.state.write().await;

        let slot = state
            .menu_items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| MenuError::MenuItemNotFound(item.id.clone()))?;
        *slot = item.clone();
        self.store.write(StoreKey::MenuItems, &state.menu_items);
        debug!(id = %item.id, "menu item updated");
        Ok(item)
    }

    /// Delete a single menu item.
    ///
    /// # Errors
    ///
    /// Returns `MenuItemNotFound` if no item has that id.
    pub async fn delete_menu_item(&self, id: &str) -> Result<(), MenuError> {
        sleep(self.delays.mutate).await;
        let mut state = self.state.write().await;

        let before = state.menu_items.len();
        state.menu_items.retain(|item| item.id != id);
        if state.menu_items.len() == before {
            return Err(MenuError::MenuItemNotFound(id.to_string()));
        }
        self.store.write(StoreKey::MenuItems, &state.menu_items);
        debug!(%id, "menu item deleted");
        Ok(())
    }

    /// Replace the item collection with `ordered`, renormalizing display
    /// order over the whole collection regardless of any category filter
    /// the view applied.
    ///
    /// # Errors
    ///
    /// Returns `ReorderMismatch` unless `ordered` is exactly the current
    /// member set.
    pub async fn reorder_menu_items(&self, ordered: Vec<MenuItem>) -> Result<Vec<MenuItem>, MenuError> {
        sleep(self.delays.reorder).await;
        let mut state = self.state.write().await;

        check_membership(&state.menu_items, &ordered)?;
        let mut ordered = ordered;
        renormalize(&mut ordered);
        state.menu_items = ordered.clone();
        self.store.write(StoreKey::MenuItems, &state.menu_items);
        debug!(count = ordered.len(), "menu items reordered");
        Ok(ordered)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_millis())
}

/// Timestamp-derived string id, bumped until unique within `existing`.
/// Two adds in the same millisecond still get distinct ids.
fn unique_timestamp_id<T: Ordered>(existing: &[T]) -> String {
    let mut candidate = now_ms();
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|entity| entity.id() == id) {
            return id;
        }
        candidate += 1;
    }
}

/// Max display order plus one, or 0 for an empty collection.
fn next_display_order<T: Ordered>(existing: &[T]) -> u32 {
    existing.iter().map(Ordered::display_order).max().map_or(0, |max| max + 1)
}

/// A proposed reorder must carry exactly the stored member set.
fn check_membership<T: Ordered>(current: &[T], proposed: &[T]) -> Result<(), MenuError> {
    let proposed_ids: HashSet<&str> = proposed.iter().map(Ordered::id).collect();
    if proposed_ids.len() != proposed.len()
        || proposed.len() != current.len()
        || current.iter().any(|entity| !proposed_ids.contains(entity.id()))
    {
        return Err(MenuError::ReorderMismatch { expected: current.len(), got: proposed.len() });
    }
    Ok(())
}

/// Reassign display order to list position.
fn renormalize<T: Ordered>(entities: &mut [T]) {
    for (index, entity) in entities.iter_mut().enumerate() {
        entity.set_display_order(u32::try_from(index).unwrap_or(u32::MAX));
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Service over a fresh in-memory store with all delays disabled.
    #[must_use]
    pub fn test_service() -> MenuService {
        MenuService::new(Store::in_memory(), DelayConfig::zero())
    }

    /// Zero-delay service already loaded with the seed dataset.
    pub async fn seeded_service() -> MenuService {
        let service = test_service();
        service.load().await;
        service
    }
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
