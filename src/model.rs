//! Core data model: bilingual text, categories, and menu items.
//!
//! Serde renames keep the persisted JSON in the camelCase shape earlier
//! builds wrote (`displayOrder`, `imageUrl`, `categoryId`), so an existing
//! data directory round-trips unchanged.

use serde::{Deserialize, Serialize};

// =============================================================================
// LANGUAGE
// =============================================================================

/// The two supported display locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fa,
}

impl Language {
    /// Persian renders right-to-left.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Fa)
    }
}

/// A text value always carrying both English and Persian renderings.
/// No fallback between the two: callers supply both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualString {
    pub en: String,
    pub fa: String,
}

impl BilingualString {
    #[must_use]
    pub fn new(en: &str, fa: &str) -> Self {
        Self { en: en.to_string(), fa: fa.to_string() }
    }

    /// The rendering for the given language.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Fa => &self.fa,
        }
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A named grouping of menu items with its own display position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Stable unique identifier, assigned at creation, immutable.
    pub id: String,
    pub name: BilingualString,
    /// Sort position among categories; renormalized to `0..N-1` on reorder.
    pub display_order: u32,
    /// Marks "chef's special" styling. Omitted from JSON when false, the
    /// way earlier builds left the field out entirely.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_special: bool,
}

/// A single purchasable entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: BilingualString,
    pub description: BilingualString,
    /// Non-negative, currency-agnostic; formatted per language at display
    /// time (see [`crate::format`]).
    pub price: f64,
    /// External image reference, not owned by this system.
    pub image_url: String,
    /// Foreign key into [`Category::id`]. Enforced only by cascade delete.
    pub category_id: String,
    /// Sort position over the entire item collection, not per category.
    pub display_order: u32,
}

/// Fields the caller supplies when creating a menu item. The service
/// assigns `id` and `display_order`, never the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMenuItem {
    pub name: BilingualString,
    pub description: BilingualString,
    pub price: f64,
    pub image_url: String,
    pub category_id: String,
}

/// How the customer view lists categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryDisplayStyle {
    Tabs,
    #[default]
    Thumbnails,
}

// =============================================================================
// ORDERING
// =============================================================================

/// Common surface over both ordered collections, so the reorder helpers
/// have a single code path for categories and menu items.
pub trait Ordered {
    fn id(&self) -> &str;
    fn display_order(&self) -> u32;
    fn set_display_order(&mut self, order: u32);
}

impl Ordered for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_order(&self) -> u32 {
        self.display_order
    }

    fn set_display_order(&mut self, order: u32) {
        self.display_order = order;
    }
}

impl Ordered for MenuItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_order(&self) -> u32 {
        self.display_order
    }

    fn set_display_order(&mut self, order: u32) {
        self.display_order = order;
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
