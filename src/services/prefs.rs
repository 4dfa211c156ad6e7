//! Preference store — UI-level settings persisted per key.
//!
//! Each preference lives under its own store key and is written on every
//! set. Reads at construction fall back to the
//! shipped defaults when a key is absent or unreadable; an unknown stored
//! theme or display style fails deserialization and therefore also lands
//! on its default.

use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{BilingualString, CategoryDisplayStyle, Language};
use crate::store::{Store, StoreKey};
use crate::theme::ThemeName;

fn default_cafe_name() -> BilingualString {
    BilingualString::new("Digital Cafe", "کافه دیجیتال")
}

struct PrefsState {
    language: Language,
    theme: ThemeName,
    cafe_name: BilingualString,
    logo_url: String,
    category_display_style: CategoryDisplayStyle,
}

/// Cached preferences backed by the persistent store.
pub struct Prefs {
    store: Store,
    state: RwLock<PrefsState>,
}

impl Prefs {
    /// Read every preference from the store, defaulting the absent ones.
    #[must_use]
    pub fn load(store: Store) -> Self {
        let state = PrefsState {
            language: store.read(StoreKey::Language).unwrap_or_default(),
            theme: store.read(StoreKey::Theme).unwrap_or_default(),
            cafe_name: store.read(StoreKey::CafeName).unwrap_or_else(default_cafe_name),
            logo_url: store.read(StoreKey::LogoUrl).unwrap_or_default(),
            category_display_style: store.read(StoreKey::CategoryDisplayStyle).unwrap_or_default(),
        };
        Self { store, state: RwLock::new(state) }
    }

    pub async fn language(&self) -> Language {
        self.state.read().await.language
    }

    pub async fn set_language(&self, language: Language) {
        self.state.write().await.language = language;
        self.store.write(StoreKey::Language, &language);
        debug!(?language, "language preference updated");
    }

    pub async fn theme(&self) -> ThemeName {
        self.state.read().await.theme
    }

    pub async fn set_theme(&self, theme: ThemeName) {
        self.state.write().await.theme = theme;
        self.store.write(StoreKey::Theme, &theme);
        debug!(theme = theme.key(), "theme preference updated");
    }

    pub async fn cafe_name(&self) -> BilingualString {
        self.state.read().await.cafe_name.clone()
    }

    pub async fn set_cafe_name(&self, cafe_name: BilingualString) {
        self.store.write(StoreKey::CafeName, &cafe_name);
        self.state.write().await.cafe_name = cafe_name;
    }

    pub async fn logo_url(&self) -> String {
        self.state.read().await.logo_url.clone()
    }

    pub async fn set_logo_url(&self, logo_url: String) {
        self.store.write(StoreKey::LogoUrl, &logo_url);
        self.state.write().await.logo_url = logo_url;
    }

    pub async fn category_display_style(&self) -> CategoryDisplayStyle {
        self.state.read().await.category_display_style
    }

    pub async fn set_category_display_style(&self, style: CategoryDisplayStyle) {
        self.state.write().await.category_display_style = style;
        self.store.write(StoreKey::CategoryDisplayStyle, &style);
    }
}

#[cfg(test)]
#[path = "prefs_test.rs"]
mod tests;
