//! Theme table: a closed set of visual themes with a guaranteed default.
//!
//! The set is a closed enum rather than a string-keyed map, and unknown
//! keys fall back to [`ThemeName::Default`], so a stale or hand-edited
//! store can never select a nonexistent theme.

use serde::{Deserialize, Serialize};

use crate::model::BilingualString;

/// Identifier for one of the four shipped themes. The serialized form is
/// the lowercase key stored under the `theme` preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Halloween,
    Nowruz,
    Yalda,
}

impl ThemeName {
    pub const ALL: [Self; 4] = [Self::Default, Self::Halloween, Self::Nowruz, Self::Yalda];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Halloween => "halloween",
            Self::Nowruz => "nowruz",
            Self::Yalda => "yalda",
        }
    }

    /// Resolve a stored key, falling back to the default theme on unknown
    /// input rather than failing.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL.into_iter().find(|name| name.key() == key).unwrap_or_default()
    }

    /// The display name and style palette for this theme.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Default => Theme {
                name: BilingualString::new("Default", "پیش‌فرض"),
                styles: ThemeStyles {
                    bg: "bg-stone-100",
                    header_bg: "bg-white",
                    card_bg: "bg-white",
                    text_color: "text-stone-800",
                    subtle_text_color: "text-stone-600",
                    accent_color: "text-amber-800",
                    primary_button_bg: "bg-amber-700",
                    primary_button_hover_bg: "hover:bg-amber-800",
                    tab_active: "border-amber-600 text-amber-700",
                    tab_inactive: "border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300",
                },
            },
            Self::Halloween => Theme {
                name: BilingualString::new("Halloween", "هالووین"),
                styles: ThemeStyles {
                    bg: "bg-gray-900",
                    header_bg: "bg-gray-800 shadow-orange-500/20",
                    card_bg: "bg-gray-800",
                    text_color: "text-orange-100",
                    subtle_text_color: "text-orange-200/70",
                    accent_color: "text-orange-400",
                    primary_button_bg: "bg-orange-600",
                    primary_button_hover_bg: "hover:bg-orange-700",
                    tab_active: "border-orange-500 text-orange-400",
                    tab_inactive: "border-transparent text-gray-400 hover:text-orange-400 hover:border-gray-600",
                },
            },
            Self::Nowruz => Theme {
                name: BilingualString::new("Nowruz", "نوروز"),
                styles: ThemeStyles {
                    bg: "bg-green-50",
                    header_bg: "bg-white",
                    card_bg: "bg-white",
                    text_color: "text-green-900",
                    subtle_text_color: "text-green-700",
                    accent_color: "text-red-600",
                    primary_button_bg: "bg-green-600",
                    primary_button_hover_bg: "hover:bg-green-700",
                    tab_active: "border-green-600 text-green-700",
                    tab_inactive: "border-transparent text-gray-500 hover:text-green-700 hover:border-gray-300",
                },
            },
            Self::Yalda => Theme {
                name: BilingualString::new("Yalda", "یلدا"),
                styles: ThemeStyles {
                    bg: "bg-red-950",
                    header_bg: "bg-red-900 shadow-yellow-400/20",
                    card_bg: "bg-red-900",
                    text_color: "text-yellow-100",
                    subtle_text_color: "text-yellow-200/70",
                    accent_color: "text-yellow-400",
                    primary_button_bg: "bg-yellow-600 text-red-950",
                    primary_button_hover_bg: "hover:bg-yellow-500",
                    tab_active: "border-yellow-500 text-yellow-400",
                    tab_inactive: "border-transparent text-gray-300 hover:text-yellow-400 hover:border-gray-500",
                },
            },
        }
    }
}

/// A theme: bilingual display name plus style palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: BilingualString,
    pub styles: ThemeStyles,
}

/// Style class strings consumed by the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeStyles {
    pub bg: &'static str,
    pub header_bg: &'static str,
    pub card_bg: &'static str,
    pub text_color: &'static str,
    pub subtle_text_color: &'static str,
    pub accent_color: &'static str,
    pub primary_button_bg: &'static str,
    pub primary_button_hover_bg: &'static str,
    pub tab_active: &'static str,
    pub tab_inactive: &'static str,
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
