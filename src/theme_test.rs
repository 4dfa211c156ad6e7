use super::*;

#[test]
fn known_keys_resolve_to_their_theme() {
    assert_eq!(ThemeName::from_key("halloween"), ThemeName::Halloween);
    assert_eq!(ThemeName::from_key("nowruz"), ThemeName::Nowruz);
    assert_eq!(ThemeName::from_key("yalda"), ThemeName::Yalda);
    assert_eq!(ThemeName::from_key("default"), ThemeName::Default);
}

#[test]
fn unknown_keys_fall_back_to_the_default_theme() {
    assert_eq!(ThemeName::from_key("christmas"), ThemeName::Default);
    assert_eq!(ThemeName::from_key(""), ThemeName::Default);
}

#[test]
fn serialized_form_is_the_lowercase_key() {
    for name in ThemeName::ALL {
        let json = serde_json::to_string(&name).expect("serialize");
        assert_eq!(json, format!("\"{}\"", name.key()));
    }
}

#[test]
fn unknown_serialized_theme_is_rejected_at_the_deserialization_boundary() {
    // The preference store maps a failed read to the default.
    assert!(serde_json::from_str::<ThemeName>("\"christmas\"").is_err());
}

#[test]
fn every_theme_has_a_bilingual_name_and_full_palette() {
    for name in ThemeName::ALL {
        let theme = name.theme();
        assert!(!theme.name.en.is_empty());
        assert!(!theme.name.fa.is_empty());
        assert!(!theme.styles.bg.is_empty());
        assert!(!theme.styles.tab_inactive.is_empty());
    }
}
