use super::*;
use crate::model::{BilingualString, Category};

fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            id: "1".to_string(),
            name: BilingualString::new("Hot Coffees", "قهوه‌های گرم"),
            display_order: 0,
            is_special: false,
        },
        Category {
            id: "4".to_string(),
            name: BilingualString::new("Chef's Specials", "ویژه سرآشپز"),
            display_order: 1,
            is_special: true,
        },
    ]
}

#[test]
fn read_returns_none_for_absent_key() {
    let store = Store::in_memory();
    assert!(store.read::<Vec<Category>>(StoreKey::Categories).is_none());
    assert!(!store.exists(StoreKey::Categories));
}

#[test]
fn write_then_read_round_trips_including_persian_text() {
    let store = Store::in_memory();
    let categories = sample_categories();

    store.write(StoreKey::Categories, &categories);
    let back: Vec<Category> = store.read(StoreKey::Categories).expect("stored value");
    assert_eq!(back, categories);
}

#[test]
fn read_returns_none_for_corrupt_value_without_clearing_it() {
    let backend = Arc::new(MemoryBackend::default());
    backend.set("bilingual-menu-categories", "not json at all").expect("set");

    let store = Store::new(backend.clone());
    assert!(store.read::<Vec<Category>>(StoreKey::Categories).is_none());
    // The corrupt bytes are left in place; the store only reports absence.
    assert!(store.exists(StoreKey::Categories));
    assert_eq!(
        backend.get("bilingual-menu-categories").expect("get"),
        Some("not json at all".to_string())
    );
}

#[test]
fn keys_are_namespaced_under_the_shared_prefix() {
    let backend = Arc::new(MemoryBackend::default());
    let store = Store::new(backend.clone());

    store.write(StoreKey::LogoUrl, &"https://example.com/logo.png");
    assert!(backend.get("bilingual-menu-logoUrl").expect("get").is_some());
    assert!(backend.get("logoUrl").expect("get").is_none());
}

#[test]
fn dir_backend_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let categories = sample_categories();

    {
        let store = Store::open_dir(dir.path()).expect("open");
        store.write(StoreKey::Categories, &categories);
    }

    let store = Store::open_dir(dir.path()).expect("reopen");
    let back: Vec<Category> = store.read(StoreKey::Categories).expect("stored value");
    assert_eq!(back, categories);
}

#[test]
fn dir_backend_writes_one_file_per_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Store::open_dir(dir.path()).expect("open");

    store.write(StoreKey::Categories, &sample_categories());
    store.write(StoreKey::Language, &crate::model::Language::Fa);

    assert!(dir.path().join("bilingual-menu-categories.json").is_file());
    assert!(dir.path().join("bilingual-menu-language.json").is_file());
}
