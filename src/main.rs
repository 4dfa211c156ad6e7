//! Composition root: builds the store and services explicitly, loads the
//! menu, and renders it to stdout in the active language. Stands in for
//! the graphical view layer when smoke-testing a data directory.

use menuboard::config::{self, DelayConfig};
use menuboard::format::format_price;
use menuboard::services::menu::MenuService;
use menuboard::services::prefs::Prefs;
use menuboard::store::Store;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let data_dir = config::data_dir();
    let store = match Store::open_dir(&data_dir) {
        Ok(store) => {
            tracing::info!(path = %data_dir.display(), "using file-backed store");
            store
        }
        Err(e) => {
            tracing::warn!(path = %data_dir.display(), error = %e, "data directory unavailable, using in-memory store for this session");
            Store::in_memory()
        }
    };

    let prefs = Prefs::load(store.clone());
    let service = MenuService::new(store, DelayConfig::from_env());
    service.load().await;

    let language = prefs.language().await;
    let snapshot = service.snapshot().await;

    println!("{}", prefs.cafe_name().await.get(language));
    for category in &snapshot.categories {
        let marker = if category.is_special { " *" } else { "" };
        println!("\n{}{marker}", category.name.get(language));
        for item in snapshot.menu_items.iter().filter(|item| item.category_id == category.id) {
            println!("  {:<30} {}", item.name.get(language), format_price(item.price, language));
        }
    }
}
