use contracts::domain::category::Category;
use wasm_bindgen_futures::spawn_local;

use super::api::fetch_categories;
use crate::shared::state::resource_store::ResourceStore;

pub type CategoriesStore = ResourceStore<Category>;

/// Fetch the category list into the store. Same lifecycle contract as the
/// products coordinator: synchronous `begin`, one terminal update, stale
/// completions dropped.
pub fn load_categories(store: CategoriesStore) {
    let token = store.issue();
    store.begin();

    spawn_local(async move {
        let outcome = fetch_categories().await;

        if !store.is_current(token) {
            log::debug!("discarding stale categories response (request #{})", token);
            return;
        }

        match outcome {
            Ok(categories) => store.succeed(categories, None),
            Err(err) => {
                log::error!("categories request failed: {}", err);
                store.fail(err.to_string());
            }
        }
    });
}
