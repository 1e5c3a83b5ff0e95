use contracts::domain::product::Product;
use wasm_bindgen_futures::spawn_local;

use super::api::fetch_products;
use crate::shared::state::resource_store::ResourceStore;

pub type ProductsStore = ResourceStore<Product>;

/// Issue exactly one products request for the given filter intent and land
/// exactly one terminal store update.
///
/// The loading flag is set synchronously, before the request leaves. Each
/// request carries a sequence token; a completion that is no longer the
/// latest issued request is discarded, so overlapping fetches resolve in
/// issuance order, not completion order.
pub fn load_products(
    store: ProductsStore,
    category: Option<String>,
    search: Option<String>,
    skip: usize,
    limit: usize,
) {
    let token = store.issue();
    store.begin();

    spawn_local(async move {
        let outcome =
            fetch_products(category.as_deref(), search.as_deref(), skip, limit).await;

        if !store.is_current(token) {
            log::debug!("discarding stale products response (request #{})", token);
            return;
        }

        match outcome {
            Ok(page) => {
                store.succeed(page.products, Some(page.total.max(0) as usize));
            }
            Err(err) => {
                log::error!("products request failed: {}", err);
                store.fail(err.to_string());
            }
        }
    });
}
