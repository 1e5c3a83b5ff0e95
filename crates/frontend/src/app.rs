use crate::domain::categories::store::CategoriesStore;
use crate::domain::products::store::ProductsStore;
use crate::domain::products::ui::list::CatalogList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide both resource stores to the whole app via context.
    // Mutation goes through the store operations only; views read snapshots.
    provide_context(ProductsStore::new());
    provide_context(CategoriesStore::new());

    view! {
        <CatalogList />
    }
}
