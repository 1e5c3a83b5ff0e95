pub mod state;

use contracts::domain::product::Product;
use contracts::shared::resource::FetchStatus;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::domain::categories::store::{load_categories, CategoriesStore};
use crate::domain::products::store::{load_products, ProductsStore};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::skeleton_card::SkeletonCard;
use crate::shared::components::ui::{Badge, Button, Input, Select};
use crate::shared::components::CardAnimated;
use crate::shared::url_query::CatalogQuery;
use self::state::{create_state, CatalogFilter};

/// Сколько карточек-заглушек показываем во время загрузки.
const SKELETON_CARDS: usize = 6;

#[component]
#[allow(non_snake_case)]
pub fn CatalogList() -> impl IntoView {
    let products =
        use_context::<ProductsStore>().expect("ProductsStore context not found");
    let categories =
        use_context::<CategoriesStore>().expect("CategoriesStore context not found");

    // Стартовое состояние фильтра приходит из адресной строки
    let initial = CatalogFilter::from_query(&CatalogQuery::read_from_window());
    let (search_text, set_search_text) = signal(initial.search.clone().unwrap_or_default());
    let filter = create_state(initial);

    // Категории загружаем один раз при монтировании
    Effect::new(move || {
        load_categories(categories);
    });

    // Каждое изменение фильтра: один запрос товаров + проекция в URL.
    // skip/limit в адресную строку не попадают.
    Effect::new(move || {
        let current = filter.get();
        load_products(
            products,
            current.category.clone(),
            current.search.clone(),
            current.skip,
            current.limit,
        );
        current.query().write_to_window();
    });

    let on_category_change = Callback::new(move |slug: String| {
        filter.update(|f| f.select_category(&slug));
    });

    let on_search_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        filter.update(|f| f.submit_search(&search_text.get_untracked()));
    };

    let on_load_more = Callback::new(move |_: MouseEvent| {
        let (loaded, total) =
            products.with_untracked(|s| (s.items.len(), s.total.unwrap_or(0)));
        let mut next = filter.get_untracked();
        // Когда всё уже загружено — ни изменения состояния, ни запроса
        if next.load_more(loaded, total) {
            filter.set(next);
        }
    });

    let category_options = Signal::derive(move || {
        let mut options = vec![("all".to_string(), "All categories".to_string())];
        categories.with(|s| {
            options.extend(s.items.iter().map(|c| (c.slug.clone(), c.name.clone())));
        });
        options
    });

    let selected_category = Signal::derive(move || {
        filter.with(|f| f.category.clone().unwrap_or_else(|| "all".to_string()))
    });

    let has_more = move || {
        products.with(|s| s.total.map(|total| s.items.len() < total).unwrap_or(false))
    };

    view! {
        <div class="catalog-page">
            <PageHeader title="Product Catalog">
                {()}
            </PageHeader>

            <div class="catalog-toolbar">
                <Select
                    value=selected_category
                    on_change=on_category_change
                    options=category_options
                />
                <form class="catalog-search" on:submit=on_search_submit>
                    <Input
                        value=search_text
                        on_input=Callback::new(move |text: String| set_search_text.set(text))
                        placeholder="Search products..."
                    />
                    <Button button_type="submit">"Search"</Button>
                </form>
            </div>

            {move || match products.with(|s| s.status) {
                FetchStatus::Idle => view! { <></> }.into_any(),
                FetchStatus::Loading => view! {
                    <div class="catalog-grid">
                        {(0..SKELETON_CARDS)
                            .map(|_| view! { <SkeletonCard /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                FetchStatus::Succeeded => {
                    let items = products.with(|s| s.items.clone());
                    view! {
                        <div class="catalog-grid">
                            {items
                                .into_iter()
                                .enumerate()
                                .map(|(index, product)| view! {
                                    <ProductCard
                                        product=product
                                        delay_ms={(index as u32) * 80}
                                    />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
                FetchStatus::Failed => view! {
                    <p class="catalog-error">
                        {products.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                }
                .into_any(),
            }}

            <Show when=has_more>
                <div class="catalog-load-more">
                    <Button on_click=on_load_more>"Load More"</Button>
                </div>
            </Show>
        </div>
    }
}

/// Одна карточка товара; `delay_ms` даёт каскадное появление сетки.
#[component]
#[allow(non_snake_case)]
fn ProductCard(product: Product, delay_ms: u32) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms>
            <img
                class="product-card__thumb"
                src=product.thumbnail.clone()
                alt=product.title.clone()
            />
            <div class="product-card__body">
                <h3 class="product-card__title">{product.title.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <Badge>{product.category.clone()}</Badge>
            </div>
            <div class="product-card__footer">
                <span class="product-card__price">{format!("${:.2}", product.price)}</span>
                <Button variant="secondary">"Add to Cart"</Button>
            </div>
        </CardAnimated>
    }
}
