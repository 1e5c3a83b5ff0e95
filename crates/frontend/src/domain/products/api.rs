use contracts::domain::product::ProductPage;
use gloo_net::http::Request;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_base;

/// Build the request URL for one filter intent.
///
/// Precedence: a non-empty search term wins over a category scope, a
/// category scope wins over the unscoped listing. Only the search term
/// needs percent-encoding; category slugs are URL-safe by construction.
pub fn products_url(
    category: Option<&str>,
    search: Option<&str>,
    skip: usize,
    limit: usize,
) -> String {
    if let Some(term) = search.filter(|s| !s.is_empty()) {
        return format!(
            "{}/products/search?q={}&limit={}&skip={}",
            api_base(),
            urlencoding::encode(term),
            limit,
            skip
        );
    }

    if let Some(slug) = category.filter(|c| !c.is_empty()) {
        return format!(
            "{}/products/category/{}?limit={}&skip={}",
            api_base(),
            slug,
            limit,
            skip
        );
    }

    format!("{}/products?limit={}&skip={}", api_base(), limit, skip)
}

/// Fetch one page of products for the given filter intent.
pub async fn fetch_products(
    category: Option<&str>,
    search: Option<&str>,
    skip: usize,
    limit: usize,
) -> Result<ProductPage, ApiError> {
    let url = products_url(category, search, skip, limit);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(ApiError::transport)?;

    if !response.ok() {
        return Err(ApiError::status(response.status()));
    }

    response.json::<ProductPage>().await.map_err(ApiError::decode)
}
