use contracts::domain::category::{Category, CategoryWire};
use gloo_net::http::Request;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;

/// Fetch the full category list. Always one unscoped request; the endpoint
/// has no pagination. Both wire forms of the payload are accepted.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let response = Request::get(&api_url("/products/categories"))
        .send()
        .await
        .map_err(ApiError::transport)?;

    if !response.ok() {
        return Err(ApiError::status(response.status()));
    }

    let wire = response
        .json::<Vec<CategoryWire>>()
        .await
        .map_err(ApiError::decode)?;

    Ok(wire
        .into_iter()
        .enumerate()
        .map(|(index, entry)| Category::from_wire(index, entry))
        .collect())
}
