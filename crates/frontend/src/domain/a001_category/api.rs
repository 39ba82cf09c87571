use contracts::domain::a001_category::aggregate::Category;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the category taxonomy for the storefront filter panel
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&api_url("/categories"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: {}", response.status()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the category list for the admin product-list dropdown
pub async fn fetch_admin_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&api_url("/api/categories"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: {}", response.status()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
