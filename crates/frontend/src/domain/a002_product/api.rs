use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::paged::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Query parameters for one page of the seller product listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// 0-based page index
    pub page: usize,
    pub size: usize,
    pub sort_field: String,
    pub sort_ascending: bool,
    /// Category id filter; omitted when the user selected "all"
    pub category: Option<String>,
    /// Free-text search; omitted when empty
    pub keyword: Option<String>,
}

impl ProductQuery {
    /// Combined sort descriptor in the server's `field,direction` form
    pub fn sort_param(&self) -> String {
        format!(
            "{},{}",
            self.sort_field,
            if self.sort_ascending { "asc" } else { "desc" }
        )
    }
}

/// Fetch one page of products. The bearer token is passed in explicitly;
/// the caller owns the session.
pub async fn fetch_products(query: &ProductQuery, token: &str) -> Result<Paged<Product>, String> {
    let page = query.page.to_string();
    let size = query.size.to_string();
    let sort = query.sort_param();

    let mut params: Vec<(&str, String)> =
        vec![("page", page), ("size", size), ("sort", sort)];
    if let Some(category) = &query.category {
        params.push(("category", category.clone()));
    }
    if let Some(keyword) = &query.keyword {
        params.push(("keyword", keyword.clone()));
    }

    let response = Request::get(&api_url("/api/sellers/products"))
        .query(params)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(Paged::from_response(&value, query.size).unwrap_or_else(|| {
        log::error!("Unexpected product listing response shape: {}", value);
        Paged::empty()
    }))
}

/// Delete one product by id
pub async fn delete_product(id: i64, token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/sellers/products/{}", id)))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete product: {}", response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_param() {
        let query = ProductQuery {
            sort_field: "sellingPrice".to_string(),
            sort_ascending: false,
            ..Default::default()
        };
        assert_eq!(query.sort_param(), "sellingPrice,desc");

        let query = ProductQuery {
            sort_field: "title".to_string(),
            sort_ascending: true,
            ..Default::default()
        };
        assert_eq!(query.sort_param(), "title,asc");
    }
}
