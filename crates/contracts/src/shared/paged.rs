use serde::de::DeserializeOwned;
use serde_json::Value;

/// One page of a server-side paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    pub content: Vec<T>,
    pub total_pages: usize,
}

impl<T> Paged<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
        }
    }
}

impl<T: DeserializeOwned> Paged<T> {
    /// Interpret a listing reply. The endpoint is known to produce two
    /// shapes: the preferred paginated object with `content` and
    /// `totalPages`, and a bare array holding the full result (total
    /// pages are then derived from the page size). Returns `None` for
    /// anything else so the caller can log the anomaly and substitute
    /// an empty page.
    pub fn from_response(value: &Value, page_size: usize) -> Option<Self> {
        if let Some(object) = value.as_object() {
            let content = object.get("content")?;
            let content: Vec<T> = serde_json::from_value(content.clone()).ok()?;
            let total_pages = object
                .get("totalPages")
                .and_then(Value::as_u64)
                .unwrap_or(0) as usize;
            return Some(Self {
                content,
                total_pages,
            });
        }

        if value.is_array() {
            let content: Vec<T> = serde_json::from_value(value.clone()).ok()?;
            let total_pages = if page_size == 0 {
                0
            } else {
                content.len().div_ceil(page_size)
            };
            return Some(Self {
                content,
                total_pages,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginated_object_shape() {
        let value = json!({"content": [1, 2, 3], "totalPages": 7, "totalElements": 61});
        let page: Paged<i64> = Paged::from_response(&value, 10).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 7);
    }

    #[test]
    fn test_paginated_object_without_total_pages() {
        let value = json!({"content": []});
        let page: Paged<i64> = Paged::from_response(&value, 10).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_bare_array_derives_total_pages() {
        let value = json!((0..25).collect::<Vec<i64>>());
        let page: Paged<i64> = Paged::from_response(&value, 10).unwrap();
        assert_eq!(page.content.len(), 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_bare_array_exact_multiple() {
        let value = json!((0..20).collect::<Vec<i64>>());
        let page: Paged<i64> = Paged::from_response(&value, 10).unwrap();
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_unexpected_shape_is_rejected() {
        let value = json!({"message": "oops"});
        assert!(Paged::<i64>::from_response(&value, 10).is_none());
        assert!(Paged::<i64>::from_response(&json!("text"), 10).is_none());
        assert!(Paged::<i64>::from_response(&json!(null), 10).is_none());
    }

    #[test]
    fn test_malformed_content_is_rejected() {
        let value = json!({"content": "not an array", "totalPages": 1});
        assert!(Paged::<i64>::from_response(&value, 10).is_none());
    }
}
