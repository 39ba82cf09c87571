use serde::{Deserialize, Serialize};

/// Category reference embedded in a product row. The listing endpoint
/// returns both a numeric `id` and a string `categoryId`; either may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(rename = "categoryId", default)]
    pub category_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

/// One seller product as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    pub title: String,

    #[serde(rename = "sellingPrice", default)]
    pub selling_price: i64,

    #[serde(default)]
    pub quantity: i64,

    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl Product {
    /// A product is on sale while stock remains.
    pub fn is_active(&self) -> bool {
        self.quantity > 0
    }
}
