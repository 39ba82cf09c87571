use serde::{Deserialize, Deserializer, Serialize};

/// Taxonomy level of leaf (concrete product grouping) categories.
pub const LEAF_LEVEL: u8 = 3;

/// Category taxonomy entry as returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The backend is inconsistent about this field: some routes return
    /// `id`, others `categoryId`, and the value may be a number.
    #[serde(alias = "categoryId", deserialize_with = "string_or_number")]
    pub id: String,

    pub name: String,

    /// Depth in the category hierarchy. Umbrella groupings sit above
    /// [`LEAF_LEVEL`]; routes that omit the field default to 0.
    #[serde(default)]
    pub level: u8,
}

impl Category {
    pub fn is_leaf(&self) -> bool {
        self.level == LEAF_LEVEL
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// What the filter toggle boundary accepts: either a full category from
/// the rendered checkbox list, or a raw identifier from a removable tag.
/// Normalized to the identifier exactly once, at this boundary.
#[derive(Debug, Clone)]
pub enum CategoryKey {
    Category(Category),
    Id(String),
}

impl CategoryKey {
    pub fn into_id(self) -> String {
        match self {
            CategoryKey::Category(category) => category.id,
            CategoryKey::Id(id) => id,
        }
    }
}

impl From<Category> for CategoryKey {
    fn from(category: Category) -> Self {
        CategoryKey::Category(category)
    }
}

impl From<&Category> for CategoryKey {
    fn from(category: &Category) -> Self {
        CategoryKey::Category(category.clone())
    }
}

impl From<String> for CategoryKey {
    fn from(id: String) -> Self {
        CategoryKey::Id(id)
    }
}

impl From<&str> for CategoryKey {
    fn from(id: &str) -> Self {
        CategoryKey::Id(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_id_field() {
        let category: Category =
            serde_json::from_str(r#"{"id": "men_tshirt", "name": "T-shirts", "level": 3}"#)
                .unwrap();
        assert_eq!(category.id, "men_tshirt");
        assert!(category.is_leaf());
    }

    #[test]
    fn test_deserialize_category_id_alias() {
        let category: Category =
            serde_json::from_str(r#"{"categoryId": "men_jeans", "name": "Jeans", "level": 2}"#)
                .unwrap();
        assert_eq!(category.id, "men_jeans");
        assert!(!category.is_leaf());
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let category: Category =
            serde_json::from_str(r#"{"id": 42, "name": "Jackets"}"#).unwrap();
        assert_eq!(category.id, "42");
        assert_eq!(category.level, 0);
    }

    #[test]
    fn test_category_key_normalizes_to_same_id() {
        let category = Category {
            id: "women_dress".to_string(),
            name: "Dresses".to_string(),
            level: LEAF_LEVEL,
        };
        let from_object = CategoryKey::from(&category).into_id();
        let from_raw = CategoryKey::from("women_dress").into_id();
        assert_eq!(from_object, from_raw);
    }
}
