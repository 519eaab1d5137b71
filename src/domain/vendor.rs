//! Vendor record domain model.
//!
//! A [`VendorRecord`] is one entry of the static `vendors_with_images.json`
//! document. Records are read-only: the showcase derives cards, categories and
//! ticker names from them but never mutates or persists them.

use serde::{Deserialize, Deserializer, Serialize};

/// Label used when a record carries no usable name.
pub const FALLBACK_LABEL: &str = "Brand";

/// Link target used when a record has no website.
pub const PLACEHOLDER_HREF: &str = "#";

const IMAGE_KEY: &str = "brand_image";
const IMAGE_ALIAS: &str = "brandImage";

/// One vendor entry from the catalog document.
///
/// Every field may be absent. Unknown fields are ignored and non-string
/// category entries are dropped, so a partially malformed entry still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub website: Option<String>,

    #[serde(default, alias = "brandImage", deserialize_with = "lenient_string")]
    pub brand_image: Option<String>,

    #[serde(default, deserialize_with = "lenient_categories")]
    pub categories: Vec<String>,
}

impl VendorRecord {
    /// Builds a record from a raw JSON element.
    ///
    /// Elements that are not objects (or objects whose fields have unexpected
    /// types) degrade to a record with the affected fields absent instead of
    /// failing the whole catalog.
    ///
    /// When both `brand_image` and `brandImage` are present, a usable
    /// `brand_image` wins.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let serde_json::Value::Object(fields) = value else {
            return Self::default();
        };

        let mut fields = fields.clone();
        if let Some(alias) = fields.remove(IMAGE_ALIAS) {
            let usable = fields
                .get(IMAGE_KEY)
                .and_then(serde_json::Value::as_str)
                .is_some_and(|s| !s.trim().is_empty());
            if !usable {
                fields.insert(IMAGE_KEY.to_string(), alias);
            }
        }

        serde_json::from_value(serde_json::Value::Object(fields)).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "vendor entry has unexpected shape, using defaults");
            Self::default()
        })
    }

    /// Display label: the trimmed name, or `"Brand"` when absent.
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(FALLBACK_LABEL)
            .to_string()
    }

    /// Case-insensitive sort key. Records without a name sort first.
    #[must_use]
    pub fn sort_key(&self) -> String {
        self.name.as_deref().map(str::trim).unwrap_or_default().to_lowercase()
    }

    /// Card link target, falling back to the `#` placeholder anchor.
    #[must_use]
    pub fn href(&self) -> String {
        self.website
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .unwrap_or(PLACEHOLDER_HREF)
            .to_string()
    }

    /// Logo source, if the record names a non-empty one.
    #[must_use]
    pub fn image_source(&self) -> Option<&str> {
        self.brand_image.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Trimmed, non-empty category tokens in source order.
    pub fn category_tokens(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.trim()).filter(|c| !c.is_empty())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_categories<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let record = VendorRecord::from_value(&json!({ "name": "Acme" }));
        assert_eq!(record.label(), "Acme");
        assert_eq!(record.href(), "#");
        assert!(record.image_source().is_none());
        assert!(record.categories.is_empty());
    }

    #[test]
    fn test_brand_image_alias_and_snake_case() {
        let snake = VendorRecord::from_value(&json!({ "brand_image": "a.png" }));
        let camel = VendorRecord::from_value(&json!({ "brandImage": "b.png" }));
        assert_eq!(snake.image_source(), Some("a.png"));
        assert_eq!(camel.image_source(), Some("b.png"));
    }

    #[test]
    fn test_both_image_keys_keep_other_fields() {
        let record = VendorRecord::from_value(&json!({
            "name": "Acme",
            "brand_image": "a.png",
            "brandImage": "b.png",
            "categories": ["Rugs"]
        }));
        assert_eq!(record.label(), "Acme");
        assert_eq!(record.image_source(), Some("a.png"));
        assert_eq!(record.categories, vec!["Rugs"]);

        let blank_snake = VendorRecord::from_value(&json!({ "brand_image": "", "brandImage": "b.png" }));
        assert_eq!(blank_snake.image_source(), Some("b.png"));
    }

    #[test]
    fn test_lenient_shapes() {
        let record = VendorRecord::from_value(&json!({
            "name": null,
            "website": 42,
            "categories": ["  Lighting ", 7, "", "Decor"]
        }));
        assert_eq!(record.label(), FALLBACK_LABEL);
        assert_eq!(record.sort_key(), "");
        assert_eq!(record.website.as_deref(), Some("42"));
        assert_eq!(record.category_tokens().collect::<Vec<_>>(), vec!["Lighting", "Decor"]);

        let not_array = VendorRecord::from_value(&json!({ "categories": "Lighting" }));
        assert!(not_array.categories.is_empty());
    }

    #[test]
    fn test_non_object_entry_degrades() {
        let record = VendorRecord::from_value(&json!("just a string"));
        assert_eq!(record, VendorRecord::default());
        assert_eq!(record.label(), "Brand");
    }

    #[test]
    fn test_sort_key_is_case_insensitive() {
        let record = VendorRecord::from_value(&json!({ "name": "  ZeTa " }));
        assert_eq!(record.sort_key(), "zeta");
        assert_eq!(record.label(), "ZeTa");
    }
}
