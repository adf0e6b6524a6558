//! Item record types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Item identifier: a millisecond timestamp issued by the store.
pub type ItemId = i64;

/// A catalog record as persisted in the collection.
///
/// Fields a client submitted beyond the known ones are kept in `extra` and
/// written back verbatim. `price` keeps the submitted JSON number as is, so
/// `15` is echoed as `15` and large integers keep every digit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Only consumed by the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Case-insensitive substring match on name, or description when present.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(needle_lower))
                .unwrap_or(false)
    }
}

/// A validated candidate that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewItem {
    /// Attach an id, producing the stored record.
    pub fn into_item(self, id: ItemId) -> Item {
        let mut extra = self.extra;
        // A client-supplied id never overrides the assigned one.
        extra.remove("id");
        Item {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            category: self.category,
            extra,
        }
    }
}

#[cfg(test)]
impl NewItem {
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            description: None,
            category: None,
            extra: Map::new(),
        }
    }

    pub(crate) fn with_price(mut self, price: f64) -> Self {
        self.price = Number::from_f64(price);
        self
    }

    pub(crate) fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
