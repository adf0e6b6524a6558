//! Aggregate computation over a collection

use serde::{Serialize, Serializer};

use crate::item::Item;

/// Aggregate statistics for the collection.
///
/// `average_price` is NaN when the mean is undefined: the collection is
/// empty or some item has no price. NaN is written as JSON `null`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    #[serde(serialize_with = "nan_as_null")]
    pub average_price: f64,
}

impl Stats {
    /// Count items and average their prices.
    pub fn compute(items: &[Item]) -> Self {
        let sum: Option<f64> = items
            .iter()
            .map(|item| item.price.as_ref().and_then(|p| p.as_f64()))
            .sum();
        let average_price = match sum {
            Some(sum) if !items.is_empty() => sum / items.len() as f64,
            _ => f64::NAN,
        };

        Self {
            total: items.len(),
            average_price,
        }
    }
}

fn nan_as_null<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_none()
    } else {
        serializer.serialize_f64(*value)
    }
}
