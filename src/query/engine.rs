//! Filter and paginate a collection
//!
//! Metadata always describes the filtered set, not the whole collection.

use serde::Serialize;

use super::params::PageRequest;
use crate::item::Item;

/// Pagination metadata returned with every listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: usize,
    pub items_per_page: i64,
}

/// One page of the filtered set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemsPage {
    pub items: Vec<Item>,
    pub metadata: PageMetadata,
}

/// Run a listing request over `collection`.
///
/// The window is `[(page-1)*limit, page*limit)` over the filtered items,
/// with bounds clamped into the filtered length. An out-of-range window is
/// an empty page, never an error.
pub fn query(collection: Vec<Item>, request: &PageRequest) -> ItemsPage {
    let filtered: Vec<Item> = match request.filter.as_deref() {
        Some(q) if !q.is_empty() => {
            let needle = q.to_lowercase();
            collection
                .into_iter()
                .filter(|item| item.matches(&needle))
                .collect()
        }
        _ => collection,
    };

    let total_items = filtered.len();
    let (page, limit) = (request.page, request.limit);

    let clamp = |bound: i64| bound.clamp(0, total_items as i64) as usize;
    let start = clamp(page.saturating_sub(1).saturating_mul(limit));
    let end = clamp(page.saturating_mul(limit));

    let items = if start < end {
        filtered.into_iter().skip(start).take(end - start).collect()
    } else {
        Vec::new()
    };

    ItemsPage {
        items,
        metadata: PageMetadata {
            current_page: page,
            total_pages: total_pages(total_items, limit),
            total_items,
            items_per_page: limit,
        },
    }
}

/// `ceil(total / limit)`; zero when `limit` is not positive.
fn total_pages(total: usize, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total as u64).div_ceil(limit as u64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewItem;

    fn catalog() -> Vec<Item> {
        (1..=4)
            .map(|n| {
                NewItem::named(format!("Item {}", n))
                    .with_price(10.0 * n as f64)
                    .with_description(format!("Description {}", n))
                    .into_item(n)
            })
            .collect()
    }

    fn request(page: i64, limit: i64, filter: Option<&str>) -> PageRequest {
        PageRequest {
            page,
            limit,
            filter: filter.map(str::to_string),
        }
    }

    #[test]
    fn test_first_page() {
        let page = query(catalog(), &request(1, 2, None));
        assert_eq!(page.items.len(), 2);
        assert_eq!(
            page.metadata,
            PageMetadata {
                current_page: 1,
                total_pages: 2,
                total_items: 4,
                items_per_page: 2,
            }
        );
    }

    #[test]
    fn test_second_page_starts_at_offset() {
        let page = query(catalog(), &request(2, 2, None));
        let ids: Vec<_> = page.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_partial_last_page() {
        let page = query(catalog(), &request(2, 3, None));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.metadata.total_pages, 2);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = query(catalog(), &request(9, 2, None));
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.current_page, 9);
        assert_eq!(page.metadata.total_items, 4);
    }

    #[test]
    fn test_non_positive_page_is_empty() {
        assert!(query(catalog(), &request(0, 2, None)).items.is_empty());
        assert!(query(catalog(), &request(-1, 2, None)).items.is_empty());
    }

    #[test]
    fn test_non_positive_limit() {
        let page = query(catalog(), &request(1, 0, None));
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_pages, 0);
        assert_eq!(page.metadata.items_per_page, 0);

        let page = query(catalog(), &request(1, -5, None));
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_pages, 0);
    }

    #[test]
    fn test_huge_limit_does_not_overflow() {
        let raw = PageRequest::from_raw(None, Some("9223372036854775807"), None);
        let page = query(catalog(), &raw);
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.metadata.total_pages, 1);
        assert_eq!(page.metadata.items_per_page, i64::MAX);

        let page = query(catalog(), &request(2, i64::MAX, None));
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_pages, 1);
    }

    #[test]
    fn test_filter_is_case_insensitive_on_name_and_description() {
        let page = query(catalog(), &request(1, 10, Some("ITEM 3")));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 3);

        let page = query(catalog(), &request(1, 10, Some("description")));
        assert_eq!(page.metadata.total_items, 4);
    }

    #[test]
    fn test_filter_does_not_touch_other_fields() {
        let mut items = catalog();
        items[0].category = Some("Electronics".to_string());
        let page = query(items, &request(1, 10, Some("electronics")));
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_pages, 0);
    }

    #[test]
    fn test_metadata_describes_filtered_set() {
        let page = query(catalog(), &request(1, 1, Some("1")));
        assert_eq!(page.metadata.total_items, 1);
        assert_eq!(page.metadata.total_pages, 1);
    }

    #[test]
    fn test_every_returned_item_matches_and_every_match_is_windowed() {
        let mut items = catalog();
        items.push(NewItem::named("Desk lamp").into_item(5));
        items.push(NewItem::named("Stand").with_description("for a LAMP").into_item(6));
        items.push(NewItem::named("Chair").into_item(7));

        for page_no in 1..=3 {
            let page = query(items.clone(), &request(page_no, 1, Some("Lamp")));
            assert!(page.items.len() <= 1);
            assert!(page.items.iter().all(|i| i.matches("lamp")));
            assert_eq!(page.metadata.total_items, 2);
            assert_eq!(page.metadata.total_pages, 2);
        }

        let all: Vec<_> = (1..=2)
            .flat_map(|p| query(items.clone(), &request(p, 1, Some("lamp"))).items)
            .map(|i| i.id)
            .collect();
        assert_eq!(all, vec![5, 6]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(query(Vec::new(), &PageRequest::default())).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "items": [],
                "metadata": {
                    "currentPage": 1,
                    "totalPages": 0,
                    "totalItems": 0,
                    "itemsPerPage": 10
                }
            })
        );
    }
}
