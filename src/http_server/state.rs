//! Composition root shared by every handler

use crate::stats::StatsCache;
use crate::store::ItemStore;

/// State shared across handlers.
///
/// The stats cache starts empty and is updated in place for the lifetime
/// of the server.
#[derive(Debug)]
pub struct CatalogState {
    pub store: ItemStore,
    pub stats: StatsCache,
}

impl CatalogState {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            stats: StatsCache::new(),
        }
    }
}
