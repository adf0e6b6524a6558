//! Modification-time keyed stats cache
//!
//! Two states: Empty, or Valid with the stats and the modification time
//! observed when they were computed. A request recomputes when the cache
//! is Empty, the current modification time differs from the tag, or the
//! modification time cannot be read. Any failure while recomputing drops
//! the cache back to Empty.

use std::sync::Mutex;
use std::time::SystemTime;

use tracing::{debug, warn};

use super::aggregate::Stats;
use super::errors::{StatsError, StatsResult};
use crate::item::Item;
use crate::store::{ItemStore, StoreResult};

/// Where the cache reads the collection and its freshness tag from.
pub trait StatsSource {
    /// Current modification time of the backing collection.
    fn modified(&self) -> StoreResult<SystemTime>;

    /// Read the whole collection.
    fn read_items(&self) -> StoreResult<Vec<Item>>;
}

impl StatsSource for ItemStore {
    fn modified(&self) -> StoreResult<SystemTime> {
        ItemStore::modified(self)
    }

    fn read_items(&self) -> StoreResult<Vec<Item>> {
        self.load()
    }
}

#[derive(Debug, Clone, Copy)]
enum CacheState {
    Empty,
    Valid { stats: Stats, tag: SystemTime },
}

/// Single-slot stats cache.
///
/// Owned by the server's composition root. Recomputation happens under the
/// cache lock, so concurrent requests on a stale cache read the file once.
#[derive(Debug)]
pub struct StatsCache {
    state: Mutex<CacheState>,
}

impl StatsCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState::Empty),
        }
    }

    /// Return stats for `source`, reusing the cached value while the
    /// source's modification time is unchanged.
    pub fn get<S: StatsSource + ?Sized>(&self, source: &S) -> StatsResult<Stats> {
        let mut state = self.state.lock().map_err(|_| StatsError::LockPoisoned)?;

        if let (CacheState::Valid { stats, tag }, Ok(current)) = (*state, source.modified()) {
            if tag == current {
                debug!(total = stats.total, "stats cache hit");
                return Ok(stats);
            }
        }

        match recompute(source) {
            Ok((stats, tag)) => {
                *state = CacheState::Valid { stats, tag };
                debug!(total = stats.total, "stats recomputed");
                Ok(stats)
            }
            Err(e) => {
                *state = CacheState::Empty;
                warn!(error = %e, "stats recomputation failed, cache dropped");
                Err(StatsError::Unavailable(e))
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        self.state
            .lock()
            .map(|state| matches!(*state, CacheState::Valid { .. }))
            .unwrap_or(false)
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}

fn recompute<S: StatsSource + ?Sized>(source: &S) -> StoreResult<(Stats, SystemTime)> {
    let items = source.read_items()?;
    let stats = Stats::compute(&items);
    let tag = source.modified()?;
    Ok((stats, tag))
}
