//! Item id assignment
//!
//! Ids are wall-clock milliseconds, bumped past the last issued id and the
//! largest id already in the collection so that they never repeat.

use chrono::Utc;

use crate::item::ItemId;

/// Issues strictly increasing millisecond-timestamp ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: Option<ItemId>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id. `max_existing` is the largest id currently stored.
    pub fn next(&mut self, max_existing: Option<ItemId>) -> ItemId {
        self.next_at(Utc::now().timestamp_millis(), max_existing)
    }

    /// Issue the next id as if the clock read `now_ms`.
    pub fn next_at(&mut self, now_ms: i64, max_existing: Option<ItemId>) -> ItemId {
        let floor = self
            .last_issued
            .into_iter()
            .chain(max_existing)
            .max()
            .map(|id| id.saturating_add(1))
            .unwrap_or(ItemId::MIN);
        let id = now_ms.max(floor);
        self.last_issued = Some(id);
        id
    }
}
