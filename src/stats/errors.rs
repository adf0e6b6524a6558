//! Stats errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for stats requests
pub type StatsResult<T> = Result<T, StatsError>;

/// Statistics could not be produced; the cache has been dropped.
#[derive(Debug, Clone, Error)]
pub enum StatsError {
    #[error("Could not calculate statistics")]
    Unavailable(#[source] StoreError),

    #[error("Could not calculate statistics")]
    LockPoisoned,
}
