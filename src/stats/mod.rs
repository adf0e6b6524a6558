//! # Collection Statistics
//!
//! Item count and average price, memoized against the data file's
//! modification time.

pub mod aggregate;
pub mod cache;
pub mod errors;

pub use aggregate::Stats;
pub use cache::{StatsCache, StatsSource};
pub use errors::{StatsError, StatsResult};
