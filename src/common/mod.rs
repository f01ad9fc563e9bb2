use crate::algolia::prelude::DigestItem;

mod error;
mod filter;

/// How candidate items are gathered from the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Server-side keyword query; the endpoint filters and bounds the results.
    Query,
    /// Unfiltered page at a higher size; titles are filtered and ranked locally.
    Bulk,
}

/// Terminal state of a single run. The caller decides how each variant is
/// logged and which exit code it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Sent(usize),
    Empty,
    FetchFailed,
    DeliveryFailed,
}

/// Sort candidates by descending popularity score.
pub fn rank_by_points(items: &mut [DigestItem]) {
    items.sort_by(|a, b| b.points.cmp(&a.points));
}

pub mod prelude {
    pub use super::error::*;
    pub use super::filter::*;
    pub use super::{rank_by_points, FetchStrategy, RunOutcome};
}
