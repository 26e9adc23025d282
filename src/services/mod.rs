//! Service layer for the roster tracker.
//!
//! This module contains the upstream acquisition logic:
//! - Paginated list fetching (`Pager`, `PageSource`)
//! - Snapshot aggregation (`RosterAggregator`)

mod pager;
mod roster;
#[cfg(test)]
pub(crate) mod testing;

pub use pager::{HttpPageSource, Page, PageSource, Pager};
pub use roster::RosterAggregator;
