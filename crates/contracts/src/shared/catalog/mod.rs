//! Filtering, classification and aggregation over fixture record collections.
//!
//! Every page of the portal renders its cards through these functions:
//! `filter` narrows a collection by the search box, `classify` turns a
//! record's status and priority into badges, `aggregate` feeds the summary
//! cards at the top of a page.

pub mod aggregate;
pub mod search;
pub mod taxonomy;

pub use aggregate::{aggregate, count_by_category, group_by_category, percentage, StatusCounts};
pub use search::{filter, SearchIndex, Searchable};
pub use taxonomy::{BadgeSpec, DisplayVariant, IconKind, Taxonomy};

use crate::domain::common::CatalogRecord;

/// Display attributes derived from a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: BadgeSpec,
    pub priority: Option<BadgeSpec>,
}

/// Map a record's status (and priority, when it has one) to badges.
///
/// Total: labels outside the taxonomy get the taxonomy's fallback badge.
pub fn classify<R: CatalogRecord>(record: &R) -> Classification {
    Classification {
        status: record.status().badge(),
        priority: record.priority().map(Taxonomy::badge),
    }
}
