use crate::domain::common::{Domain, RecordId};
use thiserror::Error;

/// Failures while loading fixture collections.
///
/// Catalog queries (filter, classify, aggregate) never fail; only the
/// repository that feeds them does.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {domain} fixtures: {source}")]
    Fixture {
        domain: Domain,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate id {id} in {domain}")]
    DuplicateId { domain: Domain, id: RecordId },
}
