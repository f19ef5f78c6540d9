use super::{Domain, RecordId};
use crate::shared::catalog::{Searchable, Taxonomy};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// A fixture entity belonging to exactly one collection
pub trait Record: DeserializeOwned + Clone {
    /// Collection this record type is listed under
    const DOMAIN: Domain;

    fn id(&self) -> RecordId;

    /// Embedded JSON array holding the collection's fixtures
    fn fixture_json() -> &'static str;
}

/// Records that belong to a category (service type, facility, report type, ...)
pub trait Categorized {
    fn category(&self) -> &str;
}

/// A record shown in a catalog view: searchable, categorized and carrying a status.
///
/// Records without a priority still name a `Priority` taxonomy and keep the
/// default [`CatalogRecord::priority`], which returns `None`.
pub trait CatalogRecord: Record + Searchable + Categorized {
    type Status: Taxonomy;
    type Priority: Taxonomy;

    fn status(&self) -> &Self::Status;

    fn priority(&self) -> Option<&Self::Priority> {
        None
    }

    fn created_on(&self) -> NaiveDate;
}
