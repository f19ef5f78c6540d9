//! Common types and traits for all fixture records

pub mod domain_kind;
pub mod record;
pub mod record_id;

pub use domain_kind::Domain;
pub use record::{CatalogRecord, Categorized, Record};
pub use record_id::RecordId;
