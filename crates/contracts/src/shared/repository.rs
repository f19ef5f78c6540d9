//! Read-only access to the portal's fixture collections.
//!
//! Pages never touch fixture JSON directly; they ask a [`RecordRepository`]
//! so the catalog logic stays the same if a persistent store replaces the
//! embedded fixtures.

use crate::domain::a008_account::UserProfile;
use crate::domain::common::{Domain, Record};
use crate::shared::error::CatalogError;
use std::collections::HashSet;

pub trait RecordRepository {
    /// Every record of a collection, in fixture order
    fn list_records<R: Record>(&self) -> Result<Vec<R>, CatalogError>;

    /// Profile of the signed-in resident
    fn user_profile(&self) -> Result<UserProfile, CatalogError>;
}

/// Repository backed by JSON embedded at compile time
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRepository;

impl RecordRepository for FixtureRepository {
    fn list_records<R: Record>(&self) -> Result<Vec<R>, CatalogError> {
        let records: Vec<R> = parse_fixture(R::DOMAIN, R::fixture_json())?;
        ensure_unique_ids(&records)?;
        log::debug!("loaded {} {} fixtures", records.len(), R::DOMAIN);
        Ok(records)
    }

    fn user_profile(&self) -> Result<UserProfile, CatalogError> {
        parse_fixture(Domain::UserProfile, UserProfile::fixture_json())
    }
}

fn parse_fixture<T: serde::de::DeserializeOwned>(
    domain: Domain,
    json: &str,
) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Fixture { domain, source })
}

/// Fail on the first id that appears twice in a collection
pub fn ensure_unique_ids<R: Record>(records: &[R]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(CatalogError::DuplicateId {
                domain: R::DOMAIN,
                id: record.id(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::RecordId;
    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    struct Duplicated {
        id: RecordId,
    }

    impl Record for Duplicated {
        const DOMAIN: Domain = Domain::Equipment;

        fn id(&self) -> RecordId {
            self.id
        }

        fn fixture_json() -> &'static str {
            r#"[{"id": 1}, {"id": 2}, {"id": 1}]"#
        }
    }

    #[derive(Debug, Clone, Deserialize)]
    struct Broken {
        id: RecordId,
    }

    impl Record for Broken {
        const DOMAIN: Domain = Domain::Hotlines;

        fn id(&self) -> RecordId {
            self.id
        }

        fn fixture_json() -> &'static str {
            r#"[{"id": "one"}]"#
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = FixtureRepository.list_records::<Duplicated>().unwrap_err();
        match err {
            CatalogError::DuplicateId { domain, id } => {
                assert_eq!(domain, Domain::Equipment);
                assert_eq!(id, RecordId(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_fixture_reports_domain() {
        let err = FixtureRepository.list_records::<Broken>().unwrap_err();
        assert!(matches!(err, CatalogError::Fixture { domain: Domain::Hotlines, .. }));
        assert!(err.to_string().starts_with("failed to parse hotlines fixtures"));
    }

    #[test]
    fn test_user_profile_loads() {
        let profile = FixtureRepository.user_profile().unwrap();
        assert_eq!(profile.name, "Juan dela Cruz");
    }
}
