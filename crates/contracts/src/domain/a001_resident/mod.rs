pub mod aggregate;

pub use aggregate::{
    age_distribution, family_members_total, household_count, household_distribution,
    DistributionBucket, HouseholdRole, RegistrationDraft, Resident,
};
