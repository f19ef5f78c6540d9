pub mod aggregate;

pub use aggregate::{
    Fee, ServiceOffering, ServiceRequest, PROCESSING_GUIDELINES, PROOF_OF_RESIDENCY,
    VALID_GOVERNMENT_IDS,
};
