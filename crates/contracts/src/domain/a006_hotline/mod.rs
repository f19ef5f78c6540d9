pub mod aggregate;

pub use aggregate::{
    dial_uri, normalize_phone_number, quick_dial_contacts, sms_uri, HotlineContact,
    WHEN_TO_CALL_BARANGAY, WHEN_TO_CALL_EMERGENCY,
};
