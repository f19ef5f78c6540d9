pub mod a001_resident;
pub mod a002_service_request;
pub mod a003_facility;
pub mod a004_facility_booking;
pub mod a005_incident_report;
pub mod a006_hotline;
pub mod a007_announcement;
pub mod a008_account;
