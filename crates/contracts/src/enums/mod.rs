pub mod activity_status;
pub mod booking_status;
pub mod contact_priority;
pub mod notification_status;
pub mod priority;
pub mod report_status;
pub mod request_status;
pub mod resident_status;

pub use activity_status::ActivityStatus;
pub use booking_status::BookingStatus;
pub use contact_priority::ContactPriority;
pub use notification_status::NotificationStatus;
pub use priority::Priority;
pub use report_status::ReportStatus;
pub use request_status::RequestStatus;
pub use resident_status::ResidentStatus;
