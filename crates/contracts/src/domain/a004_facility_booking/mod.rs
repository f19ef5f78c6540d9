pub mod aggregate;

pub use aggregate::{approval_rate, bookings_in_month, schedule_for, FacilityBooking, ScheduleEntry};
