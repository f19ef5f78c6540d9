pub mod aggregate;

pub use aggregate::{by_date, latest_first, Announcement, CommunityEvent};
