pub mod aggregate;

pub use aggregate::{
    unread_count, AccountActivity, AccountPreferences, Notification, ProfileDraft,
    ProfileVisibility, UserProfile,
};
