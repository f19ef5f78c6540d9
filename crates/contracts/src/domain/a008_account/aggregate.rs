use crate::domain::common::{CatalogRecord, Categorized, Domain, Record, RecordId};
use crate::enums::{ActivityStatus, NotificationStatus, Priority, ResidentStatus};
use crate::shared::catalog::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Profile
// ============================================================================

/// Profile of the signed-in resident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub registered_on: NaiveDate,
    pub account_type: String,
    pub status: ResidentStatus,
}

impl UserProfile {
    /// Embedded JSON object holding the profile
    pub fn fixture_json() -> &'static str {
        include_str!("profile.json")
    }
}

/// Editable copy of the profile fields. Account type is not editable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<&UserProfile> for ProfileDraft {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
        }
    }
}

impl ProfileDraft {
    /// True when any field differs from `profile`
    pub fn is_dirty(&self, profile: &UserProfile) -> bool {
        *self != ProfileDraft::from(profile)
    }
}

// ============================================================================
// Activity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountActivity {
    pub id: RecordId,
    /// Area of the portal, e.g. "E-Service"
    pub kind: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: ActivityStatus,
}

impl Record for AccountActivity {
    const DOMAIN: Domain = Domain::AccountActivity;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("activity.json")
    }
}

impl Searchable for AccountActivity {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.kind.as_str(), self.description.as_str()]
    }
}

impl Categorized for AccountActivity {
    fn category(&self) -> &str {
        &self.kind
    }
}

impl CatalogRecord for AccountActivity {
    type Status = ActivityStatus;
    type Priority = Priority;

    fn status(&self) -> &ActivityStatus {
        &self.status
    }

    fn created_on(&self) -> NaiveDate {
        self.date
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    pub status: NotificationStatus,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }
}

impl Record for Notification {
    const DOMAIN: Domain = Domain::Notifications;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("notifications.json")
    }
}

impl Searchable for Notification {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str()]
    }
}

impl Categorized for Notification {
    fn category(&self) -> &str {
        &self.title
    }
}

impl CatalogRecord for Notification {
    type Status = NotificationStatus;
    type Priority = Priority;

    fn status(&self) -> &NotificationStatus {
        &self.status
    }

    fn created_on(&self) -> NaiveDate {
        self.date
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| n.is_unread()).count()
}

// ============================================================================
// Preferences
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileVisibility {
    #[default]
    Public,
    Private,
}

impl ProfileVisibility {
    pub fn code(&self) -> &'static str {
        match self {
            ProfileVisibility::Public => "public",
            ProfileVisibility::Private => "private",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileVisibility::Public => "Public",
            ProfileVisibility::Private => "Private",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "public" => Some(ProfileVisibility::Public),
            "private" => Some(ProfileVisibility::Private),
            _ => None,
        }
    }
}

/// Settings tab toggles; held in view state only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountPreferences {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub application_updates: bool,
    pub visibility: ProfileVisibility,
    pub share_contact_info: bool,
}

impl Default for AccountPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: true,
            application_updates: true,
            visibility: ProfileVisibility::Public,
            share_contact_info: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::{aggregate, Taxonomy};
    use crate::shared::repository::{FixtureRepository, RecordRepository};

    #[test]
    fn test_profile_draft_tracks_edits() {
        let profile = FixtureRepository.user_profile().unwrap();
        let mut draft = ProfileDraft::from(&profile);
        assert!(!draft.is_dirty(&profile));
        draft.phone = "09999999999".into();
        assert!(draft.is_dirty(&profile));
    }

    #[test]
    fn test_unread_count() {
        let notifications: Vec<Notification> = FixtureRepository.list_records().unwrap();
        assert_eq!(unread_count(&notifications), 2);
        let counts = aggregate(&notifications);
        assert_eq!(counts.get(&NotificationStatus::Read), 1);
    }

    #[test]
    fn test_activity_statuses_recognized() {
        let activity: Vec<AccountActivity> = FixtureRepository.list_records().unwrap();
        assert_eq!(activity.len(), 3);
        assert!(activity.iter().all(|a| a.status.is_recognized()));
    }

    #[test]
    fn test_visibility_codes() {
        for v in [ProfileVisibility::Public, ProfileVisibility::Private] {
            assert_eq!(ProfileVisibility::from_code(v.code()), Some(v));
        }
        assert_eq!(AccountPreferences::default().visibility, ProfileVisibility::Public);
    }
}
