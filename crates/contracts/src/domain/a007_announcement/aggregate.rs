use crate::domain::common::{Categorized, Domain, Record, RecordId};
use crate::enums::Priority;
use crate::shared::catalog::{Searchable, Taxonomy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Announcement
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub posted_on: NaiveDate,
    pub priority: Priority,
}

impl Record for Announcement {
    const DOMAIN: Domain = Domain::Announcements;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("announcements.json")
    }
}

impl Searchable for Announcement {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }
}

impl Categorized for Announcement {
    fn category(&self) -> &str {
        self.priority.label()
    }
}

/// Newest first; equal dates keep fixture order
pub fn latest_first(announcements: &[Announcement]) -> Vec<Announcement> {
    let mut sorted = announcements.to_vec();
    sorted.sort_by(|a, b| b.posted_on.cmp(&a.posted_on));
    sorted
}

// ============================================================================
// Community event
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    /// Start time as printed, e.g. "8:00 AM"
    pub time: String,
    pub location: String,
}

impl Record for CommunityEvent {
    const DOMAIN: Domain = Domain::CommunityEvents;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("events.json")
    }
}

impl Searchable for CommunityEvent {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str()]
    }
}

impl Categorized for CommunityEvent {
    fn category(&self) -> &str {
        &self.location
    }
}

/// Soonest first
pub fn by_date(events: &[CommunityEvent]) -> Vec<CommunityEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.date);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::repository::{FixtureRepository, RecordRepository};

    #[test]
    fn test_announcements_newest_first() {
        let announcements: Vec<Announcement> = FixtureRepository.list_records().unwrap();
        let sorted = latest_first(&announcements);
        let dates: Vec<NaiveDate> = sorted.iter().map(|a| a.posted_on).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(sorted[0].priority, Priority::High);
    }

    #[test]
    fn test_lowercase_priority_labels_parse() {
        let announcements: Vec<Announcement> = FixtureRepository.list_records().unwrap();
        assert!(announcements.iter().all(|a| a.priority.is_recognized()));
    }

    #[test]
    fn test_events_soonest_first() {
        let events: Vec<CommunityEvent> = FixtureRepository.list_records().unwrap();
        let titles: Vec<String> = by_date(&events).into_iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            vec!["Senior Citizens Meeting", "Clean-up Drive", "Barangay Fiesta 2025"]
        );
    }
}
