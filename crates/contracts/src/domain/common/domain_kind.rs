use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixture collections known to the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Residents,
    ServiceOfferings,
    ServiceRequests,
    Facilities,
    Equipment,
    FacilityBookings,
    IncidentReports,
    Hotlines,
    Announcements,
    CommunityEvents,
    AccountActivity,
    Notifications,
    UserProfile,
}

impl Domain {
    /// Collection name used in logs and error messages
    pub fn collection_name(&self) -> &'static str {
        match self {
            Domain::Residents => "residents",
            Domain::ServiceOfferings => "service_offerings",
            Domain::ServiceRequests => "service_requests",
            Domain::Facilities => "facilities",
            Domain::Equipment => "equipment",
            Domain::FacilityBookings => "facility_bookings",
            Domain::IncidentReports => "incident_reports",
            Domain::Hotlines => "hotlines",
            Domain::Announcements => "announcements",
            Domain::CommunityEvents => "community_events",
            Domain::AccountActivity => "account_activity",
            Domain::Notifications => "notifications",
            Domain::UserProfile => "user_profile",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}
