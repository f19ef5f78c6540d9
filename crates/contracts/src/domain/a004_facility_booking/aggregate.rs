use crate::domain::a003_facility::Facility;
use crate::domain::common::{CatalogRecord, Categorized, Domain, Record, RecordId};
use crate::enums::{BookingStatus, Priority};
use crate::shared::catalog::{percentage, Searchable, Taxonomy};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A reservation request for a facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityBooking {
    pub id: RecordId,
    pub facility: String,
    pub event: String,
    pub applicant: String,
    pub date: NaiveDate,
    /// Free-form range such as "8:00 AM - 6:00 PM"
    pub time_slot: String,
    pub status: BookingStatus,
    pub purpose: String,
}

impl Record for FacilityBooking {
    const DOMAIN: Domain = Domain::FacilityBookings;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("fixtures.json")
    }
}

impl Searchable for FacilityBooking {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.event.as_str(),
            self.facility.as_str(),
            self.applicant.as_str(),
            self.purpose.as_str(),
        ]
    }
}

impl Categorized for FacilityBooking {
    fn category(&self) -> &str {
        &self.facility
    }
}

impl CatalogRecord for FacilityBooking {
    type Status = BookingStatus;
    type Priority = Priority;

    fn status(&self) -> &BookingStatus {
        &self.status
    }

    fn created_on(&self) -> NaiveDate {
        self.date
    }
}

/// One row of the calendar tab
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub facility: String,
    pub booking: Option<FacilityBooking>,
}

impl ScheduleEntry {
    pub fn is_available(&self) -> bool {
        self.booking.is_none()
    }

    /// "Covered Court - Basketball Tournament" or "Community Hall - Available"
    pub fn summary(&self) -> String {
        match &self.booking {
            Some(booking) => format!("{} - {}", self.facility, booking.event),
            None => format!("{} - Available", self.facility),
        }
    }
}

/// Every facility with the booking that holds it on `date`, if any.
///
/// Rejected bookings do not hold a slot.
pub fn schedule_for(
    date: NaiveDate,
    facilities: &[Facility],
    bookings: &[FacilityBooking],
) -> Vec<ScheduleEntry> {
    facilities
        .iter()
        .map(|facility| ScheduleEntry {
            facility: facility.name.clone(),
            booking: bookings
                .iter()
                .find(|b| b.date == date && b.facility == facility.name && b.status.occupies_slot())
                .cloned(),
        })
        .collect()
}

/// Whole percent of bookings with a recognized status that were approved
pub fn approval_rate(bookings: &[FacilityBooking]) -> u32 {
    let decided = bookings.iter().filter(|b| b.status.is_recognized()).count();
    let approved = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Approved)
        .count();
    percentage(approved, decided)
}

/// Bookings dated in the same month as `today`
pub fn bookings_in_month(bookings: &[FacilityBooking], today: NaiveDate) -> usize {
    bookings
        .iter()
        .filter(|b| b.date.year() == today.year() && b.date.month() == today.month())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::repository::{FixtureRepository, RecordRepository};

    fn fixtures() -> (Vec<Facility>, Vec<FacilityBooking>) {
        (
            FixtureRepository.list_records().unwrap(),
            FixtureRepository.list_records().unwrap(),
        )
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_schedule_lists_every_facility() {
        let (facilities, bookings) = fixtures();
        let schedule = schedule_for(date("2025-02-20"), &facilities, &bookings);
        assert_eq!(schedule.len(), facilities.len());
        assert_eq!(schedule[0].summary(), "Covered Court - Basketball Tournament");
        assert!(schedule[1].is_available());
        assert_eq!(schedule[1].summary(), "Community Hall - Available");
    }

    #[test]
    fn test_rejected_booking_frees_the_slot() {
        let (facilities, mut bookings) = fixtures();
        bookings[0].status = BookingStatus::Rejected;
        let schedule = schedule_for(date("2025-02-20"), &facilities, &bookings);
        assert!(schedule.iter().all(ScheduleEntry::is_available));
    }

    #[test]
    fn test_approval_rate() {
        let (_, bookings) = fixtures();
        assert_eq!(approval_rate(&bookings), 33);
        assert_eq!(approval_rate(&[]), 0);
    }

    #[test]
    fn test_bookings_in_month() {
        let (_, bookings) = fixtures();
        assert_eq!(bookings_in_month(&bookings, date("2025-02-01")), 3);
        assert_eq!(bookings_in_month(&bookings, date("2025-03-01")), 0);
    }
}
