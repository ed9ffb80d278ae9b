//! Hall bookings, the booking form and per-day hall availability.

use crate::{
    app_lib::{AppError, QueryParams, theme::Tone},
    features::{
        catalog,
        halls::types::{Hall, hall_name},
        refs::{Identified, Person, Ref},
    },
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Cancelled,
    Completed,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Unknown => "unknown",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            BookingStatus::Active => Tone::Green,
            BookingStatus::Cancelled => Tone::Red,
            BookingStatus::Completed => Tone::Blue,
            BookingStatus::Unknown => Tone::Gray,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub hall: Option<Ref<Hall>>,
    #[serde(default)]
    pub lecturer: Option<Ref<Person>>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub purpose: String,
    pub status: BookingStatus,
}

impl Identified for Booking {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Booking {
    pub fn hall(&self) -> Option<&Hall> {
        self.hall.as_ref().and_then(Ref::populated)
    }

    pub fn hall_name(&self) -> String {
        hall_name(self.hall.as_ref()).unwrap_or("—").to_string()
    }

    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Body for `POST /bookings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub hall: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
}

/// Booking form state; also backs the representative request form.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingForm {
    pub hall: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            hall: String::new(),
            date: String::new(),
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
            purpose: String::new(),
        }
    }
}

impl BookingForm {
    pub fn validate(&self) -> Result<NewBooking, AppError> {
        if self.hall.trim().is_empty() {
            return Err(AppError::validation("Select a hall."));
        }
        if self.date.trim().is_empty() {
            return Err(AppError::validation("Select a date."));
        }
        if !catalog::is_before(&self.start_time, &self.end_time) {
            return Err(AppError::validation("End time must be after start time"));
        }
        let purpose = self.purpose.trim();
        if purpose.is_empty() {
            return Err(AppError::validation("Purpose is required."));
        }
        Ok(NewBooking {
            hall: self.hall.trim().to_string(),
            date: self.date.trim().to_string(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            purpose: purpose.to_string(),
        })
    }
}

/// Filters for the admin-wide `GET /bookings` listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingQuery {
    pub status: Option<BookingStatus>,
    pub date: String,
    pub building: String,
}

impl BookingQuery {
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("status", self.status)
            .push("date", &self.date)
            .push("building", &self.building)
    }
}

/// Filters for `GET /bookings/availability`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub date: String,
    pub building: String,
    pub floor: String,
}

impl AvailabilityQuery {
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .push("date", &self.date)
            .push("building", &self.building)
            .push("floor", &self.floor)
    }
}

/// Hall summary inside an availability record; note the plain `id`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AvailabilityHall {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub capacity: u32,
}

/// A timetable class occupying the hall that day.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledClass {
    #[serde(default)]
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
}

/// An existing booking occupying the hall that day.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupiedSlot {
    #[serde(default)]
    pub purpose: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HallAvailability {
    pub hall: AvailabilityHall,
    pub is_available: bool,
    #[serde(default)]
    pub timetable_entries: Vec<ScheduledClass>,
    #[serde(default)]
    pub bookings: Vec<OccupiedSlot>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HallStatus {
    /// No availability record (not fetched yet, or outside the filter).
    Unknown,
    Available,
    Occupied,
}

impl HallStatus {
    pub fn label(self) -> &'static str {
        match self {
            HallStatus::Unknown => "Checking...",
            HallStatus::Available => "Available",
            HallStatus::Occupied => "Occupied",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            HallStatus::Unknown => Tone::Gray,
            HallStatus::Available => Tone::Green,
            HallStatus::Occupied => Tone::Red,
        }
    }
}

pub fn availability_for<'a>(
    list: &'a [HallAvailability],
    hall_id: &str,
) -> Option<&'a HallAvailability> {
    list.iter().find(|entry| entry.hall.id == hall_id)
}

pub fn hall_status(list: &[HallAvailability], hall_id: &str) -> HallStatus {
    match availability_for(list, hall_id) {
        None => HallStatus::Unknown,
        Some(entry) if entry.is_available => HallStatus::Available,
        Some(_) => HallStatus::Occupied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_decodes_populated_and_bare_halls() {
        let json = r#"[
            {"_id":"b1","hall":{"_id":"h1","name":"LC-101","building":"LectureComplex","floor":"GF","capacity":80},
             "lecturer":{"_id":"u1","name":"Dr. Perera"},
             "date":"2025-03-14T00:00:00.000Z","startTime":"08:00","endTime":"10:00",
             "purpose":"Lecture","status":"active"},
            {"_id":"b2","hall":"h2","date":"2025-03-15","startTime":"13:00","endTime":"14:00",
             "status":"archived"}
        ]"#;
        let bookings: Vec<Booking> = serde_json::from_str(json).expect("bookings");
        assert_eq!(bookings[0].hall_name(), "LC-101");
        assert_eq!(bookings[0].time_range(), "08:00 - 10:00");
        assert_eq!(bookings[1].hall.as_ref().map(Ref::id), Some("h2"));
        assert_eq!(bookings[1].hall_name(), "—");
        assert_eq!(bookings[1].status, BookingStatus::Unknown);
    }

    #[test]
    fn deleted_or_partial_hall_keeps_the_list() {
        let json = r#"[
            {"_id":"b1","hall":null,"date":"2025-03-14","startTime":"08:00","endTime":"09:00",
             "status":"active"},
            {"_id":"b2","hall":{"_id":"h1","name":"LC"},"date":"2025-03-14",
             "startTime":"09:00","endTime":"10:00","status":"cancelled"},
            {"_id":"b3","date":"2025-03-14","startTime":"10:00","endTime":"11:00",
             "status":"active"}
        ]"#;
        let bookings: Vec<Booking> = serde_json::from_str(json).expect("bookings");
        assert_eq!(bookings.len(), 3);
        assert_eq!(bookings[0].hall_name(), "—");
        assert!(bookings[0].hall().is_none());
        assert_eq!(bookings[1].hall_name(), "LC");
        assert_eq!(bookings[1].hall().map(|hall| hall.building.as_str()), Some(""));
        assert_eq!(bookings[2].hall_name(), "—");
    }

    #[test]
    fn form_orders_times_by_slot() {
        let mut form = BookingForm {
            hall: "h1".to_string(),
            date: "2025-03-14".to_string(),
            purpose: "  Guest lecture ".to_string(),
            ..BookingForm::default()
        };
        assert_eq!(form.validate().expect("valid").purpose, "Guest lecture");

        form.end_time = "08:00".to_string();
        assert_eq!(
            form.validate(),
            Err(AppError::validation("End time must be after start time"))
        );
    }

    #[test]
    fn form_requires_hall_date_and_purpose() {
        assert!(BookingForm::default().validate().is_err());
        let form = BookingForm {
            hall: "h1".to_string(),
            date: "2025-03-14".to_string(),
            ..BookingForm::default()
        };
        assert_eq!(form.validate(), Err(AppError::validation("Purpose is required.")));
    }

    #[test]
    fn availability_lookup_uses_plain_hall_id() {
        let json = r#"[
            {"hall":{"id":"h1","name":"LC-101","building":"LectureComplex","floor":"GF","capacity":80},
             "isAvailable":false,
             "timetableEntries":[{"subject":"Networks","startTime":"08:00","endTime":"10:00"}],
             "bookings":[]},
            {"hall":{"id":"h2","name":"LC-102"},"isAvailable":true}
        ]"#;
        let list: Vec<HallAvailability> = serde_json::from_str(json).expect("availability");
        assert_eq!(hall_status(&list, "h1"), HallStatus::Occupied);
        assert_eq!(hall_status(&list, "h2"), HallStatus::Available);
        assert_eq!(hall_status(&list, "h3"), HallStatus::Unknown);
        assert_eq!(HallStatus::Occupied.tone(), Tone::Red);
        assert_eq!(HallStatus::Unknown.label(), "Checking...");
        assert_eq!(
            availability_for(&list, "h1").map(|entry| entry.timetable_entries.len()),
            Some(1)
        );
    }

    #[test]
    fn queries_skip_blank_fields() {
        let query = AvailabilityQuery {
            date: "2025-03-14".to_string(),
            ..AvailabilityQuery::default()
        };
        assert_eq!(query.params().encode(), "date=2025-03-14");

        let query = BookingQuery {
            status: Some(BookingStatus::Cancelled),
            ..BookingQuery::default()
        };
        assert_eq!(query.params().encode(), "status=cancelled");
    }
}
