//! Booking requests: a representative asks a lecturer to book a hall on the
//! class's behalf, and the lecturer approves (creating the booking) or rejects.

use crate::{
    app_lib::{AppError, theme::Tone},
    features::{
        bookings::types::{BookingForm, NewBooking},
        halls::types::{Hall, hall_name},
        refs::{Identified, Person, Ref},
    },
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply sent with an approval when the lecturer leaves the message blank.
pub const DEFAULT_APPROVAL_MESSAGE: &str = "Request approved";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Cancelled => "Cancelled",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            RequestStatus::Pending => Tone::Yellow,
            RequestStatus::Approved => Tone::Green,
            RequestStatus::Rejected => Tone::Red,
            RequestStatus::Cancelled => Tone::Gray,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub hall: Option<Ref<Hall>>,
    #[serde(default)]
    pub lecturer: Option<Ref<Person>>,
    #[serde(default)]
    pub representative: Option<Ref<Person>>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub purpose: String,
    pub status: RequestStatus,
    #[serde(default)]
    pub response_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Identified for BookingRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl BookingRequest {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn hall(&self) -> Option<&Hall> {
        self.hall.as_ref().and_then(Ref::populated)
    }

    pub fn hall_name(&self) -> String {
        hall_name(self.hall.as_ref()).unwrap_or("—").to_string()
    }

    /// Lecturer's reply, when there is a non-blank one.
    pub fn response(&self) -> Option<&str> {
        self.response_message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

/// Body for `POST /representative/booking-request`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingRequest {
    pub lecturer: String,
    #[serde(flatten)]
    pub booking: NewBooking,
}

/// The representative's request form: a booking form plus the lecturer who
/// will be asked to approve it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestForm {
    pub lecturer: String,
    pub booking: BookingForm,
}

impl RequestForm {
    pub fn validate(&self) -> Result<NewBookingRequest, AppError> {
        let lecturer = self.lecturer.trim();
        if lecturer.is_empty() {
            return Err(AppError::validation("Select a lecturer."));
        }
        Ok(NewBookingRequest {
            lecturer: lecturer.to_string(),
            booking: self.booking.validate()?,
        })
    }
}

/// Body for the lecturer's approve and reject calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResponseMessage {
    pub message: String,
}

impl ResponseMessage {
    pub fn approval(draft: &str) -> Self {
        let message = draft.trim();
        Self {
            message: if message.is_empty() {
                DEFAULT_APPROVAL_MESSAGE.to_string()
            } else {
                message.to_string()
            },
        }
    }

    pub fn rejection(draft: &str) -> Result<Self, AppError> {
        let message = draft.trim();
        if message.is_empty() {
            return Err(AppError::validation("Please provide a reason for rejection"));
        }
        Ok(Self {
            message: message.to_string(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestFilter {
    All,
    Status(RequestStatus),
}

impl RequestFilter {
    pub fn label(self) -> &'static str {
        match self {
            RequestFilter::All => "All",
            RequestFilter::Status(status) => status.label(),
        }
    }

    pub fn matches(self, request: &BookingRequest) -> bool {
        match self {
            RequestFilter::All => true,
            RequestFilter::Status(status) => request.status == status,
        }
    }

    pub fn apply(self, requests: &[BookingRequest]) -> Vec<&BookingRequest> {
        requests.iter().filter(|request| self.matches(request)).collect()
    }

    /// Text for the empty state, e.g. "No pending requests found".
    pub fn empty_message(self) -> String {
        match self {
            RequestFilter::All => "No requests found".to_string(),
            RequestFilter::Status(status) => format!("No {status} requests found"),
        }
    }
}

/// Filter tabs on the lecturer's inbox; pending first.
pub const LECTURER_FILTERS: [RequestFilter; 4] = [
    RequestFilter::Status(RequestStatus::Pending),
    RequestFilter::Status(RequestStatus::Approved),
    RequestFilter::Status(RequestStatus::Rejected),
    RequestFilter::All,
];

/// Filter tabs on the representative's own list.
pub const REPRESENTATIVE_FILTERS: [RequestFilter; 5] = [
    RequestFilter::All,
    RequestFilter::Status(RequestStatus::Pending),
    RequestFilter::Status(RequestStatus::Approved),
    RequestFilter::Status(RequestStatus::Rejected),
    RequestFilter::Status(RequestStatus::Cancelled),
];

/// Numbers on the representative dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl RequestStats {
    pub fn compute(requests: &[BookingRequest]) -> Self {
        let count = |status| requests.iter().filter(|request| request.status == status).count();
        Self {
            total: requests.len(),
            pending: count(RequestStatus::Pending),
            approved: count(RequestStatus::Approved),
            rejected: count(RequestStatus::Rejected),
        }
    }
}

pub fn pending_count(requests: &[BookingRequest]) -> usize {
    requests.iter().filter(|request| request.is_pending()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, status: RequestStatus) -> BookingRequest {
        BookingRequest {
            id: id.to_string(),
            hall: Some(Ref::Id("h1".to_string())),
            lecturer: None,
            representative: None,
            date: "2025-03-14".to_string(),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            purpose: "Revision".to_string(),
            status,
            response_message: None,
            created_at: None,
        }
    }

    #[test]
    fn decodes_populated_request() {
        let json = r#"{
            "_id":"r1",
            "hall":{"_id":"h1","name":"LC-201","building":"LectureComplex","floor":"FF","capacity":100},
            "lecturer":{"_id":"l1","name":"Dr. Silva"},
            "representative":{"_id":"p1","name":"Kasun","department":"ICT"},
            "date":"2025-03-14T00:00:00.000Z","startTime":"10:00","endTime":"12:00",
            "purpose":"Revision","status":"rejected","responseMessage":"  Hall busy ",
            "createdAt":"2025-03-01T09:00:00.000Z"
        }"#;
        let request: BookingRequest = serde_json::from_str(json).expect("request");
        assert_eq!(request.status, RequestStatus::Rejected);
        assert_eq!(request.response(), Some("Hall busy"));
        assert!(!request.is_pending());
    }

    #[test]
    fn request_with_deleted_hall_still_decodes() {
        let json = r#"[
            {"_id":"r1","hall":null,"date":"2025-03-14","startTime":"10:00","endTime":"12:00",
             "status":"pending"},
            {"_id":"r2","hall":{"_id":"h1","name":"LC-201"},"date":"2025-03-14",
             "startTime":"12:00","endTime":"13:00","status":"approved"}
        ]"#;
        let requests: Vec<BookingRequest> = serde_json::from_str(json).expect("requests");
        assert_eq!(requests[0].hall_name(), "—");
        assert_eq!(requests[1].hall_name(), "LC-201");
        assert_eq!(pending_count(&requests), 1);
        assert_eq!(request("r3", RequestStatus::Pending).hall_name(), "—");
    }

    #[test]
    fn new_request_flattens_booking_fields() {
        let form = RequestForm {
            lecturer: "l1".to_string(),
            booking: BookingForm {
                hall: "h1".to_string(),
                date: "2025-03-14".to_string(),
                purpose: "Group study".to_string(),
                ..BookingForm::default()
            },
        };
        let json = serde_json::to_value(form.validate().expect("valid")).expect("encode");
        assert_eq!(json["lecturer"], "l1");
        assert_eq!(json["hall"], "h1");
        assert_eq!(json["startTime"], "08:00");
        assert_eq!(json["endTime"], "09:00");
    }

    #[test]
    fn request_form_requires_lecturer() {
        let form = RequestForm::default();
        assert_eq!(form.validate(), Err(AppError::validation("Select a lecturer.")));
    }

    #[test]
    fn approval_defaults_and_rejection_requires_reason() {
        assert_eq!(ResponseMessage::approval("  ").message, DEFAULT_APPROVAL_MESSAGE);
        assert_eq!(ResponseMessage::approval(" See you ").message, "See you");
        assert!(ResponseMessage::rejection("   ").is_err());
        assert_eq!(
            ResponseMessage::rejection("Hall under repair")
                .expect("valid")
                .message,
            "Hall under repair"
        );
    }

    #[test]
    fn filters_and_stats_follow_status() {
        let requests = vec![
            request("a", RequestStatus::Pending),
            request("b", RequestStatus::Approved),
            request("c", RequestStatus::Pending),
            request("d", RequestStatus::Cancelled),
        ];
        let pending = RequestFilter::Status(RequestStatus::Pending).apply(&requests);
        assert_eq!(pending.len(), 2);
        assert_eq!(RequestFilter::All.apply(&requests).len(), 4);
        assert_eq!(pending_count(&requests), 2);
        assert_eq!(
            RequestStats::compute(&requests),
            RequestStats {
                total: 4,
                pending: 2,
                approved: 1,
                rejected: 0,
            }
        );
        assert_eq!(
            RequestFilter::Status(RequestStatus::Rejected).empty_message(),
            "No rejected requests found"
        );
    }
}
