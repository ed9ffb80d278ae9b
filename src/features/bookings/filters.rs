//! Date-relative views over a booking list. Comparisons use calendar days in
//! the browser's time zone; booking times within the day are ignored.

use super::types::{Booking, BookingStatus};
use crate::app_lib::dates;
use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl BookingFilter {
    pub const ALL: [BookingFilter; 3] = [
        BookingFilter::All,
        BookingFilter::Upcoming,
        BookingFilter::Past,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BookingFilter::All => "All Bookings",
            BookingFilter::Upcoming => "Upcoming",
            BookingFilter::Past => "Past",
        }
    }

    pub fn matches(self, booking: &Booking, today: NaiveDate) -> bool {
        let active = booking.status == BookingStatus::Active;
        match self {
            BookingFilter::All => true,
            BookingFilter::Upcoming => active && on_or_after(booking, today),
            BookingFilter::Past => !active || !on_or_after(booking, today),
        }
    }

    pub fn apply<'a>(self, bookings: &'a [Booking], today: NaiveDate) -> Vec<&'a Booking> {
        bookings
            .iter()
            .filter(|booking| self.matches(booking, today))
            .collect()
    }
}

/// Unparsable dates count as past so they never offer a cancel action.
fn on_or_after(booking: &Booking, today: NaiveDate) -> bool {
    dates::parse_day(&booking.date).is_some_and(|day| day >= today)
}

/// Active bookings for today or later can still be cancelled.
pub fn can_cancel(booking: &Booking, today: NaiveDate) -> bool {
    booking.status == BookingStatus::Active && on_or_after(booking, today)
}

/// Numbers on the lecturer dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LecturerStats {
    pub active_bookings: usize,
    pub pending_requests: usize,
    /// Active bookings strictly after today.
    pub upcoming_bookings: usize,
}

impl LecturerStats {
    pub fn compute(bookings: &[Booking], pending_requests: usize, today: NaiveDate) -> Self {
        let active = || {
            bookings
                .iter()
                .filter(|booking| booking.status == BookingStatus::Active)
        };
        Self {
            active_bookings: active().count(),
            pending_requests,
            upcoming_bookings: active()
                .filter(|booking| dates::parse_day(&booking.date).is_some_and(|day| day > today))
                .count(),
        }
    }
}

/// Dashboards show the first few records in the order the API returns them.
pub const RECENT_LIMIT: usize = 5;

pub fn recent<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(RECENT_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::refs::Ref;

    fn booking(id: &str, date: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            hall: Some(Ref::Id("h1".to_string())),
            lecturer: None,
            date: date.to_string(),
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
            purpose: "Lecture".to_string(),
            status,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).expect("date")
    }

    fn ids(list: Vec<&Booking>) -> Vec<&str> {
        list.into_iter().map(|booking| booking.id.as_str()).collect()
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking("yesterday", "2025-03-13", BookingStatus::Active),
            booking("today", "2025-03-14T00:00:00.000Z", BookingStatus::Active),
            booking("tomorrow", "2025-03-15", BookingStatus::Active),
            booking("cancelled", "2025-03-20", BookingStatus::Cancelled),
            booking("garbled", "soon", BookingStatus::Active),
        ]
    }

    #[test]
    fn upcoming_and_past_partition_the_list() {
        let bookings = sample();
        assert_eq!(
            ids(BookingFilter::Upcoming.apply(&bookings, today())),
            vec!["today", "tomorrow"]
        );
        assert_eq!(
            ids(BookingFilter::Past.apply(&bookings, today())),
            vec!["yesterday", "cancelled", "garbled"]
        );
        assert_eq!(
            BookingFilter::All.apply(&bookings, today()).len(),
            bookings.len()
        );
    }

    #[test]
    fn cancel_is_offered_for_active_future_bookings() {
        let bookings = sample();
        let cancellable: Vec<_> = bookings
            .iter()
            .filter(|booking| can_cancel(booking, today()))
            .map(|booking| booking.id.as_str())
            .collect();
        assert_eq!(cancellable, vec!["today", "tomorrow"]);
    }

    #[test]
    fn lecturer_stats_count_strictly_future_as_upcoming() {
        let stats = LecturerStats::compute(&sample(), 2, today());
        assert_eq!(
            stats,
            LecturerStats {
                active_bookings: 4,
                pending_requests: 2,
                upcoming_bookings: 1,
            }
        );
    }

    #[test]
    fn recent_caps_at_five() {
        let numbers: Vec<u8> = (0..8).collect();
        assert_eq!(recent(&numbers), &[0, 1, 2, 3, 4]);
        assert_eq!(recent(&numbers[..2]), &[0, 1]);
    }
}
