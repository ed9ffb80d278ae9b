mod book_hall;
mod bookings;
mod dashboard;
mod requests;
mod timetable;

pub(crate) use book_hall::BookHallPage;
pub(crate) use bookings::MyBookingsPage;
pub(crate) use dashboard::LecturerDashboardPage;
pub(crate) use requests::BookingRequestsPage;
pub(crate) use timetable::TimetableViewerPage;
