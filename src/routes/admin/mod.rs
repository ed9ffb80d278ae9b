mod bookings;
mod dashboard;
mod halls;
mod timetables;
mod users;
mod verify_reps;

pub(crate) use bookings::AllBookingsPage;
pub(crate) use dashboard::AdminDashboardPage;
pub(crate) use halls::ManageHallsPage;
pub(crate) use timetables::ManageTimetablesPage;
pub(crate) use users::ManageUsersPage;
pub(crate) use verify_reps::VerifyRepsPage;
