mod dashboard;
mod request;
mod requests;

pub(crate) use dashboard::RepresentativeDashboardPage;
pub(crate) use request::RequestBookingPage;
pub(crate) use requests::MyRequestsPage;
