//! Route paths shared by the router, navigation and redirects.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const VERIFY_OTP: &str = "/verify-otp";
pub const FORGOT_PASSWORD: &str = "/forgot-password";

pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_TIMETABLE: &str = "/admin/timetable";
pub const ADMIN_VERIFY_REPS: &str = "/admin/verify-reps";
pub const ADMIN_HALLS: &str = "/admin/halls";
pub const ADMIN_BOOKINGS: &str = "/admin/bookings";

pub const LECTURER_DASHBOARD: &str = "/lecturer/dashboard";
pub const LECTURER_BOOK_HALL: &str = "/lecturer/book-hall";
pub const LECTURER_BOOKINGS: &str = "/lecturer/bookings";
pub const LECTURER_HALLS: &str = "/lecturer/halls";
pub const LECTURER_REQUESTS: &str = "/lecturer/requests";
pub const LECTURER_TIMETABLE: &str = "/lecturer/timetable";

pub const REP_DASHBOARD: &str = "/representative/dashboard";
pub const REP_REQUEST: &str = "/representative/request";
pub const REP_REQUESTS: &str = "/representative/requests";
pub const REP_HALLS: &str = "/representative/halls";
