//! Route table. Path constants and sidebar entries are plain data; the pages
//! themselves only build for the browser.

#[cfg(target_arch = "wasm32")]
mod admin;
#[cfg(target_arch = "wasm32")]
mod auth;
#[cfg(target_arch = "wasm32")]
mod booking_form;
#[cfg(target_arch = "wasm32")]
mod halls;
#[cfg(target_arch = "wasm32")]
mod home;
#[cfg(target_arch = "wasm32")]
mod lecturer;
pub(crate) mod nav;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod options;
pub(crate) mod paths;
#[cfg(target_arch = "wasm32")]
mod representative;

#[cfg(target_arch = "wasm32")]
pub(crate) use router::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod router {
    use super::{
        admin::{
            AdminDashboardPage, AllBookingsPage, ManageHallsPage, ManageTimetablesPage,
            ManageUsersPage, VerifyRepsPage,
        },
        auth::{ForgotPasswordPage, LoginPage, RegisterPage, VerifyOtpPage},
        halls::HallsPage,
        home::HomePage,
        lecturer::{
            BookHallPage, BookingRequestsPage, LecturerDashboardPage, MyBookingsPage,
            TimetableViewerPage,
        },
        not_found::NotFoundPage,
        representative::{MyRequestsPage, RepresentativeDashboardPage, RequestBookingPage},
    };
    use crate::features::auth::{RedirectIfSignedIn, RequireRole, types::Role};
    use leptos::prelude::*;
    use leptos_router::{
        components::{Outlet, ParentRoute, Route, Routes},
        path,
    };

    const ADMIN: &[Role] = &[Role::Admin];
    const LECTURER: &[Role] = &[Role::Lecturer];
    const REPRESENTATIVE: &[Role] = &[Role::Representative];

    #[component]
    fn RoleLayout(roles: &'static [Role]) -> impl IntoView {
        view! {
            <RequireRole roles=roles>
                <Outlet />
            </RequireRole>
        }
    }

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route
                    path=path!("/login")
                    view=|| view! { <RedirectIfSignedIn><LoginPage /></RedirectIfSignedIn> }
                />
                <Route
                    path=path!("/register")
                    view=|| view! { <RedirectIfSignedIn><RegisterPage /></RedirectIfSignedIn> }
                />
                <Route path=path!("/verify-otp") view=VerifyOtpPage />
                <Route path=path!("/forgot-password") view=ForgotPasswordPage />

                <ParentRoute path=path!("/admin") view=|| view! { <RoleLayout roles=ADMIN /> }>
                    <Route path=path!("dashboard") view=AdminDashboardPage />
                    <Route path=path!("users") view=ManageUsersPage />
                    <Route path=path!("timetable") view=ManageTimetablesPage />
                    <Route path=path!("verify-reps") view=VerifyRepsPage />
                    <Route path=path!("halls") view=ManageHallsPage />
                    <Route path=path!("bookings") view=AllBookingsPage />
                </ParentRoute>

                <ParentRoute path=path!("/lecturer") view=|| view! { <RoleLayout roles=LECTURER /> }>
                    <Route path=path!("dashboard") view=LecturerDashboardPage />
                    <Route path=path!("book-hall") view=BookHallPage />
                    <Route path=path!("bookings") view=MyBookingsPage />
                    <Route path=path!("halls") view=HallsPage />
                    <Route path=path!("requests") view=BookingRequestsPage />
                    <Route path=path!("timetable") view=TimetableViewerPage />
                </ParentRoute>

                <ParentRoute path=path!("/representative") view=|| view! { <RoleLayout roles=REPRESENTATIVE /> }>
                    <Route path=path!("dashboard") view=RepresentativeDashboardPage />
                    <Route path=path!("request") view=RequestBookingPage />
                    <Route path=path!("requests") view=MyRequestsPage />
                    <Route path=path!("halls") view=HallsPage />
                </ParentRoute>
            </Routes>
        }
    }
}
