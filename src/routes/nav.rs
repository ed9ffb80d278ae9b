//! Sidebar entries per role.

use super::paths;
use crate::features::auth::types::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    /// Material Symbols glyph name.
    pub icon: &'static str,
    pub label: &'static str,
}

const fn link(path: &'static str, icon: &'static str, label: &'static str) -> NavLink {
    NavLink { path, icon, label }
}

const ADMIN_LINKS: [NavLink; 6] = [
    link(paths::ADMIN_DASHBOARD, "home", "Dashboard"),
    link(paths::ADMIN_USERS, "group", "Manage Users"),
    link(paths::ADMIN_VERIFY_REPS, "how_to_reg", "Verify Representatives"),
    link(paths::ADMIN_TIMETABLE, "calendar_month", "Manage Timetables"),
    link(paths::ADMIN_HALLS, "meeting_room", "Manage Halls"),
    link(paths::ADMIN_BOOKINGS, "book", "All Bookings"),
];

const LECTURER_LINKS: [NavLink; 6] = [
    link(paths::LECTURER_DASHBOARD, "home", "Dashboard"),
    link(paths::LECTURER_BOOK_HALL, "book", "Book Hall"),
    link(paths::LECTURER_BOOKINGS, "assignment", "My Bookings"),
    link(paths::LECTURER_REQUESTS, "mail", "Booking Requests"),
    link(paths::LECTURER_HALLS, "meeting_room", "View Halls"),
    link(paths::LECTURER_TIMETABLE, "calendar_month", "Timetables"),
];

const REP_LINKS: [NavLink; 4] = [
    link(paths::REP_DASHBOARD, "home", "Dashboard"),
    link(paths::REP_REQUEST, "mail", "Request Booking"),
    link(paths::REP_REQUESTS, "assignment", "My Requests"),
    link(paths::REP_HALLS, "meeting_room", "View Halls"),
];

pub fn nav_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::Admin => &ADMIN_LINKS,
        Role::Lecturer => &LECTURER_LINKS,
        Role::Representative => &REP_LINKS,
    }
}

/// Whether a sidebar entry should render as the current page.
pub fn is_active(link: &NavLink, pathname: &str) -> bool {
    pathname == link.path || pathname.starts_with(&format!("{}/", link.path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_starts_at_its_dashboard() {
        for role in [Role::Admin, Role::Lecturer, Role::Representative] {
            assert_eq!(nav_links(role)[0].path, role.dashboard_path());
        }
    }

    #[test]
    fn links_stay_inside_the_role_prefix() {
        for role in [Role::Admin, Role::Lecturer, Role::Representative] {
            let prefix = format!("/{}/", role.as_str());
            assert!(nav_links(role).iter().all(|link| link.path.starts_with(&prefix)));
        }
    }

    #[test]
    fn active_matching_is_segment_aware() {
        let halls = nav_links(Role::Admin)[4];
        assert!(is_active(&halls, "/admin/halls"));
        assert!(!is_active(&halls, "/admin/hallsx"));
        assert!(!is_active(&halls, "/admin/dashboard"));
    }
}
