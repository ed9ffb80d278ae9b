//! Route access decisions. Guards render whatever these functions return; the
//! API remains the real authority.

use super::types::{Role, User};
use crate::routes::paths;

/// Outcome of checking the current session against a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session hydration is still running.
    Loading,
    RedirectLogin,
    /// Signed in, but the route belongs to another role.
    RedirectHome,
    /// Lecturer who has not confirmed the emailed OTP yet.
    AwaitingOtp,
    /// Representative waiting for an admin to verify the account.
    AwaitingApproval,
    Granted,
}

pub fn access_decision(is_loading: bool, user: Option<&User>, allowed: &[Role]) -> Access {
    if is_loading {
        return Access::Loading;
    }
    let Some(user) = user else {
        return Access::RedirectLogin;
    };
    if !allowed.is_empty() && !allowed.contains(&user.role) {
        return Access::RedirectHome;
    }
    if user.needs_verification() {
        return match user.role {
            Role::Lecturer => Access::AwaitingOtp,
            _ => Access::AwaitingApproval,
        };
    }
    Access::Granted
}

/// Where to go after login or registration.
///
/// A session is only established for verified users that came back with a
/// token; everyone else is sent to finish verification.
pub fn landing_path(user: &User, has_token: bool) -> &'static str {
    if has_token && !user.needs_verification() {
        return user.role.dashboard_path();
    }
    match user.role {
        Role::Lecturer => paths::VERIFY_OTP,
        Role::Representative => paths::LOGIN,
        Role::Admin => user.role.dashboard_path(),
    }
}

/// Notice shown after a registration that did not sign the user in.
pub fn registration_notice(role: Role) -> &'static str {
    match role {
        Role::Lecturer => "Registration successful. Check your email for the OTP.",
        Role::Representative => {
            "Registration successful. Wait for admin approval before signing in."
        }
        Role::Admin => "Registration successful.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, verified: bool) -> User {
        User {
            id: "u1".to_string(),
            name: "Test".to_string(),
            email: "test@gmail.com".to_string(),
            role,
            department: None,
            phone_number: None,
            is_verified: verified,
            is_blocked: false,
        }
    }

    #[test]
    fn loading_wins_over_everything() {
        let admin = user(Role::Admin, true);
        assert_eq!(access_decision(true, Some(&admin), &[Role::Admin]), Access::Loading);
        assert_eq!(access_decision(true, None, &[]), Access::Loading);
    }

    #[test]
    fn anonymous_users_go_to_login() {
        assert_eq!(access_decision(false, None, &[Role::Lecturer]), Access::RedirectLogin);
    }

    #[test]
    fn wrong_role_goes_home_before_verification_checks() {
        let rep = user(Role::Representative, false);
        assert_eq!(access_decision(false, Some(&rep), &[Role::Admin]), Access::RedirectHome);
    }

    #[test]
    fn unverified_accounts_are_held_back() {
        let lecturer = user(Role::Lecturer, false);
        assert_eq!(
            access_decision(false, Some(&lecturer), &[Role::Lecturer]),
            Access::AwaitingOtp
        );

        let rep = user(Role::Representative, false);
        assert_eq!(
            access_decision(false, Some(&rep), &[Role::Representative]),
            Access::AwaitingApproval
        );

        let admin = user(Role::Admin, false);
        assert_eq!(access_decision(false, Some(&admin), &[Role::Admin]), Access::Granted);
    }

    #[test]
    fn empty_role_list_allows_any_signed_in_user() {
        let lecturer = user(Role::Lecturer, true);
        assert_eq!(access_decision(false, Some(&lecturer), &[]), Access::Granted);
    }

    #[test]
    fn landing_path_depends_on_verification() {
        assert_eq!(landing_path(&user(Role::Lecturer, true), true), "/lecturer/dashboard");
        assert_eq!(landing_path(&user(Role::Lecturer, false), false), "/verify-otp");
        assert_eq!(landing_path(&user(Role::Representative, false), false), "/login");
        assert_eq!(landing_path(&user(Role::Representative, true), false), "/login");
        assert_eq!(
            landing_path(&user(Role::Representative, true), true),
            "/representative/dashboard"
        );
    }
}
