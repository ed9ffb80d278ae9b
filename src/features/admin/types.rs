//! User administration: list filters, staff creation and the dashboard
//! counters.

use crate::{
    app_lib::{AppError, QueryParams},
    features::auth::{
        forms::{LECTURER_EMAIL_DOMAIN, MIN_PASSWORD_LENGTH},
        types::{Role, User},
    },
};
use serde::{Deserialize, Serialize};

/// Filters for `GET /admin/users`; `None` means "all".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub is_verified: Option<bool>,
}

impl UserFilter {
    /// Representatives waiting for approval.
    pub fn pending_representatives() -> Self {
        Self {
            role: Some(Role::Representative),
            is_verified: Some(false),
        }
    }

    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("role", self.role)
            .push_opt("isVerified", self.is_verified)
    }
}

/// Parses the `<select>` values used by the filter bar (`all` means no filter).
pub fn parse_role_filter(value: &str) -> Option<Role> {
    match value {
        "admin" => Some(Role::Admin),
        "lecturer" => Some(Role::Lecturer),
        "representative" => Some(Role::Representative),
        _ => None,
    }
}

pub fn parse_verified_filter(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Row actions available to an admin for a listed user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserActions {
    pub verify: bool,
    pub toggle_block: bool,
    pub remove: bool,
    pub remove_admin: bool,
}

impl UserActions {
    pub fn for_user(user: &User, current_user_id: Option<&str>) -> Self {
        let is_admin = user.role == Role::Admin;
        Self {
            verify: user.role == Role::Representative && !user.is_verified,
            toggle_block: !is_admin,
            remove: !is_admin,
            remove_admin: is_admin && current_user_id != Some(user.id.as_str()),
        }
    }
}

/// Body for `POST /admin/lecturer` and `POST /admin/admin`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStaffRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Staff account created by an admin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaffForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub phone_number: String,
}

impl StaffForm {
    /// `role` is either lecturer or admin; lecturers follow the same email rule
    /// as self-registration.
    pub fn validate(&self, role: Role) -> Result<NewStaffRequest, AppError> {
        let name = self.name.trim();
        let email = self.email.trim().to_lowercase();
        if name.is_empty() || email.is_empty() {
            return Err(AppError::validation("Name and email are required."));
        }
        if role == Role::Representative {
            return Err(AppError::validation("Representatives register themselves."));
        }
        if role == Role::Lecturer && !email.ends_with(LECTURER_EMAIL_DOMAIN) {
            return Err(AppError::validation(format!(
                "Lecturers must use {LECTURER_EMAIL_DOMAIN} email"
            )));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        let department = self.department.trim();
        if role == Role::Lecturer && department.is_empty() {
            return Err(AppError::validation("Department is required."));
        }
        let phone = self.phone_number.trim();
        Ok(NewStaffRequest {
            name: name.to_string(),
            email,
            password: self.password.clone(),
            department: department.to_string(),
            phone_number: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub total_lecturers: u32,
    pub total_reps: u32,
    pub pending_reps: u32,
    pub total_bookings: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, role: Role, verified: bool) -> User {
        User {
            id: id.to_string(),
            name: "Someone".to_string(),
            email: "someone@gmail.com".to_string(),
            role,
            department: None,
            phone_number: None,
            is_verified: verified,
            is_blocked: false,
        }
    }

    #[test]
    fn filter_params() {
        assert!(UserFilter::default().params().is_empty());
        assert_eq!(
            UserFilter::pending_representatives().params().encode(),
            "role=representative&isVerified=false"
        );
        assert_eq!(parse_role_filter("all"), None);
        assert_eq!(parse_role_filter("lecturer"), Some(Role::Lecturer));
        assert_eq!(parse_verified_filter("true"), Some(true));
        assert_eq!(parse_verified_filter("all"), None);
    }

    #[test]
    fn row_actions_depend_on_role_and_verification() {
        let rep = UserActions::for_user(&user("r", Role::Representative, false), Some("a1"));
        assert!(rep.verify && rep.toggle_block && rep.remove && !rep.remove_admin);

        let lecturer = UserActions::for_user(&user("l", Role::Lecturer, false), Some("a1"));
        assert!(!lecturer.verify);

        let other_admin = UserActions::for_user(&user("a2", Role::Admin, true), Some("a1"));
        assert_eq!(
            other_admin,
            UserActions {
                remove_admin: true,
                ..UserActions::default()
            }
        );
        let me = UserActions::for_user(&user("a1", Role::Admin, true), Some("a1"));
        assert_eq!(me, UserActions::default());
    }

    #[test]
    fn staff_form_rules() {
        let mut form = StaffForm {
            name: "Dr. Silva".to_string(),
            email: "silva@usj.ac.lk".to_string(),
            password: "secret1".to_string(),
            department: "ICT".to_string(),
            phone_number: String::new(),
        };
        assert!(form.validate(Role::Lecturer).is_err());
        assert!(form.validate(Role::Admin).is_ok());

        form.email = "Silva@Gmail.com".to_string();
        let request = form.validate(Role::Lecturer).expect("valid");
        assert_eq!(request.email, "silva@gmail.com");

        form.password = "123".to_string();
        assert!(form.validate(Role::Admin).is_err());
    }

    #[test]
    fn stats_tolerate_missing_fields() {
        let stats: AdminStats = serde_json::from_str(r#"{"totalLecturers":12,"pendingReps":3}"#)
            .expect("stats");
        assert_eq!(stats.total_lecturers, 12);
        assert_eq!(stats.pending_reps, 3);
        assert_eq!(stats.total_bookings, 0);
    }
}
