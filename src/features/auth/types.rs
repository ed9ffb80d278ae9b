//! Request and response types for `/auth` endpoints plus the role model shared
//! by guards, navigation and dashboards.

use crate::routes::paths;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Lecturer,
    Representative,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Lecturer => "lecturer",
            Role::Representative => "representative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Lecturer => "Lecturer",
            Role::Representative => "Representative",
        }
    }

    /// Landing page for the role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => paths::ADMIN_DASHBOARD,
            Role::Lecturer => paths::LECTURER_DASHBOARD,
            Role::Representative => paths::REP_DASHBOARD,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// The signed-in account as returned by `/auth/me` and login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_blocked: bool,
}

impl User {
    /// Admins are never gated on verification.
    pub fn needs_verification(&self) -> bool {
        !self.is_verified && self.role != Role::Admin
    }
}

/// Token plus user returned by login, OTP verification and registration.
/// Registration omits the token until the account is verified.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_backend_shape() {
        let json = r#"{
            "_id": "65a1",
            "name": "Nimal",
            "email": "nimal@gmail.com",
            "role": "lecturer",
            "department": "ICT",
            "isVerified": false
        }"#;
        let user: User = serde_json::from_str(json).expect("user");
        assert_eq!(user.role, Role::Lecturer);
        assert!(!user.is_blocked);
        assert!(user.needs_verification());
    }

    #[test]
    fn admins_skip_verification() {
        let json = r#"{"id":"1","name":"Root","email":"root@usj.ac.lk","role":"admin"}"#;
        let user: User = serde_json::from_str(json).expect("user");
        assert!(!user.needs_verification());
        assert_eq!(user.role.dashboard_path(), "/admin/dashboard");
    }

    #[test]
    fn register_request_uses_camel_case() {
        let request = RegisterRequest {
            name: "Kumari".to_string(),
            email: "kumari@gmail.com".to_string(),
            password: "secret1".to_string(),
            role: Role::Representative,
            department: "ET".to_string(),
            phone_number: Some("0771234567".to_string()),
        };
        let json = serde_json::to_value(&request).expect("encode");
        assert_eq!(json["role"], "representative");
        assert_eq!(json["phoneNumber"], "0771234567");

        let reset = ResetPasswordRequest {
            email: "kumari@gmail.com".to_string(),
            code: "123456".to_string(),
            new_password: "secret2".to_string(),
        };
        let json = serde_json::to_value(&reset).expect("encode");
        assert_eq!(json["newPassword"], "secret2");
    }

    #[test]
    fn auth_response_token_is_optional() {
        let json = r#"{"user":{"_id":"2","name":"Rep","email":"rep@x.lk","role":"representative"}}"#;
        let response: AuthResponse = serde_json::from_str(json).expect("response");
        assert_eq!(response.token, None);
        assert_eq!(response.user.role, Role::Representative);
    }
}
