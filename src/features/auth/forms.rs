//! Client-side checks for the public auth forms. They give early feedback only;
//! the backend re-validates everything.

use super::types::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest, Role,
    VerifyOtpRequest,
};
use crate::app_lib::AppError;
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Lecturer accounts must use this mail domain so OTP delivery works.
pub const LECTURER_EMAIL_DOMAIN: &str = "@gmail.com";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static OTP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid otp regex"));

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn require_email(email: &str) -> Result<String, AppError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(AppError::validation("Email is required."));
    }
    if !EMAIL_RE.is_match(&email) {
        return Err(AppError::validation("Enter a valid email address."));
    }
    Ok(email)
}

fn require_otp(code: &str) -> Result<String, AppError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::validation("Email and OTP are required"));
    }
    if !OTP_RE.is_match(code) {
        return Err(AppError::validation("The OTP is the 6-digit code from your email."));
    }
    Ok(code.to_string())
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, AppError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::validation("Email and password are required."));
        }
        Ok(LoginRequest {
            email: normalize_email(&self.email),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub department: String,
    pub phone_number: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Lecturer,
            department: String::new(),
            phone_number: String::new(),
        }
    }
}

impl RegisterForm {
    /// Roles that may self-register; admins are created by other admins.
    pub const ROLES: [Role; 2] = [Role::Lecturer, Role::Representative];

    pub fn validate(&self) -> Result<RegisterRequest, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Full name is required."));
        }
        let email = require_email(&self.email)?;
        if self.password != self.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if !Self::ROLES.contains(&self.role) {
            return Err(AppError::validation("Select a lecturer or representative role."));
        }
        if self.role == Role::Lecturer && !email.ends_with(LECTURER_EMAIL_DOMAIN) {
            return Err(AppError::validation(format!(
                "Lecturers must use {LECTURER_EMAIL_DOMAIN} email"
            )));
        }
        let department = self.department.trim();
        if department.is_empty() {
            return Err(AppError::validation("Department is required."));
        }
        let phone = self.phone_number.trim();

        Ok(RegisterRequest {
            name: name.to_string(),
            email,
            password: self.password.clone(),
            role: self.role,
            department: department.to_string(),
            phone_number: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct OtpForm {
    pub email: String,
    pub code: String,
}

impl OtpForm {
    pub fn validate(&self) -> Result<VerifyOtpRequest, AppError> {
        if self.email.trim().is_empty() || self.code.trim().is_empty() {
            return Err(AppError::validation("Email and OTP are required"));
        }
        Ok(VerifyOtpRequest {
            email: require_email(&self.email)?,
            code: require_otp(&self.code)?,
        })
    }
}

/// Two-step password recovery: request a code, then reset with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryStep {
    Request,
    Reset,
}

#[derive(Clone, Debug, Default)]
pub struct RecoveryForm {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

impl RecoveryForm {
    pub fn validate_request(&self) -> Result<ForgotPasswordRequest, AppError> {
        if self.email.trim().is_empty() {
            return Err(AppError::validation("Please enter your registered email"));
        }
        Ok(ForgotPasswordRequest {
            email: require_email(&self.email)?,
        })
    }

    pub fn validate_reset(&self) -> Result<ResetPasswordRequest, AppError> {
        if self.email.trim().is_empty()
            || self.code.trim().is_empty()
            || self.new_password.is_empty()
        {
            return Err(AppError::validation("All fields are required"));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        Ok(ResetPasswordRequest {
            email: require_email(&self.email)?,
            code: require_otp(&self.code)?,
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form() -> RegisterForm {
        RegisterForm {
            name: "Nimal Silva".to_string(),
            email: "Nimal@Gmail.com ".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            role: Role::Lecturer,
            department: "ICT".to_string(),
            phone_number: String::new(),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            email: "  ".to_string(),
            password: "x".to_string(),
        };
        assert!(form.validate().is_err());

        let form = LoginForm {
            email: " Admin@USJ.ac.lk".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(form.validate().expect("valid").email, "admin@usj.ac.lk");
    }

    #[test]
    fn register_accepts_valid_lecturer() {
        let request = register_form().validate().expect("valid form");
        assert_eq!(request.email, "nimal@gmail.com");
        assert_eq!(request.phone_number, None);
        assert_eq!(request.role, Role::Lecturer);
    }

    #[test]
    fn register_rejects_mismatched_passwords() {
        let mut form = register_form();
        form.confirm_password = "secret2".to_string();
        assert_eq!(
            form.validate(),
            Err(AppError::validation("Passwords do not match"))
        );
    }

    #[test]
    fn register_rejects_short_passwords() {
        let mut form = register_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        assert_eq!(
            form.validate(),
            Err(AppError::validation("Password must be at least 6 characters"))
        );
    }

    #[test]
    fn lecturers_need_gmail_but_representatives_do_not() {
        let mut form = register_form();
        form.email = "nimal@usj.ac.lk".to_string();
        assert_eq!(
            form.validate(),
            Err(AppError::validation("Lecturers must use @gmail.com email"))
        );

        form.role = Role::Representative;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn register_rejects_admin_role_and_missing_department() {
        let mut form = register_form();
        form.role = Role::Admin;
        assert!(form.validate().is_err());

        let mut form = register_form();
        form.department = String::new();
        assert_eq!(
            form.validate(),
            Err(AppError::validation("Department is required."))
        );
    }

    #[test]
    fn otp_must_be_six_digits() {
        let form = OtpForm {
            email: "nimal@gmail.com".to_string(),
            code: "12345".to_string(),
        };
        assert!(form.validate().is_err());

        let form = OtpForm {
            email: "nimal@gmail.com".to_string(),
            code: " 123456 ".to_string(),
        };
        assert_eq!(form.validate().expect("valid").code, "123456");

        let form = OtpForm::default();
        assert_eq!(
            form.validate(),
            Err(AppError::validation("Email and OTP are required"))
        );
    }

    #[test]
    fn recovery_steps_validate_their_own_fields() {
        let mut form = RecoveryForm::default();
        assert!(form.validate_request().is_err());

        form.email = "rep@gmail.com".to_string();
        assert!(form.validate_request().is_ok());
        assert_eq!(
            form.validate_reset(),
            Err(AppError::validation("All fields are required"))
        );

        form.code = "654321".to_string();
        form.new_password = "short".to_string();
        assert!(form.validate_reset().is_err());

        form.new_password = "longer-password".to_string();
        let request = form.validate_reset().expect("valid reset");
        assert_eq!(request.new_password, "longer-password");
    }
}
