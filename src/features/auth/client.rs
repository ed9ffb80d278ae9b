//! Client wrappers for `/auth` endpoints. Route code never builds these
//! requests itself, and nothing here logs passwords, codes or tokens.

use crate::{
    app_lib::{AppError, QueryParams, get_json, post_empty, post_json},
    features::auth::types::{
        AuthResponse, ForgotPasswordRequest, LoginRequest, RegisterRequest,
        ResetPasswordRequest, User, VerifyOtpRequest,
    },
};

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/register", request).await
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/login", request).await
}

/// Fetches the user behind the stored token.
pub async fn fetch_me() -> Result<User, AppError> {
    get_json("/auth/me", &QueryParams::new()).await
}

/// Confirms a lecturer's emailed OTP; the response carries the first token.
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/verify-otp", request).await
}

pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<(), AppError> {
    post_empty("/auth/forgot-password", request).await
}

pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), AppError> {
    post_empty("/auth/reset-password", request).await
}
