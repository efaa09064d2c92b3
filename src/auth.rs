//! Placeholder sign-in. Any non-empty credentials are accepted and answered
//! with a fixed admin user and a mock token; nothing is checked or stored.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::error::ApiError;

pub const LOGIN_MISSING_FIELDS: &str = "Username/email and password are required";
pub const RESET_MISSING_EMAIL: &str = "Email is required";
pub const RESET_SENT: &str =
    "If this email exists, you will receive a password reset link shortly.";

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub username_or_email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordResetRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

pub fn login(req: &LoginRequest) -> Result<AuthResponse, ApiError> {
    if req.username_or_email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(LOGIN_MISSING_FIELDS.into()));
    }
    info!(user = %req.username_or_email, "login accepted");
    Ok(AuthResponse {
        success: true,
        message: "Login successful".into(),
        user: Some(AuthUser {
            id: "1".into(),
            name: "Admin User".into(),
            email: "admin@istudent.com".into(),
            role: "admin".into(),
        }),
        token: Some(format!("mock-jwt-token-{}", Utc::now().timestamp_millis())),
    })
}

pub fn request_password_reset(req: &PasswordResetRequest) -> Result<AuthResponse, ApiError> {
    if req.email.is_empty() {
        return Err(ApiError::BadRequest(RESET_MISSING_EMAIL.into()));
    }
    info!("password reset requested");
    Ok(AuthResponse {
        success: true,
        message: RESET_SENT.into(),
        user: None,
        token: None,
    })
}
