pub mod credentials;
pub mod token;

use serde::Deserialize;
use validator::Validate;

pub use credentials::{check_credentials, email_exists};
pub use token::{generate_token, LOGIN_TOKEN_BYTES};

/// Returned by both auth endpoints when the email or password is empty or absent.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Username or password is missing";

/// Represents the payload for a user login request.
///
/// Absent fields deserialize to empty strings and fail validation like empty ones.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name. Not validated; an absent name is stored as the empty string.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
    /// Must equal `password`. Checked by the user store after the duplicate-email check.
    #[serde(rename = "confirmPassword", default)]
    pub confirm_password: String,
}
