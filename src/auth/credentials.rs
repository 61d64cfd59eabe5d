//! Pure lookups over a user collection. Both comparisons are exact and case-sensitive.

use crate::models::User;

/// Returns `true` if any user is registered under `email`.
pub fn email_exists(users: &[User], email: &str) -> bool {
    users.iter().any(|user| user.email == email)
}

/// Returns `true` if some user has exactly this email and password.
pub fn check_credentials(users: &[User], email: &str, password: &str) -> bool {
    users
        .iter()
        .any(|user| user.email == email && user.password == password)
}
