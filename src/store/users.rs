use std::sync::{Mutex, MutexGuard};

use log::{info, warn};

use super::IdSequence;
use crate::auth::{check_credentials, email_exists, RegisterRequest};
use crate::error::AppError;
use crate::models::{User, UserProfile};

pub const EMAIL_EXISTS_MESSAGE: &str = "Email already exists";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Password does not match";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found, please register first";
pub const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect password";

#[derive(Debug)]
struct UserState {
    users: Vec<User>,
    ids: IdSequence,
}

/// Ordered collection of registered users. Users are only ever appended.
#[derive(Debug)]
pub struct UserStore {
    state: Mutex<UserState>,
}

impl UserStore {
    pub fn new(seed: Vec<User>) -> Self {
        let ids = IdSequence::after(seed.iter().map(|user| user.id.as_str()));
        Self {
            state: Mutex::new(UserState { users: seed, ids }),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn lock(&self) -> Result<MutexGuard<'_, UserState>, AppError> {
        self.state
            .lock()
            .map_err(|_| AppError::InternalServerError("User store lock poisoned".into()))
    }

    /// Registers a new user and returns its public profile.
    ///
    /// The duplicate-email check runs before the password confirmation check, so a
    /// taken email is always reported as a conflict. Presence of email and password
    /// must be validated by the caller.
    pub fn register(&self, request: RegisterRequest) -> Result<UserProfile, AppError> {
        let mut state = self.lock()?;

        if email_exists(&state.users, &request.email) {
            warn!("Registration rejected, email already taken");
            return Err(AppError::Conflict(EMAIL_EXISTS_MESSAGE.into()));
        }
        if request.password != request.confirm_password {
            return Err(AppError::BadRequest(PASSWORD_MISMATCH_MESSAGE.into()));
        }

        let user = User {
            id: state.ids.next_id(),
            name: request.name,
            email: request.email,
            password: request.password,
        };
        let profile = UserProfile::from(&user);
        state.users.push(user);

        info!("Registered user {}", profile.id);
        Ok(profile)
    }

    /// Checks an email/password pair against the registered users.
    ///
    /// An unknown email is `NotFound`; a known email with the wrong password is `Forbidden`.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<(), AppError> {
        let state = self.lock()?;

        if !email_exists(&state.users, email) {
            return Err(AppError::NotFound(USER_NOT_FOUND_MESSAGE.into()));
        }
        if !check_credentials(&state.users, email, password) {
            warn!("Login rejected, incorrect password");
            return Err(AppError::Forbidden(INCORRECT_PASSWORD_MESSAGE.into()));
        }
        Ok(())
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.users.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registration(email: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ada".into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    fn seeded() -> UserStore {
        UserStore::new(vec![User {
            id: "1".into(),
            name: "Admin".into(),
            email: "admin@example.com".into(),
            password: "admin123".into(),
        }])
    }

    #[test_log::test]
    fn test_register_returns_profile_with_next_id() {
        let store = seeded();
        let profile = store
            .register(registration("ada@example.com", "engine", "engine"))
            .unwrap();

        assert_eq!(
            profile,
            UserProfile {
                id: "2".into(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
            }
        );
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_duplicate_email_conflicts_regardless_of_other_fields() {
        let store = seeded();
        // Even a mismatched confirmation reports the conflict first.
        for request in [
            registration("admin@example.com", "x", "x"),
            registration("admin@example.com", "x", "y"),
        ] {
            assert_eq!(
                store.register(request),
                Err(AppError::Conflict(EMAIL_EXISTS_MESSAGE.into()))
            );
        }
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_password_mismatch() {
        let store = UserStore::empty();
        assert_eq!(
            store.register(registration("ada@example.com", "a", "b")),
            Err(AppError::BadRequest(PASSWORD_MISMATCH_MESSAGE.into()))
        );
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_authenticate() {
        let store = seeded();
        assert_eq!(store.authenticate("admin@example.com", "admin123"), Ok(()));
        assert_eq!(
            store.authenticate("admin@example.com", "wrong"),
            Err(AppError::Forbidden(INCORRECT_PASSWORD_MESSAGE.into()))
        );
        assert_eq!(
            store.authenticate("ghost@example.com", "admin123"),
            Err(AppError::NotFound(USER_NOT_FOUND_MESSAGE.into()))
        );
    }

    #[test]
    fn test_registered_user_can_authenticate() {
        let store = UserStore::empty();
        store
            .register(registration("ada@example.com", "engine", "engine"))
            .unwrap();
        assert!(store.authenticate("ada@example.com", "engine").is_ok());
    }
}
