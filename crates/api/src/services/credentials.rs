//! Credential service.
//!
//! Signup and signin against the user store. Passwords are stored as
//! salted argon2 hashes; the original interface was plain string equality,
//! which this deliberately replaces. Signin does not distinguish an
//! unknown username from a wrong password.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;
use thiserror::Error;

use ladle_core::Username;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::UserView;

/// Errors that can occur during credential operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Missing required input.
    #[error("{0}")]
    Validation(String),

    /// The username is already taken.
    #[error("username already taken")]
    Conflict,

    /// Credential mismatch. Unknown username and wrong password report
    /// the same way.
    #[error("invalid credentials")]
    Unauthorized,

    /// Password hashing failed.
    #[error("password hashing error")]
    PasswordHash,

    /// Store/database error.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Credential service.
///
/// Handles user signup and signin. There is no server-side session, so
/// logout is a stateless acknowledgment.
pub struct CredentialService<'a> {
    users: UserRepository<'a>,
}

impl<'a> CredentialService<'a> {
    /// Create a new credential service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// Returns the public view; the password hash is never echoed back.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Validation` if either input is empty and
    /// `CredentialError::Conflict` if the username already exists; the
    /// existing record is left untouched.
    pub async fn signup(&self, username: &str, password: &str) -> Result<UserView, CredentialError> {
        let username = validate_credentials(username, password)?;

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(CredentialError::Conflict);
        }

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .insert(&username, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => CredentialError::Conflict,
                other => CredentialError::Repository(other),
            })?;

        Ok(user.view())
    }

    /// Verify a user's claimed identity.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Validation` if either input is empty and
    /// `CredentialError::Unauthorized` on any mismatch.
    pub async fn signin(&self, username: &str, password: &str) -> Result<UserView, CredentialError> {
        let username = validate_credentials(username, password)?;

        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or(CredentialError::Unauthorized)?;

        verify_password(password, &user.password_hash)?;

        Ok(user.view())
    }

    /// Acknowledge a logout.
    ///
    /// There is no server-side session or token to invalidate; this exists
    /// so the client flow has an explicit end.
    pub const fn logout() {}
}

/// Both fields are required; the username must also parse.
fn validate_credentials(username: &str, password: &str) -> Result<Username, CredentialError> {
    if username.is_empty() || password.is_empty() {
        return Err(CredentialError::Validation(
            "username and password are required".to_owned(),
        ));
    }

    Username::parse(username).map_err(|e| CredentialError::Validation(e.to_string()))
}

/// Hash a password with a fresh random salt.
fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| CredentialError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, stored_hash: &str) -> Result<(), CredentialError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| CredentialError::PasswordHash)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| CredentialError::Unauthorized)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_signup_then_signin() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(&pool);

        let created = credentials.signup("alice", "hunter2-long").await.unwrap();
        assert_eq!(created.username.as_str(), "alice");

        let signed_in = credentials.signin("alice", "hunter2-long").await.unwrap();
        assert_eq!(signed_in, created);
    }

    #[tokio::test]
    async fn test_signup_rejects_empty_input() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(&pool);

        for (username, password) in [("", "pw"), ("alice", ""), ("", "")] {
            let err = credentials.signup(username, password).await.unwrap_err();
            assert!(matches!(err, CredentialError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_duplicate_signup_conflicts_and_preserves_record() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(&pool);

        credentials.signup("alice", "original-pw").await.unwrap();

        let err = credentials.signup("alice", "other-pw").await.unwrap_err();
        assert!(matches!(err, CredentialError::Conflict));

        // The original credentials still work; the conflicting signup
        // changed nothing.
        assert!(credentials.signin("alice", "original-pw").await.is_ok());
        assert!(matches!(
            credentials.signin("alice", "other-pw").await.unwrap_err(),
            CredentialError::Unauthorized
        ));
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(&pool);

        credentials.signup("alice", "correct").await.unwrap();

        let err = credentials.signin("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, CredentialError::Unauthorized));
    }

    #[tokio::test]
    async fn test_unknown_username_is_unauthorized() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(&pool);

        let err = credentials.signin("nobody", "whatever").await.unwrap_err();
        assert!(matches!(err, CredentialError::Unauthorized));
    }

    #[tokio::test]
    async fn test_usernames_are_case_sensitive() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(&pool);

        credentials.signup("Alice", "pw-12345").await.unwrap();

        // Different case is a different (unknown) user.
        assert!(matches!(
            credentials.signin("alice", "pw-12345").await.unwrap_err(),
            CredentialError::Unauthorized
        ));
        assert!(credentials.signup("alice", "pw-12345").await.is_ok());
    }
}
