//! User credential records.

use serde::{Deserialize, Serialize};

use ladle_core::{UserId, Username};

/// A stored user.
///
/// Created once at signup, read during signin, never mutated or deleted.
/// The password hash stays inside the service layer; anything crossing the
/// HTTP boundary is a [`UserView`].
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned id.
    pub id: UserId,
    /// Unique, case-sensitive username.
    pub username: Username,
    /// Argon2 hash of the password.
    pub password_hash: String,
}

impl User {
    /// The public view of this user.
    #[must_use]
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// The public fields of a user, safe to echo to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    /// Store-assigned id.
    pub id: UserId,
    /// The user's username.
    pub username: Username,
}
