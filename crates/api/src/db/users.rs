//! User repository for database operations.

use sqlx::SqlitePool;

use ladle_core::{UserId, Username};

use super::RepositoryError;
use crate::models::User;

/// Raw row shape for the `users` table.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = row
            .id
            .parse::<UserId>()
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid user id: {e}")))?;

        let username = Username::parse(&row.username)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid username: {e}")))?;

        Ok(Self {
            id,
            username,
            password_hash: row.password_hash,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// The user with `username` (exact, case-sensitive match), if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored row is invalid.
    pub async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash FROM users WHERE username = ?",
        )
        .bind(username.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Insert a new user, assigning its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let id = UserId::generate();

        sqlx::query("INSERT INTO users (id, username, password_hash) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(username.as_str())
            .bind(password_hash)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    RepositoryError::Conflict(format!("username {username} already exists"))
                } else {
                    RepositoryError::Database(e)
                }
            })?;

        Ok(User {
            id,
            username: username.clone(),
            password_hash: password_hash.to_owned(),
        })
    }
}
