//! Food repository for database operations.
//!
//! Rows are stored with string-encoded domain values (UUID ids, decimal
//! prices, data-URL images) and decoded back through the core types; a row
//! that fails to decode is reported as `DataCorruption` rather than leaking
//! a raw value.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use ladle_core::{EmbeddedImage, FoodId, Price};

use super::RepositoryError;
use crate::models::Food;

/// Raw row shape for the `foods` table.
#[derive(Debug, sqlx::FromRow)]
struct FoodRow {
    id: String,
    name: String,
    price: String,
    image: String,
    description: String,
    created_at: i64,
}

impl TryFrom<FoodRow> for Food {
    type Error = RepositoryError;

    fn try_from(row: FoodRow) -> Result<Self, Self::Error> {
        let id = row
            .id
            .parse::<FoodId>()
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid food id: {e}")))?;

        let price = Price::parse(&row.price)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid price: {e}")))?;

        let image = EmbeddedImage::parse(&row.image)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid image: {e}")))?;

        let created_at = DateTime::from_timestamp_micros(row.created_at).ok_or_else(|| {
            RepositoryError::DataCorruption(format!("invalid created_at: {}", row.created_at))
        })?;

        Ok(Self {
            id,
            name: row.name,
            price,
            image,
            description: row.description,
            created_at,
        })
    }
}

/// Repository for food database operations.
pub struct FoodRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FoodRepository<'a> {
    /// Create a new food repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new food, assigning its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        name: &str,
        price: Price,
        image: &EmbeddedImage,
        description: &str,
    ) -> Result<Food, RepositoryError> {
        let id = FoodId::generate();
        // Truncate to microseconds so the returned record equals what a
        // later read decodes from the stored column.
        let now = Utc::now();
        let created_at = DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now);

        sqlx::query(
            "INSERT INTO foods (id, name, price, image, description, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(name)
        .bind(price.to_string())
        .bind(image.as_str())
        .bind(description)
        .bind(created_at.timestamp_micros())
        .execute(self.pool)
        .await?;

        Ok(Food {
            id,
            name: name.to_owned(),
            price,
            image: image.clone(),
            description: description.to_owned(),
            created_at,
        })
    }

    /// All foods, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored row is invalid.
    pub async fn find_all(&self) -> Result<Vec<Food>, RepositoryError> {
        let rows = sqlx::query_as::<_, FoodRow>(
            "SELECT id, name, price, image, description, created_at
             FROM foods
             ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Food::try_from).collect()
    }

    /// The food with `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored row is invalid.
    pub async fn find_by_id(&self, id: FoodId) -> Result<Option<Food>, RepositoryError> {
        let row = sqlx::query_as::<_, FoodRow>(
            "SELECT id, name, price, image, description, created_at
             FROM foods
             WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool)
        .await?;

        row.map(Food::try_from).transpose()
    }

    /// Replace the four mutable fields of the food with `id`.
    ///
    /// `id` and `created_at` are never touched. Returns `None` when no food
    /// has that id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_by_id(
        &self,
        id: FoodId,
        name: &str,
        price: Price,
        image: &EmbeddedImage,
        description: &str,
    ) -> Result<Option<Food>, RepositoryError> {
        let result = sqlx::query(
            "UPDATE foods
             SET name = ?, price = ?, image = ?, description = ?
             WHERE id = ?",
        )
        .bind(name)
        .bind(price.to_string())
        .bind(image.as_str())
        .bind(description)
        .bind(id.to_string())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Delete the food with `id`. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_by_id(&self, id: FoodId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM foods WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
