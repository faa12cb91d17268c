//! Catalog service.
//!
//! Validates and orchestrates food CRUD requests against the food store.
//! Price input is parsed strictly: garbage like `"free"` is a validation
//! error rather than a silently stored not-a-number.

use sqlx::SqlitePool;
use thiserror::Error;

use ladle_core::{EmbeddedImage, FoodId, Price};

use crate::db::RepositoryError;
use crate::db::foods::FoodRepository;
use crate::models::Food;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Missing or malformed required input.
    #[error("{0}")]
    Validation(String),

    /// No food has the referenced id.
    #[error("food item not found")]
    NotFound,

    /// Store/database error.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Catalog service.
///
/// Handles creation, listing, retrieval, replacement, and deletion of
/// food records.
pub struct CatalogService<'a> {
    foods: FoodRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            foods: FoodRepository::new(pool),
        }
    }

    /// Create a new food record.
    ///
    /// The store assigns id and creation time; the stored record is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the name is empty or the
    /// price is not a non-negative decimal.
    pub async fn create(
        &self,
        name: &str,
        price: &str,
        image: EmbeddedImage,
        description: Option<String>,
    ) -> Result<Food, CatalogError> {
        let (name, price) = validate_fields(name, price)?;

        let food = self
            .foods
            .insert(name, price, &image, &description.unwrap_or_default())
            .await?;

        Ok(food)
    }

    /// All foods, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the store is unavailable.
    pub async fn list(&self) -> Result<Vec<Food>, CatalogError> {
        Ok(self.foods.find_all().await?)
    }

    /// The food with `id`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no food has that id.
    pub async fn get(&self, id: FoodId) -> Result<Food, CatalogError> {
        self.foods
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound)
    }

    /// Replace all four mutable fields of the food with `id`.
    ///
    /// There are no partial updates; `id` and `created_at` never change.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` on invalid input and
    /// `CatalogError::NotFound` if no food has that id.
    pub async fn update(
        &self,
        id: FoodId,
        name: &str,
        price: &str,
        image: EmbeddedImage,
        description: Option<String>,
    ) -> Result<Food, CatalogError> {
        let (name, price) = validate_fields(name, price)?;

        self.foods
            .update_by_id(id, name, price, &image, &description.unwrap_or_default())
            .await?
            .ok_or(CatalogError::NotFound)
    }

    /// Delete the food with `id`. Returns no payload.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no food has that id.
    pub async fn delete(&self, id: FoodId) -> Result<(), CatalogError> {
        if self.foods.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(CatalogError::NotFound)
        }
    }
}

/// Shared create/update validation: non-empty name, parseable price.
fn validate_fields<'n>(name: &'n str, price: &str) -> Result<(&'n str, Price), CatalogError> {
    if name.is_empty() {
        return Err(CatalogError::Validation("name is required".to_owned()));
    }

    let price = Price::parse(price).map_err(|e| CatalogError::Validation(e.to_string()))?;

    Ok((name, price))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use std::time::Duration;

    fn image() -> EmbeddedImage {
        EmbeddedImage::from_encoded("jpeg", "aGVsbG8=")
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let pool = test_pool().await;
        let catalog = CatalogService::new(&pool);

        let created = catalog
            .create("Pizza", "9.99", image(), Some("Stone baked".to_owned()))
            .await
            .unwrap();

        assert_eq!(created.name, "Pizza");
        assert_eq!(created.price, Price::parse("9.99").unwrap());
        assert_eq!(created.description, "Stone baked");

        let fetched = catalog.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_description_defaults_to_empty() {
        let pool = test_pool().await;
        let catalog = CatalogService::new(&pool);

        let created = catalog.create("Pizza", "9.99", image(), None).await.unwrap();
        assert_eq!(created.description, "");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let pool = test_pool().await;
        let catalog = CatalogService::new(&pool);

        let err = catalog.create("", "9.99", image(), None).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_garbage_price() {
        let pool = test_pool().await;
        let catalog = CatalogService::new(&pool);

        for bad in ["", "free", "-2", "NaN"] {
            let err = catalog.create("Pizza", bad, image(), None).await.unwrap_err();
            assert!(matches!(err, CatalogError::Validation(_)), "price {bad:?}");
        }
    }

    #[tokio::test]
    async fn test_list_is_recency_ordered() {
        let pool = test_pool().await;
        let catalog = CatalogService::new(&pool);

        for name in ["Soup", "Salad", "Sandwich"] {
            catalog.create(name, "5", image(), None).await.unwrap();
            tokio::time::sleep(Duration::from_millis(2)).await;
        }

        let names: Vec<_> = catalog
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["Sandwich", "Salad", "Soup"]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let pool = test_pool().await;
        let catalog = CatalogService::new(&pool);

        let created = catalog
            .create("Pizza", "9.99", image(), Some("Old".to_owned()))
            .await
            .unwrap();

        let updated = catalog
            .update(created.id, "Calzone", "11.50", image(), None)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Calzone");
        assert_eq!(updated.description, "");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let catalog = CatalogService::new(&pool);

        let err = catalog
            .update(FoodId::generate(), "Pizza", "9.99", image(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let pool = test_pool().await;
        let catalog = CatalogService::new(&pool);

        let created = catalog.create("Pizza", "9.99", image(), None).await.unwrap();

        catalog.delete(created.id).await.unwrap();

        assert!(matches!(
            catalog.get(created.id).await.unwrap_err(),
            CatalogError::NotFound
        ));
        assert!(matches!(
            catalog.delete(created.id).await.unwrap_err(),
            CatalogError::NotFound
        ));
    }
}
