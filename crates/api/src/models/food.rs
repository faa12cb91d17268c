//! Catalog food record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ladle_core::{EmbeddedImage, FoodId, Price};

/// One purchasable catalog entry.
///
/// `id` and `created_at` are assigned by the store at insert and never
/// change afterwards; updates are a full replace of the other four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Store-assigned, immutable id.
    pub id: FoodId,
    /// Display name. Never empty.
    pub name: String,
    /// Non-negative unit price.
    pub price: Price,
    /// Embedded image shown in listings. Required.
    pub image: EmbeddedImage,
    /// Free-form description. Defaults to empty.
    pub description: String,
    /// Assigned at creation, immutable.
    pub created_at: DateTime<Utc>,
}
