//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ladle_core::{EmbeddedImage, FoodId, Price};

/// The catalog fields a cart captures when a food is added.
///
/// The snapshot is taken at add time and never refreshed: if the catalog
/// record is later edited or deleted, the cart keeps showing what the
/// shopper selected. The `id` is a weak reference into the catalog and may
/// dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSnapshot {
    /// Catalog id of the food.
    pub id: FoodId,
    /// Display name at the time of adding.
    pub name: String,
    /// Unit price at the time of adding.
    pub price: Price,
    /// Embedded image at the time of adding.
    pub image: EmbeddedImage,
}

/// One aggregated (food, quantity) entry in the cart.
///
/// A cart holds at most one line per `food_id`; adding the same food again
/// increments the quantity instead of appending a second line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Weak reference to the catalog record this line was created from.
    pub food_id: FoodId,
    /// Snapshot of the food's name.
    pub name: String,
    /// Snapshot of the food's unit price.
    pub price: Price,
    /// Snapshot of the food's embedded image.
    pub image: EmbeddedImage,
    /// Number of units selected. Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a fresh line (quantity 1) from a catalog snapshot.
    #[must_use]
    pub fn new(food: &FoodSnapshot) -> Self {
        Self {
            food_id: food.id,
            name: food.name.clone(),
            price: food.price,
            image: food.image.clone(),
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity)
    }
}
