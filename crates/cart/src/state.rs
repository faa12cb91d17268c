//! The cart aggregate.

use rust_decimal::Decimal;
use tracing::warn;

use ladle_core::FoodId;

use crate::line::{CartLine, FoodSnapshot};
use crate::storage::CartStorage;

/// A shopper's local cart.
///
/// Lines are kept in insertion order, one per distinct food. Every
/// mutation re-persists the entire snapshot before returning; persistence
/// failure is logged and swallowed, so mutations always succeed from the
/// caller's perspective and the in-memory state stays authoritative for
/// the current session.
#[derive(Debug)]
pub struct CartState<S> {
    lines: Vec<CartLine>,
    storage: S,
}

impl<S: CartStorage> CartState<S> {
    /// Open a cart over `storage`, loading any persisted snapshot.
    ///
    /// An unreadable snapshot is treated as an empty cart rather than an
    /// error; the shopper starts fresh.
    pub fn open(storage: S) -> Self {
        let lines = storage.load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load cart snapshot, starting empty");
            Vec::new()
        });

        Self { lines, storage }
    }

    /// Add one unit of `food` to the cart.
    ///
    /// If a line for `food.id` already exists its quantity goes up by 1;
    /// otherwise a new line is appended with quantity 1 and a snapshot of
    /// the food's name, price, and image.
    pub fn add_item(&mut self, food: &FoodSnapshot) {
        match self.line_mut(food.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(food)),
        }
        self.persist();
    }

    /// Overwrite the quantity of the line for `id`.
    ///
    /// A quantity below 1, or an `id` with no line, is a no-op. Removing a
    /// line goes through [`CartState::remove_item`], never through a zero
    /// quantity.
    pub fn set_quantity(&mut self, id: FoodId, quantity: u32) {
        if quantity < 1 {
            return;
        }

        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
        self.persist();
    }

    /// Increase the quantity of the line for `id` by 1.
    pub fn increment(&mut self, id: FoodId) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
        }
        self.persist();
    }

    /// Decrease the quantity of the line for `id` by 1, flooring at 1.
    ///
    /// Decrement never removes the line; explicit removal is
    /// [`CartState::remove_item`].
    pub fn decrement(&mut self, id: FoodId) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.max(2) - 1;
        }
        self.persist();
    }

    /// Remove the line for `id` entirely, regardless of quantity.
    pub fn remove_item(&mut self, id: FoodId) {
        self.lines.retain(|line| line.food_id != id);
        self.persist();
    }

    /// Sum of price times quantity across all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: FoodId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.food_id == id)
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.lines) {
            warn!(error = %e, "failed to persist cart snapshot, keeping in-memory state");
        }
    }
}
