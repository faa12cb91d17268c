//! Ladle Cart - Client-local cart aggregate.
//!
//! A shopper's cart never touches the server: it is a local, single-user
//! aggregate of catalog snapshots with quantities, persisted as a whole
//! snapshot after every mutation so it survives restarts.
//!
//! The cart is an explicit object constructed over a [`CartStorage`]
//! implementation rather than ambient key-value storage reached from
//! anywhere; the storage contract is `load` once at open and `save` after
//! each mutation. A failed save is logged and swallowed - the in-memory
//! cart stays authoritative for the current session.
//!
//! # Example
//!
//! ```
//! use ladle_cart::{CartState, FoodSnapshot, MemoryStorage};
//! use ladle_core::{EmbeddedImage, FoodId, Price};
//!
//! let mut cart = CartState::open(MemoryStorage::default());
//! let pizza = FoodSnapshot {
//!     id: FoodId::generate(),
//!     name: "Pizza".to_owned(),
//!     price: Price::parse("9.99").unwrap(),
//!     image: EmbeddedImage::from_encoded("jpeg", "aGVsbG8="),
//! };
//!
//! cart.add_item(&pizza);
//! cart.add_item(&pizza);
//! assert_eq!(cart.item_count(), 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod line;
mod state;
mod storage;

pub use line::{CartLine, FoodSnapshot};
pub use state::CartState;
pub use storage::{CartStorage, CartStorageError, JsonFileStorage, MemoryStorage};
