//! Domain models for the API.

pub mod food;
pub mod user;

pub use food::Food;
pub use user::{User, UserView};
