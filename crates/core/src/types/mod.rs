//! Core types for Ladle.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod image;
pub mod price;
pub mod username;

pub use id::*;
pub use image::{EmbeddedImage, EmbeddedImageError};
pub use price::{Price, PriceError};
pub use username::{Username, UsernameError};
