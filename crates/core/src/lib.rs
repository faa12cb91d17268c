//! Ladle Core - Shared types library.
//!
//! This crate provides common types used across all Ladle components:
//! - `api` - Food catalog and credential API server
//! - `cart` - Client-local cart aggregate
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere, including client-side code.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, usernames,
//!   and embeddable images

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
