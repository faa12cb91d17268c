//! Cart snapshot persistence.
//!
//! Storage holds the whole cart as one snapshot; there is no per-line
//! update. Concurrent writers (e.g. two open clients) are last-write-wins
//! with no merge protocol.

use std::fs;
use std::path::PathBuf;

use crate::line::CartLine;

/// Errors that can occur loading or saving a cart snapshot.
///
/// These never reach the caller of a cart mutation; [`crate::CartState`]
/// recovers from them locally.
#[derive(Debug, thiserror::Error)]
pub enum CartStorageError {
    /// Reading or writing the snapshot failed.
    #[error("cart storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded.
    #[error("cart snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Whole-snapshot persistence for a cart.
pub trait CartStorage {
    /// Load the persisted snapshot, or an empty sequence if none exists.
    ///
    /// # Errors
    ///
    /// Returns `CartStorageError` if an existing snapshot cannot be read
    /// or decoded.
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError>;

    /// Replace the persisted snapshot with `lines`.
    ///
    /// # Errors
    ///
    /// Returns `CartStorageError` if the snapshot cannot be written.
    fn save(&mut self, lines: &[CartLine]) -> Result<(), CartStorageError>;
}

/// In-memory storage, mainly for tests and ephemeral carts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    lines: Vec<CartLine>,
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError> {
        Ok(self.lines.clone())
    }

    fn save(&mut self, lines: &[CartLine]) -> Result<(), CartStorageError> {
        self.lines = lines.to_vec();
        Ok(())
    }
}

/// JSON file storage: one file holding the whole cart snapshot.
///
/// This is the desktop stand-in for a browser's local storage. A missing
/// file loads as an empty cart.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&mut self, lines: &[CartLine]) -> Result<(), CartStorageError> {
        let contents = serde_json::to_string(lines)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
