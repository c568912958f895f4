//! JSON file store.
//!
//! ## Format
//!
//! ```text
//! {
//!   "buyOrders":  [{"orderId": "...", "price": "101.5", "quantity": 10}, ...],
//!   "sellOrders": [...]
//! }
//! ```
//!
//! The whole file is rewritten on every save. A missing or blank file loads as
//! "no saved book"; anything else that fails to parse is an error, so a
//! corrupted file is never silently replaced by an empty book.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::types::BookSnapshot;

/// File name used when no path is configured
pub const DEFAULT_STORE_PATH: &str = "stock-orders.json";

/// Book snapshot persisted as a pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved snapshot, if there is one
    pub fn load(&self) -> Result<Option<BookSnapshot>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved book");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if data.trim().is_empty() {
            warn!(path = %self.path.display(), "saved book is empty, starting fresh");
            return Ok(None);
        }

        let snapshot = BookSnapshot::from_json(&data).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            bids = snapshot.bids.len(),
            asks = snapshot.asks.len(),
            "loaded book"
        );
        Ok(Some(snapshot))
    }

    /// Overwrite the file with `snapshot`
    pub fn save(&self, snapshot: &BookSnapshot) -> Result<(), StoreError> {
        let json = snapshot.to_json_pretty().map_err(StoreError::Encode)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), orders = snapshot.len(), "saved book");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
