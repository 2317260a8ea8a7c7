//! # Store State
//!
//! Shares the back-office repositories between commands.
//!
//! Reads (menu listing, search, stats) vastly outnumber writes, so the store
//! sits behind an `RwLock` rather than a `Mutex`.

use std::sync::{Arc, RwLock};

use royal_store::Store;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<RwLock<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Runs `f` under a shared read lock.
    pub fn read<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self
            .store
            .read()
            .map_err(|_| ApiError::internal("Store lock poisoned"))?;
        Ok(f(&store))
    }

    /// Runs `f` under the exclusive write lock.
    pub fn write<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self
            .store
            .write()
            .map_err(|_| ApiError::internal("Store lock poisoned"))?;
        Ok(f(&mut store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_is_visible_to_readers() {
        let state = StoreState::new(Store::seeded().unwrap());
        let reader = state.clone();

        state
            .write(|s| s.catalog_mut().toggle_availability("f1"))
            .unwrap()
            .unwrap();

        let available = reader
            .read(|s| s.catalog().get("f1").map(|i| i.is_available))
            .unwrap();
        assert_eq!(available, Some(false));
    }
}
