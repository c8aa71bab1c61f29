//! # Store State
//!
//! Shares the [`StoreEngine`] between commands.
//!
//! ## Thread Safety
//! The engine is wrapped in `Arc<Mutex<T>>`: every command takes the lock
//! once and keeps it for the whole operation, so a sale and its tier
//! re-evaluation are never interleaved with another command.
//!
//! A poisoned lock is reported as an internal [`ApiError`], not a panic.

use std::sync::{Arc, Mutex};

use arcade_core::StoreEngine;

use crate::error::ApiError;

/// Thread-safe store wrapper.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<StoreEngine>>,
}

impl StoreState {
    /// Creates a new state with an empty store.
    pub fn new() -> Self {
        StoreState::default()
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summaries = store_state.with_store(|store| store.summaries())?;
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&StoreEngine) -> R,
    {
        let store = self
            .store
            .lock()
            .map_err(|_| ApiError::internal("Store lock poisoned"))?;
        Ok(f(&store))
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|store| store.upgrade("mauro"))??;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut StoreEngine) -> R,
    {
        let mut store = self
            .store
            .lock()
            .map_err(|_| ApiError::internal("Store lock poisoned"))?;
        Ok(f(&mut store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::thread;

    #[test]
    fn test_clones_share_the_store() {
        let state = StoreState::new();
        let other = state.clone();

        state
            .with_store_mut(|s| s.register("Mauro", "mauro", "entry").map(|_| ()))
            .unwrap()
            .unwrap();

        assert_eq!(other.with_store(|s| s.len()).unwrap(), 1);
    }

    #[test]
    fn test_poisoned_lock_is_internal_error() {
        let state = StoreState::new();
        let poisoner = state.clone();

        let _ = thread::spawn(move || {
            poisoner
                .with_store_mut(|_| panic!("poison the lock"))
                .ok();
        })
        .join();

        let err = state.with_store(|s| s.len()).unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
    }
}
