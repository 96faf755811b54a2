//! LocalStorage-backed record store (WASM only)

use crate::error::StoreError;
use crate::records::{RECORD_KEY, RecordStore, parse_record};

/// Best distance kept in the browser's LocalStorage under [`RECORD_KEY`]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not accessible".to_string()))
    }
}

impl RecordStore for LocalStorageStore {
    fn get(&self) -> Result<Option<u64>, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(RECORD_KEY) {
            Ok(Some(raw)) => parse_record(&raw).map(Some),
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::Unavailable(format!("{e:?}"))),
        }
    }

    fn set(&mut self, best: u64) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(RECORD_KEY, &best.to_string())
            .map_err(|e| StoreError::Write(format!("{e:?}")))?;
        log::info!("Best distance saved ({best} m)");
        Ok(())
    }
}
