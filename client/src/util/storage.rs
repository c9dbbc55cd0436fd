//! `localStorage`-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager persists through [`session::KeyValueStore`]. In the
//! browser that is `window.localStorage`; outside the browser (native tests)
//! reads find nothing and writes report the store unavailable.

use session::storage::StorageOp;
use session::{KeyValueStore, StorageError};

/// Handle to `window.localStorage`. Holds no state of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Io(format!("{err:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn apply(&self, ops: &[StorageOp]) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            for op in ops {
                match op {
                    StorageOp::Set(key, value) => storage.set_item(key, value),
                    StorageOp::Remove(key) => storage.remove_item(key),
                }
                .map_err(|e| js_error(&e))?;
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ops;
            Err(StorageError::Unavailable)
        }
    }
}
