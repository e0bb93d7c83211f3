use folio_core::{PreferenceStore, StorageError};
use web_sys::Storage;

/// localStorage，值按原样存取（`"es"`、`"dark"`），不做 JSON 编码
#[derive(Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}
