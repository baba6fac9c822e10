// Browser localStorage binding
use web_sys::Storage;

use crate::error::{Result, WidgetError};
use crate::storage::store::KeyValueStore;

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or(WidgetError::NoGlobal("window"))?;
        // Private browsing modes may throw or hand back null here
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(WidgetError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|_| WidgetError::StorageWrite { key: key.to_string() })
    }
}
