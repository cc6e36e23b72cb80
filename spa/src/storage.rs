use shared::session::{StorageError, TokenStore, TOKEN_STORAGE_KEY};
use web_sys::Storage;

/// Keeps the bearer token in the browser's `localStorage`, so the session
/// survives page reloads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalTokenStore;

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|error| StorageError::Unavailable(format!("{error:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .map_err(|error| StorageError::Unavailable(format!("{error:?}")))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|error| StorageError::Unavailable(format!("{error:?}")))
    }

    fn clear(&self) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(|error| StorageError::Unavailable(format!("{error:?}")))
    }
}
