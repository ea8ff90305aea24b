use web_sys::{Storage, Window};

use crate::state::session::StorageError;

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or_else(|| StorageError::Unavailable("no window object".into()))
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
        .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
}
