//! Browser `localStorage` access.
//!
//! Values are plain strings (JSON where structured) without versioning. Missing storage
//! (private mode, no window) behaves like an empty store.

use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

