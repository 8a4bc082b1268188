//! Generic JSON wrapper over `window.localStorage`.
//!
//! Read errors fall back to the provided default; write errors are
//! logged and otherwise ignored (the app keeps running on in-memory
//! state).

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

// Storage keys used by the shared aggregation ledger.
pub const SHARED_EXPENSES_KEY: &str = "shared_expenses";
pub const SHARED_REVENUES_KEY: &str = "shared_revenues";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read and deserialize a value; any failure returns the default.
pub fn get_json<T: DeserializeOwned>(key: &str, default: T) -> T {
    let Some(storage) = get_local_storage() else {
        return default;
    };
    let Ok(Some(raw)) = storage.get_item(key) else {
        return default;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            log::error!("Error reading localStorage key \"{key}\": {err}");
            default
        }
    }
}

/// Serialize and store a value.
pub fn set_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(err) = storage.set_item(key, &raw) {
                log::error!("Error writing localStorage key \"{key}\": {err:?}");
            }
        }
        Err(err) => log::error!("Error serializing localStorage key \"{key}\": {err}"),
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
