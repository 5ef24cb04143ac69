//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only JSON read/write so the session service persists
//! its state without repeating web-sys glue. SSR builds no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load a JSON value from `localStorage` for `key`. Undecodable entries read
/// as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding unreadable {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("could not persist {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Delete `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
