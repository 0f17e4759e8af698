//! LocalStorage persistence
//!
//! Every page owns one flat JSON blob under its own key. Access is
//! non-transactional, last write wins:
//! - Missing or corrupt JSON falls back silently to `Default`
//! - Save failures are logged and ignored
//! - Native builds use a thread-local in-memory map (doubles as the test
//!   backend)

pub mod export;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Raw string read (WASM: LocalStorage)
#[cfg(target_arch = "wasm32")]
pub fn raw_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Raw string write (WASM: LocalStorage)
#[cfg(target_arch = "wasm32")]
pub fn raw_set(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("LocalStorage write failed for {key}");
            }
        }
        None => log::warn!("LocalStorage unavailable; {key} not persisted"),
    }
}

/// Remove a stored record (WASM: LocalStorage)
#[cfg(target_arch = "wasm32")]
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        STORE.with(|s| s.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) {
        STORE.with(|s| {
            s.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}

/// Raw string read (native: in-memory)
#[cfg(not(target_arch = "wasm32"))]
pub fn raw_get(key: &str) -> Option<String> {
    native::get(key)
}

/// Raw string write (native: in-memory)
#[cfg(not(target_arch = "wasm32"))]
pub fn raw_set(key: &str, value: &str) {
    native::set(key, value);
}

/// Remove a stored record (native: in-memory)
#[cfg(not(target_arch = "wasm32"))]
pub fn remove(key: &str) {
    native::remove(key);
}

/// Load a record, falling back silently to `Default` on missing or corrupt
/// JSON. The fallback is logged, never surfaced to the user.
pub fn load_or_default<T: DeserializeOwned + Default>(key: &str) -> T {
    match raw_get(key) {
        Some(json) => match serde_json::from_str(&json) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Corrupt record at {key} ({e}); using defaults");
                T::default()
            }
        },
        None => T::default(),
    }
}

/// Serialize and store a record; failures are logged and ignored
pub fn save<T: Serialize>(key: &str, record: &T) {
    match serde_json::to_string(record) {
        Ok(json) => raw_set(key, &json),
        Err(e) => log::warn!("Failed to serialize {key}: {e}"),
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::{load_or_default, raw_get, raw_set, remove, save};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct Rec {
        amount: f64,
        years: u32,
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let rec = Rec {
            amount: 12_345.5,
            years: 7,
        };
        save("test_store_roundtrip", &rec);
        let loaded: Rec = load_or_default("test_store_roundtrip");
        assert_eq!(loaded, rec);
    }

    #[test]
    fn test_missing_key_yields_default() {
        let loaded: Rec = load_or_default("test_store_missing");
        assert_eq!(loaded, Rec::default());
    }

    #[test]
    fn test_corrupt_json_yields_default() {
        raw_set("test_store_corrupt", "{not json");
        let loaded: Rec = load_or_default("test_store_corrupt");
        assert_eq!(loaded, Rec::default());
    }

    #[test]
    fn test_remove() {
        save("test_store_remove", &Rec { amount: 1.0, years: 1 });
        remove("test_store_remove");
        assert!(raw_get("test_store_remove").is_none());
    }
}
