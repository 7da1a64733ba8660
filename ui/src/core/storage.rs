//! Client-local key-value persistence.
//!
//! On wasm this is backed by `window.localStorage`; every failure mode
//! (storage disabled, quota, privacy mode) collapses to `None` / no-op so
//! callers can degrade silently. Off wasm a process-local map provides the
//! same API, which is what the unit tests exercise.

#[cfg(target_arch = "wasm32")]
mod backend {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub fn set(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use once_cell::sync::Lazy;

    static STORE: Lazy<RwLock<HashMap<String, String>>> = Lazy::new(|| RwLock::new(HashMap::new()));

    pub fn get(key: &str) -> Option<String> {
        STORE.read().ok()?.get(key).cloned()
    }

    pub fn set(key: &str, value: &str) {
        if let Ok(mut store) = STORE.write() {
            store.insert(key.to_string(), value.to_string());
        }
    }

    pub fn remove(key: &str) {
        if let Ok(mut store) = STORE.write() {
            store.remove(key);
        }
    }
}

pub fn get(key: &str) -> Option<String> {
    backend::get(key)
}

pub fn set(key: &str, value: &str) {
    backend::set(key, value);
}

pub fn remove(key: &str) {
    backend::remove(key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_and_remove() {
        set("storage-test-key", "ca");
        assert_eq!(get("storage-test-key").as_deref(), Some("ca"));

        // Writing the same value again is a no-op observable-wise.
        set("storage-test-key", "ca");
        assert_eq!(get("storage-test-key").as_deref(), Some("ca"));

        remove("storage-test-key");
        assert_eq!(get("storage-test-key"), None);
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(get("storage-test-absent"), None);
    }
}
