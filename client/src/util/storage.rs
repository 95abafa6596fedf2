//! Key/value storage backends for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only needs string get/set/remove. `BrowserStorage` is the
//! production backend over `window.localStorage`; `MemoryStorage` backs tests
//! and any caller running outside a browser.
//!
//! TRADE-OFFS
//! ==========
//! Browser writes report success as a plain `bool`. A missing window and a
//! quota error look the same to callers, who only need to know whether the
//! value landed.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Minimal string key/value storage.
pub trait KeyValueStorage {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value. Returns
    /// whether the value was written.
    fn set(&self, key: &str, value: &str) -> bool;
    /// Remove `key` if present.
    fn remove(&self, key: &str);

    /// Whether a backing store exists at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// `window.localStorage` for the current origin.
///
/// Outside the hydrated browser build there is no storage at all: reads return
/// `None` and every write reports failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn is_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            local_storage().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            local_storage().is_some_and(|storage| storage.set_item(key, value).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            false
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage. Clones share the same map, so a test can hand one clone
/// to a service and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        true
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
