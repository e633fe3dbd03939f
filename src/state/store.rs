//! Key-value persistence for the best score.
//!
//! The session only sees the `KeyValueStore` trait; the browser build plugs in
//! `localStorage`, tests plug in `MemoryStore`.

use thiserror::Error;

#[cfg(test)]
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StoreError> {
        let win = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = win
            .local_storage()
            .map_err(|e| StoreError::Js(format!("{e:?}")))?
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Js(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Js(format!("{e:?}")))
    }
}

/// Stand-in when no storage exists; reads are empty and writes vanish.
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

/// In-memory store. Clones share the same map and write counter.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<u32>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.set(self.writes.get() + 1);
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Opens `localStorage`, falling back to `NullStore`.
pub fn browser_store() -> Box<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("best score will not be saved: {e}");
            Box::new(NullStore)
        }
    }
}

/// Best score under `key`; absent, unreadable or garbled values read as 0.
pub fn load_high_score(store: &dyn KeyValueStore, key: &str) -> u32 {
    match store.get(key) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or(0),
        Ok(None) => 0,
        Err(e) => {
            log::warn!("could not read best score: {e}");
            0
        }
    }
}

pub fn save_high_score(store: &dyn KeyValueStore, key: &str, value: u32) {
    if let Err(e) = store.set(key, &value.to_string()) {
        log::warn!("could not save best score: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl KeyValueStore for Broken {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Js("SecurityError".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn absent_key_reads_zero() {
        assert_eq!(load_high_score(&MemoryStore::default(), "snake_high"), 0);
        assert_eq!(load_high_score(&NullStore, "snake_high"), 0);
    }

    #[test]
    fn garbage_reads_zero() {
        let store = MemoryStore::default();
        store.set("snake_high", "lots").unwrap();
        assert_eq!(load_high_score(&store, "snake_high"), 0);
    }

    #[test]
    fn round_trips_through_clones() {
        let store = MemoryStore::default();
        let view = store.clone();
        save_high_score(&store, "snake_high", 40);
        assert_eq!(load_high_score(&view, "snake_high"), 40);
        assert_eq!(view.writes(), 1);
    }

    #[test]
    fn failures_are_silent() {
        assert_eq!(load_high_score(&Broken, "k"), 0);
        save_high_score(&Broken, "k", 5);
    }
}
