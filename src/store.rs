//! In-memory preference store.
//!
//! Used when `localStorage` is unavailable (storage disabled, sandboxed
//! iframes, private browsing quirks) so theme toggling still works for the
//! lifetime of the page.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PageError;
use crate::view::PreferenceStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
