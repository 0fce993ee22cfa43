//! Storage, environment and timer adapters over the browser window.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use web_sys::{Storage, Window};

use crate::config::MAX_SUBMIT_DELAY_MS;
use crate::error::PageError;
use crate::view::{Environment, PreferenceStore, Scheduler};

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// # Errors
    ///
    /// [`PageError::Storage`] when the browser has no `localStorage` or denies access.
    pub fn open(window: &Window) -> Result<Self, PageError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(PageError::Storage("localStorage is not available".into())),
            Err(e) => Err(PageError::Storage(format!("localStorage access denied: {e:?}"))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of {key:?} failed: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage.set_item(key, value).map_err(|e| PageError::Storage(format!("{e:?}")))
    }
}

pub struct BrowserEnv {
    window: Window,
}

impl BrowserEnv {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Environment for BrowserEnv {
    fn prefers_dark(&self) -> bool {
        match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(mq)) => mq.matches(),
            Ok(None) => false,
            Err(e) => {
                log::debug!("matchMedia unavailable: {e:?}");
                false
            }
        }
    }

    fn current_year(&self) -> u32 {
        js_sys::Date::new_0().get_full_year()
    }
}

/// `setTimeout`-backed one-shot scheduling.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(MAX_SUBMIT_DELAY_MS).min(MAX_SUBMIT_DELAY_MS);
        // Forgotten so the timer fires after the submit handler returns.
        Timeout::new(millis, task).forget();
    }
}
