//! Page configuration.
//!
//! Every field has a default matching the stock page markup, so an absent
//! config is the common case. Hosts that rename elements supply overrides as
//! JSON (camelCase keys); anything omitted keeps its default.

use serde::Deserialize;

use crate::error::PageError;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 900;
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Largest delay `setTimeout` honors; larger values fire immediately.
pub const MAX_SUBMIT_DELAY_MS: u32 = i32::MAX.unsigned_abs();

/// DOM ids of the elements the page enhancements attach to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub nav: String,
    pub nav_toggle: String,
    pub theme_toggle: String,
    pub contact_form: String,
    pub form_status: String,
    pub year: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            nav: "nav".to_owned(),
            nav_toggle: "nav-toggle".to_owned(),
            theme_toggle: "dark-toggle".to_owned(),
            contact_form: "contact-form".to_owned(),
            form_status: "form-status".to_owned(),
            year: "year".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub ids: ElementIds,
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    /// Simulated network latency of the mock contact submission.
    pub submit_delay_ms: u32,
    /// Console log level name understood by [`log::Level`].
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse and validate config from a JSON object.
    ///
    /// # Errors
    ///
    /// [`PageError::ConfigParse`] if `raw` is not a config object, or any
    /// error from [`PageConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| PageError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would silently disable a feature.
    ///
    /// # Errors
    ///
    /// [`PageError::InvalidConfig`] naming the first unusable field.
    pub fn validate(&self) -> Result<(), PageError> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(PageError::InvalidConfig { field: "themeStorageKey", reason: "must not be empty".into() });
        }
        let ids = [
            ("ids.nav", &self.ids.nav),
            ("ids.navToggle", &self.ids.nav_toggle),
            ("ids.themeToggle", &self.ids.theme_toggle),
            ("ids.contactForm", &self.ids.contact_form),
            ("ids.formStatus", &self.ids.form_status),
            ("ids.year", &self.ids.year),
        ];
        for (field, value) in ids {
            if value.trim().is_empty() {
                return Err(PageError::InvalidConfig { field, reason: "element id must not be empty".into() });
            }
        }
        if self.submit_delay_ms > MAX_SUBMIT_DELAY_MS {
            return Err(PageError::InvalidConfig {
                field: "submitDelayMs",
                reason: format!("must be at most {MAX_SUBMIT_DELAY_MS}"),
            });
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// [`PageError::InvalidConfig`] if `log_level` is not a [`log::Level`] name.
    pub fn level(&self) -> Result<log::Level, PageError> {
        self.log_level.parse::<log::Level>().map_err(|_| PageError::InvalidConfig {
            field: "logLevel",
            reason: format!("unknown level {:?}", self.log_level),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
