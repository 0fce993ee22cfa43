//! Capability traits between page logic and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch web-sys directly. They read and write the page
//! through [`View`], persist through [`PreferenceStore`], ask the host
//! [`Environment`] for ambient facts, and defer work through [`Scheduler`].
//! The `dom` module implements all four for a real document; tests use
//! in-memory fakes.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::PageError;
use crate::state::nav::NavLayout;
use crate::state::theme::Theme;

/// An element whose text content the page rewrites.
pub trait TextSlot {
    fn set_text(&self, text: &str);
}

/// User actions the page subscribes to at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Click on the theme toggle control.
    ThemeToggle,
    /// Click on the navigation toggle control.
    NavToggle,
    /// Submit of the contact form. Native submission is always suppressed.
    ContactSubmit,
}

/// Event callback registered through [`View::bind`].
pub type Handler = Box<dyn Fn()>;

/// Typed access to the page's elements.
///
/// Accessors returning `Option` model optional markup: `None` means the
/// element is missing and the caller skips the write.
pub trait View {
    type Slot: TextSlot;

    /// Theme currently shown by the document root. No indicator means light.
    fn applied_theme(&self) -> Theme;
    fn set_applied_theme(&self, theme: Theme);
    fn theme_toggle(&self) -> Option<Self::Slot>;

    /// Layout of the navigation container, `None` if there is no container.
    fn nav_layout(&self) -> Option<NavLayout>;
    fn set_nav_layout(&self, layout: NavLayout);

    /// Current values of `fields` in the contact form.
    fn form_snapshot(&self, fields: &[&str]) -> FormSnapshot;
    fn reset_form(&self);
    fn error_slot(&self, field: &str) -> Option<Self::Slot>;
    fn status_slot(&self) -> Option<Self::Slot>;

    fn year_slot(&self) -> Option<Self::Slot>;

    /// Subscribe `handler` to `trigger`. Returns `false` when the element the
    /// trigger lives on is missing, in which case nothing is registered.
    fn bind(&self, trigger: Trigger, handler: Handler) -> bool;
}

/// Durable origin-scoped key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Ambient facts about the host, read during initialization.
pub trait Environment {
    /// Whether the system color scheme is dark.
    fn prefers_dark(&self) -> bool;
    fn current_year(&self) -> u32;
}

/// One-shot deferred execution on the page's event loop.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Field values captured from the contact form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<String, String>,
}

impl FormSnapshot {
    /// Value of `field`, or `""` when the form has no such field.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = Self::default();
        for (field, value) in iter {
            snapshot.insert(field, value);
        }
        snapshot
    }
}
