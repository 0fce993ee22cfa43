//! Light/dark theme initialization, toggle and persistence.
//!
//! Reads the stored preference, falling back to the system color scheme,
//! and applies it to the document root. Toggling writes the new value back
//! to the preference store.
//!
//! TRADE-OFFS
//! ==========
//! A stored value that is not `light` or `dark` is ignored rather than
//! repaired; it stays in storage until the next explicit toggle replaces it.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::app::PageContext;
use crate::error::PageError;
use crate::view::{Environment, PreferenceStore, TextSlot, View};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle control, hinting at the theme a click selects.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PageError::UnknownTheme(other.to_owned())),
        }
    }
}

pub struct ThemeManager<V: View> {
    view: Rc<V>,
    store: Rc<dyn PreferenceStore>,
    key: String,
}

impl<V: View> ThemeManager<V> {
    pub fn new(ctx: &PageContext<V>) -> Self {
        Self {
            view: Rc::clone(&ctx.view),
            store: Rc::clone(&ctx.store),
            key: ctx.config.theme_storage_key.clone(),
        }
    }

    /// Show `theme` on the document root and the toggle control.
    pub fn apply(&self, theme: Theme) {
        self.view.set_applied_theme(theme);
        if let Some(toggle) = self.view.theme_toggle() {
            toggle.set_text(theme.toggle_icon());
        }
    }

    pub fn current(&self) -> Theme {
        self.view.applied_theme()
    }

    /// The persisted preference, if present and recognized.
    pub fn stored(&self) -> Option<Theme> {
        let raw = self.store.get(&self.key)?;
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("ignoring stored theme preference: {e}");
                None
            }
        }
    }

    /// Apply the stored preference, or the system default when none is stored.
    pub fn initialize(&self, env: &dyn Environment) -> Theme {
        let theme = if let Some(theme) = self.stored() {
            log::debug!("theme {theme} from stored preference");
            theme
        } else {
            let theme = if env.prefers_dark() { Theme::Dark } else { Theme::Light };
            log::debug!("theme {theme} from system preference");
            theme
        };
        self.apply(theme);
        theme
    }

    /// Switch to the other theme and persist it.
    pub fn toggle(&self) -> Theme {
        let next = self.current().inverse();
        self.apply(next);
        if let Err(e) = self.store.set(&self.key, next.as_str()) {
            log::warn!("theme {next} applied but not persisted: {e}");
        }
        next
    }
}
