//! Responsive navigation menu toggle.

use std::rc::Rc;

use crate::app::PageContext;
use crate::view::View;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Layout of the navigation container on small screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavLayout {
    /// Not laid out; the stylesheet decides visibility. Every page load starts here.
    #[default]
    Collapsed,
    /// Visible, links stacked vertically.
    Expanded,
}

impl NavLayout {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

pub struct NavToggle<V: View> {
    view: Rc<V>,
}

impl<V: View> NavToggle<V> {
    pub fn new(ctx: &PageContext<V>) -> Self {
        Self { view: Rc::clone(&ctx.view) }
    }

    pub fn layout(&self) -> Option<NavLayout> {
        self.view.nav_layout()
    }

    /// Flip the container's layout. No-op returning `None` without a container.
    pub fn toggle(&self) -> Option<NavLayout> {
        let next = self.view.nav_layout()?.toggled();
        self.view.set_nav_layout(next);
        log::debug!("nav {next:?}");
        Some(next)
    }
}
