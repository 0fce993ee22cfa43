//! Page context and startup wiring.
//!
//! [`Page::start`] runs once per page load: it fills in the year, applies the
//! initial theme, then subscribes each component to its trigger. Every
//! subscription is independent, so missing markup for one feature leaves the
//! others working.

use std::rc::Rc;

use crate::config::PageConfig;
use crate::state::contact::ContactForm;
use crate::state::nav::NavToggle;
use crate::state::theme::ThemeManager;
use crate::view::{Environment, PreferenceStore, Scheduler, TextSlot, Trigger, View};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Everything a component needs from its surroundings, created at page load.
pub struct PageContext<V: View> {
    pub config: PageConfig,
    pub view: Rc<V>,
    pub store: Rc<dyn PreferenceStore>,
    pub env: Rc<dyn Environment>,
    pub scheduler: Rc<dyn Scheduler>,
}

/// Which event subscriptions were registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Features {
    pub theme_toggle: bool,
    pub nav_toggle: bool,
    pub contact_form: bool,
}

/// The running page: its components and the triggers they are bound to.
pub struct Page<V: View> {
    pub theme: Rc<ThemeManager<V>>,
    pub nav: Rc<NavToggle<V>>,
    pub contact: Rc<ContactForm<V>>,
    pub features: Features,
}

impl<V: View + 'static> Page<V> {
    pub fn start(ctx: &PageContext<V>) -> Self {
        if let Some(slot) = ctx.view.year_slot() {
            slot.set_text(&ctx.env.current_year().to_string());
        }

        let theme = Rc::new(ThemeManager::new(ctx));
        theme.initialize(ctx.env.as_ref());
        let nav = Rc::new(NavToggle::new(ctx));
        let contact = Rc::new(ContactForm::new(ctx));

        let features = Features {
            theme_toggle: {
                let theme = Rc::clone(&theme);
                ctx.view.bind(
                    Trigger::ThemeToggle,
                    Box::new(move || {
                        theme.toggle();
                    }),
                )
            },
            nav_toggle: {
                let nav = Rc::clone(&nav);
                ctx.view.bind(
                    Trigger::NavToggle,
                    Box::new(move || {
                        nav.toggle();
                    }),
                )
            },
            contact_form: {
                let contact = Rc::clone(&contact);
                ctx.view.bind(
                    Trigger::ContactSubmit,
                    Box::new(move || {
                        contact.submit();
                    }),
                )
            },
        };
        log::info!(
            "page started: theme_toggle={} nav_toggle={} contact_form={}",
            features.theme_toggle,
            features.nav_toggle,
            features.contact_form
        );

        Self { theme, nav, contact, features }
    }
}
