//! [`View`] over the live document.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, FormData, HtmlElement, HtmlFormElement};

use crate::config::ElementIds;
use crate::state::nav::NavLayout;
use crate::state::theme::Theme;
use crate::view::{FormSnapshot, Handler, TextSlot, Trigger, View};

const THEME_ATTR: &str = "data-theme";

/// An element whose `textContent` is rewritten.
pub struct DomSlot(Element);

impl TextSlot for DomSlot {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Elements resolved once at page load; error slots are queried per use.
pub struct DomView {
    document: Document,
    root: Element,
    nav: Option<HtmlElement>,
    nav_toggle: Option<Element>,
    theme_toggle: Option<Element>,
    form: Option<HtmlFormElement>,
    status: Option<Element>,
    year: Option<Element>,
}

impl DomView {
    /// Resolve the page's elements. `None` only if the document has no root element.
    pub fn new(document: &Document, ids: &ElementIds) -> Option<Self> {
        let root = document.document_element()?;
        let by_id = |id: &str| document.get_element_by_id(id);
        Some(Self {
            document: document.clone(),
            root,
            nav: by_id(ids.nav.as_str()).and_then(cast::<HtmlElement>),
            nav_toggle: by_id(ids.nav_toggle.as_str()),
            theme_toggle: by_id(ids.theme_toggle.as_str()),
            form: by_id(ids.contact_form.as_str()).and_then(cast::<HtmlFormElement>),
            status: by_id(ids.form_status.as_str()),
            year: by_id(ids.year.as_str()),
        })
    }

    fn target(&self, trigger: Trigger) -> Option<&Element> {
        match trigger {
            Trigger::ThemeToggle => self.theme_toggle.as_ref(),
            Trigger::NavToggle => self.nav_toggle.as_ref(),
            Trigger::ContactSubmit => self.form.as_ref().map(|form| -> &Element { form }),
        }
    }
}

fn cast<T: JsCast>(el: Element) -> Option<T> {
    match el.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(el) => {
            log::warn!("element #{} is a <{}>, ignoring it", el.id(), el.tag_name().to_lowercase());
            None
        }
    }
}

impl View for DomView {
    type Slot = DomSlot;

    fn applied_theme(&self) -> Theme {
        if self.root.get_attribute(THEME_ATTR).as_deref() == Some("dark") { Theme::Dark } else { Theme::Light }
    }

    fn set_applied_theme(&self, theme: Theme) {
        let result = match theme {
            Theme::Dark => self.root.set_attribute(THEME_ATTR, theme.as_str()),
            Theme::Light => self.root.remove_attribute(THEME_ATTR),
        };
        if let Err(e) = result {
            log::warn!("failed to apply {theme} theme: {e:?}");
        }
    }

    fn theme_toggle(&self) -> Option<DomSlot> {
        self.theme_toggle.clone().map(DomSlot)
    }

    fn nav_layout(&self) -> Option<NavLayout> {
        let nav = self.nav.as_ref()?;
        match nav.style().get_property_value("display") {
            Ok(display) if display == "flex" => Some(NavLayout::Expanded),
            Ok(_) => Some(NavLayout::Collapsed),
            Err(e) => {
                log::warn!("failed to read nav display: {e:?}");
                Some(NavLayout::Collapsed)
            }
        }
    }

    fn set_nav_layout(&self, layout: NavLayout) {
        let Some(nav) = &self.nav else {
            return;
        };
        let style = nav.style();
        let result = match layout {
            NavLayout::Expanded => {
                style.set_property("display", "flex").and_then(|()| style.set_property("flex-direction", "column"))
            }
            NavLayout::Collapsed => style.remove_property("display").map(|_previous| ()),
        };
        if let Err(e) = result {
            log::warn!("failed to set nav layout {layout:?}: {e:?}");
        }
    }

    fn form_snapshot(&self, fields: &[&str]) -> FormSnapshot {
        let Some(form) = &self.form else {
            return FormSnapshot::default();
        };
        match FormData::new_with_form(form) {
            Ok(data) => fields.iter().filter_map(|field| data.get(field).as_string().map(|value| (*field, value))).collect(),
            Err(e) => {
                log::warn!("failed to read contact form: {e:?}");
                FormSnapshot::default()
            }
        }
    }

    fn reset_form(&self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }

    fn error_slot(&self, field: &str) -> Option<DomSlot> {
        match self.document.query_selector(&format!(".error[data-for=\"{field}\"]")) {
            Ok(el) => el.map(DomSlot),
            Err(e) => {
                log::warn!("bad error-slot selector for {field:?}: {e:?}");
                None
            }
        }
    }

    fn status_slot(&self) -> Option<DomSlot> {
        self.status.clone().map(DomSlot)
    }

    fn year_slot(&self) -> Option<DomSlot> {
        self.year.clone().map(DomSlot)
    }

    fn bind(&self, trigger: Trigger, handler: Handler) -> bool {
        let Some(target) = self.target(trigger) else {
            return false;
        };
        let (event_name, intercept) = match trigger {
            Trigger::ContactSubmit => ("submit", true),
            Trigger::ThemeToggle | Trigger::NavToggle => ("click", false),
        };
        let cb = Closure::wrap(Box::new(move |event: Event| {
            if intercept {
                event.prevent_default();
            }
            handler();
        }) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event_name, cb.as_ref().unchecked_ref()) {
            Ok(()) => {
                // Listeners live as long as the page.
                cb.forget();
                true
            }
            Err(e) => {
                log::warn!("failed to bind {trigger:?}: {e:?}");
                false
            }
        }
    }
}
