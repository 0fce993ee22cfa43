//! Browser binding: web-sys implementations of the [`crate::view`] traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. [`mount`] runs from the wasm
//! start function, attaches to the already-rendered static page, and hands a
//! [`PageContext`] to [`Page::start`]. Nothing here decides behavior; it only
//! reads and writes the document.

mod browser;
mod view;

use std::rc::Rc;

use web_sys::Document;

use crate::app::{Page, PageContext};
use crate::config::PageConfig;
use crate::error::PageError;
use crate::store::MemoryStore;
use crate::view::PreferenceStore;

pub use browser::{BrowserEnv, LocalStorage, TimeoutScheduler};
pub use view::{DomSlot, DomView};

/// Id of the optional `<script type="application/json">` holding [`PageConfig`] overrides.
pub const CONFIG_ELEMENT_ID: &str = "sitekit-config";

/// Attach every page enhancement to the current document.
pub fn mount() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, config_err) = match load_config(&document) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    let level = config.level().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {e}");
    }
    if let Some(e) = config_err {
        log::warn!("using default page config: {e}");
    }

    let Some(view) = DomView::new(&document, &config.ids) else {
        log::warn!("document has no root element; page enhancements disabled");
        return;
    };
    let store: Rc<dyn PreferenceStore> = match LocalStorage::open(&window) {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("theme preference will not persist across loads: {e}");
            Rc::new(MemoryStore::new())
        }
    };

    let ctx = PageContext {
        config,
        view: Rc::new(view),
        store,
        env: Rc::new(BrowserEnv::new(window)),
        scheduler: Rc::new(TimeoutScheduler),
    };
    Page::start(&ctx);
}

fn load_config(document: &Document) -> Result<PageConfig, PageError> {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PageConfig::default());
    };
    PageConfig::from_json(&el.text_content().unwrap_or_default())
}
