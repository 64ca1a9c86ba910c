#![cfg(target_arch = "wasm32")]
use mosquito_core::SettingsStore;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod labels;
mod lifecycle;
mod overlay;
mod storage;

use constants::{HUMAN_ID, LOGIN_FORM_ID, SETTINGS_FORM_ID};
use storage::LocalStorageBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Simulation,
    Settings,
    Login,
    Static,
}

// Pages are plain HTML; which one we are on is decided by the markers present.
fn detect_page(document: &web::Document) -> Page {
    if document.get_element_by_id(HUMAN_ID).is_some() {
        Page::Simulation
    } else if document.get_element_by_id(SETTINGS_FORM_ID).is_some() {
        Page::Settings
    } else if document.get_element_by_id(LOGIN_FORM_ID).is_some() {
        Page::Login
    } else {
        Page::Static
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mosquito-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = detect_page(&document);
    log::info!("[page] {:?}", page);
    match page {
        Page::Simulation => {
            // Read once per session; edits on the settings page apply on next load.
            events::wire_page_lifecycle(document, || {
                SettingsStore::new(LocalStorageBackend::new()).load_or_default()
            });
        }
        Page::Settings => events::wire_settings_page(&document),
        Page::Login => events::wire_login_page(&document),
        Page::Static => {}
    }
    Ok(())
}
