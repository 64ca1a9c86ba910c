use crate::constants::{
    LOGIN_FORM_ID, LOGIN_IDENTIFIER_ID, LOGIN_PASSWORD_ID, LOGIN_TOAST_ID, MAX_FREQUENCY_INPUT_ID,
    MIN_FREQUENCY_INPUT_ID, SETTINGS_PREVIEW_ID, SETTINGS_RESET_ID, SETTINGS_SAVE_ID,
    SETTINGS_TOAST_ID, SIMULATION_PATH, WAVE_TYPE_SELECT_ID,
};
use crate::dom;
use crate::labels;
use crate::storage::LocalStorageBackend;
use mosquito_core::{
    AudioSettings, LoginForm, SettingsStore, StoreError, WaveType, DEFAULT_MAX_FREQUENCY_HZ,
    DEFAULT_MIN_FREQUENCY_HZ,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn toast(document: &web::Document, element_id: &str, title: &str, body: &str, error: bool) {
    dom::set_text(document, element_id, &format!("{}: {}", title, body));
    dom::set_class(document, element_id, "destructive", error);
    dom::set_hidden(document, element_id, false);
}

/// Raw `(min, max, wave)` as typed; not yet validated.
fn read_settings_form(document: &web::Document) -> (i64, i64, WaveType) {
    let field = |id: &str, default: u32| {
        dom::input_value(document, id)
            .map(|raw| labels::parse_hz_field(&raw, default))
            .unwrap_or_else(|| i64::from(default))
    };
    let wave_type = dom::input_value(document, WAVE_TYPE_SELECT_ID)
        .and_then(|raw| raw.parse::<WaveType>().ok())
        .unwrap_or_default();
    (
        field(MIN_FREQUENCY_INPUT_ID, DEFAULT_MIN_FREQUENCY_HZ),
        field(MAX_FREQUENCY_INPUT_ID, DEFAULT_MAX_FREQUENCY_HZ),
        wave_type,
    )
}

fn fill_settings_form(document: &web::Document, settings: &AudioSettings) {
    dom::set_input_value(
        document,
        MIN_FREQUENCY_INPUT_ID,
        &settings.min_frequency.to_string(),
    );
    dom::set_input_value(
        document,
        MAX_FREQUENCY_INPUT_ID,
        &settings.max_frequency.to_string(),
    );
    dom::set_input_value(document, WAVE_TYPE_SELECT_ID, settings.wave_type.as_str());
    update_preview(
        document,
        (
            settings.min_frequency.into(),
            settings.max_frequency.into(),
            settings.wave_type,
        ),
    );
}

fn update_preview(document: &web::Document, (min_hz, max_hz, wave): (i64, i64, WaveType)) {
    dom::set_text(
        document,
        SETTINGS_PREVIEW_ID,
        &labels::range_preview(min_hz, max_hz, wave.as_str()),
    );
}

pub fn wire_settings_page(document: &web::Document) {
    let store = Rc::new(RefCell::new(SettingsStore::new(LocalStorageBackend::new())));
    fill_settings_form(document, &store.borrow().load_or_default());

    for id in [MIN_FREQUENCY_INPUT_ID, MAX_FREQUENCY_INPUT_ID, WAVE_TYPE_SELECT_ID] {
        let doc = document.clone();
        dom::add_listener(document, id, "input", move |_| {
            update_preview(&doc, read_settings_form(&doc));
        });
    }

    {
        let doc = document.clone();
        let store = store.clone();
        dom::add_click_listener(document, SETTINGS_SAVE_ID, move || {
            let (min_hz, max_hz, wave) = read_settings_form(&doc);
            let saved = AudioSettings::from_fields(min_hz, max_hz, wave)
                .map_err(StoreError::from)
                .and_then(|settings| store.borrow_mut().save(&settings));
            match saved {
                Ok(()) => toast(
                    &doc,
                    SETTINGS_TOAST_ID,
                    "Settings Saved",
                    "Your sound settings have been updated",
                    false,
                ),
                Err(StoreError::Invalid(e)) => {
                    toast(&doc, SETTINGS_TOAST_ID, e.title(), &e.to_string(), true)
                }
                Err(e) => {
                    log::error!("[settings] save failed: {}", e);
                    toast(&doc, SETTINGS_TOAST_ID, "Save Failed", &e.to_string(), true);
                }
            }
        });
    }

    let doc = document.clone();
    dom::add_click_listener(document, SETTINGS_RESET_ID, move || {
        let defaults = store.borrow().reset();
        fill_settings_form(&doc, &defaults);
        toast(
            &doc,
            SETTINGS_TOAST_ID,
            "Settings Reset",
            "Settings have been reset to defaults",
            false,
        );
    });
}

pub fn wire_login_page(document: &web::Document) {
    let doc = document.clone();
    dom::add_listener(document, LOGIN_FORM_ID, "submit", move |ev| {
        ev.prevent_default();
        let form = LoginForm::new(
            dom::input_value(&doc, LOGIN_IDENTIFIER_ID).unwrap_or_default(),
            dom::input_value(&doc, LOGIN_PASSWORD_ID).unwrap_or_default(),
        );
        if let Err(e) = form.validate() {
            toast(&doc, LOGIN_TOAST_ID, "Error", &e.to_string(), true);
            return;
        }
        toast(
            &doc,
            LOGIN_TOAST_ID,
            "Login Successful",
            "Welcome to Mosquito Frequency Control",
            false,
        );
        if let Some(wnd) = web::window() {
            _ = wnd.location().set_href(SIMULATION_PATH);
        }
    });
}
