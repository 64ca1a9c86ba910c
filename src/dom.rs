use glam::Vec2;
use mosquito_core::TargetGeometry;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::HIDDEN_CLASS;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>
        );
        _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    add_listener(document, element_id, "click", move |ev| {
        ev.prevent_default();
        handler()
    });
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if hidden {
            _ = cl.add_1(HIDDEN_CLASS);
        } else {
            _ = cl.remove_1(HIDDEN_CLASS);
        }
    }
}

pub fn set_class(document: &web::Document, element_id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().toggle_with_force(class, on);
    }
}

pub fn input_value(document: &web::Document, element_id: &str) -> Option<String> {
    let el = document.get_element_by_id(element_id)?;
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlSelectElement>().map(|s| s.value())
}

pub fn set_input_value(document: &web::Document, element_id: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
            select.set_value(value);
        }
    }
}

/// Target geometry backed by a DOM element. The bounding box is read on every
/// call so layout changes are picked up.
pub struct DomTarget {
    document: web::Document,
    element_id: &'static str,
}

impl DomTarget {
    pub fn new(document: web::Document, element_id: &'static str) -> Self {
        Self {
            document,
            element_id,
        }
    }
}

impl TargetGeometry for DomTarget {
    fn target_center(&self) -> Option<Vec2> {
        let el = self.document.get_element_by_id(self.element_id)?;
        if !el.is_connected() {
            return None;
        }
        let rect = el.get_bounding_client_rect();
        Some(Vec2::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
        ))
    }
}
