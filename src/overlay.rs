use mosquito_core::{in_detection_zone, AudioStatus, ProximityState};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    AUDIO_UNAVAILABLE_ID, BUZZ_STATUS_ID, DISTANCE_BADGE_ID, FREQUENCY_BADGE_ID, HUMAN_PULSE_ID,
    MOSQUITO_HALF_SIZE_PX, MOSQUITO_ID, MOSQUITO_ZONE_SCALE,
};
use crate::dom;
use crate::labels;

/// Reflect the latest proximity state in the status badges and markers.
pub fn render(document: &web::Document, state: &ProximityState) {
    dom::set_text(document, DISTANCE_BADGE_ID, &labels::distance_label(state.distance));
    dom::set_text(
        document,
        FREQUENCY_BADGE_ID,
        &labels::frequency_label(state.frequency),
    );
    dom::set_text(document, BUZZ_STATUS_ID, labels::buzz_label(state.is_playing));
    dom::set_class(document, FREQUENCY_BADGE_ID, "active", state.is_playing);
    dom::set_class(document, BUZZ_STATUS_ID, "active", state.is_playing);
    dom::set_hidden(document, HUMAN_PULSE_ID, !state.is_close);
    dom::set_hidden(
        document,
        AUDIO_UNAVAILABLE_ID,
        state.audio != AudioStatus::Unavailable,
    );
    place_mosquito(document, state);
}

fn place_mosquito(document: &web::Document, state: &ProximityState) {
    let Some(el) = document.get_element_by_id(MOSQUITO_ID) else {
        return;
    };
    let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    let in_zone = in_detection_zone(state.distance as f32);
    let (left, top, scale) = labels::mosquito_marker_style(
        state.pointer.x,
        state.pointer.y,
        in_zone,
        MOSQUITO_HALF_SIZE_PX,
        MOSQUITO_ZONE_SCALE,
    );
    let style = html.style();
    _ = style.set_property("left", &format!("{}px", left));
    _ = style.set_property("top", &format!("{}px", top));
    _ = style.set_property("transform", &format!("scale({})", scale));
    _ = el.class_list().toggle_with_force("in-zone", in_zone);
}
