use crate::audio::WebAudioDevice;
use crate::constants::HUMAN_ID;
use crate::dom::DomTarget;
use crate::lifecycle::SessionSlot;
use crate::overlay;
use mosquito_core::{AudioSettings, ProximityTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tracker = ProximityTracker<DomTarget, WebAudioDevice>;
type MouseClosure = Closure<dyn FnMut(web::MouseEvent)>;

/// One mounted simulation page: the tracker plus the document listeners that
/// feed it. The session owns the listener closures, so it must stay alive
/// until `teardown` detaches them.
pub struct SimulationSession {
    document: web::Document,
    tracker: Rc<RefCell<Tracker>>,
    on_move: MouseClosure,
    on_leave: MouseClosure,
}

impl SimulationSession {
    pub fn start(document: web::Document, settings: AudioSettings) -> Self {
        let target = DomTarget::new(document.clone(), HUMAN_ID);
        let tracker = Rc::new(RefCell::new(ProximityTracker::new(
            target,
            WebAudioDevice::new(),
            settings,
        )));
        {
            let doc = document.clone();
            tracker
                .borrow_mut()
                .subscribe(move |state| overlay::render(&doc, state));
        }

        let on_move = wire_mousemove(&document, &tracker);
        let on_leave = wire_mouseleave(&document, &tracker);
        Self {
            document,
            tracker,
            on_move,
            on_leave,
        }
    }

    /// Silence the tone, release the audio context and detach listeners.
    pub fn teardown(self) {
        _ = self.document.remove_event_listener_with_callback(
            "mousemove",
            self.on_move.as_ref().unchecked_ref(),
        );
        _ = self.document.remove_event_listener_with_callback(
            "mouseleave",
            self.on_leave.as_ref().unchecked_ref(),
        );
        self.tracker.borrow_mut().teardown();
    }
}

fn wire_mousemove(document: &web::Document, tracker: &Rc<RefCell<Tracker>>) -> MouseClosure {
    let tracker = tracker.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Ok(mut t) = tracker.try_borrow_mut() else {
            return;
        };
        t.on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure
}

fn wire_mouseleave(document: &web::Document, tracker: &Rc<RefCell<Tracker>>) -> MouseClosure {
    let tracker = tracker.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        if let Ok(mut t) = tracker.try_borrow_mut() {
            t.on_pointer_leave();
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure
}

/// Start a simulation session and keep it in step with the page lifecycle:
/// torn down on `pagehide`, rebuilt when the page is restored from the
/// back/forward cache. `load_settings` runs once per session.
pub fn wire_page_lifecycle(
    document: web::Document,
    load_settings: impl Fn() -> AudioSettings + 'static,
) {
    let session = SimulationSession::start(document.clone(), load_settings());
    let slot = Rc::new(RefCell::new(SessionSlot::new(session)));
    let Some(wnd) = web::window() else {
        return;
    };

    {
        let slot = slot.clone();
        let on_hide = Closure::wrap(Box::new(move || {
            if slot.borrow_mut().hide(SimulationSession::teardown) {
                log::info!("[page] hidden, tearing down simulation");
            }
        }) as Box<dyn FnMut()>);
        _ = wnd.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
        on_hide.forget();
    }

    let on_show = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        let restarted = slot.borrow_mut().show(ev.persisted(), || {
            SimulationSession::start(document.clone(), load_settings())
        });
        if restarted {
            log::info!("[page] restored from cache, restarting simulation");
        }
    }) as Box<dyn FnMut(_)>);
    _ = wnd.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}
