use crate::controls::{Control, ControlAction, ControlKind, ALL_CONTROLS};
use crate::constants::FULLSCREEN_BUTTON_ID;
use crate::{dom, overlay};
use spectra_core::{TrackCatalog, Visualizer};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything a control handler may touch.
#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub media: web::HtmlMediaElement,
    pub audio_ctx: Option<web::AudioContext>,
    pub visualizer: Rc<RefCell<Visualizer>>,
    pub catalog: Rc<TrackCatalog>,
}

pub fn wire_controls(w: &ControlWiring) {
    for control in ALL_CONTROLS {
        wire_control(w, control);
    }
    wire_fullscreen(w);
}

fn wire_control(w: &ControlWiring, control: Control) {
    let Some(el) = w.document.get_element_by_id(control.element_id()) else {
        log::warn!("[ui] missing #{}; control not wired", control.element_id());
        return;
    };
    let w = w.clone();
    let el_read = el.clone();
    dom::add_listener(&el, "change", move || {
        let (value, checked) = dom::control_state(&el_read);
        dispatch(&w, control, &value, checked);
    });
}

fn dispatch(w: &ControlWiring, control: Control, value: &str, checked: bool) {
    match control.action(value, checked) {
        Ok(ControlAction::Config(update)) => {
            w.visualizer.borrow_mut().apply(update);
            if let Some(label) = control.label_id() {
                overlay::set_label(&w.document, label, value);
            }
        }
        Ok(ControlAction::PlayTrack(path)) => super::media::play_track(w, &path),
        Err(e) => log::warn!("[ui] ignoring #{}: {}", control.element_id(), e),
    }
}

/// Pull the page's current control values into the config. The track select
/// is skipped; playback starts separately.
pub fn sync_from_dom(w: &ControlWiring) {
    for control in ALL_CONTROLS {
        if control == Control::Track {
            continue;
        }
        let Some(el) = w.document.get_element_by_id(control.element_id()) else {
            continue;
        };
        let (value, checked) = dom::control_state(&el);
        if control.kind() != ControlKind::Checkbox && value.is_empty() {
            continue;
        }
        dispatch(w, control, &value, checked);
    }
}

fn wire_fullscreen(w: &ControlWiring) {
    let canvas = w.canvas.clone();
    dom::add_click_listener(&w.document, FULLSCREEN_BUTTON_ID, move || {
        if let Err(e) = canvas.request_fullscreen() {
            log::warn!("[ui] fullscreen unavailable: {:?}", e);
        }
    });
}
