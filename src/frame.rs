use crate::audio::AudioBackend;
use crate::canvas::CanvasSurface;
use spectra_core::{FrameOutcome, Visualizer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub visualizer: Rc<RefCell<Visualizer>>,
    pub surface: CanvasSurface,
    pub audio: AudioBackend,
    pub media: web::HtmlMediaElement,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameOutcome {
        let elapsed = self.media.current_time();
        // A control handler may hold the visualizer; try again next tick.
        let Ok(mut viz) = self.visualizer.try_borrow_mut() else {
            return FrameOutcome::Skipped;
        };
        viz.render_frame(&mut self.audio, &mut self.surface, elapsed)
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_tick(slot: &TickSlot) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = slot.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from requestAnimationFrame. The next tick is queued
/// before drawing so one failed frame never stops the loop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_tick(&tick_clone);
        match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => {
                ctx.frame();
            }
            Err(_) => log::debug!("[frame] re-entrant tick skipped"),
        }
    }) as Box<dyn FnMut()>));
    log::info!("[frame] render loop started");
    request_tick(&tick);
}
