use super::controls::ControlWiring;
use crate::constants::PLAYBACK_VOLUME;
use crate::{dom, overlay};
use spectra_core::Visualizer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Load `path` into the audio element, start it and update both titles.
pub fn play_track(w: &ControlWiring, path: &str) {
    let title = w.catalog.title_for(path);
    log::info!("[ui] playing {} ({})", title, path);

    w.media.set_src(path);
    w.media.set_volume(PLAYBACK_VOLUME);
    if let Some(ctx) = &w.audio_ctx {
        _ = ctx.resume();
    }
    match w.media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[ui] playback did not start: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[ui] play() failed: {:?}", e),
    }

    w.visualizer.borrow_mut().set_track_title(title.as_str());
    overlay::set_status(&w.document, &title);
}

/// Particles drift from the first frame, even when autoplay is blocked.
/// A `pause` on the audio element freezes them until the next `play`.
pub fn wire_play_pause(media: &web::HtmlMediaElement, visualizer: &Rc<RefCell<Visualizer>>) {
    let viz_play = visualizer.clone();
    dom::add_listener(media, "play", move || {
        viz_play.borrow_mut().set_paused(false);
    });
    let viz_pause = visualizer.clone();
    dom::add_listener(media, "pause", move || {
        viz_pause.borrow_mut().set_paused(true);
    });
}
