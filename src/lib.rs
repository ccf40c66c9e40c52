#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use spectra_core::{TrackCatalog, Visualizer, DEFAULT_TRACK};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spectra-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, constants::CANVAS_ID)?;
    let player: web::HtmlAudioElement = document
        .query_selector("audio")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing <audio> element"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let media: web::HtmlMediaElement = player.into();

    let images = canvas::ImageSet::load()?;
    let size = (canvas.width(), canvas.height());
    let surface = canvas::CanvasSurface::new(canvas.clone(), images)?;
    let visualizer = Rc::new(RefCell::new(Visualizer::with_rng(
        size,
        StdRng::from_entropy(),
    )));

    let audio = match audio::AudioGraph::build(&media) {
        Ok(graph) => {
            visualizer.borrow_mut().set_bin_count(graph.bin_count());
            audio::AudioBackend::Ready(graph)
        }
        Err(e) => {
            log::error!("[audio] {:?}", e);
            audio::AudioBackend::Unavailable(e.to_string())
        }
    };

    let wiring = events::ControlWiring {
        document,
        canvas,
        media: media.clone(),
        audio_ctx: audio.context(),
        visualizer: visualizer.clone(),
        catalog: Rc::new(TrackCatalog::bundled()),
    };
    events::wire_controls(&wiring);
    events::wire_play_pause(&media, &visualizer);
    events::sync_from_dom(&wiring);
    events::play_track(&wiring, DEFAULT_TRACK);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        visualizer,
        surface,
        audio,
        media,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
