use spectra_core::constants::{BASS_SHELF_HZ, FFT_SIZE};
use spectra_core::{AudioSource, FrameError, SampleMode};
use web_sys as web;

fn js_err(label: &str) -> impl Fn(wasm_bindgen::JsValue) -> anyhow::Error + '_ {
    move |e| anyhow::anyhow!("{} error: {:?}", label, e)
}

/// Media element -> {dry, delay, low-shelf} -> analyser -> speakers.
pub struct AudioGraph {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    delay: web::DelayNode,
    bass: web::BiquadFilterNode,
    _source: web::MediaElementAudioSourceNode,
}

impl AudioGraph {
    pub fn build(media: &web::HtmlMediaElement) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(js_err("AudioContext"))?;

        let analyser = ctx.create_analyser().map_err(js_err("AnalyserNode"))?;
        analyser.set_fft_size(FFT_SIZE as u32);

        let delay = ctx.create_delay().map_err(js_err("DelayNode"))?;
        delay.delay_time().set_value(0.0);

        let bass = ctx.create_biquad_filter().map_err(js_err("BiquadFilterNode"))?;
        bass.set_type(web::BiquadFilterType::Lowshelf);
        bass.frequency().set_value(BASS_SHELF_HZ);
        bass.gain().set_value(0.0);

        let source = ctx
            .create_media_element_source(media)
            .map_err(js_err("MediaElementAudioSourceNode"))?;

        // Dry signal straight to the speakers; the delayed and shelved copies
        // go through the analyser, which also feeds the speakers.
        let dst = ctx.destination();
        _ = source.connect_with_audio_node(&dst);
        _ = source.connect_with_audio_node(&delay);
        _ = delay.connect_with_audio_node(&analyser);
        _ = source.connect_with_audio_node(&bass);
        _ = bass.connect_with_audio_node(&analyser);
        _ = analyser.connect_with_audio_node(&dst);

        log::info!(
            "[audio] graph ready: fft={} bins={}",
            analyser.fft_size(),
            analyser.frequency_bin_count()
        );
        Ok(Self {
            ctx,
            analyser,
            delay,
            bass,
            _source: source,
        })
    }

    pub fn bin_count(&self) -> usize {
        self.analyser.frequency_bin_count() as usize
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }
}

impl AudioSource for AudioGraph {
    fn fill_samples(&mut self, mode: SampleMode, out: &mut [u8]) -> Result<(), FrameError> {
        match mode {
            SampleMode::Frequency => self.analyser.get_byte_frequency_data(out),
            SampleMode::Waveform => self.analyser.get_byte_time_domain_data(out),
        }
        Ok(())
    }

    fn set_delay_amount(&mut self, seconds: f32) {
        self.delay.delay_time().set_value(seconds);
    }

    fn set_filter_gain(&mut self, decibels: f32) {
        self.bass.gain().set_value(decibels);
    }
}

/// The graph, or the reason it could not be built.
pub enum AudioBackend {
    Ready(AudioGraph),
    Unavailable(String),
}

impl AudioBackend {
    pub fn context(&self) -> Option<web::AudioContext> {
        match self {
            AudioBackend::Ready(g) => Some(g.context().clone()),
            AudioBackend::Unavailable(_) => None,
        }
    }
}

impl AudioSource for AudioBackend {
    fn fill_samples(&mut self, mode: SampleMode, out: &mut [u8]) -> Result<(), FrameError> {
        match self {
            AudioBackend::Ready(g) => g.fill_samples(mode, out),
            AudioBackend::Unavailable(reason) => Err(FrameError::AudioUnavailable(reason.clone())),
        }
    }

    fn set_delay_amount(&mut self, seconds: f32) {
        if let AudioBackend::Ready(g) = self {
            g.set_delay_amount(seconds);
        }
    }

    fn set_filter_gain(&mut self, decibels: f32) {
        if let AudioBackend::Ready(g) = self {
            g.set_filter_gain(decibels);
        }
    }
}
