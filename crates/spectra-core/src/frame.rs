//! One rendered frame: analysis data + config + particle state in, draw
//! commands and a filtered pixel buffer out.

use crate::color::{random_color, Rgba};
use crate::config::{ConfigUpdate, RenderConfig, SampleMode, Version};
use crate::constants::{BIN_COUNT, PARTICLE_COUNT, RANDOM_COLOR_ALPHA};
use crate::error::FrameError;
use crate::filter;
use crate::overlay;
use crate::particles::ParticleSystem;
use crate::shapes;
use crate::state::{FrameCounter, Layout};
use crate::surface::{ImageId, Surface};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The audio graph as seen from the render loop.
pub trait AudioSource {
    /// Fill `out` with this tick's byte samples in the requested domain.
    fn fill_samples(&mut self, mode: SampleMode, out: &mut [u8]) -> Result<(), FrameError>;

    /// Fire-and-forget parameter write.
    fn set_delay_amount(&mut self, seconds: f32);

    /// Fire-and-forget parameter write.
    fn set_filter_gain(&mut self, decibels: f32);
}

/// One tick's analyser output.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisFrame {
    pub mode: SampleMode,
    pub samples: Vec<u8>,
}

impl AnalysisFrame {
    pub fn new(bins: usize) -> Self {
        Self {
            mode: SampleMode::Frequency,
            samples: vec![0; bins],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was drawn from `bins` samples.
    Drawn { bins: usize },
    /// Audio data was unavailable; nothing was drawn.
    Skipped,
}

pub struct Visualizer {
    config: RenderConfig,
    particles: ParticleSystem,
    counter: FrameCounter,
    paused: bool,
    title: String,
    analysis: AnalysisFrame,
    rng: StdRng,
    size: (u32, u32),
    audio_ready: bool,
}

impl Visualizer {
    /// Deterministic visualizer for a canvas of `size`.
    pub fn new(size: (u32, u32), seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(size: (u32, u32), mut rng: StdRng) -> Self {
        let layout = Layout::new(size.0, size.1);
        let particles = ParticleSystem::spawn(PARTICLE_COUNT, layout.center, &mut rng);
        Self {
            config: RenderConfig::default(),
            particles,
            counter: FrameCounter::default(),
            paused: false,
            title: String::new(),
            analysis: AnalysisFrame::new(BIN_COUNT),
            rng,
            size,
            audio_ready: true,
        }
    }

    pub fn apply(&mut self, update: ConfigUpdate) {
        self.config.apply(update);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_track_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn frame_count(&self) -> FrameCounter {
        self.counter
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// Resize the analysis buffer, e.g. when the analyser reports a different
    /// bin count than the default FFT size implies.
    pub fn set_bin_count(&mut self, bins: usize) {
        self.analysis.samples.resize(bins, 0);
    }

    pub fn analysis(&self) -> &AnalysisFrame {
        &self.analysis
    }

    /// Render one tick onto `surface`.
    pub fn render_frame<S: Surface, A: AudioSource>(
        &mut self,
        audio: &mut A,
        surface: &mut S,
        elapsed_secs: f64,
    ) -> FrameOutcome {
        let size = surface.size();
        let layout = Layout::new(size.0, size.1);
        if size != self.size {
            log::info!("[frame] surface resized to {}x{}", size.0, size.1);
            self.particles.set_anchor(layout.center);
            self.size = size;
        }

        self.analysis.mode = self.config.mode;
        if let Err(e) = audio.fill_samples(self.config.mode, &mut self.analysis.samples) {
            if self.audio_ready {
                log::warn!("[frame] skipping draw: {}", e);
                self.audio_ready = false;
            }
            self.counter.advance();
            return FrameOutcome::Skipped;
        }
        if !self.audio_ready {
            log::info!("[frame] audio analysis available again");
            self.audio_ready = true;
        }

        let background = match self.config.version {
            Version::Simple => ImageId::Wallpaper,
            Version::Real => ImageId::WallpaperReal,
        };
        surface.apply_all(&overlay::clear(&layout));
        surface.apply_all(&overlay::background(background));

        self.draw_bins(surface, &layout);

        if self.config.version == Version::Real {
            let bounds = DVec2::new(layout.width, layout.height);
            self.particles.update(self.paused, bounds, &mut self.rng);
            for shape in self.particles.draw() {
                surface.apply_all(&shape);
            }
            surface.apply_all(&overlay::icon(&layout));
        }

        surface.apply_all(&overlay::song_info(&self.title, elapsed_secs, &layout));

        if self.config.filters.any() {
            self.filter_surface(surface);
        }

        audio.set_delay_amount(self.config.delay_seconds);
        audio.set_filter_gain(self.config.bass_gain_db);

        self.counter.advance();
        FrameOutcome::Drawn {
            bins: self.analysis.samples.len(),
        }
    }

    fn draw_bins<S: Surface>(&mut self, surface: &mut S, layout: &Layout) {
        let cfg = &self.config;
        let bins = self.analysis.samples.len();
        let horizon = cfg.horizon_effect && self.counter.is_even();
        for (i, &sample) in self.analysis.samples.iter().enumerate() {
            match cfg.version {
                Version::Simple => surface.apply_all(&shapes::simple_bar(i, sample, layout)),
                Version::Real => {
                    if horizon {
                        surface.apply_all(&shapes::horizon_circle(sample, layout));
                    }
                    surface.apply_all(&shapes::center_lines(i, sample, layout));
                    let fill = if cfg.random_colors {
                        random_color(&mut self.rng, RANDOM_COLOR_ALPHA)
                    } else {
                        Rgba::WHITE
                    };
                    surface.apply_all(&shapes::center_effect(
                        cfg.center_effect,
                        i,
                        bins,
                        sample,
                        layout,
                        fill,
                    ));
                    if cfg.freq_bars {
                        surface.apply_all(&shapes::freq_bars(i, sample, layout));
                    }
                }
            }
        }
    }

    fn filter_surface<S: Surface>(&self, surface: &mut S) {
        let mut pixels = match surface.read_pixels() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[filter] {}", e);
                return;
            }
        };
        filter::apply_filters(&mut pixels, self.config.filters);
        if let Err(e) = surface.write_pixels(&pixels) {
            log::warn!("[filter] {}", e);
        }
    }
}
