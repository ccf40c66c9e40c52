//! User-toggleable render configuration.
//!
//! The render loop owns a [`RenderConfig`] and reads it once per tick. The UI
//! never touches fields directly; each control produces a [`ConfigUpdate`]
//! which is applied between ticks.

use crate::constants::{BASS_GAIN_LIMIT_DB, DELAY_MAX_SEC};
use crate::error::ConfigError;
use std::str::FromStr;

/// Which analyser read feeds the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleMode {
    #[default]
    Frequency,
    Waveform,
}

/// Visual version selected on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Version {
    /// A single row of white bars.
    #[default]
    Simple,
    /// Horizon, center lines, center effect, particles and icon.
    Real,
}

impl FromStr for Version {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "simple" => Ok(Self::Simple),
            "real" => Ok(Self::Real),
            other => Err(ConfigError::UnknownVersion(other.to_string())),
        }
    }
}

/// The figure drawn around the canvas center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CenterEffect {
    /// Quadratic curve bundle (`effect1`).
    #[default]
    Bezier,
    /// Rotated radial line pairs (`effect2`).
    RadialPairs,
    /// Partial radial spikes (`effect3`).
    RadialSpikes,
}

impl FromStr for CenterEffect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "effect1" => Ok(Self::Bezier),
            "effect2" => Ok(Self::RadialPairs),
            "effect3" => Ok(Self::RadialSpikes),
            other => Err(ConfigError::UnknownCenterEffect(other.to_string())),
        }
    }
}

/// Independent pixel filter checkboxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterFlags {
    pub grayscale: bool,
    pub threshold: bool,
    pub invert: bool,
}

impl FilterFlags {
    pub fn any(&self) -> bool {
        self.grayscale || self.threshold || self.invert
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub mode: SampleMode,
    pub version: Version,
    pub center_effect: CenterEffect,
    pub random_colors: bool,
    pub horizon_effect: bool,
    pub freq_bars: bool,
    pub filters: FilterFlags,
    /// Delay node time in seconds.
    pub delay_seconds: f32,
    /// Low-shelf gain in decibels.
    pub bass_gain_db: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: SampleMode::Frequency,
            version: Version::Simple,
            center_effect: CenterEffect::Bezier,
            random_colors: false,
            horizon_effect: true,
            freq_bars: false,
            filters: FilterFlags::default(),
            delay_seconds: 0.0,
            bass_gain_db: 0.0,
        }
    }
}

/// One message per UI control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigUpdate {
    Waveform(bool),
    Version(Version),
    CenterEffect(CenterEffect),
    RandomColors(bool),
    HorizonEffect(bool),
    FreqBars(bool),
    Grayscale(bool),
    Threshold(bool),
    Invert(bool),
    DelaySeconds(f32),
    BassGainDb(f32),
}

impl ConfigUpdate {
    /// Parse a slider value for the delay control.
    pub fn delay_from_str(value: &str) -> Result<Self, ConfigError> {
        parse_amount("delay", value).map(Self::DelaySeconds)
    }

    /// Parse a slider value for the bass control.
    pub fn bass_from_str(value: &str) -> Result<Self, ConfigError> {
        parse_amount("bass", value).map(Self::BassGainDb)
    }
}

fn parse_amount(control: &'static str, value: &str) -> Result<f32, ConfigError> {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::InvalidNumber {
            control,
            value: value.to_string(),
        }),
    }
}

impl RenderConfig {
    pub fn apply(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::Waveform(on) => {
                self.mode = if on {
                    SampleMode::Waveform
                } else {
                    SampleMode::Frequency
                }
            }
            ConfigUpdate::Version(v) => self.version = v,
            ConfigUpdate::CenterEffect(e) => self.center_effect = e,
            ConfigUpdate::RandomColors(on) => self.random_colors = on,
            ConfigUpdate::HorizonEffect(on) => self.horizon_effect = on,
            ConfigUpdate::FreqBars(on) => self.freq_bars = on,
            ConfigUpdate::Grayscale(on) => self.filters.grayscale = on,
            ConfigUpdate::Threshold(on) => self.filters.threshold = on,
            ConfigUpdate::Invert(on) => self.filters.invert = on,
            ConfigUpdate::DelaySeconds(s) => self.delay_seconds = s.clamp(0.0, DELAY_MAX_SEC),
            ConfigUpdate::BassGainDb(db) => {
                self.bass_gain_db = db.clamp(-BASS_GAIN_LIMIT_DB, BASS_GAIN_LIMIT_DB)
            }
        }
        log::debug!("[ui] applied {:?}", update);
    }
}
