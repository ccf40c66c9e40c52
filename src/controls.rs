//! DOM control ids mapped to typed actions.
//!
//! Kept free of `web_sys` so the mapping can be exercised on the host.

use crate::constants::*;
use spectra_core::{ConfigError, ConfigUpdate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Checkbox,
    Select,
    Slider,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Track,
    CenterEffect,
    RandomColors,
    FreqBars,
    Horizon,
    Waveform,
    Version,
    Delay,
    Bass,
    Grayscale,
    Threshold,
    Invert,
}

pub const ALL_CONTROLS: [Control; 12] = [
    Control::Track,
    Control::CenterEffect,
    Control::RandomColors,
    Control::FreqBars,
    Control::Horizon,
    Control::Waveform,
    Control::Version,
    Control::Delay,
    Control::Bass,
    Control::Grayscale,
    Control::Threshold,
    Control::Invert,
];

/// What a control change asks the app to do.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Config(ConfigUpdate),
    PlayTrack(String),
}

impl Control {
    pub fn element_id(self) -> &'static str {
        match self {
            Control::Track => TRACK_SELECT_ID,
            Control::CenterEffect => CENTER_EFFECT_ID,
            Control::RandomColors => RANDOM_COLORS_ID,
            Control::FreqBars => FREQ_BARS_ID,
            Control::Horizon => HORIZON_ID,
            Control::Waveform => WAVEFORM_ID,
            Control::Version => VERSION_ID,
            Control::Delay => DELAY_SLIDER_ID,
            Control::Bass => BASS_SLIDER_ID,
            Control::Grayscale => GRAYSCALE_ID,
            Control::Threshold => THRESHOLD_ID,
            Control::Invert => INVERT_ID,
        }
    }

    pub fn from_element_id(id: &str) -> Result<Self, ConfigError> {
        ALL_CONTROLS
            .iter()
            .copied()
            .find(|c| c.element_id() == id)
            .ok_or_else(|| ConfigError::UnknownControl(id.to_string()))
    }

    pub fn kind(self) -> ControlKind {
        match self {
            Control::Track | Control::CenterEffect | Control::Version => ControlKind::Select,
            Control::Delay | Control::Bass => ControlKind::Slider,
            _ => ControlKind::Checkbox,
        }
    }

    /// Element that echoes a slider's value.
    pub fn label_id(self) -> Option<&'static str> {
        match self {
            Control::Delay => Some(DELAY_LABEL_ID),
            Control::Bass => Some(BASS_LABEL_ID),
            _ => None,
        }
    }

    /// Translate a change event payload. Checkboxes read `checked`, everything
    /// else reads `value`.
    pub fn action(self, value: &str, checked: bool) -> Result<ControlAction, ConfigError> {
        let update = match self {
            Control::Track => return Ok(ControlAction::PlayTrack(value.to_string())),
            Control::CenterEffect => ConfigUpdate::CenterEffect(value.parse()?),
            Control::Version => ConfigUpdate::Version(value.parse()?),
            Control::Delay => ConfigUpdate::delay_from_str(value)?,
            Control::Bass => ConfigUpdate::bass_from_str(value)?,
            Control::RandomColors => ConfigUpdate::RandomColors(checked),
            Control::FreqBars => ConfigUpdate::FreqBars(checked),
            Control::Horizon => ConfigUpdate::HorizonEffect(checked),
            Control::Waveform => ConfigUpdate::Waveform(checked),
            Control::Grayscale => ConfigUpdate::Grayscale(checked),
            Control::Threshold => ConfigUpdate::Threshold(checked),
            Control::Invert => ConfigUpdate::Invert(checked),
        };
        Ok(ControlAction::Config(update))
    }
}
