// Host-side tests for the control id to action mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/controls.rs"]
mod controls;

use controls::*;
use spectra_core::{CenterEffect, ConfigError, ConfigUpdate, RenderConfig, Version};

#[test]
fn every_control_round_trips_through_its_element_id() {
    for control in ALL_CONTROLS {
        assert_eq!(Control::from_element_id(control.element_id()), Ok(control));
    }
}

#[test]
fn unknown_element_id_is_rejected() {
    assert_eq!(
        Control::from_element_id("nope"),
        Err(ConfigError::UnknownControl("nope".to_string()))
    );
}

#[test]
fn kinds_match_the_page_markup() {
    assert_eq!(Control::Track.kind(), ControlKind::Select);
    assert_eq!(Control::CenterEffect.kind(), ControlKind::Select);
    assert_eq!(Control::Version.kind(), ControlKind::Select);
    assert_eq!(Control::Delay.kind(), ControlKind::Slider);
    assert_eq!(Control::Bass.kind(), ControlKind::Slider);
    for c in [
        Control::RandomColors,
        Control::FreqBars,
        Control::Horizon,
        Control::Waveform,
        Control::Grayscale,
        Control::Threshold,
        Control::Invert,
    ] {
        assert_eq!(c.kind(), ControlKind::Checkbox);
    }
}

#[test]
fn only_sliders_have_labels() {
    for control in ALL_CONTROLS {
        let has_label = control.label_id().is_some();
        assert_eq!(has_label, control.kind() == ControlKind::Slider, "{control:?}");
    }
}

#[test]
fn checkboxes_read_checked_not_value() {
    assert_eq!(
        Control::Waveform.action("on", false),
        Ok(ControlAction::Config(ConfigUpdate::Waveform(false)))
    );
    assert_eq!(
        Control::Invert.action("", true),
        Ok(ControlAction::Config(ConfigUpdate::Invert(true)))
    );
}

#[test]
fn selects_parse_their_values() {
    assert_eq!(
        Control::CenterEffect.action("effect3", false),
        Ok(ControlAction::Config(ConfigUpdate::CenterEffect(
            CenterEffect::RadialSpikes
        )))
    );
    assert_eq!(
        Control::Version.action("real", false),
        Ok(ControlAction::Config(ConfigUpdate::Version(Version::Real)))
    );
    assert!(Control::Version.action("fancy", false).is_err());
}

#[test]
fn track_select_requests_playback() {
    assert_eq!(
        Control::Track.action("media/a.mp3", false),
        Ok(ControlAction::PlayTrack("media/a.mp3".to_string()))
    );
}

#[test]
fn sliders_feed_clamped_config() {
    let mut cfg = RenderConfig::default();
    for (control, value) in [(Control::Delay, "0.5"), (Control::Bass, "99")] {
        match control.action(value, false) {
            Ok(ControlAction::Config(update)) => cfg.apply(update),
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(cfg.delay_seconds, 0.5);
    assert_eq!(cfg.bass_gain_db, 40.0);
    assert!(Control::Delay.action("abc", false).is_err());
}
