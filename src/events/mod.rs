pub mod controls;
pub mod media;

pub use controls::{sync_from_dom, wire_controls, ControlWiring};
pub use media::{play_track, wire_play_pause};
