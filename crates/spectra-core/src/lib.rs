//! Platform-free core of the spectra visualizer.
//!
//! Everything here is a pure function of analysis samples, [`RenderConfig`]
//! and particle state. The browser front-end reaches the canvas and the audio
//! graph through the [`Surface`] and [`AudioSource`] traits.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod frame;
pub mod overlay;
pub mod particles;
pub mod shapes;
pub mod state;
pub mod surface;
pub mod track;

pub use color::*;
pub use config::*;
pub use error::*;
pub use frame::*;
pub use particles::*;
pub use state::*;
pub use surface::*;
pub use track::*;
