//! Fill/stroke style values.

use glam::DVec2;
use rand::Rng;
use std::fmt;

/// An sRGB color with straight alpha, serialized as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const ORANGE: Rgba = Rgba::opaque(255, 165, 0);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const YELLOW: Rgba = Rgba::opaque(255, 255, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 128, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Alpha is clamped to `[0, 1]`; NaN becomes fully transparent.
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Self { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Random color with every channel in `1..=255`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, alpha: f32) -> Rgba {
    Rgba::new(
        rng.gen_range(1..=255),
        rng.gen_range(1..=255),
        rng.gen_range(1..=255),
        alpha,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

pub const SPECTRUM_STOPS: &[ColorStop] = &[
    ColorStop {
        offset: 0.0,
        color: Rgba::RED,
    },
    ColorStop {
        offset: 0.33,
        color: Rgba::YELLOW,
    },
    ColorStop {
        offset: 0.67,
        color: Rgba::GREEN,
    },
    ColorStop {
        offset: 1.0,
        color: Rgba::BLUE,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: DVec2,
    pub end: DVec2,
    pub stops: &'static [ColorStop],
}

impl LinearGradient {
    /// Horizontal red-yellow-green-blue sweep across the full canvas width,
    /// running through the vertical center.
    pub fn spectrum(width: f64, center_y: f64) -> Self {
        Self {
            start: DVec2::new(0.0, center_y),
            end: DVec2::new(width, center_y),
            stops: SPECTRUM_STOPS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Gradient(LinearGradient),
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::Gradient(g)
    }
}
