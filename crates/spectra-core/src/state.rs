//! Small pieces of cross-frame state.

use glam::DVec2;

/// Ticks rendered so far. Only its parity is observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCounter(u64);

impl FrameCounter {
    pub fn new(start: u64) -> Self {
        Self(start)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    pub fn is_even(&self) -> bool {
        self.0 % 2 == 0
    }

    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Canvas geometry for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub center: DVec2,
}

impl Layout {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width as f64;
        let height = height as f64;
        Self {
            width,
            height,
            center: DVec2::new(width / 2.0, height / 2.0),
        }
    }
}

/// Playback position formatted as `MM:SS`.
pub fn format_elapsed(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", whole / 60, whole % 60)
}
