//! Drawing-command vocabulary and the 2D surface seam.
//!
//! Renderers never talk to a canvas. They return [`DrawCmd`] lists which the
//! render loop replays onto a [`Surface`]; the browser front-end implements the
//! trait over `CanvasRenderingContext2d`, tests use [`CommandRecorder`].

use crate::color::{Paint, Rgba};
use crate::error::FrameError;
use glam::DVec2;
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Images the surface knows how to blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageId {
    /// Backdrop for the simple version.
    Wallpaper,
    /// Backdrop for the real version.
    WallpaperReal,
    /// Center icon.
    Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    /// Negative heights grow upward, as on a canvas.
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(w, h),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Save,
    Restore,
    Translate(DVec2),
    Scale(DVec2),
    FillStyle(Paint),
    StrokeStyle(Paint),
    LineWidth(f64),
    LineCap(LineCap),
    Shadow { color: Rgba, blur: f64, offset: DVec2 },
    Font(&'static str),
    BeginPath,
    ClosePath,
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo { ctrl: DVec2, to: DVec2 },
    Arc { center: DVec2, radius: f64, start: f64, end: f64 },
    Fill,
    Stroke,
    FillRect(Rect),
    StrokeRect(Rect),
    ClearRect(Rect),
    Image { id: ImageId, at: DVec2 },
    Text { text: String, at: DVec2 },
}

impl DrawCmd {
    /// Full circle sub-path.
    pub fn circle(center: DVec2, radius: f64) -> Self {
        DrawCmd::Arc {
            center,
            radius,
            start: 0.0,
            end: TAU,
        }
    }

    /// Every coordinate carried by the command, for geometry checks.
    pub fn points(&self) -> SmallVec<[DVec2; 2]> {
        let mut out = SmallVec::new();
        match self {
            DrawCmd::Translate(p) | DrawCmd::Scale(p) | DrawCmd::MoveTo(p) | DrawCmd::LineTo(p) => {
                out.push(*p)
            }
            DrawCmd::QuadTo { ctrl, to } => {
                out.push(*ctrl);
                out.push(*to);
            }
            DrawCmd::Arc { center, radius, .. } => {
                out.push(*center);
                out.push(DVec2::splat(*radius));
            }
            DrawCmd::FillRect(r) | DrawCmd::StrokeRect(r) | DrawCmd::ClearRect(r) => {
                out.push(r.origin);
                out.push(r.size);
            }
            DrawCmd::Image { at, .. } | DrawCmd::Text { at, .. } => out.push(*at),
            _ => {}
        }
        out
    }
}

/// Commands emitted by one renderer call.
pub type Shape = SmallVec<[DrawCmd; 16]>;

/// A 2D drawing context with full-surface pixel access.
pub trait Surface {
    /// Backing size in pixels.
    fn size(&self) -> (u32, u32);

    fn apply(&mut self, cmd: &DrawCmd);

    fn apply_all<'a, I>(&mut self, cmds: I)
    where
        I: IntoIterator<Item = &'a DrawCmd>,
        Self: Sized,
    {
        for cmd in cmds {
            self.apply(cmd);
        }
    }

    /// Flat RGBA bytes of the whole surface, row-major.
    fn read_pixels(&mut self) -> Result<Vec<u8>, FrameError>;

    fn write_pixels(&mut self, pixels: &[u8]) -> Result<(), FrameError>;
}

/// Headless surface that records commands and holds a plain RGBA buffer.
#[derive(Clone, Debug)]
pub struct CommandRecorder {
    width: u32,
    height: u32,
    pub commands: Vec<DrawCmd>,
    pub pixels: Vec<u8>,
}

impl CommandRecorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Surface for CommandRecorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn apply(&mut self, cmd: &DrawCmd) {
        self.commands.push(cmd.clone());
    }

    fn read_pixels(&mut self) -> Result<Vec<u8>, FrameError> {
        Ok(self.pixels.clone())
    }

    fn write_pixels(&mut self, pixels: &[u8]) -> Result<(), FrameError> {
        if pixels.len() != self.pixels.len() {
            return Err(FrameError::Pixels(format!(
                "expected {} bytes, got {}",
                self.pixels.len(),
                pixels.len()
            )));
        }
        self.pixels.copy_from_slice(pixels);
        Ok(())
    }
}
