//! Fixed overlays drawn after the per-bin pass.

use crate::color::Rgba;
use crate::constants::*;
use crate::state::{format_elapsed, Layout};
use crate::surface::{DrawCmd, ImageId, Rect, Shape};
use glam::DVec2;
use smallvec::smallvec;

pub fn clear(layout: &Layout) -> Shape {
    smallvec![DrawCmd::ClearRect(Rect::new(
        0.0,
        0.0,
        layout.width,
        layout.height
    ))]
}

pub fn background(image: ImageId) -> Shape {
    smallvec![DrawCmd::Image {
        id: image,
        at: DVec2::ZERO,
    }]
}

/// Icon image centered on the canvas with a white circular border.
pub fn icon(layout: &Layout) -> Shape {
    let c = layout.center;
    smallvec![
        DrawCmd::Image {
            id: ImageId::Icon,
            at: c - DVec2::splat(ICON_RADIUS),
        },
        DrawCmd::BeginPath,
        DrawCmd::circle(c, ICON_RADIUS),
        DrawCmd::ClosePath,
        DrawCmd::StrokeStyle(Rgba::WHITE.into()),
        DrawCmd::LineWidth(ICON_BORDER_WIDTH),
        DrawCmd::Stroke,
    ]
}

/// Track title and elapsed playback time in the lower left corner.
pub fn song_info(title: &str, elapsed_secs: f64, layout: &Layout) -> Shape {
    smallvec![
        DrawCmd::Font(TITLE_FONT),
        DrawCmd::FillStyle(Rgba::WHITE.into()),
        DrawCmd::Save,
        DrawCmd::Shadow {
            color: Rgba::ORANGE,
            blur: TEXT_SHADOW_BLUR,
            offset: DVec2::ZERO,
        },
        DrawCmd::Text {
            text: title.to_string(),
            at: DVec2::new(TEXT_MARGIN_X, layout.height * TITLE_Y),
        },
        DrawCmd::Font(TIME_FONT),
        DrawCmd::Text {
            text: format_elapsed(elapsed_secs),
            at: DVec2::new(TEXT_MARGIN_X, layout.height * TIME_Y),
        },
        DrawCmd::Restore,
    ]
}
