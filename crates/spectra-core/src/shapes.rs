//! Per-bin shape renderers.
//!
//! Each renderer is a pure function of the bin index, its sample value and the
//! frame [`Layout`]. Sizes scale linearly with the sample and stay finite for
//! a zero sample.

use crate::color::{LinearGradient, Paint, Rgba};
use crate::config::CenterEffect;
use crate::constants::*;
use crate::state::Layout;
use crate::surface::{DrawCmd, LineCap, Rect, Shape};
use glam::DVec2;
use smallvec::smallvec;
use std::f64::consts::PI;

pub const RADIAL_PAIRS_SWEEP: f64 = 5.0 * PI / 3.0;
pub const RADIAL_PAIRS_OFFSET: f64 = 2.0 * PI / 3.0;
pub const RADIAL_SPIKES_SWEEP: f64 = 13.0 * PI / 9.0;
pub const RADIAL_SPIKES_OFFSET: f64 = PI / 3.0;

/// Angle of bin `index` on a sweep starting at `offset`. An empty frame maps
/// everything to the offset.
#[inline]
pub fn sweep_angle(index: usize, bins: usize, sweep: f64, offset: f64) -> f64 {
    if bins == 0 {
        return offset;
    }
    sweep * index as f64 / bins as f64 + offset
}

#[inline]
fn bar_x(index: usize) -> f64 {
    index as f64 * BAR_SPACING
}

#[inline]
fn bar_len(sample: u8) -> f64 {
    sample as f64 / BAR_HEIGHT_DIVIDER
}

#[inline]
fn polar(center: DVec2, radius: f64, cos: f64, sin: f64) -> DVec2 {
    DVec2::new(center.x + radius * cos, center.y - radius * sin)
}

fn spectrum(layout: &Layout) -> Paint {
    LinearGradient::spectrum(layout.width, layout.center.y).into()
}

/// White outlined bar with an orange glow, used by the simple version.
pub fn simple_bar(index: usize, sample: u8, layout: &Layout) -> Shape {
    let rect = Rect::new(
        bar_x(index),
        layout.height * SIMPLE_BAR_TOP,
        SIMPLE_BAR_WIDTH,
        bar_len(sample) + SIMPLE_BAR_BASELINE,
    );
    smallvec![
        DrawCmd::Save,
        DrawCmd::Shadow {
            color: Rgba::ORANGE,
            blur: BAR_SHADOW_BLUR,
            offset: DVec2::ZERO,
        },
        DrawCmd::FillStyle(Rgba::WHITE.into()),
        DrawCmd::FillRect(rect),
        DrawCmd::LineWidth(1.0),
        DrawCmd::StrokeStyle(Rgba::BLACK.into()),
        DrawCmd::StrokeRect(rect),
        DrawCmd::Restore,
    ]
}

/// Vertical strokes up and down from the center line, mirrored on both sides
/// of the canvas.
pub fn center_lines(index: usize, sample: u8, layout: &Layout) -> Shape {
    let cy = layout.center.y;
    let len = bar_len(sample);
    let left = bar_x(index);
    let right = layout.width - bar_x(index);
    let mut out: Shape = smallvec![
        DrawCmd::LineCap(LineCap::Round),
        DrawCmd::LineWidth(CENTER_LINE_WIDTH),
        DrawCmd::StrokeStyle(spectrum(layout)),
        DrawCmd::BeginPath,
    ];
    for x in [left, right] {
        for dy in [-len, len] {
            out.push(DrawCmd::MoveTo(DVec2::new(x, cy)));
            out.push(DrawCmd::LineTo(DVec2::new(x, cy + dy)));
        }
    }
    out.push(DrawCmd::Stroke);
    out
}

/// Gradient bars rising from the bottom edge at both ends of the canvas.
pub fn freq_bars(index: usize, sample: u8, layout: &Layout) -> Shape {
    let h = -bar_len(sample) - FREQ_BAR_BASELINE;
    smallvec![
        DrawCmd::FillStyle(spectrum(layout)),
        DrawCmd::FillRect(Rect::new(bar_x(index), layout.height, FREQ_BAR_WIDTH, h)),
        DrawCmd::FillRect(Rect::new(
            layout.width - bar_x(index),
            layout.height,
            FREQ_BAR_WIDTH,
            h
        )),
    ]
}

/// Flattened translucent ellipse plus a center disc. Louder bins get larger
/// and fainter.
pub fn horizon_circle(sample: u8, layout: &Layout) -> Shape {
    let percent = sample as f64 / 255.0;
    let radius = percent * HORIZON_MAX_RADIUS;
    let c = layout.center;
    smallvec![
        DrawCmd::FillStyle(Rgba::new(255, 255, 255, (0.05 - percent / 10.0) as f32).into()),
        DrawCmd::Save,
        DrawCmd::Translate(c),
        DrawCmd::Scale(DVec2::new(HORIZON_SCALE_X, HORIZON_SCALE_Y)),
        DrawCmd::BeginPath,
        DrawCmd::circle(DVec2::ZERO, radius),
        DrawCmd::Restore,
        DrawCmd::Fill,
        DrawCmd::FillStyle(Rgba::new(255, 255, 255, (0.1 - percent / 10.0) as f32).into()),
        DrawCmd::BeginPath,
        DrawCmd::circle(c, radius),
        DrawCmd::Fill,
    ]
}

/// Dispatch to the selected center effect. `fill` is only used by the curve
/// bundle.
pub fn center_effect(
    effect: CenterEffect,
    index: usize,
    bins: usize,
    sample: u8,
    layout: &Layout,
    fill: Rgba,
) -> Shape {
    let mut out: Shape = smallvec![DrawCmd::LineWidth(CENTER_EFFECT_LINE_WIDTH)];
    match effect {
        CenterEffect::Bezier => out.extend(bezier_bundle(sample, layout, fill)),
        CenterEffect::RadialPairs => out.extend(radial_pairs(index, bins, sample, layout)),
        CenterEffect::RadialSpikes => out.extend(radial_spikes(index, bins, sample, layout)),
    }
    out
}

/// Four quadratic curves from above to below the center whose control
/// points spread with the sample.
pub fn bezier_bundle(sample: u8, layout: &Layout, fill: Rgba) -> Shape {
    let f = sample as f64 / BEZIER_DIVIDER;
    let c = layout.center;
    let top = DVec2::new(c.x, c.y - BEZIER_HALF_HEIGHT);
    let bottom = DVec2::new(c.x, c.y + BEZIER_HALF_HEIGHT);
    let ctrls = [
        DVec2::new(c.x - 30.0 * f, c.y - 20.0 * f),
        DVec2::new(c.x + 30.0 * f, c.y - 20.0 * f),
        DVec2::new(c.x - 25.0 * f, c.y + 20.0 * f),
        DVec2::new(c.x + 25.0 * f, c.y + 20.0 * f),
    ];
    let mut out: Shape = smallvec![DrawCmd::FillStyle(fill.into()), DrawCmd::BeginPath];
    for ctrl in ctrls {
        out.push(DrawCmd::MoveTo(top));
        out.push(DrawCmd::QuadTo { ctrl, to: bottom });
    }
    out.push(DrawCmd::Fill);
    out
}

/// Green segments on a ring of radius 72, pointing outward and inward,
/// mirrored across the vertical axis.
pub fn radial_pairs(index: usize, bins: usize, sample: u8, layout: &Layout) -> Shape {
    let r = RADIAL_PAIRS_RADIUS;
    let d = sample as f64 / RADIAL_PAIRS_DIVIDER;
    let theta = sweep_angle(index, bins, RADIAL_PAIRS_SWEEP, RADIAL_PAIRS_OFFSET);
    let (sin, cos) = theta.sin_cos();
    let c = layout.center;
    let mut out: Shape = smallvec![
        DrawCmd::StrokeStyle(Rgba::GREEN.into()),
        DrawCmd::BeginPath
    ];
    for mirror in [cos, -cos] {
        for reach in [r + d, r - d] {
            out.push(DrawCmd::MoveTo(polar(c, r, mirror, sin)));
            out.push(DrawCmd::LineTo(polar(c, reach, mirror, sin)));
        }
    }
    out.push(DrawCmd::Stroke);
    out
}

/// Black spikes from the icon rim outward, at the bin angle and its point
/// reflection.
pub fn radial_spikes(index: usize, bins: usize, sample: u8, layout: &Layout) -> Shape {
    let r = RADIAL_SPIKES_RADIUS;
    let d = sample as f64 / RADIAL_SPIKES_DIVIDER;
    let theta = sweep_angle(index, bins, RADIAL_SPIKES_SWEEP, RADIAL_SPIKES_OFFSET);
    let (sin, cos) = theta.sin_cos();
    let c = layout.center;
    let mut out: Shape = smallvec![
        DrawCmd::StrokeStyle(Rgba::BLACK.into()),
        DrawCmd::BeginPath
    ];
    for (cos, sin) in [(cos, sin), (-cos, -sin)] {
        out.push(DrawCmd::MoveTo(polar(c, r, cos, sin)));
        out.push(DrawCmd::LineTo(polar(c, r + d, cos, sin)));
    }
    out.push(DrawCmd::Stroke);
    out
}
