// Host-side tests for the per-bin shape renderers.

use glam::DVec2;
use spectra_core::constants::{BIN_COUNT, FREQ_BAR_BASELINE, SIMPLE_BAR_BASELINE};
use spectra_core::shapes::*;
use spectra_core::{CenterEffect, DrawCmd, Layout, Paint, Rect, Rgba, Shape};
use std::f64::consts::PI;

fn layout() -> Layout {
    Layout::new(1024, 576)
}

fn all_shapes(sample: u8) -> Vec<Shape> {
    let l = layout();
    let mut out = Vec::new();
    for i in [0, 1, BIN_COUNT / 2, BIN_COUNT - 1] {
        out.push(simple_bar(i, sample, &l));
        out.push(center_lines(i, sample, &l));
        out.push(freq_bars(i, sample, &l));
        out.push(horizon_circle(sample, &l));
        for effect in [
            CenterEffect::Bezier,
            CenterEffect::RadialPairs,
            CenterEffect::RadialSpikes,
        ] {
            out.push(center_effect(effect, i, BIN_COUNT, sample, &l, Rgba::WHITE));
        }
    }
    out
}

fn rects(shape: &Shape) -> Vec<Rect> {
    shape
        .iter()
        .filter_map(|c| match c {
            DrawCmd::FillRect(r) | DrawCmd::StrokeRect(r) => Some(*r),
            _ => None,
        })
        .collect()
}

fn segments(shape: &Shape) -> Vec<(DVec2, DVec2)> {
    let mut out = Vec::new();
    let mut from = None;
    for c in shape {
        match c {
            DrawCmd::MoveTo(p) => from = Some(*p),
            DrawCmd::LineTo(p) => {
                if let Some(f) = from.take() {
                    out.push((f, *p));
                }
            }
            _ => {}
        }
    }
    out
}

#[test]
fn sweep_constants_match_visual_contract() {
    assert_eq!(RADIAL_PAIRS_SWEEP, 5.0 * PI / 3.0);
    assert_eq!(RADIAL_PAIRS_OFFSET, 2.0 * PI / 3.0);
    assert_eq!(RADIAL_SPIKES_SWEEP, 13.0 * PI / 9.0);
    assert_eq!(RADIAL_SPIKES_OFFSET, PI / 3.0);
}

#[test]
fn sweep_angle_spans_offset_to_offset_plus_sweep() {
    let n = BIN_COUNT;
    assert_eq!(sweep_angle(0, n, RADIAL_PAIRS_SWEEP, RADIAL_PAIRS_OFFSET), 2.0 * PI / 3.0);
    let half = sweep_angle(n / 2, n, RADIAL_SPIKES_SWEEP, RADIAL_SPIKES_OFFSET);
    assert!((half - (13.0 * PI / 18.0 + PI / 3.0)).abs() < 1e-12);
    let last = sweep_angle(n, n, RADIAL_PAIRS_SWEEP, RADIAL_PAIRS_OFFSET);
    assert!((last - (5.0 * PI / 3.0 + 2.0 * PI / 3.0)).abs() < 1e-12);
}

#[test]
fn sweep_angle_with_no_bins_is_the_offset() {
    assert_eq!(sweep_angle(0, 0, RADIAL_SPIKES_SWEEP, RADIAL_SPIKES_OFFSET), PI / 3.0);
}

#[test]
fn zero_samples_produce_finite_baseline_geometry() {
    for shape in all_shapes(0) {
        assert!(!shape.is_empty());
        for cmd in &shape {
            for p in cmd.points() {
                assert!(p.is_finite(), "{cmd:?}");
            }
        }
    }
    let l = layout();
    let bar = rects(&simple_bar(3, 0, &l));
    assert_eq!(bar[0].size.y, SIMPLE_BAR_BASELINE);
    for r in rects(&freq_bars(3, 0, &l)) {
        assert_eq!(r.size.y, -FREQ_BAR_BASELINE);
    }
}

#[test]
fn loud_samples_stay_finite() {
    for shape in all_shapes(255) {
        for cmd in &shape {
            for p in cmd.points() {
                assert!(p.is_finite(), "{cmd:?}");
            }
        }
    }
}

#[test]
fn simple_bar_height_scales_with_sample() {
    let l = layout();
    let r = rects(&simple_bar(10, 100, &l));
    assert_eq!(r.len(), 2);
    assert_eq!(r[0], Rect::new(40.0, 576.0 * 0.85, 4.0, 100.0 / 5.0 + 3.0));
    assert_eq!(r[0], r[1]);
}

#[test]
fn freq_bars_rise_from_bottom_on_both_sides() {
    let l = layout();
    let r = rects(&freq_bars(8, 50, &l));
    assert_eq!(r, vec![
        Rect::new(32.0, 576.0, 3.0, -20.0),
        Rect::new(1024.0 - 32.0, 576.0, 3.0, -20.0),
    ]);
    assert!(matches!(
        freq_bars(8, 50, &l)[0],
        DrawCmd::FillStyle(Paint::Gradient(_))
    ));
}

#[test]
fn center_lines_are_mirrored_vertical_strokes() {
    let l = layout();
    let segs = segments(&center_lines(5, 250, &l));
    assert_eq!(segs.len(), 4);
    let cy = l.center.y;
    assert_eq!(segs[0], (DVec2::new(20.0, cy), DVec2::new(20.0, cy - 50.0)));
    assert_eq!(segs[1], (DVec2::new(20.0, cy), DVec2::new(20.0, cy + 50.0)));
    assert_eq!(segs[2], (DVec2::new(1004.0, cy), DVec2::new(1004.0, cy - 50.0)));
    assert_eq!(segs[3], (DVec2::new(1004.0, cy), DVec2::new(1004.0, cy + 50.0)));
}

#[test]
fn horizon_alpha_fades_with_loudness_and_never_goes_negative() {
    let l = layout();
    let quiet = horizon_circle(0, &l);
    let loud = horizon_circle(255, &l);
    let alpha = |s: &Shape| match &s[0] {
        DrawCmd::FillStyle(Paint::Solid(c)) => c.a,
        other => panic!("unexpected {other:?}"),
    };
    assert!((alpha(&quiet) - 0.05).abs() < 1e-6);
    assert_eq!(alpha(&loud), 0.0);
    assert!(loud.contains(&DrawCmd::circle(l.center, 120.0)));
}

#[test]
fn bezier_control_points_spread_with_sample() {
    let l = layout();
    let c = l.center;
    let shape = bezier_bundle(100, &l, Rgba::WHITE);
    let ctrls: Vec<DVec2> = shape
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::QuadTo { ctrl, to } => {
                assert_eq!(*to, DVec2::new(c.x, c.y + 50.0));
                Some(*ctrl)
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        ctrls,
        vec![
            DVec2::new(c.x - 60.0, c.y - 40.0),
            DVec2::new(c.x + 60.0, c.y - 40.0),
            DVec2::new(c.x - 50.0, c.y + 40.0),
            DVec2::new(c.x + 50.0, c.y + 40.0),
        ]
    );
}

#[test]
fn bezier_uses_given_fill() {
    let fill = Rgba::new(12, 34, 56, 0.9);
    let shape = bezier_bundle(0, &layout(), fill);
    assert_eq!(shape[0], DrawCmd::FillStyle(Paint::Solid(fill)));
}

#[test]
fn radial_pairs_sit_on_ring_of_72() {
    let l = layout();
    let i = 17;
    let sample = 150; // reach 10
    let segs = segments(&radial_pairs(i, BIN_COUNT, sample, &l));
    assert_eq!(segs.len(), 4);
    let theta = sweep_angle(i, BIN_COUNT, RADIAL_PAIRS_SWEEP, RADIAL_PAIRS_OFFSET);
    let (s, c) = theta.sin_cos();
    let expect = DVec2::new(l.center.x + 82.0 * c, l.center.y - 82.0 * s);
    assert!((segs[0].1 - expect).length() < 1e-9);
    for (start, _) in &segs {
        assert!(((*start - l.center).length() - 72.0).abs() < 1e-9);
    }
    let reaches: Vec<f64> = segs.iter().map(|(_, e)| (*e - l.center).length()).collect();
    assert!((reaches[0] - 82.0).abs() < 1e-9);
    assert!((reaches[1] - 62.0).abs() < 1e-9);
    // mirrored across the vertical axis
    assert!((segs[0].0.x - l.center.x + (segs[2].0.x - l.center.x)).abs() < 1e-9);
    assert!((segs[0].0.y - segs[2].0.y).abs() < 1e-9);
}

#[test]
fn radial_spikes_are_point_reflected() {
    let l = layout();
    let segs = segments(&radial_spikes(40, BIN_COUNT, 200, &l));
    assert_eq!(segs.len(), 2);
    let a = segs[0].1 - l.center;
    let b = segs[1].1 - l.center;
    assert!((a + b).length() < 1e-9);
    assert!((a.length() - 70.0).abs() < 1e-9);
}

#[test]
fn center_effect_sets_line_width_first() {
    let l = layout();
    for effect in [
        CenterEffect::Bezier,
        CenterEffect::RadialPairs,
        CenterEffect::RadialSpikes,
    ] {
        let shape = center_effect(effect, 0, BIN_COUNT, 10, &l, Rgba::WHITE);
        assert_eq!(shape[0], DrawCmd::LineWidth(2.0));
    }
}
