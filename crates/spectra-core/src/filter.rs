//! Per-pixel grayscale / threshold / invert over a flat RGBA buffer.
//!
//! Filters run in a fixed order per pixel and each one reads whatever the
//! previous one wrote, so grayscale followed by threshold binarizes the
//! already-grayscaled value. Alpha is never touched.

use crate::config::FilterFlags;
use crate::constants::{LUMA_WEIGHTS, THRESHOLD_CUTOFF};

#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    LUMA_WEIGHTS[0] * r as f64 + LUMA_WEIGHTS[1] * g as f64 + LUMA_WEIGHTS[2] * b as f64
}

/// Store a channel value the way a clamped byte array does: clamp, then round
/// half to even.
#[inline]
fn to_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

#[inline]
pub fn filter_pixel(px: &mut [u8; 4], flags: FilterFlags) {
    if flags.grayscale {
        let y = to_channel(luma(px[0], px[1], px[2]));
        px[0] = y;
        px[1] = y;
        px[2] = y;
    }
    if flags.threshold {
        let y = if luma(px[0], px[1], px[2]) >= THRESHOLD_CUTOFF {
            255
        } else {
            0
        };
        px[0] = y;
        px[1] = y;
        px[2] = y;
    }
    if flags.invert {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}

/// Filter every whole pixel in `rgba`; a trailing partial pixel is left alone.
/// Returns the number of pixels visited.
pub fn apply_filters(rgba: &mut [u8], flags: FilterFlags) -> usize {
    if !flags.any() {
        return 0;
    }
    let whole = rgba.len() / 4 * 4;
    if whole != rgba.len() {
        log::warn!(
            "[filter] buffer length {} is not a multiple of 4; ignoring tail",
            rgba.len()
        );
    }
    let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(&mut rgba[..whole]);
    for px in pixels.iter_mut() {
        filter_pixel(px, flags);
    }
    pixels.len()
}
