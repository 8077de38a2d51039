//! Colour helpers for the particle palette.

use glam::Vec3;

/// Resting cyan of the formed cloud.
pub const BASE_HSL: [f32; 3] = [0.55, 0.9, 0.6];
/// Highlight applied near the pointer.
pub const HOVER_HSL: [f32; 3] = [0.52, 1.0, 0.85];

/// Expanded-state palette. The last entry (white) and the first (cyan) are the
/// common picks; the others are accents.
pub const PALETTE: [[f32; 3]; 8] = [
    [0.55, 0.9, 0.6],  // cyan
    [0.33, 0.8, 0.5],  // green
    [0.08, 0.9, 0.55], // orange
    [0.6, 0.7, 0.6],   // blue
    [0.0, 0.8, 0.55],  // red
    [0.14, 0.9, 0.55], // yellow
    [0.8, 0.6, 0.6],   // purple
    [0.0, 0.0, 0.9],   // white
];

pub const CYAN_INDEX: usize = 0;
pub const WHITE_INDEX: usize = PALETTE.len() - 1;

/// Convert hue/saturation/lightness (all in 0..1) to linear RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s <= 0.0 {
        return Vec3::splat(l);
    }
    let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let lo = 2.0 * l - hi;
    Vec3::new(
        hue_to_rgb(lo, hi, h + 1.0 / 3.0),
        hue_to_rgb(lo, hi, h),
        hue_to_rgb(lo, hi, h - 1.0 / 3.0),
    )
}

#[inline]
pub fn hsl(c: [f32; 3]) -> Vec3 {
    hsl_to_rgb(c[0], c[1], c[2])
}

fn hue_to_rgb(lo: f32, hi: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}

/// Weighted blend that returns `a` exactly at 0 and `b` exactly at 1.
#[inline]
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    a * (1.0 - t) + b * t
}
