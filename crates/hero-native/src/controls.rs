//! Mouse and keyboard mapping for the viewer

use glam::Vec2;
use winit::event::MouseScrollDelta;

/// Scroll progress change per wheel line.
pub const SCROLL_STEP_PER_LINE: f32 = 0.05;
/// Trackpads report pixels; this many count as one line.
pub const PIXELS_PER_LINE: f64 = 40.0;

/// Apply a wheel event to the scroll target. Wheel-down moves further
/// through the page, like a browser.
pub fn apply_wheel(scroll: f32, delta: MouseScrollDelta) -> f32 {
    let lines = match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
    };
    if !lines.is_finite() {
        return scroll;
    }
    (scroll - lines * SCROLL_STEP_PER_LINE).clamp(0.0, 1.0)
}

/// Interaction radius change per `[` or `]` press.
pub const RADIUS_STEP: f32 = 0.05;
/// Upper bound for the keyboard-driven interaction radius.
pub const RADIUS_MAX: f32 = 2.0;

/// Move the interaction radius by `steps` notches, kept in \[0, RADIUS_MAX\].
pub fn step_radius(radius: f32, steps: i32) -> f32 {
    (radius + steps as f32 * RADIUS_STEP).clamp(0.0, RADIUS_MAX)
}

/// Window pixels to normalised device coordinates (y up).
pub fn cursor_ndc(x: f64, y: f64, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f64;
    let h = height.max(1) as f64;
    Vec2::new((2.0 * x / w - 1.0) as f32, (1.0 - 2.0 * y / h) as f32)
}
