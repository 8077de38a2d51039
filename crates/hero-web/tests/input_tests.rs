// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn px_to_ndc_maps_corners() {
    let ndc = px_to_ndc(Vec2::new(0.0, 0.0), 800.0, 600.0);
    assert_eq!(ndc, Vec2::new(-1.0, 1.0));
    let ndc = px_to_ndc(Vec2::new(800.0, 600.0), 800.0, 600.0);
    assert_eq!(ndc, Vec2::new(1.0, -1.0));
    let ndc = px_to_ndc(Vec2::new(400.0, 300.0), 800.0, 600.0);
    assert_eq!(ndc, Vec2::ZERO);
}

#[test]
fn px_to_ndc_survives_zero_sized_canvas() {
    let ndc = px_to_ndc(Vec2::new(0.5, 0.5), 0.0, 0.0);
    assert!(ndc.is_finite());
}

#[test]
fn scroll_progress_is_clamped_fraction() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    // Overscroll bounce on some browsers
    assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
}

#[test]
fn scroll_progress_is_zero_for_unscrollable_page() {
    assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
}

#[test]
fn pointer_input_tracks_latest_and_clears_on_leave() {
    let mut pointer = PointerInput::default();
    assert!(pointer.px.is_none());
    pointer.moved(Vec2::new(10.0, 20.0));
    pointer.moved(Vec2::new(30.0, 40.0));
    assert_eq!(pointer.px, Some(Vec2::new(30.0, 40.0)));
    pointer.moved(Vec2::new(f32::NAN, 0.0));
    assert_eq!(pointer.px, Some(Vec2::new(30.0, 40.0)));
    pointer.left();
    assert!(pointer.px.is_none());
}
