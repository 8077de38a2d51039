// Host-side tests for reading cloud parameters from canvas attributes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::params_from_attrs;
use hero_core::CloudParams;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn missing_attributes_keep_defaults() {
    let params = params_from_attrs(attrs(&[]));
    let defaults = CloudParams::default();
    assert_eq!(params.interaction_radius, defaults.interaction_radius);
    assert_eq!(params.displacement, defaults.displacement);
    assert_eq!(params.model_path, defaults.model_path);
    assert_eq!(params.seed, None);
}

#[test]
fn attributes_override_defaults() {
    let params = params_from_attrs(attrs(&[
        ("data-interaction-radius", "0.5"),
        ("data-displacement", " 0.4 "),
        ("data-model", "/models/logo.glb"),
        ("data-camera-distance", "6"),
        ("data-interaction-cutoff", "0.2"),
        ("data-seed", "1234"),
    ]));
    assert_eq!(params.interaction_radius, 0.5);
    assert_eq!(params.displacement, 0.4);
    assert_eq!(params.model_path, "/models/logo.glb");
    assert_eq!(params.camera_distance, 6.0);
    assert_eq!(params.interaction_cutoff, 0.2);
    assert_eq!(params.seed, Some(1234));
}

#[test]
fn unparsable_values_are_ignored() {
    let params = params_from_attrs(attrs(&[
        ("data-interaction-radius", "wide"),
        ("data-seed", "-3"),
        ("data-model", "   "),
    ]));
    let defaults = CloudParams::default();
    assert_eq!(params.interaction_radius, defaults.interaction_radius);
    assert_eq!(params.seed, None);
    assert_eq!(params.model_path, defaults.model_path);
}

#[test]
fn invalid_combination_falls_back_but_keeps_model_and_seed() {
    let params = params_from_attrs(attrs(&[
        ("data-camera-distance", "-1"),
        ("data-displacement", "0.9"),
        ("data-model", "/a.glb"),
        ("data-seed", "5"),
    ]));
    assert_eq!(params.camera_distance, CloudParams::default().camera_distance);
    assert_eq!(params.displacement, CloudParams::default().displacement);
    assert_eq!(params.model_path, "/a.glb");
    assert_eq!(params.seed, Some(5));
    assert!(params.validate().is_ok());
}
