use hero_core::CloudParams;
use std::str::FromStr;

/// Build cloud parameters from `data-*` attributes, looked up through `attr`.
///
/// Missing attributes keep their defaults; values that fail to parse or
/// validate are logged and ignored.
pub fn params_from_attrs(attr: impl Fn(&str) -> Option<String>) -> CloudParams {
    let mut params = CloudParams::default();
    if let Some(v) = parsed::<f32>(&attr, "data-interaction-radius") {
        params.interaction_radius = v;
    }
    if let Some(v) = parsed::<f32>(&attr, "data-displacement") {
        params.displacement = v;
    }
    if let Some(v) = parsed::<f32>(&attr, "data-camera-distance") {
        params.camera_distance = v;
    }
    if let Some(v) = parsed::<f32>(&attr, "data-interaction-cutoff") {
        params.interaction_cutoff = v;
    }
    if let Some(v) = parsed::<u64>(&attr, "data-seed") {
        params.seed = Some(v);
    }
    if let Some(path) = attr("data-model").map(|s| s.trim().to_string()) {
        if !path.is_empty() {
            params.model_path = path;
        }
    }
    if let Err(e) = params.validate() {
        log::warn!("[config] {e}; using defaults");
        let seed = params.seed;
        let model_path = std::mem::take(&mut params.model_path);
        params = CloudParams {
            seed,
            model_path,
            ..CloudParams::default()
        };
    }
    params
}

fn parsed<T: FromStr>(attr: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = attr(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {name}={raw:?}");
            None
        }
    }
}
