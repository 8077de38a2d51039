use crate::error::{Error, Result};

/// How a smoothed value chases its target each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    /// Fixed lerp factor per frame, independent of frame time.
    PerFrame(f32),
    /// Frame-rate independent exponential approach: `alpha = 1 - exp(-rate * dt)`.
    Exponential { rate_per_sec: f32 },
}

impl Smoothing {
    /// Exponential smoothing that matches `factor` per frame at 60 Hz.
    pub fn exponential_from_per_frame(factor: f32) -> Self {
        let factor = factor.clamp(0.0, 0.999_999);
        Smoothing::Exponential {
            rate_per_sec: -(1.0 - factor).ln() * 60.0,
        }
    }

    /// Blend weight toward the target for a frame lasting `dt_sec`.
    #[inline]
    pub fn alpha(&self, dt_sec: f32) -> f32 {
        match *self {
            Smoothing::PerFrame(f) => f.clamp(0.0, 1.0),
            Smoothing::Exponential { rate_per_sec } => {
                let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
                (1.0 - (-rate_per_sec.max(0.0) * dt).exp()).clamp(0.0, 1.0)
            }
        }
    }

    fn is_valid(&self) -> bool {
        match *self {
            Smoothing::PerFrame(f) => f.is_finite() && (0.0..=1.0).contains(&f),
            Smoothing::Exponential { rate_per_sec } => {
                rate_per_sec.is_finite() && rate_per_sec >= 0.0
            }
        }
    }
}

/// Tuning for one particle cloud.
///
/// `interaction_radius`, `displacement` and `max_speed` are fractions of the
/// model's bounding-sphere radius so the effect reads the same at any scale.
#[derive(Clone, Debug)]
pub struct CloudParams {
    pub interaction_radius: f32,
    pub displacement: f32,
    pub model_path: String,
    /// Camera eye distance in world units.
    pub camera_distance: f32,
    /// Smoothed scroll level at or above which the pointer is ignored.
    pub interaction_cutoff: f32,
    /// Scroll level at which the cloud is fully dispersed.
    pub dispersal_threshold: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Per-frame speed cap, as a fraction of the bounding radius.
    pub max_speed: Option<f32>,
    pub vertex_stride: usize,
    pub pointer_smoothing: Smoothing,
    pub scroll_smoothing: Smoothing,
    pub radius_smoothing: Smoothing,
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            interaction_radius: 0.35,
            displacement: 0.25,
            model_path: "/models/morph-sphere.glb".to_string(),
            camera_distance: 4.0,
            interaction_cutoff: 0.3,
            dispersal_threshold: 0.5,
            stiffness: 0.06,
            damping: 0.88,
            max_speed: Some(0.5),
            vertex_stride: 1,
            pointer_smoothing: Smoothing::exponential_from_per_frame(0.18),
            scroll_smoothing: Smoothing::PerFrame(0.08),
            radius_smoothing: Smoothing::exponential_from_per_frame(0.1),
            seed: None,
        }
    }
}

impl CloudParams {
    pub fn validate(&self) -> Result<()> {
        let non_negative = |name: &str, v: f32| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidParams(format!("{name} must be finite and >= 0, got {v}")))
            }
        };
        non_negative("interaction_radius", self.interaction_radius)?;
        non_negative("displacement", self.displacement)?;
        non_negative("interaction_cutoff", self.interaction_cutoff)?;
        if !(self.camera_distance.is_finite() && self.camera_distance > 0.0) {
            return Err(Error::InvalidParams(format!(
                "camera_distance must be > 0, got {}",
                self.camera_distance
            )));
        }
        if !(self.dispersal_threshold.is_finite() && self.dispersal_threshold > 0.0) {
            return Err(Error::InvalidParams(format!(
                "dispersal_threshold must be > 0, got {}",
                self.dispersal_threshold
            )));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(Error::InvalidParams(format!(
                "stiffness must be > 0, got {}",
                self.stiffness
            )));
        }
        if !(self.damping.is_finite() && (0.0..1.0).contains(&self.damping)) {
            return Err(Error::InvalidParams(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }
        if let Some(max_speed) = self.max_speed {
            if !(max_speed.is_finite() && max_speed > 0.0) {
                return Err(Error::InvalidParams(format!(
                    "max_speed must be > 0, got {max_speed}"
                )));
            }
        }
        if self.vertex_stride == 0 {
            return Err(Error::InvalidParams("vertex_stride must be >= 1".into()));
        }
        for (name, s) in [
            ("pointer_smoothing", self.pointer_smoothing),
            ("scroll_smoothing", self.scroll_smoothing),
            ("radius_smoothing", self.radius_smoothing),
        ] {
            if !s.is_valid() {
                return Err(Error::InvalidParams(format!("{name} is out of range: {s:?}")));
            }
        }
        Ok(())
    }
}
