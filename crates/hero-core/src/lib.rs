pub mod asset;
pub mod binding;
pub mod color;
pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod noise;
pub mod params;
pub mod particles;
pub mod pointer;
#[cfg(feature = "gpu")]
pub mod render;
pub mod starfield;
pub mod state;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use binding::*;
pub use constants::*;
pub use engine::*;
pub use error::{Error, Result};
pub use geometry::*;
pub use params::*;
pub use pointer::*;
pub use starfield::Starfield;
pub use state::*;
