//! Command-line options for the native viewer

use clap::Parser;
use hero_core::CloudParams;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hero-native")]
#[command(about = "Desktop viewer for the scroll-driven particle hero", long_about = None)]
#[command(version)]
pub struct Cli {
    /// GLB model to sample; a Fibonacci sphere is used when absent
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Particle count of the synthetic sphere
    #[arg(long, default_value_t = 20_000)]
    pub count: usize,

    /// Radius of the synthetic sphere
    #[arg(long, default_value_t = 1.3)]
    pub radius: f32,

    /// Keep every Nth model vertex
    #[arg(long, default_value_t = 1)]
    pub stride: usize,

    /// Pointer influence radius, as a fraction of the bounding radius
    #[arg(long)]
    pub interaction_radius: Option<f32>,

    /// Maximum pointer push, as a fraction of the bounding radius
    #[arg(long)]
    pub displacement: Option<f32>,

    /// Camera distance from the cloud centre
    #[arg(long)]
    pub camera_distance: Option<f32>,

    /// Seed for reproducible particle attributes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Defaults overridden by whichever flags were given.
    pub fn params(&self) -> CloudParams {
        let defaults = CloudParams::default();
        CloudParams {
            interaction_radius: self.interaction_radius.unwrap_or(defaults.interaction_radius),
            displacement: self.displacement.unwrap_or(defaults.displacement),
            camera_distance: self.camera_distance.unwrap_or(defaults.camera_distance),
            vertex_stride: self.stride,
            seed: self.seed,
            ..defaults
        }
    }
}
