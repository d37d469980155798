//! Command line options.

use clap::Parser;
use log::warn;
use raytrace::{Point3, RenderConfig, Vec3};
use std::path::PathBuf;

/// Camera placement for the showcase scene.
pub const EYE: Point3 = Point3::new(13.0, 2.0, 3.0);
pub const LOOKAT: Point3 = Point3::new(0.0, 0.0, 0.0);
pub const VIEWUP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Path trace a field of random spheres", long_about = None)]
pub struct Options {
    /// Image width in pixels.
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 225)]
    pub height: u32,

    /// Samples per pixel.
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples: u32,

    /// Maximum bounces per path.
    #[arg(long, short = 'd', default_value_t = 50)]
    pub depth: u32,

    /// Vertical field of view in degrees.
    #[arg(long, default_value_t = 30.0)]
    pub fov: f64,

    /// Lens aperture radius; zero renders a pinhole camera.
    #[arg(long, default_value_t = 0.0)]
    pub aperture: f64,

    /// Scan a flat object list instead of building a BVH.
    #[arg(long)]
    pub flat: bool,

    /// Worker threads. Defaults to the number of logical CPUs.
    #[arg(long, short = 't', value_name = "NUM")]
    pub threads: Option<usize>,

    /// Seed for scene layout and pixel generators.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output image path.
    #[arg(long, short = 'o', default_value = "images/image.png")]
    pub output: PathBuf,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.threads {
            None => max_threads,
            Some(0) => {
                warn!("Invalid thread count 0, using 1");
                1
            }
            Some(n) if n > max_threads => {
                warn!("Num threads > max logical CPUs {max_threads}");
                max_threads
            }
            Some(n) => n,
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.samples,
            max_depth: self.depth,
            threads: self.threads(),
            seed: self.seed,
        }
    }
}
