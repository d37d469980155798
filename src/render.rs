//! Parallel per-pixel scheduler.
//!
//! Every pixel is an independent task on a dedicated rayon pool. Randomness
//! comes from a fixed set of generators shared through a bounded channel: a task
//! takes one for the whole pixel and hands it back afterwards, so at most
//! `threads` pixels consume randomness at any instant.

use crate::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use indicatif::ProgressBar;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::ops::{Deref, DerefMut};
use std::path::Path;
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Paths traced per pixel
    pub samples_per_pixel: u32,
    /// Maximum bounces per path
    pub max_depth: u32,
    /// Worker threads, and the number of pooled generators
    pub threads: usize,
    /// Base seed for the generators; fresh random seeds when absent
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 225,
            samples_per_pixel: 100,
            max_depth: 50,
            threads: num_cpus::get(),
            seed: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples per pixel must be at least 1".to_string(),
            ));
        }
        if self.threads == 0 {
            return Err(RenderError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Fixed set of reusable random generators.
pub struct GeneratorPool {
    tx: Sender<StdRng>,
    rx: Receiver<StdRng>,
    size: usize,
}

impl GeneratorPool {
    /// Creates `size` generators. With a seed, generator `i` is seeded with
    /// `seed + i`.
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(size);
        for i in 0..size {
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => StdRng::seed_from_u64(rand::random()),
            };
            // Capacity equals the number of generators, so this never blocks.
            let _ = tx.send(rng);
        }
        debug!("Generator pool ready with {size} generators");
        Self { tx, rx, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Generators currently sitting in the pool.
    pub fn available(&self) -> usize {
        self.rx.len()
    }

    /// Takes a generator, blocking until one is returned if the pool is empty.
    pub fn acquire(&self) -> PooledRng<'_> {
        let rng = self
            .rx
            .recv()
            .expect("pool owns a sender, so the channel cannot disconnect");
        PooledRng {
            rng: Some(rng),
            pool: self,
        }
    }
}

/// A generator on loan from a [`GeneratorPool`]; returned when dropped.
pub struct PooledRng<'a> {
    rng: Option<StdRng>,
    pool: &'a GeneratorPool,
}

impl Deref for PooledRng<'_> {
    type Target = StdRng;

    fn deref(&self) -> &StdRng {
        self.rng.as_ref().expect("generator is held until drop")
    }
}

impl DerefMut for PooledRng<'_> {
    fn deref_mut(&mut self) -> &mut StdRng {
        self.rng.as_mut().expect("generator is held until drop")
    }
}

impl Drop for PooledRng<'_> {
    fn drop(&mut self) {
        if let Some(rng) = self.rng.take() {
            let _ = self.pool.tx.send(rng);
        }
    }
}

/// 8-bit RGB pixels indexed by sample coordinate; `y = 0` is the bottom row.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.index(x, y);
        self.pixels[i] = rgb;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Image with row 0 holding the highest sample row.
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, row| {
            image::Rgb(self.get(x, self.height - 1 - row))
        })
    }

    /// Writes the image, creating the parent directory when missing. The
    /// format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        self.to_image().save(path)?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Owns the worker threads and generator pool for rendering scenes.
pub struct Renderer {
    config: RenderConfig,
    pool: GeneratorPool,
    workers: rayon::ThreadPool,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let workers = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("render-{i}"))
            .build()?;
        let pool = GeneratorPool::new(config.threads, config.seed);
        Ok(Self {
            config,
            pool,
            workers,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn pool(&self) -> &GeneratorPool {
        &self.pool
    }

    /// Renders every pixel of `scene`, advancing `progress` once per pixel.
    pub fn render(
        &self,
        scene: &Scene,
        progress: &ProgressBar,
    ) -> Result<Framebuffer, RenderError> {
        if !scene.has_world() {
            return Err(RenderError::MissingWorld);
        }

        let RenderConfig {
            width,
            height,
            samples_per_pixel,
            max_depth,
            threads,
            ..
        } = self.config;
        info!(
            "Rendering {width}x{height}, {samples_per_pixel} samples/pixel, depth {max_depth}, \
             {threads} threads"
        );
        let started = Instant::now();

        let total = width as usize * height as usize;
        let pixels: Vec<[u8; 3]> = self.workers.install(|| {
            (0..total)
                .into_par_iter()
                .map(|i| {
                    let x = (i % width as usize) as u32;
                    let y = (i / width as usize) as u32;
                    let rgb = {
                        let mut rng = self.pool.acquire();
                        scene.color(x, y, &self.config, &mut *rng)
                    };
                    progress.inc(1);
                    rgb
                })
                .collect()
        });

        info!("Render finished in {:.2?}", started.elapsed());
        Ok(Framebuffer {
            width,
            height,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 8,
            height: 6,
            samples_per_pixel: 2,
            max_depth: 4,
            threads: 2,
            seed: Some(17),
        }
    }

    fn sphere_scene(config: &RenderConfig) -> Scene {
        let mut scene = Scene::look_at(
            Point3::new(0.0, 0.0, -3.0),
            Point3::zero(),
            Vec3::new(0.0, 1.0, 0.0),
            60.0,
            config.aspect_ratio(),
            0.0,
        );
        scene.save(Box::new(Sphere::new(
            Point3::zero(),
            0.5,
            Arc::new(Material::metal(Color::uniform(0.8), 0.0)),
        )));
        scene
    }

    #[test]
    fn test_validate_rejects_degenerate_configs() {
        assert!(small_config().validate().is_ok());
        for bad in [
            RenderConfig { width: 0, ..small_config() },
            RenderConfig { height: 0, ..small_config() },
            RenderConfig { samples_per_pixel: 0, ..small_config() },
            RenderConfig { threads: 0, ..small_config() },
        ] {
            assert!(matches!(bad.validate(), Err(RenderError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_pool_returns_generators_on_drop() {
        let pool = GeneratorPool::new(3, Some(1));
        assert_eq!(pool.available(), 3);
        {
            let mut a = pool.acquire();
            let _b = pool.acquire();
            assert_eq!(pool.available(), 1);
            a.next_u64();
        }
        assert_eq!(pool.available(), 3);
        assert_eq!(pool.size(), 3);
    }

    #[test]
    fn test_pool_returns_generator_on_panic() {
        let pool = GeneratorPool::new(1, Some(1));
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _rng = pool.acquire();
            panic!("pixel failed");
        }));
        assert!(result.is_err());
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn test_acquire_blocks_until_release() {
        let pool = GeneratorPool::new(1, Some(1));
        let (tx, rx) = mpsc::channel();

        thread::scope(|s| {
            let held = pool.acquire();
            s.spawn(|| {
                let _rng = pool.acquire();
                tx.send(()).unwrap();
            });

            assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
            drop(held);
            assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
        });
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn test_seeded_pool_is_reproducible() {
        let a = GeneratorPool::new(1, Some(42));
        let b = GeneratorPool::new(1, Some(42));
        assert_eq!(a.acquire().next_u64(), b.acquire().next_u64());
    }

    #[test]
    fn test_render_requires_world() {
        let config = small_config();
        let renderer = Renderer::new(config.clone()).unwrap();
        let scene = Scene::look_at(
            Point3::new(0.0, 0.0, -3.0),
            Point3::zero(),
            Vec3::new(0.0, 1.0, 0.0),
            60.0,
            config.aspect_ratio(),
            0.0,
        );
        assert!(matches!(
            renderer.render(&scene, &ProgressBar::hidden()),
            Err(RenderError::MissingWorld)
        ));
    }

    #[test]
    fn test_render_fills_every_pixel() {
        let config = small_config();
        let renderer = Renderer::new(config.clone()).unwrap();
        let scene = sphere_scene(&config);
        let progress = ProgressBar::hidden();

        let image = renderer.render(&scene, &progress).unwrap();
        assert_eq!((image.width, image.height), (8, 6));
        assert_eq!(progress.position(), 48);
        assert_eq!(renderer.pool().available(), config.threads);

        // Corners miss the sphere and see the sky, which is never black.
        for (x, y) in [(0, 0), (7, 0), (0, 5), (7, 5)] {
            assert!(image.get(x, y).iter().any(|&c| c > 0));
        }
        // Looking up sees bluer sky than looking down.
        assert!(image.get(0, 5)[0] < image.get(0, 0)[0]);
    }

    #[test]
    fn test_to_image_flips_vertically() {
        let mut fb = Framebuffer::new(2, 3);
        fb.set(0, 0, [10, 0, 0]);
        fb.set(1, 2, [0, 20, 0]);

        let img = fb.to_image();
        assert_eq!(img.get_pixel(0, 2).0, [10, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 20, 0]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }
}
