use crate::prelude::*;
use log::debug;

/// Camera plus the geometry it looks at.
///
/// The viewport is a parallelogram spanned by `horizon` and `vertical` from
/// `corner`; pixel `(0, 0)` sits at the corner and `y` grows along `vertical`.
pub struct Scene {
    source: Point3,
    corner: Point3,
    horizon: Vec3,
    vertical: Vec3,
    aperture: f64,
    world: Option<Box<dyn Hittable>>,
}

impl Scene {
    pub fn new(
        source: Point3,
        corner: Point3,
        horizon: Vec3,
        vertical: Vec3,
        aperture: f64,
    ) -> Self {
        Self {
            source,
            corner,
            horizon,
            vertical,
            aperture,
            world: None,
        }
    }

    /// Positions a camera at `eye` facing `lookat`, with the viewport on the
    /// plane through `lookat`. `vfov` is the full vertical field of view in
    /// degrees and `aspect` is width over height.
    pub fn look_at(
        eye: Point3,
        lookat: Point3,
        up: Vec3,
        vfov: f64,
        aspect: f64,
        aperture: f64,
    ) -> Self {
        let vision = lookat - eye;
        let half_height = (degrees_to_radians(vfov) / 2.0).tan() * vision.length();
        let half_width = half_height * aspect;

        let forward = vision.normalized();
        let viewup = (up - forward * up.dot(forward)).normalized();
        let horizon = vision.cross(viewup).normalized();

        let half_up = viewup * half_height;
        let half_across = horizon * half_width;
        debug!(
            "Camera at {eye} facing {lookat}, viewport {}x{}",
            2.0 * half_width,
            2.0 * half_height
        );

        Self::new(eye, lookat - half_up - half_across, half_across * 2.0, half_up * 2.0, aperture)
    }

    /// Installs the geometry to render, replacing any previous root.
    pub fn save(&mut self, world: Box<dyn Hittable>) {
        self.world = Some(world);
    }

    pub fn has_world(&self) -> bool {
        self.world.is_some()
    }

    pub fn source(&self) -> Point3 {
        self.source
    }

    pub fn aperture(&self) -> f64 {
        self.aperture
    }

    /// Nearest hit against the saved geometry; a miss when nothing is saved.
    pub fn hit(&self, r: &Ray) -> HitRecord<'_> {
        match &self.world {
            Some(world) => world.hit(r),
            None => HitRecord::miss(),
        }
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.world.as_ref().map(|world| world.bounds())
    }

    /// Follows one light path for at most `depth` bounces.
    ///
    /// Paths that never escape to the sky within the bound contribute black.
    pub fn color_trace<R: Rng>(&self, r: Ray, depth: u32, rng: &mut R) -> Color {
        let mut color = Color::one();
        let mut r = r;

        for _ in 0..depth {
            let rec = self.hit(&r);
            let mat = match rec.mat {
                Some(mat) if rec.has_hit() => mat,
                _ => return color * sky(r.dir),
            };
            let scattered = mat.scatter(r.dir, rec.normal, rng);
            color *= mat.albedo();
            r = Ray::new(rec.p, scattered);
        }

        Color::zero()
    }

    /// Ray origin for one pixel: the eye displaced across the lens aperture.
    pub fn lens_offset<R: Rng>(&self, rng: &mut R) -> Point3 {
        let d = Vec3::random_in_unit_disk(rng) * self.aperture;
        self.source + self.horizon.normalized() * d.x + self.vertical.normalized() * d.y
    }

    /// Averages `samples_per_pixel` jittered paths through pixel `(x, y)` and
    /// converts the result to bytes.
    pub fn color<R: Rng>(&self, x: u32, y: u32, config: &RenderConfig, rng: &mut R) -> [u8; 3] {
        let start = self.lens_offset(rng);
        let width = config.width as f64;
        let height = config.height as f64;

        let mut pixel_color = Color::zero();
        for _ in 0..config.samples_per_pixel {
            let u = (x as f64 + rng.random::<f64>()) / width;
            let v = (y as f64 + rng.random::<f64>()) / height;
            let end = self.corner + self.horizon * u + self.vertical * v;
            pixel_color += self.color_trace(Ray::between(start, end), config.max_depth, rng);
        }

        to_rgb8(pixel_color / config.samples_per_pixel as f64)
    }
}
