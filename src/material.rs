use crate::prelude::*;

/// Surface scattering model. Immutable once attached to geometry and shared
/// between primitives through `Arc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Ideal diffuse surface.
    Matte { albedo: Color },
    /// Specular reflector; `blur` of zero is a perfect mirror.
    Metal { albedo: Color, blur: f64 },
    /// Dielectric that refracts or reflects.
    Glass {
        albedo: Color,
        blur: f64,
        refractive: f64,
    },
}

impl Material {
    pub fn matte(albedo: Color) -> Self {
        Material::Matte { albedo }
    }

    pub fn metal(albedo: Color, blur: f64) -> Self {
        Material::Metal { albedo, blur }
    }

    pub fn glass(albedo: Color, blur: f64, refractive: f64) -> Self {
        Material::Glass {
            albedo,
            blur,
            refractive,
        }
    }

    pub fn albedo(&self) -> Color {
        match self {
            Material::Matte { albedo }
            | Material::Metal { albedo, .. }
            | Material::Glass { albedo, .. } => *albedo,
        }
    }

    /// Outgoing direction for a ray arriving along `input` at a surface with
    /// outward `normal`. Neither argument needs to be unit length.
    pub fn scatter<R: Rng>(&self, input: Vec3, normal: Vec3, rng: &mut R) -> Vec3 {
        let input = input.normalized();
        let normal = normal.normalized();

        match *self {
            Material::Matte { .. } => {
                let direction = normal + Vec3::random_in_ball(1.0, rng);
                if direction.near_zero() {
                    normal
                } else {
                    direction
                }
            }
            Material::Metal { blur, .. } => {
                Vec3::reflect(&input, &normal) + Vec3::random_in_ball(blur, rng)
            }
            Material::Glass {
                blur, refractive, ..
            } => {
                let cosine = input.dot(normal);
                // Negative cosine: entering the medium from outside.
                let (ratio, facing, cos_in) = if cosine < 0.0 {
                    (1.0 / refractive, normal, -cosine)
                } else {
                    (refractive, -normal, cosine)
                };

                let sine_squared = 1.0 - cosine * cosine;
                let cosine_squared = 1.0 - ratio * ratio * sine_squared;

                let draw: f64 = rng.random();
                let jitter = Vec3::random_in_ball(blur, rng);
                if cosine_squared >= 0.0 && draw >= Self::reflectance(cosine.abs(), ratio) {
                    ratio * input + (ratio * cos_in - cosine_squared.sqrt()) * facing + jitter
                } else {
                    Vec3::reflect(&input, &normal) + jitter
                }
            }
        }
    }

    /// Schlick's approximation of the probability that light reflects.
    pub fn reflectance(cosine: f64, ratio: f64) -> f64 {
        let r0 = ((1.0 - ratio) / (1.0 + ratio)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}
