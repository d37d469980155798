pub use crate::aabb::Aabb;
pub use crate::bvh::BvhNode;
pub use crate::color::{Color, sky, to_rgb8};
pub use crate::error::RenderError;
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::hittable_list::HittableList;
pub use crate::interval::Interval;
pub use crate::material::Material;
pub use crate::ray::Ray;
pub use crate::render::{Framebuffer, GeneratorPool, PooledRng, RenderConfig, Renderer};
pub use crate::scene::Scene;
pub use crate::sphere::Sphere;
pub use crate::vec3::{Point3, Vec3};

pub use rand::Rng;
pub use std::sync::Arc;

pub const INFINITY: f64 = f64::INFINITY;
pub const PI: f64 = std::f64::consts::PI;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
