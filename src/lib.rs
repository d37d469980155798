//! Offline Monte Carlo path tracer.
//!
//! Spheres, optionally organised in a bounding volume hierarchy, are lit by a
//! sky gradient and shaded with matte, metal and glass materials. Pixels are
//! rendered in parallel with a bounded pool of random generators.

pub mod aabb;
pub mod bvh;
pub mod color;
pub mod error;
pub mod hittable;
pub mod hittable_list;
pub mod interval;
pub mod material;
pub mod prelude;
pub mod ray;
pub mod render;
pub mod scene;
pub mod sphere;
pub mod vec3;

pub use aabb::Aabb;
pub use bvh::BvhNode;
pub use color::Color;
pub use error::RenderError;
pub use hittable::{HitRecord, Hittable};
pub use hittable_list::HittableList;
pub use material::Material;
pub use ray::Ray;
pub use render::{Framebuffer, GeneratorPool, PooledRng, RenderConfig, Renderer};
pub use scene::Scene;
pub use sphere::Sphere;
pub use vec3::{Point3, Vec3};
