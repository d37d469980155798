//! The showcase scene: a grid of small random spheres around three large ones.

use crate::config::{EYE, LOOKAT, Options, VIEWUP};
use anyhow::Context;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raytrace::{BvhNode, Color, Hittable, HittableList, Material, Point3, Scene, Sphere, Vec3};
use std::sync::Arc;

/// Maps uniform draws onto one of the three materials. Albedo components land
/// in `[0.5, 1]`, blur in `[0, 0.5]` and refractive index in `[1, 2]`.
fn random_material(code: f64, albedo: Vec3, blur: f64, refractive: f64) -> Material {
    let albedo = (albedo + Vec3::one()) / 2.0;
    let blur = blur / 2.0;
    let refractive = refractive + 1.0;
    match (code * 3.0) as usize {
        0 => Material::matte(albedo),
        1 => Material::metal(albedo, blur),
        _ => Material::glass(albedo, blur, refractive),
    }
}

pub fn build_objects<R: Rng>(rng: &mut R) -> HittableList {
    let mut world = HittableList::new();

    for a in -11..11 {
        for b in -11..11 {
            let center = Point3::new(
                a as f64 + 0.9 * rng.random::<f64>(),
                0.2,
                b as f64 + 0.9 * rng.random::<f64>(),
            );
            let albedo = Vec3::new(rng.random(), rng.random(), rng.random());
            let mat = random_material(rng.random(), albedo, rng.random(), rng.random());
            world.add(Sphere::new(center, 0.2, Arc::new(mat)));
        }
    }

    // Ground
    world.add(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Material::matte(Color::uniform(0.9))),
    ));

    world.add(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::glass(Color::one(), 0.0, 1.5)),
    ));
    world.add(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::matte(Color::new(0.4, 0.2, 0.1))),
    ));
    world.add(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0)),
    ));

    world
}

pub fn build_scene(opts: &Options) -> anyhow::Result<Scene> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let objects = build_objects(&mut rng);
    info!("Scene has {} spheres", objects.len());

    let root: Box<dyn Hittable> = if opts.flat {
        Box::new(objects)
    } else {
        BvhNode::build(objects).context("building BVH")?
    };

    let mut scene = Scene::look_at(
        EYE,
        LOOKAT,
        VIEWUP,
        opts.fov,
        opts.width as f64 / opts.height as f64,
        opts.aperture,
    );
    scene.save(root);
    Ok(scene)
}
