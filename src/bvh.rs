//! Bounding volume hierarchy.
//!
//! A binary tree built once from a [`HittableList`] by median split. Leaves are
//! the input primitives themselves; each internal node caches the union of its
//! children's boxes so whole subtrees can be skipped when a ray misses them.

use crate::prelude::*;
use log::{debug, info};

/// Internal tree node owning exactly two children.
pub struct BvhNode {
    bbox: Aabb,
    left: Box<dyn Hittable>,
    right: Box<dyn Hittable>,
}

impl BvhNode {
    pub fn new(left: Box<dyn Hittable>, right: Box<dyn Hittable>) -> Self {
        let bbox = Aabb::wraps(&left.bounds(), &right.bounds());
        Self { bbox, left, right }
    }

    /// Builds a tree over every object in `list`.
    ///
    /// A single object is returned as-is rather than wrapped in a node.
    pub fn build(list: HittableList) -> Result<Box<dyn Hittable>, RenderError> {
        if list.is_empty() {
            return Err(RenderError::EmptyScene);
        }
        let count = list.len();
        let root = Self::partition(list.objects);
        info!("Built BVH over {count} objects");
        debug!("BVH root bounds: {:?}", root.bounds());
        Ok(root)
    }

    fn partition(mut objects: Vec<Box<dyn Hittable>>) -> Box<dyn Hittable> {
        match objects.len() {
            0 => unreachable!("partition over an empty slice"),
            1 => objects.remove(0),
            _ => Box::new(Self::split(objects)),
        }
    }

    /// Node over two or more objects. Longer runs are sorted along
    /// [`split_axis`] and the left child takes the smaller half.
    fn split(mut objects: Vec<Box<dyn Hittable>>) -> Self {
        if objects.len() == 2 {
            let right = objects.remove(1);
            let left = objects.remove(0);
            return Self::new(left, right);
        }

        let axis = split_axis(&objects);
        objects.sort_by(|a, b| {
            let (a, b) = (a.bounds().center()[axis], b.bounds().center()[axis]);
            a.total_cmp(&b)
        });

        let right_objects = objects.split_off(objects.len() / 2);
        let left = Self::partition(objects);
        let right = Self::partition(right_objects);
        Self::new(left, right)
    }
}

/// Picks the axis whose summed signed deviation of box centres from their mean
/// is largest. Ties resolve toward z, then y.
///
/// The sum is analytically zero on every axis, so the choice is driven by
/// rounding residue. It is kept as-is so tree shapes stay reproducible.
pub fn split_axis(objects: &[Box<dyn Hittable>]) -> usize {
    let centers: Vec<Point3> = objects.iter().map(|o| o.bounds().center()).collect();

    let mut mean = Vec3::zero();
    for c in &centers {
        mean += *c;
    }
    mean /= centers.len() as f64;

    let mut deviation = Vec3::zero();
    for c in &centers {
        deviation += *c - mean;
    }

    if deviation.x > deviation.y && deviation.x > deviation.z {
        0
    } else if deviation.y > deviation.z {
        1
    } else {
        2
    }
}

impl Hittable for BvhNode {
    fn hit(&self, r: &Ray) -> HitRecord<'_> {
        if !self.bbox.through(r) {
            return HitRecord::miss();
        }
        // Both children are always queried; their boxes may overlap.
        self.left.hit(r).closer(self.right.hit(r))
    }

    fn bounds(&self) -> Aabb {
        self.bbox
    }
}
