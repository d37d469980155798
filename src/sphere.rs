use crate::prelude::*;

pub struct Sphere {
    center: Point3,
    radius: f64,
    mat: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, mat: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            mat,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Outward, radius-length normal at a surface point.
    pub fn normal(&self, p: Point3) -> Vec3 {
        p - self.center
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray) -> HitRecord<'_> {
        let oc = r.orig - self.center;
        let a = r.dir.length_squared();
        if a == 0.0 {
            return HitRecord::miss();
        }
        let b = oc.dot(r.dir);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return HitRecord::miss();
        }
        let sqrtd = discriminant.sqrt();

        // Nearer root first; fall back to the far one when starting inside.
        let mut root = (-b - sqrtd) / a;
        if root <= 0.0 {
            root = (-b + sqrtd) / a;
            if root <= 0.0 {
                return HitRecord::miss();
            }
        }

        let p = r.at(root);
        HitRecord::hit(root, p, self.normal(p), &self.mat)
    }

    fn bounds(&self) -> Aabb {
        let rvec = Vec3::uniform(self.radius);
        Aabb::from_points(self.center - rvec, self.center + rvec)
    }
}
