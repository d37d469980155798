use crate::prelude::*;

/// Result of an intersection query.
///
/// A miss is encoded as `t == +inf`; that comparison is the only hit/no-hit
/// discriminator. `normal` points outward and is not normalised.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f64,
    pub p: Point3,
    pub normal: Vec3,
    pub mat: Option<&'a Material>,
}

impl<'a> HitRecord<'a> {
    pub fn hit(t: f64, p: Point3, normal: Vec3, mat: &'a Material) -> Self {
        Self {
            t,
            p,
            normal,
            mat: Some(mat),
        }
    }

    pub fn miss() -> Self {
        Self {
            t: INFINITY,
            p: Point3::zero(),
            normal: Vec3::zero(),
            mat: None,
        }
    }

    #[inline]
    pub fn has_hit(&self) -> bool {
        self.t != INFINITY
    }

    /// Keeps whichever record is nearer along the ray; ties keep `self`.
    #[inline]
    pub fn closer(self, other: Self) -> Self {
        if other.t < self.t { other } else { self }
    }
}

impl Default for HitRecord<'_> {
    fn default() -> Self {
        Self::miss()
    }
}

pub trait Hittable: Send + Sync {
    fn hit(&self, r: &Ray) -> HitRecord<'_>;

    fn bounds(&self) -> Aabb;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_sentinel() {
        assert!(!HitRecord::miss().has_hit());
        assert!(!HitRecord::default().has_hit());
    }

    #[test]
    fn test_finite_hit_has_hit() {
        let mat = Material::matte(Color::uniform(0.5));
        let rec = HitRecord::hit(2.5, Point3::zero(), Vec3::new(0.0, 1.0, 0.0), &mat);
        assert!(rec.has_hit());
        assert!(HitRecord::hit(1e300, Point3::zero(), Vec3::zero(), &mat).has_hit());
    }

    #[test]
    fn test_closer_prefers_smaller_t_and_keeps_first_on_tie() {
        let a = Material::matte(Color::uniform(0.1));
        let b = Material::matte(Color::uniform(0.9));
        let near = HitRecord::hit(1.0, Point3::zero(), Vec3::zero(), &a);
        let far = HitRecord::hit(3.0, Point3::zero(), Vec3::zero(), &b);

        assert_eq!(far.closer(near).t, 1.0);
        assert_eq!(near.closer(far).t, 1.0);
        assert_eq!(near.closer(HitRecord::miss()).t, 1.0);
        assert!(!HitRecord::miss().closer(HitRecord::miss()).has_hit());

        let tie = HitRecord::hit(1.0, Point3::zero(), Vec3::zero(), &b);
        let kept = near.closer(tie);
        assert!(std::ptr::eq(kept.mat.unwrap(), &a));
    }
}
