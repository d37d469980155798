use crate::prelude::*;

/// Axis-aligned bounding box, one ordered interval per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Each pair may be given in either order; bounds are sorted so `min <= max`.
    pub fn new(x: (f64, f64), y: (f64, f64), z: (f64, f64)) -> Self {
        Self {
            x: Interval::ordered(x.0, x.1),
            y: Interval::ordered(y.0, y.1),
            z: Interval::ordered(z.0, z.1),
        }
    }

    pub fn from_points(a: Point3, b: Point3) -> Self {
        Self::new((a.x, b.x), (a.y, b.y), (a.z, b.z))
    }

    /// Smallest box enclosing both `a` and `b`.
    pub fn wraps(a: &Aabb, b: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&a.x, &b.x),
            y: Interval::surrounding(&a.y, &b.y),
            z: Interval::surrounding(&a.z, &b.z),
        }
    }

    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    pub fn min(&self) -> Point3 {
        Point3::new(self.x.min, self.y.min, self.z.min)
    }

    pub fn max(&self) -> Point3 {
        Point3::new(self.x.max, self.y.max, self.z.max)
    }

    pub fn center(&self) -> Point3 {
        Point3::new(self.x.center(), self.y.center(), self.z.center())
    }

    pub fn contains_point(&self, p: Point3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }

    /// Slab test: does the ray's line pass through the box?
    ///
    /// A zero direction component yields infinite slab distances, which the
    /// comparisons below handle under IEEE rules. NaN distances (origin on the
    /// slab plane with a zero component) never narrow the running range.
    pub fn through(&self, r: &Ray) -> bool {
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let inv = 1.0 / r.dir[axis];
            let mut t0 = (slab.min - r.orig[axis]) * inv;
            let mut t1 = (slab.max - r.orig[axis]) * inv;
            if inv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            if t0 > t1 {
                panic!("slab entry {t0} beyond exit {t1} on axis {axis}");
            }

            if t0 > t_min {
                t_min = t0;
            }
            if t1 < t_max {
                t_max = t1;
            }
        }

        t_min < t_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn corners(b: &Aabb) -> Vec<Point3> {
        let mut out = Vec::with_capacity(8);
        for &x in &[b.x.min, b.x.max] {
            for &y in &[b.y.min, b.y.max] {
                for &z in &[b.z.min, b.z.max] {
                    out.push(Point3::new(x, y, z));
                }
            }
        }
        out
    }

    #[test]
    fn test_new_sorts_pairs() {
        let b = Aabb::new((5.0, -1.0), (0.0, 2.0), (3.0, 3.0));
        assert_eq!(b.min(), Point3::new(-1.0, 0.0, 3.0));
        assert_eq!(b.max(), Point3::new(5.0, 2.0, 3.0));
        assert_eq!(b.center(), Point3::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn test_through() {
        let b = Aabb::from_points(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));

        // Straight at the centre
        assert!(b.through(&Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0))));
        // From the far side, negative direction on z
        assert!(b.through(&Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0))));
        // Off to the side, parallel to z
        assert!(!b.through(&Ray::new(Point3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0))));
        // Diagonal miss
        assert!(!b.through(&Ray::new(Point3::new(0.0, 3.0, -5.0), Vec3::new(0.0, 1.0, 1.0))));
        // Origin inside
        assert!(b.through(&Ray::new(Point3::zero(), Vec3::new(0.3, -0.2, 0.9))));
    }

    #[test]
    fn test_through_zero_direction_component() {
        let b = Aabb::from_points(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        // Origin on the x slab plane with zero x direction yields NaN distances.
        let r = Ray::new(Point3::new(1.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(b.through(&r));
    }

    proptest! {
        #[test]
        fn wraps_contains_both_boxes(
            a in prop::array::uniform6(-100.0f64..100.0),
            b in prop::array::uniform6(-100.0f64..100.0),
        ) {
            let ba = Aabb::new((a[0], a[1]), (a[2], a[3]), (a[4], a[5]));
            let bb = Aabb::new((b[0], b[1]), (b[2], b[3]), (b[4], b[5]));
            let w = Aabb::wraps(&ba, &bb);

            for p in corners(&ba).into_iter().chain(corners(&bb)) {
                prop_assert!(w.contains_point(p));
            }

            // Minimal: every face of the union touches one of the inputs.
            prop_assert_eq!(w.x.min, ba.x.min.min(bb.x.min));
            prop_assert_eq!(w.x.max, ba.x.max.max(bb.x.max));
            prop_assert_eq!(w.y.min, ba.y.min.min(bb.y.min));
            prop_assert_eq!(w.y.max, ba.y.max.max(bb.y.max));
            prop_assert_eq!(w.z.min, ba.z.min.min(bb.z.min));
            prop_assert_eq!(w.z.max, ba.z.max.max(bb.z.max));
        }
    }
}
