use crate::prelude::*;

/// Half-line from `orig` along `dir`. The direction is not required to be unit
/// length; hit distances are measured in multiples of it.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    pub orig: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            orig: origin,
            dir: direction,
        }
    }

    /// Ray leaving `from` that reaches `to` at `t = 1`.
    pub fn between(from: Point3, to: Point3) -> Self {
        Self::new(from, to - from)
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.orig + t * self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_reaches_target_at_one() {
        let from = Point3::new(1.0, 2.0, 3.0);
        let to = Point3::new(-1.0, 0.5, 7.0);
        let r = Ray::between(from, to);
        assert_eq!(r.at(0.0), from);
        assert_eq!(r.at(1.0), to);
        assert_eq!(r.at(0.5), Point3::new(0.0, 1.25, 5.0));
    }
}
