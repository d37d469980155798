/// Closed range `[min, max]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Builds an interval from two bounds given in either order.
    pub fn ordered(a: f64, b: f64) -> Self {
        if a > b { Self::new(b, a) } else { Self::new(a, b) }
    }

    /// Smallest interval containing both `a` and `b`.
    pub fn surrounding(a: &Interval, b: &Interval) -> Self {
        Self {
            min: if a.min < b.min { a.min } else { b.min },
            max: if a.max > b.max { a.max } else { b.max },
        }
    }

    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_sorts_bounds() {
        assert_eq!(Interval::ordered(3.0, -1.0), Interval::new(-1.0, 3.0));
        assert_eq!(Interval::ordered(-1.0, 3.0), Interval::new(-1.0, 3.0));
    }

    #[test]
    fn test_surrounding() {
        let a = Interval::new(0.0, 2.0);
        let b = Interval::new(1.0, 5.0);
        let s = Interval::surrounding(&a, &b);
        assert_eq!(s, Interval::new(0.0, 5.0));
        assert_eq!(s.size(), 5.0);
        assert_eq!(s.center(), 2.5);
        assert!(s.contains(0.0) && s.contains(5.0) && !s.contains(5.1));
    }
}
