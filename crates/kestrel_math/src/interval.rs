/// A closed range `[min, max]` of ray parameters.
///
/// Both ends are accepted, and NaN never is. Intersection routines take one
/// of these instead of separate `tmin`/`tmax` arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval starting at `min` and reaching as far as an f32 can.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::MAX)
    }

    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        t >= self.min && t <= self.max
    }

    /// Same lower bound, upper bound moved to `max`.
    ///
    /// Nearest-hit searches call this with each accepted `t`.
    #[inline]
    pub fn with_max(&self, max: f32) -> Interval {
        Interval { max, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = Interval::new(0.5, 2.0);

        assert!(range.contains(0.5));
        assert!(range.contains(1.25));
        assert!(range.contains(2.0));

        assert!(!range.contains(0.4999));
        assert!(!range.contains(2.0001));
        assert!(!range.contains(f32::NAN));
    }

    #[test]
    fn test_from_min() {
        let range = Interval::from_min(1e-4);

        assert_eq!(range.max, f32::MAX);
        assert!(range.contains(1e30));
        assert!(!range.contains(0.0));
        assert!(!range.contains(f32::INFINITY));
    }

    #[test]
    fn test_with_max_shrinks() {
        let range = Interval::new(1.0, 10.0).with_max(4.0);

        assert_eq!(range, Interval::new(1.0, 4.0));
        assert!(!range.contains(5.0));
    }
}
