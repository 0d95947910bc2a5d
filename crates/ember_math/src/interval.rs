//! Closed interval of f32 values, used for ray parameter ranges.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// True if x is within [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// True if x is strictly within (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp x into [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Expand the interval by delta/2 on each side.
    pub fn expand(&self, delta: f32) -> Interval {
        let padding = delta / 2.0;
        Interval::new(self.min - padding, self.max + padding)
    }

    /// Smallest interval containing both `a` and `b`.
    pub fn surrounding(a: &Interval, b: &Interval) -> Interval {
        Interval::new(a.min.min(b.min), a.max.max(b.max))
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// An interval containing everything.
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let interval = Interval::new(0.0, 10.0);

        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_surrounds_is_exclusive() {
        let interval = Interval::new(0.0, 10.0);

        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(5.0));
    }

    #[test]
    fn test_surrounding() {
        let a = Interval::new(-1.0, 1.0);
        let b = Interval::new(2.0, 4.0);
        let union = Interval::surrounding(&a, &b);

        assert_eq!(union.min, -1.0);
        assert_eq!(union.max, 4.0);
    }

    #[test]
    fn test_empty_contains_nothing() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.contains(1e30));
    }

    #[test]
    fn test_expand_and_clamp() {
        let interval = Interval::new(0.0, 1.0);
        let expanded = interval.expand(2.0);

        assert_eq!(expanded.min, -1.0);
        assert_eq!(expanded.max, 2.0);
        assert_eq!(interval.clamp(5.0), 1.0);
        assert_eq!(interval.clamp(-5.0), 0.0);
    }
}
