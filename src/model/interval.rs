use std::fmt::{Display, Formatter};

/// A closed sub-range `[lo, hi]` of an edge's normalized domain `[0, 1]`.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// The conventional representation of an image that left the model's domain.
    pub const INVALID: Interval = Interval { lo: -1.0, hi: -2.0 };

    pub fn new(lo: f64, hi: f64) -> Interval {
        Interval { lo, hi }
    }

    /// True iff the endpoints are ordered and both lie in the normalized domain.
    ///
    /// An interval that is not valid represents a traversal branch that has left
    /// the model's domain. This is a regular dead end of the search, not an error.
    /// `NaN` endpoints are never valid.
    pub fn is_valid(&self) -> bool {
        self.lo <= self.hi && self.lo >= 0.0 && self.hi <= 1.0
    }

    /// True iff the two intervals share at least one point.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.lo.max(other.lo) <= self.hi.min(other.hi)
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn validity_respects_order_and_domain() {
        assert!(Interval::new(0.2, 0.4).is_valid());
        assert!(Interval::new(0.0, 1.0).is_valid());
        // Degenerate intervals are valid; they just contribute no further area.
        assert!(Interval::new(0.5, 0.5).is_valid());
        assert!(!Interval::new(0.4, 0.2).is_valid());
        assert!(!Interval::new(-0.1, 0.2).is_valid());
        assert!(!Interval::new(0.9, 1.1).is_valid());
        assert!(!Interval::INVALID.is_valid());
        assert!(!Interval::new(f64::NAN, 0.5).is_valid());
    }

    #[test]
    fn intersection_includes_shared_endpoints() {
        let a = Interval::new(0.1, 0.4);
        assert!(a.intersects(&Interval::new(0.3, 0.8)));
        assert!(a.intersects(&Interval::new(0.4, 0.9)));
        assert!(!a.intersects(&Interval::new(0.5, 0.9)));
        assert!(!a.intersects(&Interval::INVALID));
        assert!(!Interval::INVALID.intersects(&Interval::INVALID));
    }
}
