use std::cmp::Ordering;

use crate::kernel::Kernel;

use super::{Curve, PointStatus, SegmentTraits};

/// Side of a query point, for the one-sided comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl<K: Kernel> SegmentTraits<K> {
    /// Compares the x-coordinates of two points.
    #[must_use]
    pub fn compare_x(&self, p: &K::Point, q: &K::Point) -> Ordering {
        self.kernel.compare_x(p, q)
    }

    /// Compares two points lexicographically, by x and then by y.
    #[must_use]
    pub fn compare_xy(&self, p: &K::Point, q: &K::Point) -> Ordering {
        self.kernel.compare_xy(p, q)
    }

    /// Returns whether `x(q)` lies in the closed x-range of `cv`.
    #[must_use]
    pub fn curve_is_in_x_range(&self, cv: &Curve<K>, q: &K::Point) -> bool {
        let res1 = self.kernel.compare_x(q, &cv.source);
        let res2 = self.kernel.compare_x(q, &cv.target);
        res1 == Ordering::Equal || res2 == Ordering::Equal || res1 != res2
    }

    /// Compares the y-values of two curves at `x(q)`.
    ///
    /// # Panics
    ///
    /// Panics if `q` is outside the x-range of either curve.
    #[must_use]
    pub fn curve_compare_at_x(&self, cv1: &Curve<K>, cv2: &Curve<K>, q: &K::Point) -> Ordering {
        assert!(self.curve_is_in_x_range(cv1, q), "query point outside the first curve's x-range");
        assert!(self.curve_is_in_x_range(cv2, q), "query point outside the second curve's x-range");
        self.kernel.compare_y_at_x_of_segments(q, &cv1.original, &cv2.original)
    }

    /// Compares two curves immediately to the left of `x(q)`.
    ///
    /// # Panics
    ///
    /// Panics if either curve is vertical, or does not extend from `x(q)`
    /// to its left.
    #[must_use]
    pub fn curve_compare_at_x_left(
        &self,
        cv1: &Curve<K>,
        cv2: &Curve<K>,
        q: &K::Point,
    ) -> Ordering {
        self.compare_one_sided(cv1, cv2, q, Side::Left)
    }

    /// Compares two curves immediately to the right of `x(q)`.
    ///
    /// # Panics
    ///
    /// Panics if either curve is vertical, or does not extend from `x(q)`
    /// to its right.
    #[must_use]
    pub fn curve_compare_at_x_right(
        &self,
        cv1: &Curve<K>,
        cv2: &Curve<K>,
        q: &K::Point,
    ) -> Ordering {
        self.compare_one_sided(cv1, cv2, q, Side::Right)
    }

    fn compare_one_sided(
        &self,
        cv1: &Curve<K>,
        cv2: &Curve<K>,
        q: &K::Point,
        side: Side,
    ) -> Ordering {
        assert!(!cv1.is_vertical && !cv2.is_vertical, "one-sided comparison of a vertical curve");
        assert!(
            self.defined_on_side(cv1, q, side) && self.defined_on_side(cv2, q, side),
            "curve is not defined at the query point and to its {side:?}"
        );

        // Straight curves that differ at x(q) keep their order next to it.
        let res = self.kernel.compare_y_at_x_of_segments(q, &cv1.original, &cv2.original);
        if res != Ordering::Equal {
            return res;
        }

        // The curves meet at x(q): the steeper one is above on the right
        // and below on the left.
        match side {
            Side::Left => self.kernel.compare_slope(&cv2.original, &cv1.original),
            Side::Right => self.kernel.compare_slope(&cv1.original, &cv2.original),
        }
    }

    /// Exactly one endpoint lies strictly on `side` of `x(q)`.
    fn defined_on_side(&self, cv: &Curve<K>, q: &K::Point, side: Side) -> bool {
        let beyond = match side {
            Side::Left => Ordering::Less,
            Side::Right => Ordering::Greater,
        };
        let s = self.kernel.compare_x(&cv.source, q) == beyond;
        let t = self.kernel.compare_x(&cv.target, q) == beyond;
        s != t
    }

    /// Locates `p` relative to `cv`.
    #[must_use]
    pub fn curve_get_point_status(&self, cv: &Curve<K>, p: &K::Point) -> PointStatus {
        if !self.curve_is_in_x_range(cv, p) {
            return PointStatus::NotInRange;
        }

        if !cv.is_vertical {
            return match self.kernel.compare_y_at_x(p, &cv.original) {
                Ordering::Greater => PointStatus::Above,
                Ordering::Less => PointStatus::Below,
                Ordering::Equal => PointStatus::On,
            };
        }

        // Vertical curves are bounded by their own endpoints, not the
        // original's.
        let res1 = self.kernel.compare_xy(p, &cv.source);
        let res2 = self.kernel.compare_xy(p, &cv.target);
        match (res1, res2) {
            (Ordering::Greater, Ordering::Greater) => PointStatus::Above,
            (Ordering::Less, Ordering::Less) => PointStatus::Below,
            _ => PointStatus::On,
        }
    }
}
