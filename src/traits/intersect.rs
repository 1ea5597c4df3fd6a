use std::cmp::Ordering;

use crate::kernel::{Intersection, Kernel};

use super::{Curve, PointStatus, SegmentTraits};

/// Intersection of two curves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveIntersection<P> {
    /// The curves cross or touch at a single point.
    Point(P),
    /// The curves overlap between two points, lexicographically increasing.
    Overlap(P, P),
}

impl<K: Kernel> SegmentTraits<K> {
    /// Intersects two curves.
    ///
    /// The original segments are intersected first, then the result is
    /// restricted to the range each (possibly split) curve actually covers.
    /// An overlap clipped down to one point is reported as a point.
    #[must_use]
    pub fn find_intersection(
        &self,
        cv1: &Curve<K>,
        cv2: &Curve<K>,
    ) -> Option<CurveIntersection<K::Point>> {
        match self.kernel.intersect(&cv1.original, &cv2.original) {
            Intersection::Empty => None,
            Intersection::Point(ip) => {
                let on = |cv: &Curve<K>| {
                    cv.is_original || self.curve_get_point_status(cv, &ip) == PointStatus::On
                };
                if on(cv1) && on(cv2) {
                    Some(CurveIntersection::Point(ip))
                } else {
                    None
                }
            }
            Intersection::Segment(iseg) => self.clip_overlap(cv1, cv2, &iseg),
        }
    }

    fn clip_overlap(
        &self,
        cv1: &Curve<K>,
        cv2: &Curve<K>,
        iseg: &K::Segment,
    ) -> Option<CurveIntersection<K::Point>> {
        let k = &self.kernel;
        let mut p1 = k.construct_vertex(iseg, 0);
        let mut p2 = k.construct_vertex(iseg, 1);
        if k.compare_xy(&p1, &p2) == Ordering::Greater {
            std::mem::swap(&mut p1, &mut p2);
        }

        for cv in [cv1, cv2] {
            if cv.is_original {
                continue;
            }
            let (left, right) = cv.sorted_ends(k);
            if k.compare_xy(&p2, left) == Ordering::Less
                || k.compare_xy(&p1, right) == Ordering::Greater
            {
                tracing::trace!("overlap lies outside a split curve");
                return None;
            }
            if k.compare_xy(&p1, left) == Ordering::Less {
                p1 = left.clone();
            }
            if k.compare_xy(&p2, right) == Ordering::Greater {
                p2 = right.clone();
            }
        }

        match k.compare_xy(&p1, &p2) {
            Ordering::Equal => {
                tracing::trace!(?p1, "overlap collapsed to a point");
                Some(CurveIntersection::Point(p1))
            }
            Ordering::Less => Some(CurveIntersection::Overlap(p1, p2)),
            Ordering::Greater => unreachable!("clipped overlap endpoints out of order"),
        }
    }

    /// Returns whether the curves intersect lexicographically after `p`.
    #[must_use]
    pub fn do_intersect_to_right(&self, cv1: &Curve<K>, cv2: &Curve<K>, p: &K::Point) -> bool {
        match self.find_intersection(cv1, cv2) {
            None => false,
            Some(CurveIntersection::Point(ip) | CurveIntersection::Overlap(_, ip)) => {
                self.kernel.compare_xy(&ip, p) == Ordering::Greater
            }
        }
    }

    /// Returns whether the curves intersect lexicographically before `p`.
    #[must_use]
    pub fn do_intersect_to_left(&self, cv1: &Curve<K>, cv2: &Curve<K>, p: &K::Point) -> bool {
        match self.find_intersection(cv1, cv2) {
            None => false,
            Some(CurveIntersection::Point(ip) | CurveIntersection::Overlap(ip, _)) => {
                self.kernel.compare_xy(&ip, p) == Ordering::Less
            }
        }
    }

    /// Finds the intersection nearest to `p` among those after it.
    ///
    /// A point intersection is returned twice. An overlap lying wholly after
    /// `p` is returned as is; an overlap containing `p` (or starting at it)
    /// is returned from `p` to its right end.
    #[must_use]
    pub fn nearest_intersection_to_right(
        &self,
        cv1: &Curve<K>,
        cv2: &Curve<K>,
        p: &K::Point,
    ) -> Option<(K::Point, K::Point)> {
        let k = &self.kernel;
        match self.find_intersection(cv1, cv2)? {
            CurveIntersection::Point(ip) => {
                (k.compare_xy(&ip, p) == Ordering::Greater).then(|| (ip.clone(), ip))
            }
            CurveIntersection::Overlap(p1, p2) => {
                if k.compare_xy(&p1, p) == Ordering::Greater {
                    Some((p1, p2))
                } else if k.compare_xy(&p2, p) == Ordering::Greater {
                    Some((p.clone(), p2))
                } else {
                    None
                }
            }
        }
    }

    /// Finds the intersection nearest to `p` among those before it.
    ///
    /// Mirrors [`SegmentTraits::nearest_intersection_to_right`]: an overlap
    /// containing `p` (or ending at it) is returned from its left end to `p`.
    #[must_use]
    pub fn nearest_intersection_to_left(
        &self,
        cv1: &Curve<K>,
        cv2: &Curve<K>,
        p: &K::Point,
    ) -> Option<(K::Point, K::Point)> {
        let k = &self.kernel;
        match self.find_intersection(cv1, cv2)? {
            CurveIntersection::Point(ip) => {
                (k.compare_xy(&ip, p) == Ordering::Less).then(|| (ip.clone(), ip))
            }
            CurveIntersection::Overlap(p1, p2) => {
                if k.compare_xy(&p2, p) == Ordering::Less {
                    Some((p1, p2))
                } else if k.compare_xy(&p1, p) == Ordering::Less {
                    Some((p1, p.clone()))
                } else {
                    None
                }
            }
        }
    }

    /// Returns whether the curves share a sub-curve of positive length.
    #[must_use]
    pub fn curves_overlap(&self, cv1: &Curve<K>, cv2: &Curve<K>) -> bool {
        matches!(
            self.find_intersection(cv1, cv2),
            Some(CurveIntersection::Overlap(..))
        )
    }
}
