//! Segment traits for sweep-line arrangement construction.
//!
//! [`SegmentTraits`] answers the questions an insertion or sweep algorithm
//! asks while building a planar subdivision of line segments: how points
//! and curves are ordered, where two curves intersect relative to an event
//! point, and how curves sharing an endpoint are ordered around it.
//!
//! Predicates have preconditions (a query point inside a curve's x-range,
//! a split point in a curve's interior, a shared endpoint). The controller
//! calling them guarantees these by construction, so a violation is a bug
//! and panics instead of returning an error.

mod between;
mod compare;
mod curve;
mod intersect;

use std::cmp::Ordering;

use crate::error::Result;
use crate::kernel::Kernel;

pub use curve::CachedSegment;
pub use intersect::CurveIntersection;

/// The cached curve type used with kernel `K`.
pub type Curve<K> = CachedSegment<<K as Kernel>::Point, <K as Kernel>::Segment>;

/// Location of a point relative to a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointStatus {
    /// The point lies below the curve.
    Below,
    /// The point is outside the curve's x-range.
    NotInRange,
    /// The point lies above the curve.
    Above,
    /// The point lies on the curve.
    On,
}

/// Comparison, intersection and betweenness predicates over [`Curve`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentTraits<K> {
    kernel: K,
}

impl<K: Kernel> SegmentTraits<K> {
    /// Creates the traits over the given kernel.
    #[must_use]
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    /// Returns the underlying kernel.
    #[must_use]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Wraps a kernel segment as an original curve.
    #[must_use]
    pub fn curve_from_segment(&self, seg: K::Segment) -> Curve<K> {
        CachedSegment::from_segment(&self.kernel, seg)
    }

    /// Builds an original curve from two points.
    #[must_use]
    pub fn curve_from_points(&self, source: K::Point, target: K::Point) -> Curve<K> {
        CachedSegment::from_points(&self.kernel, source, target)
    }

    /// Builds an original curve from two distinct points.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` and `target` coincide.
    pub fn try_curve_from_points(&self, source: K::Point, target: K::Point) -> Result<Curve<K>> {
        CachedSegment::try_from_points(&self.kernel, source, target)
    }

    /// Returns whether the curve is vertical.
    #[must_use]
    pub fn curve_is_vertical(&self, cv: &Curve<K>) -> bool {
        cv.is_vertical
    }

    /// Returns the curve's source point.
    #[must_use]
    pub fn curve_source<'a>(&self, cv: &'a Curve<K>) -> &'a K::Point {
        &cv.source
    }

    /// Returns the curve's target point.
    #[must_use]
    pub fn curve_target<'a>(&self, cv: &'a Curve<K>) -> &'a K::Point {
        &cv.target
    }

    /// Returns whether two curves have the same endpoints, in either order.
    #[must_use]
    pub fn curve_is_same(&self, cv1: &Curve<K>, cv2: &Curve<K>) -> bool {
        let k = &self.kernel;
        (k.equal(&cv1.source, &cv2.source) && k.equal(&cv1.target, &cv2.target))
            || (k.equal(&cv1.source, &cv2.target) && k.equal(&cv1.target, &cv2.source))
    }

    /// Returns whether two points coincide.
    #[must_use]
    pub fn point_is_same(&self, p: &K::Point, q: &K::Point) -> bool {
        self.kernel.equal(p, q)
    }

    /// Segments are always x-monotone; vertical ones weakly so.
    #[must_use]
    pub fn is_x_monotone(&self, _cv: &Curve<K>) -> bool {
        true
    }

    /// Splits a curve into x-monotone pieces, which for a segment is the
    /// segment itself.
    #[must_use]
    pub fn make_x_monotone(&self, cv: &Curve<K>) -> Vec<Curve<K>> {
        vec![cv.clone()]
    }

    /// Returns the curve with source and target exchanged.
    #[must_use]
    pub fn curve_flip(&self, cv: &Curve<K>) -> Curve<K> {
        cv.flip()
    }

    /// Splits `cv` at `p` into `[source, p]` and `[p, target]`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not on `cv` or coincides with one of its endpoints.
    #[must_use]
    pub fn curve_split(&self, cv: &Curve<K>, p: &K::Point) -> (Curve<K>, Curve<K>) {
        assert_eq!(
            self.curve_get_point_status(cv, p),
            PointStatus::On,
            "split point must lie on the curve"
        );
        assert!(
            self.kernel.compare_xy(&cv.source, p) != Ordering::Equal
                && self.kernel.compare_xy(&cv.target, p) != Ordering::Equal,
            "split point must not be an endpoint of the curve"
        );
        tracing::trace!(?p, "splitting curve");
        cv.split_unchecked(p)
    }
}
