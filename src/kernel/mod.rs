//! Geometric kernels.
//!
//! A kernel owns the number type and answers every exact question the
//! segment traits ask about points and segments. The traits never look
//! inside a point or a segment; they only call the predicates below.

mod cartesian;
mod rational;

use std::cmp::Ordering;
use std::fmt::Debug;

pub use cartesian::{CartesianKernel, CartesianSegment};
pub use rational::{RationalKernel, RationalPoint, RationalSegment};

/// Result of intersecting two kernel segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intersection<P, S> {
    /// The segments are disjoint.
    Empty,
    /// The segments meet in a single point.
    Point(P),
    /// The segments are collinear and share a sub-segment of positive length.
    Segment(S),
}

/// The capability set the segment traits depend on.
///
/// Implementations must be free of side effects: every predicate is a pure
/// function of its arguments.
pub trait Kernel {
    /// Point type.
    type Point: Clone + Debug;
    /// Segment type.
    type Segment: Clone + Debug;

    /// Compares the x-coordinates of two points.
    fn compare_x(&self, p: &Self::Point, q: &Self::Point) -> Ordering;

    /// Compares two points lexicographically: by x, then by y.
    fn compare_xy(&self, p: &Self::Point, q: &Self::Point) -> Ordering;

    /// Returns whether two points coincide.
    fn equal(&self, p: &Self::Point, q: &Self::Point) -> bool {
        self.compare_xy(p, q) == Ordering::Equal
    }

    /// Returns whether the segment is vertical.
    fn is_vertical(&self, seg: &Self::Segment) -> bool;

    /// Returns the source (`index == 0`) or target (`index == 1`) of a segment.
    ///
    /// # Panics
    ///
    /// Panics if `index > 1`.
    fn construct_vertex(&self, seg: &Self::Segment, index: usize) -> Self::Point;

    /// Builds the segment from `source` to `target`.
    fn construct_segment(&self, source: &Self::Point, target: &Self::Point) -> Self::Segment;

    /// Compares the slopes of two segments. A vertical segment has a slope
    /// larger than any non-vertical one; two vertical segments compare equal.
    fn compare_slope(&self, a: &Self::Segment, b: &Self::Segment) -> Ordering;

    /// Compares the y-coordinate of `p` with the segment's y-value at `x(p)`.
    ///
    /// For a vertical segment the y-value is its whole y-range: a point
    /// inside the range compares [`Ordering::Equal`].
    fn compare_y_at_x(&self, p: &Self::Point, seg: &Self::Segment) -> Ordering;

    /// Compares the y-values of two segments at `x(p)`.
    ///
    /// Vertical segments contribute their y-range; overlapping ranges
    /// compare [`Ordering::Equal`].
    fn compare_y_at_x_of_segments(
        &self,
        p: &Self::Point,
        a: &Self::Segment,
        b: &Self::Segment,
    ) -> Ordering;

    /// Intersects two segments.
    fn intersect(
        &self,
        a: &Self::Segment,
        b: &Self::Segment,
    ) -> Intersection<Self::Point, Self::Segment>;
}
