use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::{Intersection, Kernel};

/// A segment between two `f64` points. May be degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianSegment {
    source: Point2,
    target: Point2,
}

impl CartesianSegment {
    /// Creates a segment from `source` to `target`.
    #[must_use]
    pub fn new(source: Point2, target: Point2) -> Self {
        Self { source, target }
    }

    /// Creates a segment, rejecting NaN or infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFiniteCoordinate`] for the first endpoint
    /// with a non-finite coordinate.
    pub fn try_new(source: Point2, target: Point2) -> Result<Self> {
        for p in [&source, &target] {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { x: p.x, y: p.y }.into());
            }
        }
        Ok(Self { source, target })
    }

    /// Returns the source point.
    #[must_use]
    pub fn source(&self) -> &Point2 {
        &self.source
    }

    /// Returns the target point.
    #[must_use]
    pub fn target(&self) -> &Point2 {
        &self.target
    }
}

/// Floating-point kernel over `nalgebra` points.
///
/// Orientation tests are exact (adaptive precision through `robust`), so
/// side-of-line and overlap decisions are reliable. Constructed intersection
/// points are rounded to the nearest `f64`; y-at-x comparisons treat a point
/// within [`TOLERANCE`] of a segment as lying on it, so those points are
/// accepted by the curves they were computed from.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartesianKernel;

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn coord(p: &Point2) -> robust::Coord<f64> {
    robust::Coord { x: p.x, y: p.y }
}

/// Sign of `orient2d(p, q, r)`. `Greater` is a counter-clockwise turn.
fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Ordering {
    cmp_f64(robust::orient2d(coord(p), coord(q), coord(r)), 0.0)
}

/// Orders `a` against `b`, treating values closer than [`TOLERANCE`] as equal.
fn cmp_within_tolerance(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < TOLERANCE {
        Ordering::Equal
    } else {
        cmp_f64(a, b)
    }
}

fn xy_order(p: &Point2, q: &Point2) -> Ordering {
    cmp_f64(p.x, q.x).then_with(|| cmp_f64(p.y, q.y))
}

fn sorted_ends(seg: &CartesianSegment) -> (Point2, Point2) {
    if xy_order(&seg.source, &seg.target) == Ordering::Greater {
        (seg.target, seg.source)
    } else {
        (seg.source, seg.target)
    }
}

fn y_range_at(x: f64, seg: &CartesianSegment) -> (f64, f64) {
    let dx = seg.target.x - seg.source.x;
    if dx == 0.0 {
        return (seg.source.y.min(seg.target.y), seg.source.y.max(seg.target.y));
    }
    let y = seg.source.y + (x - seg.source.x) * (seg.target.y - seg.source.y) / dx;
    (y, y)
}

impl Kernel for CartesianKernel {
    type Point = Point2;
    type Segment = CartesianSegment;

    fn compare_x(&self, p: &Point2, q: &Point2) -> Ordering {
        cmp_f64(p.x, q.x)
    }

    fn compare_xy(&self, p: &Point2, q: &Point2) -> Ordering {
        xy_order(p, q)
    }

    fn is_vertical(&self, seg: &CartesianSegment) -> bool {
        seg.source.x == seg.target.x
    }

    fn construct_vertex(&self, seg: &CartesianSegment, index: usize) -> Point2 {
        match index {
            0 => seg.source,
            1 => seg.target,
            _ => panic!("segment vertex index must be 0 or 1, got {index}"),
        }
    }

    fn construct_segment(&self, source: &Point2, target: &Point2) -> CartesianSegment {
        CartesianSegment::new(*source, *target)
    }

    fn compare_slope(&self, a: &CartesianSegment, b: &CartesianSegment) -> Ordering {
        let (a_lo, a_hi) = sorted_ends(a);
        let (b_lo, b_hi) = sorted_ends(b);
        let (dxa, dya) = (a_hi.x - a_lo.x, a_hi.y - a_lo.y);
        let (dxb, dyb) = (b_hi.x - b_lo.x, b_hi.y - b_lo.y);
        match (dxa == 0.0, dxb == 0.0) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Both dx are positive, so cross-multiplying keeps the order.
            (false, false) => cmp_f64(dya * dxb, dyb * dxa),
        }
    }

    fn compare_y_at_x(&self, p: &Point2, seg: &CartesianSegment) -> Ordering {
        if self.is_vertical(seg) {
            let (lo, hi) = y_range_at(p.x, seg);
            return if p.y < lo - TOLERANCE {
                Ordering::Less
            } else if p.y > hi + TOLERANCE {
                Ordering::Greater
            } else {
                Ordering::Equal
            };
        }
        let (left, right) = sorted_ends(seg);
        // Distance of `p` from the supporting line, positive above it.
        let cross = robust::orient2d(coord(&left), coord(&right), coord(p));
        cmp_within_tolerance(cross / (right - left).norm(), 0.0)
    }

    fn compare_y_at_x_of_segments(
        &self,
        p: &Point2,
        a: &CartesianSegment,
        b: &CartesianSegment,
    ) -> Ordering {
        let (a_lo, a_hi) = y_range_at(p.x, a);
        let (b_lo, b_hi) = y_range_at(p.x, b);
        if cmp_within_tolerance(a_hi, b_lo) == Ordering::Less {
            Ordering::Less
        } else if cmp_within_tolerance(a_lo, b_hi) == Ordering::Greater {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn intersect(
        &self,
        a: &CartesianSegment,
        b: &CartesianSegment,
    ) -> Intersection<Point2, CartesianSegment> {
        let o1 = orientation(&a.source, &a.target, &b.source);
        let o2 = orientation(&a.source, &a.target, &b.target);
        let o3 = orientation(&b.source, &b.target, &a.source);
        let o4 = orientation(&b.source, &b.target, &a.target);

        if [o1, o2, o3, o4].iter().all(|o| *o == Ordering::Equal) {
            let (a_lo, a_hi) = sorted_ends(a);
            let (b_lo, b_hi) = sorted_ends(b);
            let lo = if xy_order(&a_lo, &b_lo) == Ordering::Less { b_lo } else { a_lo };
            let hi = if xy_order(&a_hi, &b_hi) == Ordering::Less { a_hi } else { b_hi };
            return match xy_order(&lo, &hi) {
                Ordering::Greater => Intersection::Empty,
                Ordering::Equal => Intersection::Point(lo),
                Ordering::Less => Intersection::Segment(CartesianSegment::new(lo, hi)),
            };
        }
        if (o1 != Ordering::Equal && o1 == o2) || (o3 != Ordering::Equal && o3 == o4) {
            return Intersection::Empty;
        }

        let da = a.target - a.source;
        let db = b.target - b.source;
        let denom = da.x * db.y - da.y * db.x;
        if denom == 0.0 {
            return Intersection::Empty;
        }
        // Endpoints touching the other segment are returned as given.
        if o1 == Ordering::Equal {
            return Intersection::Point(b.source);
        }
        if o2 == Ordering::Equal {
            return Intersection::Point(b.target);
        }
        if o3 == Ordering::Equal {
            return Intersection::Point(a.source);
        }
        if o4 == Ordering::Equal {
            return Intersection::Point(a.target);
        }
        let offset = b.source - a.source;
        let t = (offset.x * db.y - offset.y * db.x) / denom;
        Intersection::Point(a.source + da * t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> CartesianSegment {
        CartesianSegment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn crossing_point_is_constructed() {
        let k = CartesianKernel;
        let Intersection::Point(p) = k.intersect(&seg(0.0, 0.0, 3.0, 1.0), &seg(0.0, 1.0, 3.0, 0.0))
        else {
            panic!("expected a point intersection");
        };
        assert_relative_eq!(p.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn endpoint_touch_returns_exact_endpoint() {
        let k = CartesianKernel;
        let hit = k.intersect(&seg(0.0, 0.0, 0.3, 0.7), &seg(0.3, 0.7, 1.0, 0.0));
        assert_eq!(hit, Intersection::Point(Point2::new(0.3, 0.7)));
    }

    #[test]
    fn collinear_overlap() {
        let k = CartesianKernel;
        let hit = k.intersect(&seg(0.0, 0.0, 5.0, 0.0), &seg(8.0, 0.0, 2.0, 0.0));
        assert_eq!(hit, Intersection::Segment(seg(2.0, 0.0, 5.0, 0.0)));
    }

    #[test]
    fn y_at_x_against_a_segment() {
        let k = CartesianKernel;
        let s = seg(0.0, 0.0, 3.0, 1.0);
        assert_eq!(k.compare_y_at_x(&Point2::new(1.5, 0.5), &s), Ordering::Equal);
        assert_eq!(k.compare_y_at_x(&Point2::new(1.5, 0.6), &s), Ordering::Greater);
        assert_eq!(k.compare_y_at_x(&Point2::new(1.5, 0.4), &s), Ordering::Less);
    }

    #[test]
    fn rounded_points_count_as_on_the_segment() {
        let k = CartesianKernel;
        let s = seg(0.0, 0.0, 7.0, 3.0);
        assert_eq!(k.compare_y_at_x(&Point2::new(1.0, 3.0 / 7.0 + 1e-13), &s), Ordering::Equal);
        assert_eq!(k.compare_y_at_x(&Point2::new(1.0, 3.0 / 7.0 + 1e-6), &s), Ordering::Greater);

        let v = seg(2.0, 0.0, 2.0, 1.0);
        assert_eq!(k.compare_y_at_x(&Point2::new(2.0, 1.0 + 1e-13), &v), Ordering::Equal);
        assert_eq!(k.compare_y_at_x(&Point2::new(2.0, -1e-6), &v), Ordering::Less);

        let p = Point2::new(0.7, 0.0);
        let crossing = seg(0.7, 3.0 / 10.0 + 1e-13, 1.7, 0.0);
        assert_eq!(k.compare_y_at_x_of_segments(&p, &s, &crossing), Ordering::Equal);
    }

    #[test]
    fn constructed_crossing_lies_on_both_segments() {
        let k = CartesianKernel;
        let a = seg(0.0, 0.0, 7.0, 3.0);
        let b = seg(0.1, 2.9, 2.3, -0.3);
        let Intersection::Point(p) = k.intersect(&a, &b) else {
            panic!("expected a point intersection");
        };
        assert_eq!(k.compare_y_at_x(&p, &a), Ordering::Equal);
        assert_eq!(k.compare_y_at_x(&p, &b), Ordering::Equal);
    }

    #[test]
    fn slope_of_vertical_segment_is_largest() {
        let k = CartesianKernel;
        let vertical = seg(1.0, 0.0, 1.0, 5.0);
        assert_eq!(k.compare_slope(&vertical, &seg(0.0, 0.0, 1.0, 9.0)), Ordering::Greater);
        let reversed = seg(2.0, 2.0, 0.0, 0.0);
        assert_eq!(k.compare_slope(&reversed, &seg(0.0, 0.0, 1.0, 2.0)), Ordering::Less);
    }

    #[test]
    fn try_new_rejects_nan() {
        let err = CartesianSegment::try_new(Point2::new(f64::NAN, 0.0), Point2::new(1.0, 1.0));
        assert!(err.is_err());
        assert!(CartesianSegment::try_new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)).is_ok());
    }
}
