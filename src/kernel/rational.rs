use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::{Intersection, Kernel};

/// A point with exact rational coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalPoint {
    x: BigRational,
    y: BigRational,
}

impl RationalPoint {
    /// Creates a point from rational coordinates.
    #[must_use]
    pub fn new(x: BigRational, y: BigRational) -> Self {
        Self { x, y }
    }

    /// Creates a point from integer coordinates.
    #[must_use]
    pub fn from_integers(x: i64, y: i64) -> Self {
        Self {
            x: BigRational::from_integer(BigInt::from(x)),
            y: BigRational::from_integer(BigInt::from(y)),
        }
    }

    /// Returns the x-coordinate.
    #[must_use]
    pub fn x(&self) -> &BigRational {
        &self.x
    }

    /// Returns the y-coordinate.
    #[must_use]
    pub fn y(&self) -> &BigRational {
        &self.y
    }
}

impl From<(i64, i64)> for RationalPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self::from_integers(x, y)
    }
}

/// A segment between two rational points. May be degenerate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalSegment {
    source: RationalPoint,
    target: RationalPoint,
}

impl RationalSegment {
    /// Creates a segment from `source` to `target`.
    #[must_use]
    pub fn new(source: RationalPoint, target: RationalPoint) -> Self {
        Self { source, target }
    }

    /// Returns the source point.
    #[must_use]
    pub fn source(&self) -> &RationalPoint {
        &self.source
    }

    /// Returns the target point.
    #[must_use]
    pub fn target(&self) -> &RationalPoint {
        &self.target
    }
}

/// Exact kernel over arbitrary-precision rationals.
///
/// Every predicate and every construction is exact, so intersection points
/// computed by [`Kernel::intersect`] lie exactly on both segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct RationalKernel;

/// Sign of the cross product `(q - p) x (r - p)`. `Greater` is a left turn.
fn orientation(p: &RationalPoint, q: &RationalPoint, r: &RationalPoint) -> Ordering {
    let lhs = (&q.x - &p.x) * (&r.y - &p.y);
    let rhs = (&q.y - &p.y) * (&r.x - &p.x);
    lhs.cmp(&rhs)
}

fn xy_order(p: &RationalPoint, q: &RationalPoint) -> Ordering {
    p.x.cmp(&q.x).then_with(|| p.y.cmp(&q.y))
}

/// Returns the segment's endpoints in increasing lexicographic order.
fn sorted_ends(seg: &RationalSegment) -> (&RationalPoint, &RationalPoint) {
    if xy_order(&seg.source, &seg.target) == Ordering::Greater {
        (&seg.target, &seg.source)
    } else {
        (&seg.source, &seg.target)
    }
}

/// The y-range covered by a segment at `x`. Degenerate for non-vertical
/// segments.
fn y_range_at(x: &BigRational, seg: &RationalSegment) -> (BigRational, BigRational) {
    let dx = &seg.target.x - &seg.source.x;
    if dx.is_zero() {
        let (lo, hi) = if seg.source.y <= seg.target.y {
            (&seg.source.y, &seg.target.y)
        } else {
            (&seg.target.y, &seg.source.y)
        };
        return (lo.clone(), hi.clone());
    }
    let dy = &seg.target.y - &seg.source.y;
    let y = &seg.source.y + (x - &seg.source.x) * dy / dx;
    (y.clone(), y)
}

fn compare_ranges(a: &(BigRational, BigRational), b: &(BigRational, BigRational)) -> Ordering {
    if a.1 < b.0 {
        Ordering::Less
    } else if a.0 > b.1 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl RationalKernel {
    fn intersect_collinear(
        a: &RationalSegment,
        b: &RationalSegment,
    ) -> Intersection<RationalPoint, RationalSegment> {
        let (a_lo, a_hi) = sorted_ends(a);
        let (b_lo, b_hi) = sorted_ends(b);
        let lo = if xy_order(a_lo, b_lo) == Ordering::Less { b_lo } else { a_lo };
        let hi = if xy_order(a_hi, b_hi) == Ordering::Less { a_hi } else { b_hi };
        match xy_order(lo, hi) {
            Ordering::Greater => Intersection::Empty,
            Ordering::Equal => Intersection::Point(lo.clone()),
            Ordering::Less => Intersection::Segment(RationalSegment::new(lo.clone(), hi.clone())),
        }
    }
}

impl Kernel for RationalKernel {
    type Point = RationalPoint;
    type Segment = RationalSegment;

    fn compare_x(&self, p: &RationalPoint, q: &RationalPoint) -> Ordering {
        p.x.cmp(&q.x)
    }

    fn compare_xy(&self, p: &RationalPoint, q: &RationalPoint) -> Ordering {
        xy_order(p, q)
    }

    fn equal(&self, p: &RationalPoint, q: &RationalPoint) -> bool {
        p == q
    }

    fn is_vertical(&self, seg: &RationalSegment) -> bool {
        seg.source.x == seg.target.x
    }

    fn construct_vertex(&self, seg: &RationalSegment, index: usize) -> RationalPoint {
        match index {
            0 => seg.source.clone(),
            1 => seg.target.clone(),
            _ => panic!("segment vertex index must be 0 or 1, got {index}"),
        }
    }

    fn construct_segment(&self, source: &RationalPoint, target: &RationalPoint) -> RationalSegment {
        RationalSegment::new(source.clone(), target.clone())
    }

    fn compare_slope(&self, a: &RationalSegment, b: &RationalSegment) -> Ordering {
        let dxa = &a.target.x - &a.source.x;
        let dxb = &b.target.x - &b.source.x;
        match (dxa.is_zero(), dxb.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let slope_a = (&a.target.y - &a.source.y) / dxa;
                let slope_b = (&b.target.y - &b.source.y) / dxb;
                slope_a.cmp(&slope_b)
            }
        }
    }

    fn compare_y_at_x(&self, p: &RationalPoint, seg: &RationalSegment) -> Ordering {
        let (lo, hi) = y_range_at(&p.x, seg);
        if p.y < lo {
            Ordering::Less
        } else if p.y > hi {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn compare_y_at_x_of_segments(
        &self,
        p: &RationalPoint,
        a: &RationalSegment,
        b: &RationalSegment,
    ) -> Ordering {
        compare_ranges(&y_range_at(&p.x, a), &y_range_at(&p.x, b))
    }

    fn intersect(
        &self,
        a: &RationalSegment,
        b: &RationalSegment,
    ) -> Intersection<RationalPoint, RationalSegment> {
        let o1 = orientation(&a.source, &a.target, &b.source);
        let o2 = orientation(&a.source, &a.target, &b.target);
        let o3 = orientation(&b.source, &b.target, &a.source);
        let o4 = orientation(&b.source, &b.target, &a.target);

        if [o1, o2, o3, o4].iter().all(|o| *o == Ordering::Equal) {
            return Self::intersect_collinear(a, b);
        }
        if (o1 != Ordering::Equal && o1 == o2) || (o3 != Ordering::Equal && o3 == o4) {
            return Intersection::Empty;
        }

        let dax = &a.target.x - &a.source.x;
        let day = &a.target.y - &a.source.y;
        let dbx = &b.target.x - &b.source.x;
        let dby = &b.target.y - &b.source.y;
        let denom = &dax * &dby - &day * &dbx;
        if denom.is_zero() {
            return Intersection::Empty;
        }
        let ox = &b.source.x - &a.source.x;
        let oy = &b.source.y - &a.source.y;
        let t = (ox * &dby - oy * &dbx) / denom;
        Intersection::Point(RationalPoint::new(
            &a.source.x + &t * dax,
            &a.source.y + &t * day,
        ))
    }
}
