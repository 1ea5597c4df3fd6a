use std::cmp::Ordering;

use crate::kernel::Kernel;

use super::{Curve, SegmentTraits};

/// Direction in which a curve leaves a shared endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Vertical, pointing at 12 o'clock.
    Up,
    /// Non-vertical, going to the right.
    Right,
    /// Vertical, pointing at 6 o'clock.
    Down,
    /// Non-vertical, going to the left.
    Left,
}

impl<K: Kernel> SegmentTraits<K> {
    /// Returns whether `cv` is met when rotating `cv1` clockwise around `p`
    /// until it reaches `cv2`.
    ///
    /// If `cv` overlaps `cv1` or `cv2` the result is `false`. If `cv1` and
    /// `cv2` overlap, the sector is the full turn and the result is `true`
    /// unless `cv` overlaps them as well.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not an endpoint of all three curves.
    #[must_use]
    pub fn curve_is_between_cw(
        &self,
        cv: &Curve<K>,
        cv1: &Curve<K>,
        cv2: &Curve<K>,
        p: &K::Point,
    ) -> bool {
        use Direction::{Down, Left, Right, Up};

        let dir = self.direction_at(cv, p);
        let dir1 = self.direction_at(cv1, p);
        let dir2 = self.direction_at(cv2, p);

        let left = |a: &Curve<K>, b: &Curve<K>| self.compare_slope_left(a, b);
        let right = |a: &Curve<K>, b: &Curve<K>| self.compare_slope_right(a, b);

        match (dir1, dir2) {
            // Both bounding curves are vertical.
            (Up, Down) => dir == Right,
            (Down, Up) => dir == Left,
            (Up | Down, Up | Down) => dir != dir1,

            // Only cv1 is vertical.
            (Up, Left) => {
                dir == Right
                    || dir == Down
                    || (dir == Left && left(cv2, cv) == Ordering::Greater)
            }
            (Up, Right) => dir == Right && right(cv2, cv) == Ordering::Less,
            (Down, Left) => dir == Left && left(cv2, cv) == Ordering::Greater,
            (Down, Right) => {
                dir == Left || dir == Up || (dir == Right && right(cv2, cv) == Ordering::Less)
            }

            // Only cv2 is vertical.
            (Left, Up) => dir == Left && left(cv1, cv) == Ordering::Less,
            (Right, Up) => {
                dir == Left
                    || dir == Down
                    || (dir == Right && right(cv1, cv) == Ordering::Greater)
            }
            (Left, Down) => {
                dir == Right || dir == Up || (dir == Left && left(cv1, cv) == Ordering::Less)
            }
            (Right, Down) => dir == Right && right(cv1, cv) == Ordering::Greater,

            // Both to the left of p; a larger left slope means lower.
            (Left, Left) => match left(cv1, cv2) {
                Ordering::Greater => {
                    dir != Left
                        || left(cv1, cv) == Ordering::Less
                        || left(cv2, cv) == Ordering::Greater
                }
                Ordering::Less => {
                    dir == Left
                        && left(cv1, cv) == Ordering::Less
                        && left(cv2, cv) == Ordering::Greater
                }
                Ordering::Equal => dir != Left || left(cv1, cv) != Ordering::Equal,
            },

            // Both to the right of p.
            (Right, Right) => match right(cv1, cv2) {
                Ordering::Greater => {
                    dir == Right
                        && right(cv1, cv) == Ordering::Greater
                        && right(cv2, cv) == Ordering::Less
                }
                Ordering::Less => {
                    dir != Right
                        || right(cv1, cv) == Ordering::Greater
                        || right(cv2, cv) == Ordering::Less
                }
                Ordering::Equal => dir != Right || right(cv1, cv) != Ordering::Equal,
            },

            // cv1 on the left, cv2 on the right: the sector passes through 12 o'clock.
            (Left, Right) => {
                (dir == Left && left(cv1, cv) == Ordering::Less)
                    || (dir == Right && right(cv2, cv) == Ordering::Less)
                    || dir == Up
            }

            // cv1 on the right, cv2 on the left: the sector passes through 6 o'clock.
            (Right, Left) => {
                (dir == Right && right(cv1, cv) == Ordering::Greater)
                    || (dir == Left && left(cv2, cv) == Ordering::Greater)
                    || dir == Down
            }
        }
    }

    /// Classifies how `cv` leaves its endpoint `p`.
    fn direction_at(&self, cv: &Curve<K>, p: &K::Point) -> Direction {
        let k = &self.kernel;
        let other = if k.compare_xy(p, &cv.source) == Ordering::Equal {
            &cv.target
        } else {
            assert!(
                k.compare_xy(p, &cv.target) == Ordering::Equal,
                "pivot point is not an endpoint of the curve"
            );
            &cv.source
        };

        if cv.is_vertical {
            return if k.compare_xy(p, other) == Ordering::Less {
                Direction::Up
            } else {
                Direction::Down
            };
        }
        if k.compare_x(p, other) == Ordering::Less {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// Slope comparison as seen to the left of a shared point: the curve
    /// with the larger result lies below.
    fn compare_slope_left(&self, cv1: &Curve<K>, cv2: &Curve<K>) -> Ordering {
        self.kernel.compare_slope(&cv2.original, &cv1.original)
    }

    fn compare_slope_right(&self, cv1: &Curve<K>, cv2: &Curve<K>) -> Ordering {
        self.kernel.compare_slope(&cv1.original, &cv2.original)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kernel::{RationalKernel, RationalPoint};

    fn pt(x: i64, y: i64) -> RationalPoint {
        RationalPoint::from_integers(x, y)
    }

    fn traits() -> SegmentTraits<RationalKernel> {
        SegmentTraits::default()
    }

    /// Curve from the origin to `(x, y)`.
    fn ray(t: &SegmentTraits<RationalKernel>, x: i64, y: i64) -> Curve<RationalKernel> {
        t.curve_from_points(pt(0, 0), pt(x, y))
    }

    #[test]
    fn directions_at_pivot() {
        let t = traits();
        let o = pt(0, 0);
        assert_eq!(t.direction_at(&ray(&t, 0, 3), &o), Direction::Up);
        assert_eq!(t.direction_at(&ray(&t, 0, -3), &o), Direction::Down);
        assert_eq!(t.direction_at(&ray(&t, 2, -3), &o), Direction::Right);
        assert_eq!(t.direction_at(&ray(&t, -2, 3), &o), Direction::Left);
        // Pivot at the target end.
        let back = t.curve_from_points(pt(5, 1), pt(0, 0));
        assert_eq!(t.direction_at(&back, &o), Direction::Right);
    }

    #[test]
    #[should_panic(expected = "not an endpoint")]
    fn pivot_must_be_an_endpoint() {
        let t = traits();
        let _ = t.curve_is_between_cw(&ray(&t, 1, 1), &ray(&t, 1, 2), &ray(&t, 2, 1), &pt(1, 0));
    }

    #[test]
    fn vertical_bounds() {
        let t = traits();
        let o = pt(0, 0);
        let (up, down) = (ray(&t, 0, 1), ray(&t, 0, -1));
        assert!(t.curve_is_between_cw(&ray(&t, 1, 5), &up, &down, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, -1, 5), &up, &down, &o));
        assert!(t.curve_is_between_cw(&ray(&t, -1, 5), &down, &up, &o));
        assert!(t.curve_is_between_cw(&ray(&t, -1, 5), &up, &ray(&t, 0, 2), &o));
        assert!(!t.curve_is_between_cw(&ray(&t, 0, 4), &up, &ray(&t, 0, 2), &o));
    }

    #[test]
    fn first_bound_vertical() {
        let t = traits();
        let o = pt(0, 0);
        let up = ray(&t, 0, 1);
        let down = ray(&t, 0, -1);
        // Up -> right with slope 1: only steeper right-going curves.
        let r1 = ray(&t, 1, 1);
        assert!(t.curve_is_between_cw(&ray(&t, 1, 2), &up, &r1, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, 2, 1), &up, &r1, &o));
        // Up -> left-down with slope 1: right half, down, and the lower left.
        let l1 = ray(&t, -1, -1);
        assert!(t.curve_is_between_cw(&ray(&t, 3, 7), &up, &l1, &o));
        assert!(t.curve_is_between_cw(&down, &up, &l1, &o));
        assert!(t.curve_is_between_cw(&ray(&t, -1, -2), &up, &l1, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, -2, -1), &up, &l1, &o));
        // Down -> right with slope 1.
        assert!(t.curve_is_between_cw(&ray(&t, -4, 1), &down, &r1, &o));
        assert!(t.curve_is_between_cw(&ray(&t, 1, 3), &down, &r1, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, 3, 1), &down, &r1, &o));
        // Down -> left-down with slope 1.
        assert!(t.curve_is_between_cw(&ray(&t, -1, -3), &down, &l1, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, -3, -1), &down, &l1, &o));
    }

    #[test]
    fn second_bound_vertical() {
        let t = traits();
        let o = pt(0, 0);
        let up = ray(&t, 0, 1);
        let down = ray(&t, 0, -1);
        let r1 = ray(&t, 1, 1);
        let l1 = ray(&t, -1, 1);
        // Right slope 1 -> down: right-going curves below slope 1.
        assert!(t.curve_is_between_cw(&ray(&t, 2, 1), &r1, &down, &o));
        assert!(t.curve_is_between_cw(&ray(&t, 1, -5), &r1, &down, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, 1, 2), &r1, &down, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, -1, 0), &r1, &down, &o));
        // Right slope 1 -> up: everything except the steeper right curves.
        assert!(t.curve_is_between_cw(&ray(&t, -1, 0), &r1, &up, &o));
        assert!(t.curve_is_between_cw(&down, &r1, &up, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, 1, 2), &r1, &up, &o));
        // Left going up (slope -1) -> up: left curves above it.
        assert!(t.curve_is_between_cw(&ray(&t, -1, 2), &l1, &up, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, -2, 1), &l1, &up, &o));
        // Left going up -> down.
        assert!(t.curve_is_between_cw(&ray(&t, 1, 0), &l1, &down, &o));
        assert!(t.curve_is_between_cw(&up, &l1, &down, &o));
        assert!(t.curve_is_between_cw(&ray(&t, -1, 2), &l1, &down, &o));
    }

    #[test]
    fn both_bounds_to_the_right() {
        let t = traits();
        let o = pt(0, 0);
        let slope1 = ray(&t, 2, 2);
        let slope2 = ray(&t, 1, 2);
        let slope_mid = ray(&t, 2, 3);
        // Clockwise from the steeper to the shallower: the narrow wedge.
        assert!(t.curve_is_between_cw(&slope_mid, &slope2, &slope1, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, 1, 0), &slope2, &slope1, &o));
        // The other way round: the wide complement.
        assert!(!t.curve_is_between_cw(&slope_mid, &slope1, &slope2, &o));
        assert!(t.curve_is_between_cw(&ray(&t, 1, 0), &slope1, &slope2, &o));
        assert!(t.curve_is_between_cw(&ray(&t, -1, 0), &slope1, &slope2, &o));
    }

    #[test]
    fn both_bounds_to_the_left() {
        let t = traits();
        let o = pt(0, 0);
        let upper = ray(&t, -2, 2);
        let lower = ray(&t, -2, -2);
        // Clockwise from the upper-left to the lower-left passes through 12,
        // 3 and 6 o'clock.
        assert!(t.curve_is_between_cw(&ray(&t, 1, 0), &upper, &lower, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, -1, 0), &upper, &lower, &o));
        assert!(t.curve_is_between_cw(&ray(&t, -1, 0), &lower, &upper, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, 1, 0), &lower, &upper, &o));
    }

    #[test]
    fn opposite_sides() {
        let t = traits();
        let o = pt(0, 0);
        let west = ray(&t, -3, 0);
        let east = ray(&t, 3, 0);
        assert!(t.curve_is_between_cw(&ray(&t, 0, 1), &west, &east, &o));
        assert!(t.curve_is_between_cw(&ray(&t, 1, 1), &west, &east, &o));
        assert!(t.curve_is_between_cw(&ray(&t, -1, 1), &west, &east, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, 1, -1), &west, &east, &o));
        assert!(t.curve_is_between_cw(&ray(&t, 0, -1), &east, &west, &o));
        assert!(t.curve_is_between_cw(&ray(&t, -1, -1), &east, &west, &o));
        assert!(!t.curve_is_between_cw(&ray(&t, -1, 1), &east, &west, &o));
    }

    #[test]
    fn overlapping_curves() {
        let t = traits();
        let o = pt(0, 0);
        let a = ray(&t, 2, 2);
        let a_long = ray(&t, 4, 4);
        let b = ray(&t, 2, -1);
        // cv overlapping a bound is never between.
        assert!(!t.curve_is_between_cw(&a_long, &a, &b, &o));
        assert!(!t.curve_is_between_cw(&a_long, &b, &a, &o));
        // Overlapping bounds make a full turn.
        assert!(t.curve_is_between_cw(&b, &a, &a_long, &o));
        assert!(!t.curve_is_between_cw(&a, &a, &a_long, &o));
    }
}
