use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::kernel::Kernel;

/// A segment, or a piece of one, with its verticality computed once.
///
/// Every piece split from a segment keeps a copy of the full original
/// segment. Predicates that need the supporting line (slopes, y-at-x,
/// intersection) always work on the original, so splitting never loses
/// precision. `source` and `target` are not normalized: a curve may run
/// right-to-left or top-to-bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedSegment<P, S> {
    pub(super) original: S,
    pub(super) is_original: bool,
    pub(super) source: P,
    pub(super) target: P,
    pub(super) is_vertical: bool,
}

impl<P: Clone, S: Clone> CachedSegment<P, S> {
    /// Wraps a kernel segment.
    #[must_use]
    pub fn from_segment<K>(kernel: &K, seg: S) -> Self
    where
        K: Kernel<Point = P, Segment = S>,
    {
        Self {
            is_vertical: kernel.is_vertical(&seg),
            source: kernel.construct_vertex(&seg, 0),
            target: kernel.construct_vertex(&seg, 1),
            original: seg,
            is_original: true,
        }
    }

    /// Builds the segment from `source` to `target`.
    #[must_use]
    pub fn from_points<K>(kernel: &K, source: P, target: P) -> Self
    where
        K: Kernel<Point = P, Segment = S>,
    {
        let original = kernel.construct_segment(&source, &target);
        Self {
            is_vertical: kernel.is_vertical(&original),
            original,
            is_original: true,
            source,
            target,
        }
    }

    /// Like [`CachedSegment::from_points`], but rejects a zero-length segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateSegment`] if `source == target`.
    pub fn try_from_points<K>(kernel: &K, source: P, target: P) -> Result<Self>
    where
        K: Kernel<Point = P, Segment = S>,
    {
        if kernel.equal(&source, &target) {
            return Err(GeometryError::DegenerateSegment.into());
        }
        Ok(Self::from_points(kernel, source, target))
    }

    /// Returns the same curve with source and target exchanged.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self {
            original: self.original.clone(),
            is_original: self.is_original,
            source: self.target.clone(),
            target: self.source.clone(),
            is_vertical: self.is_vertical,
        }
    }

    /// Splits into `[source, p]` and `[p, target]`. Both pieces share the
    /// original segment.
    ///
    /// The caller guarantees that `p` lies on the curve and is not one of
    /// its endpoints; [`SegmentTraits::curve_split`](super::SegmentTraits::curve_split)
    /// checks it.
    #[must_use]
    pub(super) fn split_unchecked(&self, p: &P) -> (Self, Self) {
        let left = Self {
            original: self.original.clone(),
            is_original: false,
            source: self.source.clone(),
            target: p.clone(),
            is_vertical: self.is_vertical,
        };
        let right = Self {
            original: self.original.clone(),
            is_original: false,
            source: p.clone(),
            target: self.target.clone(),
            is_vertical: self.is_vertical,
        };
        (left, right)
    }

    /// The kernel segment `[source, target]` covered by this curve.
    #[must_use]
    pub fn to_segment<K>(&self, kernel: &K) -> S
    where
        K: Kernel<Point = P, Segment = S>,
    {
        if self.is_original {
            return self.original.clone();
        }
        kernel.construct_segment(&self.source, &self.target)
    }

    /// Endpoints in increasing lexicographic order.
    pub(super) fn sorted_ends<K>(&self, kernel: &K) -> (&P, &P)
    where
        K: Kernel<Point = P, Segment = S>,
    {
        if kernel.compare_xy(&self.source, &self.target) == Ordering::Greater {
            (&self.target, &self.source)
        } else {
            (&self.source, &self.target)
        }
    }
}

impl<P, S> CachedSegment<P, S> {
    /// Returns the source point.
    #[must_use]
    pub fn source(&self) -> &P {
        &self.source
    }

    /// Returns the target point.
    #[must_use]
    pub fn target(&self) -> &P {
        &self.target
    }

    /// Returns whether the curve is vertical.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.is_vertical
    }

    /// Returns whether this curve is the full original segment.
    #[must_use]
    pub fn is_original(&self) -> bool {
        self.is_original
    }

    /// Returns the un-clipped segment this curve was derived from.
    #[must_use]
    pub fn original_segment(&self) -> &S {
        &self.original
    }
}
