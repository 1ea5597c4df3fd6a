pub mod error;
pub mod io;
pub mod kernel;
pub mod math;
pub mod traits;

pub use error::{ArrangementError, Result};
pub use kernel::{CartesianKernel, Intersection, Kernel, RationalKernel};
pub use traits::{CachedSegment, Curve, CurveIntersection, PointStatus, SegmentTraits};
