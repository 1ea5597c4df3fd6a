//! Point-set input and output.
//!
//! Independent of the segment traits: reads xyz point clouds, fixes up
//! their normals, and writes OFF vertex listings.

mod point_set;

pub use point_set::{parse_xyz, read_xyz, write_off, PointSet};
