use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{IoError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A cloud of 3D points with optional per-point normals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point3>,
    normals: Option<Vec<Vector3>>,
}

impl PointSet {
    /// Creates a point set without normals.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            normals: None,
        }
    }

    /// Creates a point set with one normal per point.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors differ in length.
    #[must_use]
    pub fn with_normals(points: Vec<Point3>, normals: Vec<Vector3>) -> Self {
        assert_eq!(points.len(), normals.len(), "one normal per point");
        Self {
            points,
            normals: Some(normals),
        }
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the normals, one per point, if the set carries them.
    #[must_use]
    pub fn normals(&self) -> Option<&[Vector3]> {
        self.normals.as_deref()
    }

    /// Returns whether the set carries normals.
    #[must_use]
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the set has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replaces every normal `n` by `-n / |n|`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::ZeroNormal`] if a normal has zero length; the point
    /// set is left unchanged in that case.
    pub fn normalize_and_invert_normals(&mut self) -> Result<()> {
        let Some(normals) = &self.normals else {
            return Ok(());
        };
        let mut flipped = Vec::with_capacity(normals.len());
        for (index, n) in normals.iter().enumerate() {
            let len = n.norm();
            if len < TOLERANCE {
                return Err(IoError::ZeroNormal { index }.into());
            }
            flipped.push(-n / len);
        }
        self.normals = Some(flipped);
        Ok(())
    }
}

/// Parses the xyz text format.
///
/// Each non-empty line not starting with `#` holds either three coordinates
/// or three coordinates followed by a normal. All data lines must agree on
/// whether normals are present. Nothing is returned unless every line parses.
///
/// # Errors
///
/// Returns [`IoError::Parse`] naming the first bad line.
pub fn parse_xyz(text: &str) -> Result<PointSet> {
    let mut points = Vec::new();
    let mut normals = Vec::new();
    let mut with_normals: Option<bool> = None;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let values = trimmed
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| IoError::Parse {
                line,
                message: e.to_string(),
            })?;

        let has_normal = match values.len() {
            3 => false,
            6 => true,
            n => {
                return Err(IoError::Parse {
                    line,
                    message: format!("expected 3 or 6 values, found {n}"),
                }
                .into())
            }
        };
        if *with_normals.get_or_insert(has_normal) != has_normal {
            return Err(IoError::Parse {
                line,
                message: "inconsistent normal columns".to_owned(),
            }
            .into());
        }

        points.push(Point3::new(values[0], values[1], values[2]));
        if has_normal {
            normals.push(Vector3::new(values[3], values[4], values[5]));
        }
    }

    tracing::debug!(points = points.len(), ?with_normals, "parsed xyz");
    Ok(if with_normals == Some(true) {
        PointSet::with_normals(points, normals)
    } else {
        PointSet::new(points)
    })
}

/// Reads an xyz file.
///
/// # Errors
///
/// Returns [`IoError::Read`] if the file cannot be read, or
/// [`IoError::Parse`] if its contents are malformed.
pub fn read_xyz(path: &Path) -> Result<PointSet> {
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_xyz(&text)
}

/// Writes the point set as an OFF vertex listing with no faces.
///
/// A set with normals is written as `NOFF`, each vertex line followed by its
/// normal. Values are written with 17 significant digits so they read back
/// unchanged.
///
/// # Errors
///
/// Returns [`IoError::Write`] if the writer fails.
pub fn write_off<W: Write>(out: &mut W, set: &PointSet) -> Result<()> {
    let write = |out: &mut W| -> std::io::Result<()> {
        writeln!(out, "{}", if set.has_normals() { "NOFF" } else { "OFF" })?;
        writeln!(out, "{} 0 0", set.len())?;
        for (i, p) in set.points().iter().enumerate() {
            write!(out, "{:.16e} {:.16e} {:.16e}", p.x, p.y, p.z)?;
            if let Some(n) = set.normals().map(|normals| normals[i]) {
                write!(out, " {:.16e} {:.16e} {:.16e}", n.x, n.y, n.z)?;
            }
            writeln!(out)?;
        }
        out.flush()
    };
    write(out).map_err(|source| IoError::Write { source })?;
    tracing::debug!(points = set.len(), normals = set.has_normals(), "wrote off");
    Ok(())
}
