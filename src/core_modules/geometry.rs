// THEORY:
// The `geometry` module owns the coordinate frame of a segmentation volume.
// Reader annotations live in physical (scanner) space, in millimeters, while
// the segmentation itself is a discrete voxel grid. Everything this crate does
// hinges on converting between the two correctly, so that conversion lives in
// exactly one place: the `VolumeHeader`.
//
// Key architectural principles:
// 1.  **Single Source of Truth**: The header carries origin, voxel spacing and
//     the direction cosine matrix, the same triple a volumetric image header
//     (NRRD/NIfTI/DICOM) carries. No other module is allowed to do coordinate
//     math on its own.
// 2.  **Validate Once, Then Trust**: All degenerate geometry (zero or negative
//     spacing, NaN components, singular direction matrix) is rejected in the
//     constructor. Every later conversion can therefore be infallible on the
//     geometry side; the only remaining question is whether a point lands
//     inside the grid.
// 3.  **Cache the Inverse**: The physical-to-index mapping needs the inverse
//     of `direction * diag(spacing)`. Inverting a 3x3 matrix per point would
//     be wasteful for large point tables, so the inverse is computed once in
//     the constructor and cached, the same way `SmartPixel`-style analyzers
//     pre-compute derived values up front.

use nalgebra::{Matrix3, Point3, Vector3};

use crate::error::{LabelError, Result};

/// Describes the coordinate frame of a volume: where voxel (0, 0, 0) sits in
/// physical space, how large a voxel is along each axis, and how the index
/// axes are oriented.
#[derive(Debug, Clone)]
pub struct VolumeHeader {
    /// Physical position of the center of voxel (0, 0, 0), in millimeters.
    pub origin: Point3<f64>,
    /// Voxel edge lengths along each index axis, in millimeters. All positive.
    pub spacing: Vector3<f64>,
    /// Direction cosine matrix. Column `a` is the physical-space unit vector
    /// of index axis `a`.
    pub direction: Matrix3<f64>,
    /// Cached inverse of `direction * diag(spacing)`, mapping an
    /// origin-relative physical offset to a continuous voxel index.
    index_from_physical: Matrix3<f64>,
}

impl VolumeHeader {
    /// Builds a header, rejecting any geometry that cannot support a
    /// physical-to-voxel conversion.
    pub fn new(
        origin: Point3<f64>,
        spacing: Vector3<f64>,
        direction: Matrix3<f64>,
    ) -> Result<Self> {
        for axis in 0..3 {
            let s = spacing[axis];
            if !s.is_finite() || s <= 0.0 {
                return Err(LabelError::InvalidGeometry(format!(
                    "spacing along axis {} is {}, must be finite and positive",
                    axis, s
                )));
            }
        }
        if !origin.coords.iter().all(|c| c.is_finite())
            || !direction.iter().all(|c| c.is_finite())
        {
            return Err(LabelError::InvalidGeometry(
                "origin and direction components must be finite".to_string(),
            ));
        }

        let physical_from_index = direction * Matrix3::from_diagonal(&spacing);
        let index_from_physical = physical_from_index.try_inverse().ok_or_else(|| {
            LabelError::InvalidGeometry("direction matrix is singular".to_string())
        })?;

        Ok(Self {
            origin,
            spacing,
            direction,
            index_from_physical,
        })
    }

    /// Convenience constructor for an axis-aligned volume with identity
    /// direction cosines. Common for test fixtures and resampled data.
    pub fn axis_aligned(origin: [f64; 3], spacing: [f64; 3]) -> Result<Self> {
        Self::new(
            Point3::from(origin),
            Vector3::from(spacing),
            Matrix3::identity(),
        )
    }

    /// Maps a physical point to a continuous (fractional) voxel index.
    pub fn continuous_index(&self, point: &Point3<f64>) -> Vector3<f64> {
        self.index_from_physical * (point - self.origin)
    }

    /// Maps a physical point to a discrete voxel index inside `extent`, or
    /// `None` if the point falls outside the grid.
    ///
    /// Convention: the continuous index is rounded to the nearest voxel
    /// (`f64::round`, halves away from zero), then checked against
    /// `0 <= index < extent` per axis. A point within half a voxel of the
    /// outermost voxel center therefore still resolves to it.
    pub fn voxel_index(&self, point: &Point3<f64>, extent: [usize; 3]) -> Option<[usize; 3]> {
        let continuous = self.continuous_index(point);
        let mut index = [0usize; 3];
        for axis in 0..3 {
            let rounded = continuous[axis].round();
            if rounded < 0.0 || rounded >= extent[axis] as f64 {
                return None;
            }
            index[axis] = rounded as usize;
        }
        Some(index)
    }
}
