// THEORY:
// The `LabelVolume` is the "dumb" data container at the bottom of the stack:
// a 3D grid of integer patch labels plus the `VolumeHeader` that anchors it in
// physical space. It is the output of some upstream segmentation step and is
// strictly read-only for everything this crate does.
//
// A value of 0 is background (unsegmented tissue / air outside the patient);
// any other value identifies one contiguous segmented patch. The volume knows
// how to answer exactly two questions: "what label is at this voxel index?"
// and "what label is at this physical point?". All interpretation of the
// answer (ontology, feature rows) belongs to higher layers.

use nalgebra::Point3;
use ndarray::Array3;

use crate::core_modules::geometry::VolumeHeader;
use crate::error::{LabelError, Result};

/// The patch-label value for unsegmented voxels.
pub const BACKGROUND: u16 = 0;

/// A segmentation volume: a 3D array of patch labels with its coordinate
/// frame. Axis `a` of the array corresponds to index axis `a` of the header.
#[derive(Debug, Clone)]
pub struct LabelVolume {
    labels: Array3<u16>,
    header: VolumeHeader,
}

impl LabelVolume {
    /// Wraps a label array and its header. Fails if any axis has zero length.
    pub fn new(labels: Array3<u16>, header: VolumeHeader) -> Result<Self> {
        let (nx, ny, nz) = labels.dim();
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(LabelError::InvalidGeometry(format!(
                "volume has a zero-length axis: {}x{}x{}",
                nx, ny, nz
            )));
        }
        Ok(Self { labels, header })
    }

    /// The number of voxels along each axis.
    pub fn extent(&self) -> [usize; 3] {
        let (nx, ny, nz) = self.labels.dim();
        [nx, ny, nz]
    }

    pub fn header(&self) -> &VolumeHeader {
        &self.header
    }

    pub fn labels(&self) -> &Array3<u16> {
        &self.labels
    }

    /// The patch label at a voxel index, or `None` if the index is outside
    /// the volume.
    pub fn label_at(&self, index: [usize; 3]) -> Option<u16> {
        self.labels.get((index[0], index[1], index[2])).copied()
    }

    /// The patch label at a physical point, or `None` if the point falls
    /// outside the volume bounds.
    pub fn resolve(&self, point: &Point3<f64>) -> Option<u16> {
        let index = self.header.voxel_index(point, self.extent())?;
        self.label_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_patch_volume() -> LabelVolume {
        // 6x4x4, unit spacing: patch 1 fills x in [0,2], patch 2 fills x in [4,5].
        let mut labels = Array3::<u16>::zeros((6, 4, 4));
        labels.slice_mut(ndarray::s![0..3, .., ..]).fill(1);
        labels.slice_mut(ndarray::s![4..6, .., ..]).fill(2);
        let header =
            VolumeHeader::axis_aligned([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).expect("valid header");
        LabelVolume::new(labels, header).expect("valid volume")
    }

    #[test]
    fn rejects_empty_volume() {
        let header =
            VolumeHeader::axis_aligned([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).expect("valid header");
        let result = LabelVolume::new(Array3::<u16>::zeros((0, 4, 4)), header);
        assert!(matches!(result, Err(LabelError::InvalidGeometry(_))));
    }

    #[test]
    fn resolves_points_to_patch_labels() {
        let volume = two_patch_volume();
        assert_eq!(volume.resolve(&Point3::new(1.0, 1.0, 1.0)), Some(1));
        assert_eq!(volume.resolve(&Point3::new(5.0, 2.0, 2.0)), Some(2));
        // The gap between the patches is background.
        assert_eq!(volume.resolve(&Point3::new(3.0, 1.0, 1.0)), Some(BACKGROUND));
    }

    #[test]
    fn points_outside_bounds_resolve_to_none() {
        let volume = two_patch_volume();
        assert_eq!(volume.resolve(&Point3::new(-2.0, 1.0, 1.0)), None);
        assert_eq!(volume.resolve(&Point3::new(1.0, 1.0, 40.0)), None);
    }
}
